//! In-memory model of the extracted modeling-tool object graph.
//!
//! Every entity (package, element, connector, diagram) shares the same
//! identity data: a tool-local integer id, a display name, the tool's
//! native guid, optional free-text notes, and a tag list. On top of that
//! each entity gets a *stable guid*, derived deterministically from
//! (native guid, name, id) at construction time, which serves as the
//! entity's URI-local identifier in the output graph.

pub mod entities;
pub mod registry;
pub mod tags;

use md5::{Digest, Md5};

use self::tags::Tag;

/// Identity data shared by every modeled entity.
#[derive(Debug, Clone)]
pub struct EntityBody {
    id: i64,
    name: String,
    native_guid: String,
    notes: Option<String>,
    tags: Vec<Tag>,
    stable_guid: String,
    path: Option<String>,
}

impl EntityBody {
    /// Build the shared identity data.
    ///
    /// Notes are XML-entity-decoded here, once, and the stable guid is
    /// computed up front so no entity is ever exposed without it.
    pub fn new(id: i64, name: impl Into<String>, native_guid: impl Into<String>, notes: Option<String>) -> Self {
        let name = name.into();
        let native_guid = native_guid.into();
        let stable_guid = stable_guid(&native_guid, &name, id);
        Self {
            id,
            name,
            native_guid,
            notes: notes.filter(|n| !n.is_empty()).map(|n| decode_xml_entities(&n)),
            tags: Vec::new(),
            stable_guid,
            path: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
    }
}

/// Uniform read access to entity identity, used by every handler.
pub trait ModelObject {
    fn body(&self) -> &EntityBody;

    fn id(&self) -> i64 {
        self.body().id
    }

    fn name(&self) -> &str {
        &self.body().name
    }

    fn native_guid(&self) -> &str {
        &self.body().native_guid
    }

    fn notes(&self) -> Option<&str> {
        self.body().notes.as_deref()
    }

    fn tags(&self) -> &[Tag] {
        &self.body().tags
    }

    /// Deterministically derived identifier, stable across runs.
    fn stable_guid(&self) -> &str {
        &self.body().stable_guid
    }

    /// Hierarchical path of the entity, falling back to the display name
    /// when no ancestry is known.
    fn path(&self) -> &str {
        self.body().path.as_deref().unwrap_or(&self.body().name)
    }
}

/// Derive the stable guid from the tool-native guid, name, and id.
fn stable_guid(native_guid: &str, name: &str, id: i64) -> String {
    let mut hasher = Md5::new();
    hasher.update(native_guid.as_bytes());
    hasher.update(name.as_bytes());
    hasher.update(id.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Decode the XML entity references the modeling tool stores in notes
/// fields (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, and numeric
/// references). Unknown references pass through unchanged.
pub fn decode_xml_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find(';') {
            Some(end) => {
                let entity = &tail[1..end];
                // A reference is a run of alphanumerics (or # for numeric
                // references); anything else is a bare ampersand.
                if entity.is_empty()
                    || !entity.chars().all(|c| c.is_ascii_alphanumeric() || c == '#')
                {
                    out.push('&');
                    rest = &tail[1..];
                    continue;
                }
                match entity {
                    "amp" => out.push('&'),
                    "lt" => out.push('<'),
                    "gt" => out.push('>'),
                    "quot" => out.push('"'),
                    "apos" => out.push('\''),
                    _ => {
                        let decoded = entity
                            .strip_prefix("#x")
                            .or_else(|| entity.strip_prefix("#X"))
                            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                            .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                            .and_then(char::from_u32);
                        match decoded {
                            Some(c) => out.push(c),
                            None => out.push_str(&tail[..=end]),
                        }
                    }
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(tail);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}
