//! Tag-resolution engine.
//!
//! Two extraction modes over an entity's tag collection. Both scan tags
//! whose name starts with a role's base name and split the remainder
//! after the last `-` as a suffix. Language-dependent extraction
//! interprets that suffix as a language code; parameterized extraction
//! treats it as an arbitrary key. Duplicates resolve last-write-wins
//! with a warning, and resolution order follows tag order so output is
//! identical across runs.

use log::warn;

use crate::config::ConvertConfig;
use crate::model::tags::{Language, TagRole};
use crate::model::ModelObject;
use crate::rdf::Term;

/// Resolve language-tagged literals for a tag role.
///
/// A suffix that is not a recognized language code attributes the value
/// to the configured default language. Empty values are skipped; a later
/// tag resolving to an already-seen language overwrites the earlier one.
/// Literal values are trimmed of surrounding whitespace.
pub fn language_literals(
    config: &ConvertConfig,
    object: &dyn ModelObject,
    role: TagRole,
) -> Vec<Term> {
    let mut resolved: Vec<(String, String)> = Vec::new();

    for tag in object.tags().iter().filter(|t| t.name.starts_with(role.as_str())) {
        let suffix = tag.name.rsplit_once('-').map(|(_, s)| s).unwrap_or(&tag.name);
        let language = if Language::is_known(suffix) {
            suffix
        } else {
            &config.language
        };

        if tag.value.is_empty() {
            warn!(
                "entity ({}) has an empty value for tag ({})",
                object.path(),
                tag.name
            );
            continue;
        }

        match resolved.iter_mut().find(|(lang, _)| lang == language) {
            Some((_, value)) => {
                warn!(
                    "entity ({}) already has a value for tag ({}) in language ({language}); overwriting",
                    object.path(),
                    tag.name
                );
                *value = tag.value.clone();
            }
            None => resolved.push((language.to_string(), tag.value.clone())),
        }
    }

    resolved
        .into_iter()
        .map(|(language, value)| Term::lang_literal(value.trim(), language))
        .collect()
}

/// Resolve `(key, value)` pairs for a parameterized tag role such as the
/// namespace-prefix declarations (`prefix-foaf`). The suffix is the key,
/// unvalidated; duplicates resolve last-write-wins with a warning.
pub fn parameterized_values(object: &dyn ModelObject, role: TagRole) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();

    for tag in object.tags().iter().filter(|t| t.name.starts_with(role.as_str())) {
        let key = tag.name.rsplit_once('-').map(|(_, s)| s).unwrap_or(&tag.name);

        if tag.value.is_empty() {
            warn!(
                "entity ({}) has an empty value for tag ({})",
                object.path(),
                tag.name
            );
            continue;
        }

        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, value)) => {
                warn!(
                    "entity ({}) already has a value for tag ({}) under key ({key}); overwriting",
                    object.path(),
                    tag.name
                );
                *value = tag.value.trim().to_string();
            }
            None => pairs.push((key.to_string(), tag.value.trim().to_string())),
        }
    }

    pairs
}

/// Exact-name tag lookup: the first tag named precisely `role.as_str()`,
/// trimmed. Used for the URI-bearing package tags where language suffixes
/// make no sense.
pub fn single_tag_value(object: &dyn ModelObject, role: TagRole) -> Option<String> {
    object
        .tags()
        .iter()
        .find(|t| t.name == role.as_str() && !t.value.is_empty())
        .map(|t| t.value.trim().to_string())
}

/// Whether the entity carries the explicit ignore marker.
pub fn is_ignored(object: &dyn ModelObject) -> bool {
    object
        .tags()
        .iter()
        .any(|t| t.name == TagRole::Ignore.as_str() && t.value.trim().eq_ignore_ascii_case("true"))
}
