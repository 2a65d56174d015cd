//! Tags and the tag-name contract.
//!
//! Entities carry free-form name/value tags set by the modeling tool's
//! authors. Tag names follow the convention `<base>[-<suffix>]`, where the
//! suffix is either a recognized language code (`definition-en`) or an
//! arbitrary parameter key (`prefix-foaf`). The set of base names the
//! converter understands is closed and listed in [`TagRole`].

use serde::Deserialize;

/// A single name/value metadata pair attached to an entity.
///
/// No uniqueness is enforced here; duplicate handling is the job of the
/// tag-resolution routines in the converter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The closed set of tag base names the converter recognizes.
///
/// The string values are a contract with the modeling tool's authors and
/// must be used verbatim, optionally suffixed with a language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRole {
    /// Root namespace URI assigned to a package.
    BaseUri,
    /// URI of the ontology artifact produced for a package.
    OntologyUri,
    /// Parameterized namespace prefix declaration (`prefix-<key>`).
    Prefix,
    /// Explicit URI override on an element or connector.
    ExternalUri,
    ApDefinition,
    Definition,
    ApLabel,
    Label,
    ApUsageNote,
    UsageNote,
    Status,
    /// Marks an entity to be dropped from the conversion.
    Ignore,
}

impl TagRole {
    pub const ALL: [TagRole; 12] = [
        TagRole::BaseUri,
        TagRole::OntologyUri,
        TagRole::Prefix,
        TagRole::ExternalUri,
        TagRole::ApDefinition,
        TagRole::Definition,
        TagRole::ApLabel,
        TagRole::Label,
        TagRole::ApUsageNote,
        TagRole::UsageNote,
        TagRole::Status,
        TagRole::Ignore,
    ];

    /// The verbatim tag base name for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            TagRole::BaseUri => "baseUri",
            TagRole::OntologyUri => "ontologyUri",
            TagRole::Prefix => "prefix",
            TagRole::ExternalUri => "uri",
            TagRole::ApDefinition => "ap-definition",
            TagRole::Definition => "definition",
            TagRole::ApLabel => "ap-label",
            TagRole::Label => "label",
            TagRole::ApUsageNote => "ap-usage-note",
            TagRole::UsageNote => "usage-note",
            TagRole::Status => "status",
            TagRole::Ignore => "ignore",
        }
    }

    /// Whether `base` (a tag name with any language suffix already
    /// stripped) is one of the recognized base names.
    pub fn is_recognized(base: &str) -> bool {
        TagRole::ALL.iter().any(|role| role.as_str() == base)
    }
}

/// Language codes the tag-resolution engine recognizes as suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Nl,
    En,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Nl, Language::En, Language::Fr, Language::De];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Nl => "nl",
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// Whether `code` is a recognized language code.
    pub fn is_known(code: &str) -> bool {
        Language::ALL.iter().any(|lang| lang.as_str() == code)
    }
}

/// Strip a recognized language suffix from a tag name, if present.
///
/// `definition-en` becomes `definition`; `definition-xx` stays unchanged
/// because `xx` is not a recognized code.
pub fn base_tag_name(tag_name: &str) -> &str {
    match tag_name.rsplit_once('-') {
        Some((base, suffix)) if Language::is_known(suffix) => base,
        _ => tag_name,
    }
}
