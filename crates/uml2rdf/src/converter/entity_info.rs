//! Shared triple-building helpers used by every handler once URIs are
//! available: definitions, labels, usage notes, status, passthrough tags,
//! and scope classification.

use log::{error, info, warn};

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::model::tags::{base_tag_name, TagRole};
use crate::model::ModelObject;
use crate::rdf::vocab::vm;
use crate::rdf::{Quad, Term};

use super::tags::language_literals;
use super::uri_registry::UriRegistry;

/// Scope of an entity's assigned URI relative to its package base URI
/// and the publication environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Undefined,
    External,
    InPublicationEnvironment,
    InPackage,
}

impl Scope {
    pub fn as_iri(self) -> &'static str {
        match self {
            Scope::Undefined => vm::SCOPE_UNDEFINED,
            Scope::External => vm::SCOPE_EXTERNAL,
            Scope::InPublicationEnvironment => vm::SCOPE_IN_PUBLICATION_ENVIRONMENT,
            Scope::InPackage => vm::SCOPE_IN_PACKAGE,
        }
    }
}

/// Add all tag-derived information for an entity to `quads`.
pub fn add_entity_information(
    config: &ConvertConfig,
    object: &dyn ModelObject,
    subject: &str,
    quads: &mut Vec<Quad>,
) {
    add_definitions(config, object, subject, quads);
    add_labels(config, object, subject, quads);
    add_usage_notes(config, object, subject, quads);
    add_status(config, object, subject, quads);
    if config.all_tags {
        add_other_tags(config, object, subject, quads);
    }
}

pub fn add_definitions(
    config: &ConvertConfig,
    object: &dyn ModelObject,
    subject: &str,
    quads: &mut Vec<Quad>,
) {
    add_values(
        language_literals(config, object, TagRole::ApDefinition),
        subject,
        vm::AP_DEFINITION,
        quads,
    );
    add_values(
        language_literals(config, object, TagRole::Definition),
        subject,
        vm::VOC_DEFINITION,
        quads,
    );
}

pub fn add_labels(
    config: &ConvertConfig,
    object: &dyn ModelObject,
    subject: &str,
    quads: &mut Vec<Quad>,
) {
    add_values(
        language_literals(config, object, TagRole::ApLabel),
        subject,
        vm::AP_LABEL,
        quads,
    );
    add_values(
        language_literals(config, object, TagRole::Label),
        subject,
        vm::VOC_LABEL,
        quads,
    );

    // The name as it appears on the diagram is always provided.
    quads.push(Quad::new(
        subject,
        vm::DIAGRAM_LABEL,
        Term::lang_literal(object.name(), &config.language),
    ));
}

pub fn add_usage_notes(
    config: &ConvertConfig,
    object: &dyn ModelObject,
    subject: &str,
    quads: &mut Vec<Quad>,
) {
    add_values(
        language_literals(config, object, TagRole::ApUsageNote),
        subject,
        vm::AP_USAGE_NOTE,
        quads,
    );
    add_values(
        language_literals(config, object, TagRole::UsageNote),
        subject,
        vm::VOC_USAGE_NOTE,
        quads,
    );

    if let Some(notes) = object.notes() {
        quads.push(Quad::new(
            subject,
            vm::DIAGRAM_NOTES,
            Term::lang_literal(notes, &config.language),
        ));
    }
}

/// Validate and emit the status triple.
///
/// No status tag means no triple and no warning. A value outside the
/// enumerated valid set is dropped with a warning.
pub fn add_status(
    config: &ConvertConfig,
    object: &dyn ModelObject,
    subject: &str,
    quads: &mut Vec<Quad>,
) {
    let statuses = language_literals(config, object, TagRole::Status);
    let Some(status) = statuses.first().and_then(Term::literal_value) else {
        return;
    };

    if vm::VALID_STATUSES.contains(&status) {
        quads.push(Quad::new(subject, vm::STATUS, Term::named(status)));
    } else {
        warn!(
            "incorrect status found for ({}); the status will be ignored",
            object.path()
        );
    }
}

/// Emit unrecognized tags under the generic `any:` passthrough predicate.
pub fn add_other_tags(
    config: &ConvertConfig,
    object: &dyn ModelObject,
    subject: &str,
    quads: &mut Vec<Quad>,
) {
    let unknown_bases: Vec<&str> = {
        let mut bases: Vec<&str> = object
            .tags()
            .iter()
            .map(|t| base_tag_name(&t.name))
            .filter(|base| !TagRole::is_recognized(base))
            .collect();
        bases.dedup();
        bases
    };

    if unknown_bases.is_empty() {
        return;
    }

    info!(
        "unknown tags for entity ({}): {}; these tags will be added",
        object.path(),
        unknown_bases.join(", ")
    );

    let mut seen: Vec<String> = Vec::new();
    for base in unknown_bases {
        if seen.iter().any(|s| s == base) {
            continue;
        }
        seen.push(base.to_string());
        let values = language_literals_for_base(config, object, base);
        add_values(values, subject, &vm::any(base), quads);
    }
}

/// Classify and emit the scope triple for an entity's assigned URI.
///
/// The package-containment check runs after the publication-environment
/// check and overrides it, since it is the more specific claim. No URI
/// means no triple, only a warning.
pub fn add_scope(
    config: &ConvertConfig,
    object: &dyn ModelObject,
    subject: &str,
    package_base_uri: &str,
    uris: &UriRegistry,
    quads: &mut Vec<Quad>,
) {
    let Some(uri) = uris.assigned_uri(object.id()) else {
        warn!(
            "unable to find the URI for entity ({}); setting scope to Undefined",
            object.path()
        );
        return;
    };

    let mut scope = Scope::External;
    if uri.as_str().starts_with(&config.publication_environment) {
        scope = Scope::InPublicationEnvironment;
    }
    if uri.as_str().starts_with(package_base_uri) {
        scope = Scope::InPackage;
    }

    quads.push(Quad::new(subject, vm::SCOPE, Term::named(scope.as_iri())));
}

/// Check a required value's presence. Absence is fatal unless debug mode
/// downgrades it to an error log; the caller skips the entity when this
/// returns `true`.
pub fn require_value(
    config: &ConvertConfig,
    present: bool,
    message: String,
) -> Result<bool, ConvertError> {
    if present {
        return Ok(false);
    }
    if config.debug {
        error!("{message}");
        return Ok(true);
    }
    Err(ConvertError::MissingValue(message))
}

fn add_values(values: Vec<Term>, subject: &str, predicate: &str, quads: &mut Vec<Quad>) {
    for value in values {
        quads.push(Quad::new(subject, predicate, value));
    }
}

/// Same resolution as [`language_literals`] but for a base name outside
/// the closed role contract (passthrough tags).
fn language_literals_for_base(
    config: &ConvertConfig,
    object: &dyn ModelObject,
    base: &str,
) -> Vec<Term> {
    use crate::model::tags::Language;

    let mut resolved: Vec<(String, String)> = Vec::new();
    for tag in object
        .tags()
        .iter()
        .filter(|t| base_tag_name(&t.name) == base)
    {
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
