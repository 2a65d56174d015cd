//! Element handler: classifiers (classes, data types, enumerations).

use log::warn;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::model::entities::{Element, ElementKind};
use crate::model::registry::DataRegistry;
use crate::model::tags::TagRole;
use crate::model::ModelObject;
use crate::rdf::namespaces::NamespaceRegistry;
use crate::rdf::vocab::{internal_id, standard, vm};
use crate::rdf::{Quad, QuadStore, Term};

use super::entity_info::{add_entity_information, add_scope};
use super::tags::{is_ignored, single_tag_value};
use super::uri_registry::UriRegistry;
use super::ConverterHandler;

/// Characters percent-encoded when a display name becomes a URI path
/// segment. Alphanumerics plus `-`, `_`, `.`, `~` stay as-is.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Mint a URI for an entity under a package namespace: an explicit `uri`
/// tag (expanded through the namespace registry, so `prefix:local`
/// works) wins; otherwise the package base URI plus the percent-encoded
/// display name. A package without a registered base URI falls back to
/// the configured fallback base URI with a warning.
pub(super) fn mint_entity_uri(
    object: &dyn ModelObject,
    package_id: i64,
    uris: &UriRegistry,
    namespaces: &NamespaceRegistry,
) -> Result<Url, ConvertError> {
    if let Some(explicit) = single_tag_value(object, TagRole::ExternalUri) {
        return namespaces.expand(&explicit).map_err(|e| match e {
            ConvertError::InvalidUri { value, source, .. } => ConvertError::InvalidUri {
                value,
                path: object.path().to_string(),
                source,
            },
            other => other,
        });
    }

    let base = match uris.package_base_uri(package_id) {
        Some(base) => base.clone(),
        None => {
            warn!(
                "no base URI registered for the package of entity ({}); fallback URI ({}) will be used",
                object.path(),
                uris.fallback_base_uri()
            );
            uris.fallback_base_uri().clone()
        }
    };

    let local = utf8_percent_encode(object.name(), SEGMENT_ENCODE_SET).to_string();
    let minted = format!("{base}{local}");
    Url::parse(&minted).map_err(|source| ConvertError::InvalidUri {
        value: minted,
        path: object.path().to_string(),
        source,
    })
}

pub struct ElementConverterHandler<'a> {
    config: &'a ConvertConfig,
}

impl<'a> ElementConverterHandler<'a> {
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    pub fn create_quads(
        &self,
        element: &Element,
        uris: &UriRegistry,
    ) -> Result<Vec<Quad>, ConvertError> {
        let assigned = uris
            .assigned_uri(element.id())
            .ok_or_else(|| ConvertError::MissingUri {
                kind: "assigned",
                path: element.path().to_string(),
            })?;

        let subject = internal_id(element.stable_guid());
        let class_iri = match element.kind {
            ElementKind::Class => vm::CLASS,
            ElementKind::DataType => vm::DATA_TYPE,
            ElementKind::Enumeration => vm::ENUMERATION,
        };

        let mut quads = vec![
            Quad::new(&subject, standard::RDF_TYPE, Term::named(class_iri)),
            Quad::new(&subject, vm::ASSIGNED_URI, Term::named(assigned.as_str())),
        ];

        add_entity_information(self.config, element, &subject, &mut quads);

        let package_base = uris
            .package_base_uri(element.package_id)
            .map(|u| u.as_str().to_string())
            .unwrap_or_else(|| uris.fallback_base_uri().as_str().to_string());
        add_scope(
            self.config,
            element,
            &subject,
            &package_base,
            uris,
            &mut quads,
        );

        Ok(quads)
    }
}

impl ConverterHandler for ElementConverterHandler<'_> {
    fn name(&self) -> &'static str {
        "ElementConverterHandler"
    }

    fn filter_ignored_objects(&self, model: &mut DataRegistry) -> Result<(), ConvertError> {
        model.elements.retain(|e| !is_ignored(e));
        Ok(())
    }

    fn assign_uris(
        &self,
        model: &DataRegistry,
        uris: &mut UriRegistry,
        namespaces: &mut NamespaceRegistry,
    ) -> Result<(), ConvertError> {
        for element in &model.elements {
            let uri = mint_entity_uri(element, element.package_id, uris, namespaces)?;
            uris.set_assigned_uri(element.id(), uri);
        }
        Ok(())
    }

    fn convert(
        &self,
        model: &DataRegistry,
        uris: &UriRegistry,
        store: &mut QuadStore,
    ) -> Result<(), ConvertError> {
        let target = model.target_diagram()?;
        for element in model
            .elements
            .iter()
            .filter(|e| target.element_ids.contains(&e.id()))
        {
            store.add_quads(self.create_quads(element, uris)?);
        }
        Ok(())
    }
}
