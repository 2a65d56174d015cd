//! The conversion pipeline: per-entity-type handlers and the driver that
//! runs them in a fixed order.
//!
//! A handler covers one entity type and exposes five operations, always
//! invoked in the same order: filter hidden, filter ignored, normalize,
//! assign URIs, convert. The driver runs each phase across every handler
//! before starting the next phase, with handlers ordered packages →
//! diagrams → elements → connectors, so the package URIs that seed the
//! base-URI/ontology-URI namespace exist before any other type reads
//! them and all URI assignment completes before the first triple is
//! emitted.

pub mod connector;
pub mod diagram;
pub mod element;
pub mod entity_info;
pub mod package;
pub mod tags;
pub mod uri_registry;

use log::debug;
use url::Url;

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::model::registry::DataRegistry;
use crate::rdf::namespaces::NamespaceRegistry;
use crate::rdf::QuadStore;

use self::connector::ConnectorConverterHandler;
use self::diagram::DiagramConverterHandler;
use self::element::ElementConverterHandler;
use self::package::PackageConverterHandler;
use self::uri_registry::UriRegistry;

/// The five-operation contract every entity-type handler implements.
///
/// `assign_uris` and `convert` may log warnings but must never silently
/// drop required data; a missing required URI at emission time is fatal.
pub trait ConverterHandler {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Remove entities flagged hidden by the source tool. Identity for
    /// types with no native hidden concept.
    fn filter_hidden_objects(&self, model: &mut DataRegistry) -> Result<(), ConvertError> {
        let _ = model;
        Ok(())
    }

    /// Remove entities carrying the explicit ignore tag. Must not depend
    /// on any state mutated by URI assignment.
    fn filter_ignored_objects(&self, model: &mut DataRegistry) -> Result<(), ConvertError>;

    /// Type-specific structural adjustments. May be identity.
    fn normalize(&self, model: &mut DataRegistry) -> Result<(), ConvertError> {
        let _ = model;
        Ok(())
    }

    /// Compute and record URIs for every surviving entity of this type.
    fn assign_uris(
        &self,
        model: &DataRegistry,
        uris: &mut UriRegistry,
        namespaces: &mut NamespaceRegistry,
    ) -> Result<(), ConvertError>;

    /// Emit triples for the entities relevant to the targeted output
    /// scope and append them to the shared store.
    fn convert(
        &self,
        model: &DataRegistry,
        uris: &UriRegistry,
        store: &mut QuadStore,
    ) -> Result<(), ConvertError>;
}

/// Run the full pipeline over a materialized model and return the
/// accumulated quad store.
pub fn run_pipeline(
    config: &ConvertConfig,
    model: &mut DataRegistry,
) -> Result<QuadStore, ConvertError> {
    config.validate()?;

    let fallback = Url::parse(&config.fallback_base_uri).map_err(|source| {
        ConvertError::InvalidUri {
            value: config.fallback_base_uri.clone(),
            path: "configuration".to_string(),
            source,
        }
    })?;
    let mut uris = UriRegistry::new(fallback);
    let mut namespaces = NamespaceRegistry::new();

    let handlers: Vec<Box<dyn ConverterHandler + '_>> = vec![
        Box::new(PackageConverterHandler),
        Box::new(DiagramConverterHandler::new(config)),
        Box::new(ElementConverterHandler::new(config)),
        Box::new(ConnectorConverterHandler::new(config)),
    ];

    for handler in &handlers {
        debug!("filtering hidden objects ({})", handler.name());
        handler.filter_hidden_objects(model)?;
    }
    for handler in &handlers {
        debug!("filtering ignored objects ({})", handler.name());
        handler.filter_ignored_objects(model)?;
    }
    for handler in &handlers {
        debug!("normalizing ({})", handler.name());
        handler.normalize(model)?;
    }
    for handler in &handlers {
        debug!("assigning URIs ({})", handler.name());
        handler.assign_uris(model, &mut uris, &mut namespaces)?;
    }

    let mut store = QuadStore::new();
    for handler in &handlers {
        debug!("converting ({})", handler.name());
        handler.convert(model, &uris, &mut store)?;
    }

    Ok(store)
}
