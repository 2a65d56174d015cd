//! Connector handler: associations between classifiers.

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::model::entities::{Connector, ConnectorDirection};
use crate::model::registry::DataRegistry;
use crate::model::ModelObject;
use crate::rdf::namespaces::NamespaceRegistry;
use crate::rdf::vocab::{internal_id, standard, vm};
use crate::rdf::{Quad, QuadStore, Term};

use super::element::mint_entity_uri;
use super::entity_info::{add_entity_information, add_scope, require_value};
use super::tags::is_ignored;
use super::uri_registry::UriRegistry;
use super::ConverterHandler;

pub struct ConnectorConverterHandler<'a> {
    config: &'a ConvertConfig,
}

impl<'a> ConnectorConverterHandler<'a> {
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    pub fn create_quads(
        &self,
        connector: &Connector,
        uris: &UriRegistry,
    ) -> Result<Vec<Quad>, ConvertError> {
        let assigned = uris
            .assigned_uri(connector.id())
            .ok_or_else(|| ConvertError::MissingUri {
                kind: "assigned",
                path: connector.path().to_string(),
            })?;

        let subject = internal_id(connector.stable_guid());
        let mut quads = vec![
            Quad::new(&subject, standard::RDF_TYPE, Term::named(vm::CONNECTOR)),
            Quad::new(&subject, vm::ASSIGNED_URI, Term::named(assigned.as_str())),
        ];

        add_entity_information(self.config, connector, &subject, &mut quads);

        let package_base = uris
            .package_base_uri(connector.package_id)
            .map(|u| u.as_str().to_string())
            .unwrap_or_else(|| uris.fallback_base_uri().as_str().to_string());
        add_scope(
            self.config,
            connector,
            &subject,
            &package_base,
            uris,
            &mut quads,
        );

        Ok(quads)
    }
}

impl ConverterHandler for ConnectorConverterHandler<'_> {
    fn name(&self) -> &'static str {
        "ConnectorConverterHandler"
    }

    /// Connectors are the one entity type with a native hidden flag,
    /// derived from diagram geometry before the pipeline runs.
    fn filter_hidden_objects(&self, model: &mut DataRegistry) -> Result<(), ConvertError> {
        model.connectors.retain(|c| !c.hidden);
        Ok(())
    }

    fn filter_ignored_objects(&self, model: &mut DataRegistry) -> Result<(), ConvertError> {
        model.connectors.retain(|c| !is_ignored(c));
        Ok(())
    }

    /// A connector whose diagram-derived direction is still unspecified
    /// after geometry resolution inherits its declared direction.
    fn normalize(&self, model: &mut DataRegistry) -> Result<(), ConvertError> {
        for connector in &mut model.connectors {
            if connector.diagram_direction == ConnectorDirection::Unspecified {
                connector.diagram_direction = connector.direction;
            }
        }
        Ok(())
    }

    fn assign_uris(
        &self,
        model: &DataRegistry,
        uris: &mut UriRegistry,
        namespaces: &mut NamespaceRegistry,
    ) -> Result<(), ConvertError> {
        for connector in &model.connectors {
            // A connector needs a name (or an explicit uri tag) to mint
            // a URI; in debug mode a nameless connector is skipped
            // instead of aborting the run.
            let has_uri_source = !connector.name().is_empty()
                || super::tags::single_tag_value(connector, crate::model::tags::TagRole::ExternalUri)
                    .is_some();
            let skip = require_value(
                self.config,
                has_uri_source,
                format!(
                    "connector ({}) has no name to derive a URI from",
                    connector.path()
                ),
            )?;
            if skip {
                continue;
            }

            let uri = mint_entity_uri(connector, connector.package_id, uris, namespaces)?;
            uris.set_assigned_uri(connector.id(), uri);
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
        for connector in model
            .connectors
            .iter()
            .filter(|c| target.connector_ids.contains(&c.id()))
        {
            // Skipped in assignment (debug mode) means skipped here too.
            if uris.assigned_uri(connector.id()).is_none() && connector.name().is_empty() {
                continue;
            }
            store.add_quads(self.create_quads(connector, uris)?);
        }
        Ok(())
    }
}
