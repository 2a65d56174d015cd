//! Diagram handler: the target diagram's own triples.
//!
//! Diagrams have no URIs to assign; they only contribute a label and
//! notes for the diagram that scopes the output.

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::model::entities::Diagram;
use crate::model::registry::DataRegistry;
use crate::model::ModelObject;
use crate::rdf::namespaces::NamespaceRegistry;
use crate::rdf::vocab::{internal_id, standard, vm};
use crate::rdf::{Quad, QuadStore, Term};

use super::uri_registry::UriRegistry;
use super::ConverterHandler;

pub struct DiagramConverterHandler<'a> {
    config: &'a ConvertConfig,
}

impl<'a> DiagramConverterHandler<'a> {
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    pub fn create_quads(&self, diagram: &Diagram) -> Vec<Quad> {
        let subject = internal_id(diagram.stable_guid());
        let mut quads = vec![
            Quad::new(&subject, standard::RDF_TYPE, Term::named(vm::DIAGRAM)),
            Quad::new(
                &subject,
                vm::DIAGRAM_LABEL,
                Term::lang_literal(diagram.name(), &self.config.language),
            ),
        ];
        if let Some(notes) = diagram.notes() {
            quads.push(Quad::new(
                &subject,
                vm::DIAGRAM_NOTES,
                Term::lang_literal(notes, &self.config.language),
            ));
        }
        quads
    }
}

impl ConverterHandler for DiagramConverterHandler<'_> {
    fn name(&self) -> &'static str {
        "DiagramConverterHandler"
    }

    fn filter_ignored_objects(&self, _model: &mut DataRegistry) -> Result<(), ConvertError> {
        // The target diagram must survive regardless of tags; there is
        // nothing to filter.
        Ok(())
    }

    fn assign_uris(
        &self,
        _model: &DataRegistry,
        _uris: &mut UriRegistry,
        _namespaces: &mut NamespaceRegistry,
    ) -> Result<(), ConvertError> {
        Ok(())
    }

    fn convert(
        &self,
        model: &DataRegistry,
        _uris: &UriRegistry,
        store: &mut QuadStore,
    ) -> Result<(), ConvertError> {
        let target = model.target_diagram()?;
        store.add_quads(self.create_quads(target));
        Ok(())
    }
}
