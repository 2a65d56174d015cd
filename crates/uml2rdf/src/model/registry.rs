//! The data registry: every extracted entity, held fully in memory.

use crate::error::ConvertError;

use super::entities::{Connector, Diagram, Element, Package};
use super::ModelObject;

/// All entities produced by the extraction layer, plus the diagram that
/// defines the conversion's output scope. Handlers filter and mutate this
/// in place; nothing is ever re-extracted mid-run.
#[derive(Debug, Default)]
pub struct DataRegistry {
    pub packages: Vec<Package>,
    pub elements: Vec<Element>,
    pub connectors: Vec<Connector>,
    pub diagrams: Vec<Diagram>,
    pub target_diagram_id: i64,
}

impl DataRegistry {
    /// The diagram selected as the conversion's output scope.
    pub fn target_diagram(&self) -> Result<&Diagram, ConvertError> {
        self.diagrams
            .iter()
            .find(|d| d.id() == self.target_diagram_id)
            .ok_or(ConvertError::NoTargetDiagram {
                id: self.target_diagram_id,
            })
    }

    pub fn package_by_package_id(&self, package_id: i64) -> Option<&Package> {
        self.packages.iter().find(|p| p.package_id == package_id)
    }

    pub fn element_by_id(&self, id: i64) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }
}
