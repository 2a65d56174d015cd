//! Load a materialized model document from JSON.
//!
//! The extraction layer that reads the modeling tool's database lives
//! outside this crate; its output is a JSON document with the entity
//! rows and raw diagram geometry. This mirrors that contract with serde:
//! `#[serde(default)]` is used liberally so older documents with missing
//! optional fields keep loading.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConvertError;
use crate::model::entities::{Connector, ConnectorDirection, Element, ElementKind, Package};
use crate::model::registry::DataRegistry;
use crate::model::tags::Tag;

use super::geometry::load_diagrams;
use super::{RawDiagram, RawDiagramLink, RawDiagramObject};

#[derive(Debug, Deserialize)]
pub struct PackageRow {
    pub id: i64,
    pub package_id: i64,
    pub name: String,
    pub guid: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
pub struct ElementRow {
    pub id: i64,
    pub name: String,
    pub guid: String,
    pub kind: ElementKind,
    pub package_id: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
pub struct ConnectorRow {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub guid: String,
    #[serde(default)]
    pub kind: String,
    pub source_id: i64,
    pub destination_id: i64,
    pub package_id: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub source_cardinality: String,
    #[serde(default)]
    pub destination_cardinality: String,
    #[serde(default)]
    pub source_role: String,
    #[serde(default)]
    pub destination_role: String,
    #[serde(default)]
    pub source_role_tags: Vec<Tag>,
    #[serde(default)]
    pub destination_role_tags: Vec<Tag>,
    #[serde(default)]
    pub association_class_id: Option<i64>,
    #[serde(default)]
    pub direction: ConnectorDirection,
}

/// Top-level model document produced by the extraction layer.
#[derive(Debug, Deserialize)]
pub struct ModelDocument {
    #[serde(default)]
    pub packages: Vec<PackageRow>,
    #[serde(default)]
    pub elements: Vec<ElementRow>,
    #[serde(default)]
    pub connectors: Vec<ConnectorRow>,
    #[serde(default)]
    pub diagrams: Vec<RawDiagram>,
    #[serde(default)]
    pub diagram_objects: Vec<RawDiagramObject>,
    #[serde(default)]
    pub diagram_links: Vec<RawDiagramLink>,
    pub target_diagram: i64,
}

/// Read and parse a model document from disk.
pub fn load_document(path: &Path) -> Result<ModelDocument, ConvertError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the in-memory registry from a parsed document, running diagram
/// geometry resolution as the final step.
pub fn build_registry(document: ModelDocument) -> DataRegistry {
    let mut model = DataRegistry {
        target_diagram_id: document.target_diagram,
        ..DataRegistry::default()
    };

    for row in document.packages {
        let mut package =
            Package::new(row.id, row.package_id, row.name, row.guid, row.notes).with_tags(row.tags);
        if let Some(path) = row.path {
            package.set_path(path);
        }
        model.packages.push(package);
    }

    for row in document.elements {
        let mut element = Element::new(
            row.id,
            row.name,
            row.guid,
            row.kind,
            row.package_id,
            row.notes,
        )
        .with_tags(row.tags);
        if let Some(path) = row.path {
            element.set_path(path);
        }
        model.elements.push(element);
    }

    for row in document.connectors {
        let mut connector = Connector::new(
            row.id,
            row.name,
            row.guid,
            row.kind,
            row.source_id,
            row.destination_id,
            row.package_id,
            row.direction,
            row.notes,
        )
        .with_tags(row.tags);
        connector.source_cardinality = row.source_cardinality;
        connector.destination_cardinality = row.destination_cardinality;
        connector.source_role = row.source_role;
        connector.destination_role = row.destination_role;
        connector.source_role_tags = row.source_role_tags;
        connector.destination_role_tags = row.destination_role_tags;
        connector.association_class_id = row.association_class_id;
        if let Some(path) = row.path {
            connector.set_path(path);
        }
        model.connectors.push(connector);
    }

    load_diagrams(
        document.diagrams,
        &document.diagram_objects,
        &document.diagram_links,
        &mut model,
    );

    model
}

/// Convenience: load a file straight into a registry.
pub fn load_model(path: &Path) -> Result<DataRegistry, ConvertError> {
    Ok(build_registry(load_document(path)?))
}
