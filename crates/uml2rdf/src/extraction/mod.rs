//! Interface to the tabular extraction layer.
//!
//! The raw row types here are what the out-of-scope database reader
//! produces; [`geometry`] turns its diagram/link rows into diagram
//! membership and connector geometry, and [`loader`] reads a fully
//! materialized model from a JSON document.

pub mod geometry;
pub mod loader;

use serde::Deserialize;

/// Raw diagram row from the extraction layer.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDiagram {
    pub id: i64,
    pub name: String,
    pub guid: String,
    pub package_id: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Raw diagram-membership row: one object placed on one diagram.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDiagramObject {
    pub diagram_id: i64,
    pub object_id: i64,
    /// The underlying object type as the tool reports it
    /// (`Class`, `DataType`, `Enumeration`, ...).
    pub object_type: String,
}

/// Raw diagram-link row: one connector drawn on one diagram.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDiagramLink {
    pub diagram_id: i64,
    pub connector_id: i64,
    /// Geometry encoding; `None` means no direction can be inferred.
    #[serde(default)]
    pub geometry: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}
