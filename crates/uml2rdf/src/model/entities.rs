//! Concrete entity types: packages, elements, connectors, diagrams.

use serde::Deserialize;

use super::tags::Tag;
use super::{EntityBody, ModelObject};

/// A package in the model tree. Packages carry the base-URI and
/// ontology-URI tags that seed the URI registry for everything below them.
#[derive(Debug, Clone)]
pub struct Package {
    body: EntityBody,
    /// Package-table identifier, distinct from the generic entity id.
    pub package_id: i64,
}

impl Package {
    pub fn new(id: i64, package_id: i64, name: impl Into<String>, guid: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            body: EntityBody::new(id, name, guid, notes),
            package_id,
        }
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.body = self.body.with_tags(tags);
        self
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.body.set_path(path);
    }
}

impl ModelObject for Package {
    fn body(&self) -> &EntityBody {
        &self.body
    }
}

/// The classifier kinds that participate in diagrams and produce
/// vocabulary terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ElementKind {
    Class,
    DataType,
    Enumeration,
}

impl ElementKind {
    /// Parse a raw object-type string from the extraction layer.
    pub fn from_object_type(raw: &str) -> Option<Self> {
        match raw {
            "Class" => Some(ElementKind::Class),
            "DataType" => Some(ElementKind::DataType),
            "Enumeration" => Some(ElementKind::Enumeration),
            _ => None,
        }
    }
}

/// A classifier (class, data type, or enumeration) owned by one package.
#[derive(Debug, Clone)]
pub struct Element {
    body: EntityBody,
    pub kind: ElementKind,
    pub package_id: i64,
}

impl Element {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        guid: impl Into<String>,
        kind: ElementKind,
        package_id: i64,
        notes: Option<String>,
    ) -> Self {
        Self {
            body: EntityBody::new(id, name, guid, notes),
            kind,
            package_id,
        }
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.body = self.body.with_tags(tags);
        self
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.body.set_path(path);
    }
}

impl ModelObject for Element {
    fn body(&self) -> &EntityBody {
        &self.body
    }
}

/// Visual or declared direction of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ConnectorDirection {
    #[default]
    Unspecified,
    SourceToDestination,
    DestinationToSource,
    Bidirectional,
}

/// A connector between two classifiers.
///
/// `diagram_direction` and `hidden` are unknown at construction time; the
/// geometry resolver overwrites them once diagram-link rows are processed.
#[derive(Debug, Clone)]
pub struct Connector {
    body: EntityBody,
    pub kind: String,
    pub source_id: i64,
    pub destination_id: i64,
    pub source_cardinality: String,
    pub destination_cardinality: String,
    pub source_role: String,
    pub destination_role: String,
    pub source_role_tags: Vec<Tag>,
    pub destination_role_tags: Vec<Tag>,
    pub association_class_id: Option<i64>,
    pub package_id: i64,
    /// Direction declared in the model.
    pub direction: ConnectorDirection,
    /// Direction as drawn on the target diagram; starts out as the
    /// declared direction until geometry data says otherwise.
    pub diagram_direction: ConnectorDirection,
    pub hidden: bool,
}

impl Connector {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        guid: impl Into<String>,
        kind: impl Into<String>,
        source_id: i64,
        destination_id: i64,
        package_id: i64,
        direction: ConnectorDirection,
        notes: Option<String>,
    ) -> Self {
        Self {
            body: EntityBody::new(id, name, guid, notes),
            kind: kind.into(),
            source_id,
            destination_id,
            source_cardinality: String::new(),
            destination_cardinality: String::new(),
            source_role: String::new(),
            destination_role: String::new(),
            source_role_tags: Vec::new(),
            destination_role_tags: Vec::new(),
            association_class_id: None,
            package_id,
            direction,
            diagram_direction: direction,
            hidden: false,
        }
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.body = self.body.with_tags(tags);
        self
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.body.set_path(path);
    }
}

impl ModelObject for Connector {
    fn body(&self) -> &EntityBody {
        &self.body
    }
}

/// A diagram. Member classifier and connector ids are populated by the
/// geometry resolver, not at construction.
#[derive(Debug, Clone)]
pub struct Diagram {
    body: EntityBody,
    pub package_id: i64,
    pub element_ids: Vec<i64>,
    pub connector_ids: Vec<i64>,
}

impl Diagram {
    pub fn new(id: i64, name: impl Into<String>, guid: impl Into<String>, package_id: i64, notes: Option<String>) -> Self {
        Self {
            body: EntityBody::new(id, name, guid, notes),
            package_id,
            element_ids: Vec::new(),
            connector_ids: Vec::new(),
        }
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.body.set_path(path);
    }
}

impl ModelObject for Diagram {
    fn body(&self) -> &EntityBody {
        &self.body
    }
}
