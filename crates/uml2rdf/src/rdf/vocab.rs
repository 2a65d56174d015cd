//! RDF vocabulary constants for the conversion output.
//!
//! - `standard` -- RDF/RDFS/XSD terms
//! - `vm:` prefix (http://vocmodel.example/ontology/) -- the vocabulary-model
//!   ontology the converter emits: entity classes, annotation predicates,
//!   and the scope/status individuals
//!
//! Subjects use the internal URN scheme `urn:uml2rdf:<stableGuid>`.

/// URN scheme prefix for entity-local subject identifiers.
pub const BASE_URN_SCHEME: &str = "urn:uml2rdf";

/// Subject IRI for an entity's stable guid.
pub fn internal_id(stable_guid: &str) -> String {
    format!("{BASE_URN_SCHEME}:{stable_guid}")
}

/// Standard RDF/RDFS/XSD namespace URIs.
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}

/// The vocabulary-model ontology (`vm:` prefix).
pub mod vm {
    pub const PREFIX: &str = "vm";
    pub const NS: &str = "http://vocmodel.example/ontology/";

    // Entity classes
    pub const PACKAGE: &str = "http://vocmodel.example/ontology/Package";
    pub const CLASS: &str = "http://vocmodel.example/ontology/Class";
    pub const DATA_TYPE: &str = "http://vocmodel.example/ontology/DataType";
    pub const ENUMERATION: &str = "http://vocmodel.example/ontology/Enumeration";
    pub const CONNECTOR: &str = "http://vocmodel.example/ontology/Connector";
    pub const DIAGRAM: &str = "http://vocmodel.example/ontology/Diagram";

    // Predicates
    pub const ASSIGNED_URI: &str = "http://vocmodel.example/ontology/assignedURI";
    pub const BASE_URI: &str = "http://vocmodel.example/ontology/baseURI";
    pub const AP_DEFINITION: &str = "http://vocmodel.example/ontology/apDefinition";
    pub const VOC_DEFINITION: &str = "http://vocmodel.example/ontology/vocDefinition";
    pub const AP_LABEL: &str = "http://vocmodel.example/ontology/apLabel";
    pub const VOC_LABEL: &str = "http://vocmodel.example/ontology/vocLabel";
    pub const DIAGRAM_LABEL: &str = "http://vocmodel.example/ontology/diagramLabel";
    pub const AP_USAGE_NOTE: &str = "http://vocmodel.example/ontology/apUsageNote";
    pub const VOC_USAGE_NOTE: &str = "http://vocmodel.example/ontology/vocUsageNote";
    pub const DIAGRAM_NOTES: &str = "http://vocmodel.example/ontology/diagramNotes";
    pub const STATUS: &str = "http://vocmodel.example/ontology/status";
    pub const SCOPE: &str = "http://vocmodel.example/ontology/scope";

    // Scope individuals
    pub const SCOPE_IN_PACKAGE: &str = "http://vocmodel.example/ontology/InPackage";
    pub const SCOPE_IN_PUBLICATION_ENVIRONMENT: &str =
        "http://vocmodel.example/ontology/InPublicationEnvironment";
    pub const SCOPE_EXTERNAL: &str = "http://vocmodel.example/ontology/External";
    pub const SCOPE_UNDEFINED: &str = "http://vocmodel.example/ontology/Undefined";

    // Status individuals
    pub const STATUS_STABLE: &str = "http://vocmodel.example/ontology/status/Stable";
    pub const STATUS_CANDIDATE: &str = "http://vocmodel.example/ontology/status/Candidate";
    pub const STATUS_DEVELOPMENT: &str = "http://vocmodel.example/ontology/status/Development";
    pub const STATUS_DEPRECATED: &str = "http://vocmodel.example/ontology/status/Deprecated";

    /// The closed set of valid status tag values.
    pub const VALID_STATUSES: [&str; 4] = [
        STATUS_STABLE,
        STATUS_CANDIDATE,
        STATUS_DEVELOPMENT,
        STATUS_DEPRECATED,
    ];

    /// Passthrough predicate for unrecognized tags.
    pub fn any(base_tag_name: &str) -> String {
        format!("{NS}any:{base_tag_name}")
    }
}
