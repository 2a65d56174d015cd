use uml2rdf::extraction::geometry::{load_diagrams, resolve_connector_direction};
use uml2rdf::extraction::{RawDiagram, RawDiagramLink, RawDiagramObject};
use uml2rdf::model::entities::{Connector, ConnectorDirection, Element, ElementKind, Package};
use uml2rdf::model::registry::DataRegistry;
use uml2rdf::model::ModelObject;

fn raw_diagram(id: i64, name: &str, package_id: i64) -> RawDiagram {
    RawDiagram {
        id,
        name: name.to_string(),
        guid: format!("{{DIA-{id}}}"),
        package_id,
        notes: None,
    }
}

fn base_model() -> DataRegistry {
    DataRegistry {
        packages: vec![Package::new(100, 1, "Core", "{PKG-1}", None)],
        elements: vec![
            Element::new(201, "Person", "{EL-1}", ElementKind::Class, 1, None),
            Element::new(202, "Address", "{EL-2}", ElementKind::DataType, 1, None),
        ],
        connectors: vec![Connector::new(
            301,
            "heeft",
            "{CON-1}",
            "Association",
            201,
            202,
            1,
            ConnectorDirection::Unspecified,
            None,
        )],
        diagrams: Vec::new(),
        target_diagram_id: 401,
    }
}

// ---------------------------------------------------------------------------
// Diagram paths
// ---------------------------------------------------------------------------

#[test]
fn diagram_path_is_package_path_and_name() {
    let mut model = base_model();
    load_diagrams(vec![raw_diagram(401, "Overview", 1)], &[], &[], &mut model);
    assert_eq!(model.diagrams[0].path(), "Core:Overview");
}

#[test]
fn diagram_without_package_uses_bare_name() {
    let mut model = base_model();
    load_diagrams(vec![raw_diagram(401, "Orphan", 99)], &[], &[], &mut model);
    assert_eq!(model.diagrams[0].path(), "Orphan");
}

#[test]
fn diagram_path_uses_explicit_package_path() {
    let mut model = base_model();
    model.packages[0].set_path("Model.Core");
    load_diagrams(vec![raw_diagram(401, "Overview", 1)], &[], &[], &mut model);
    assert_eq!(model.diagrams[0].path(), "Model.Core:Overview");
}

// ---------------------------------------------------------------------------
// Diagram membership
// ---------------------------------------------------------------------------

#[test]
fn only_classifier_kinds_join_a_diagram() {
    let mut model = base_model();
    let objects = vec![
        RawDiagramObject {
            diagram_id: 401,
            object_id: 201,
            object_type: "Class".to_string(),
        },
        RawDiagramObject {
            diagram_id: 401,
            object_id: 202,
            object_type: "DataType".to_string(),
        },
        RawDiagramObject {
            diagram_id: 401,
            object_id: 999,
            object_type: "Note".to_string(),
        },
    ];
    load_diagrams(vec![raw_diagram(401, "Overview", 1)], &objects, &[], &mut model);
    assert_eq!(model.diagrams[0].element_ids, vec![201, 202]);
}

#[test]
fn object_on_unknown_diagram_is_skipped() {
    let mut model = base_model();
    let objects = vec![RawDiagramObject {
        diagram_id: 555,
        object_id: 201,
        object_type: "Class".to_string(),
    }];
    load_diagrams(vec![raw_diagram(401, "Overview", 1)], &objects, &[], &mut model);
    assert!(model.diagrams[0].element_ids.is_empty());
}

// ---------------------------------------------------------------------------
// Connector links and geometry
// ---------------------------------------------------------------------------

#[test]
fn link_sets_direction_hidden_and_membership() {
    let mut model = base_model();
    let links = vec![RawDiagramLink {
        diagram_id: 401,
        connector_id: 301,
        geometry: Some("SX=0;SY=0;DIRECTION=Destination -> Source;EDGE=1;".to_string()),
        hidden: true,
    }];
    load_diagrams(vec![raw_diagram(401, "Overview", 1)], &[], &links, &mut model);
    assert_eq!(
        model.connectors[0].diagram_direction,
        ConnectorDirection::DestinationToSource
    );
    assert!(model.connectors[0].hidden);
    assert_eq!(model.diagrams[0].connector_ids, vec![301]);
}

#[test]
fn link_without_geometry_is_skipped() {
    let mut model = base_model();
    let links = vec![RawDiagramLink {
        diagram_id: 401,
        connector_id: 301,
        geometry: None,
        hidden: true,
    }];
    load_diagrams(vec![raw_diagram(401, "Overview", 1)], &[], &links, &mut model);
    assert!(model.diagrams[0].connector_ids.is_empty());
    assert!(!model.connectors[0].hidden);
}

#[test]
fn link_to_unknown_connector_is_skipped() {
    let mut model = base_model();
    let links = vec![RawDiagramLink {
        diagram_id: 401,
        connector_id: 999,
        geometry: Some("DIRECTION=Bi-Directional;".to_string()),
        hidden: false,
    }];
    load_diagrams(vec![raw_diagram(401, "Overview", 1)], &[], &links, &mut model);
    assert!(model.diagrams[0].connector_ids.is_empty());
}

#[test]
fn link_on_unknown_diagram_is_skipped() {
    let mut model = base_model();
    let links = vec![RawDiagramLink {
        diagram_id: 555,
        connector_id: 301,
        geometry: Some("DIRECTION=Bi-Directional;".to_string()),
        hidden: false,
    }];
    load_diagrams(vec![raw_diagram(401, "Overview", 1)], &[], &links, &mut model);
    assert_eq!(
        model.connectors[0].diagram_direction,
        ConnectorDirection::Unspecified
    );
}

// ---------------------------------------------------------------------------
// Direction parsing
// ---------------------------------------------------------------------------

#[test]
fn direction_values_parse() {
    assert_eq!(
        resolve_connector_direction("DIRECTION=Source -> Destination;"),
        ConnectorDirection::SourceToDestination
    );
    assert_eq!(
        resolve_connector_direction("A=1;DIRECTION=Destination -> Source;B=2"),
        ConnectorDirection::DestinationToSource
    );
    assert_eq!(
        resolve_connector_direction("DIRECTION=Bi-Directional"),
        ConnectorDirection::Bidirectional
    );
}

#[test]
fn missing_or_unknown_direction_is_unspecified() {
    assert_eq!(
        resolve_connector_direction("SX=10;SY=20"),
        ConnectorDirection::Unspecified
    );
    assert_eq!(
        resolve_connector_direction("DIRECTION=Sideways"),
        ConnectorDirection::Unspecified
    );
    assert_eq!(
        resolve_connector_direction(""),
        ConnectorDirection::Unspecified
    );
}
