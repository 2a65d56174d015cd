//! Diagram and connector geometry resolution.
//!
//! Builds diagrams from raw rows, derives their hierarchical paths,
//! determines which classifiers and connectors appear on which diagram,
//! and copies the visual direction and hidden flag from diagram-link
//! geometry onto the connectors.

use log::warn;

use crate::model::entities::{ConnectorDirection, Diagram, ElementKind};
use crate::model::registry::DataRegistry;
use crate::model::ModelObject;

use super::{RawDiagram, RawDiagramLink, RawDiagramObject};

/// Build diagrams from raw rows and resolve membership and geometry.
///
/// Must run after packages, elements, and connectors are in the
/// registry: diagram paths need package paths, and link rows mutate
/// connectors in place.
pub fn load_diagrams(
    diagrams: Vec<RawDiagram>,
    objects: &[RawDiagramObject],
    links: &[RawDiagramLink],
    model: &mut DataRegistry,
) {
    model.diagrams = diagrams
        .into_iter()
        .map(|row| Diagram::new(row.id, row.name, row.guid, row.package_id, row.notes))
        .collect();

    set_diagram_paths(model);
    load_diagram_objects(objects, model);
    load_diagram_connectors(links, model);
}

/// Diagram path: `<owning-package-path>:<diagram-name>`, or the bare
/// diagram name when the owning package is unknown.
fn set_diagram_paths(model: &mut DataRegistry) {
    let paths: Vec<Option<String>> = model
        .diagrams
        .iter()
        .map(|diagram| {
            match model.package_by_package_id(diagram.package_id) {
                Some(package) => Some(format!("{}:{}", package.path(), diagram.name())),
                None => {
                    warn!(
                        "no package found for diagram ({}); using the diagram name as path",
                        diagram.name()
                    );
                    None
                }
            }
        })
        .collect();

    for (diagram, path) in model.diagrams.iter_mut().zip(paths) {
        if let Some(path) = path {
            diagram.set_path(path);
        }
    }
}

/// A raw object participates in a diagram only if its underlying type is
/// one of the classifier kinds; other row types are excluded regardless
/// of diagram presence.
fn load_diagram_objects(objects: &[RawDiagramObject], model: &mut DataRegistry) {
    for row in objects {
        if ElementKind::from_object_type(&row.object_type).is_none() {
            continue;
        }
        let Some(diagram) = model.diagrams.iter_mut().find(|d| d.id() == row.diagram_id) else {
            warn!(
                "no diagram with id ({}) found for object ({}); skipping",
                row.diagram_id, row.object_id
            );
            continue;
        };
        diagram.element_ids.push(row.object_id);
    }
}

fn load_diagram_connectors(links: &[RawDiagramLink], model: &mut DataRegistry) {
    for row in links {
        let Some(diagram_idx) = model
            .diagrams
            .iter()
            .position(|d| d.id() == row.diagram_id)
        else {
            warn!(
                "no diagram with id ({}) found for connector link ({}); skipping",
                row.diagram_id, row.connector_id
            );
            continue;
        };

        // No geometry means no direction can be inferred.
        let Some(geometry) = row.geometry.as_deref() else {
            warn!(
                "connector link ({}) on diagram ({}) has no geometry; skipping",
                row.connector_id, row.diagram_id
            );
            continue;
        };
        let direction = resolve_connector_direction(geometry);

        let Some(connector) = model
            .connectors
            .iter_mut()
            .find(|c| c.id() == row.connector_id)
        else {
            warn!(
                "no connector with id ({}) found for diagram ({}); skipping",
                row.connector_id, row.diagram_id
            );
            continue;
        };

        connector.diagram_direction = direction;
        connector.hidden = row.hidden;

        model.diagrams[diagram_idx].connector_ids.push(row.connector_id);
    }
}

/// Resolve the visual arrow direction from a geometry encoding: a
/// `;`-separated key/value list whose `DIRECTION=` field carries the
/// drawn direction. Absent or unrecognized values resolve to
/// Unspecified.
pub fn resolve_connector_direction(geometry: &str) -> ConnectorDirection {
    for part in geometry.split(';') {
        if let Some(value) = part.strip_prefix("DIRECTION=") {
            return match value {
                "Source -> Destination" => ConnectorDirection::SourceToDestination,
                "Destination -> Source" => ConnectorDirection::DestinationToSource,
                "Bi-Directional" => ConnectorDirection::Bidirectional,
                _ => ConnectorDirection::Unspecified,
            };
        }
    }
    ConnectorDirection::Unspecified
}
