//! Convert annotated UML model graphs to RDF vocabularies.
//!
//! A model document (packages, classifiers, connectors, diagrams and
//! their tagged values) is loaded into a [`model::registry::DataRegistry`],
//! pushed through the converter pipeline, and serialized as N-Quads.

pub mod config;
pub mod converter;
pub mod emitter;
pub mod error;
pub mod extraction;
pub mod model;
pub mod rdf;
