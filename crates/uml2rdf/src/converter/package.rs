//! Package handler: seeds the URI registry and emits the package triples.

use log::warn;
use url::Url;

use crate::error::ConvertError;
use crate::model::entities::Package;
use crate::model::registry::DataRegistry;
use crate::model::tags::TagRole;
use crate::model::ModelObject;
use crate::rdf::namespaces::NamespaceRegistry;
use crate::rdf::vocab::{internal_id, standard, vm};
use crate::rdf::{Quad, QuadStore, Term};

use super::tags::{is_ignored, parameterized_values, single_tag_value};
use super::uri_registry::UriRegistry;
use super::ConverterHandler;

pub struct PackageConverterHandler;

impl PackageConverterHandler {
    /// The three package triples: type, assignedURI (the ontology URI),
    /// and baseURI. Both URIs were recorded during assignment, so their
    /// absence here is a fatal defensive error.
    pub fn create_quads(
        &self,
        package: &Package,
        uris: &UriRegistry,
    ) -> Result<Vec<Quad>, ConvertError> {
        let ontology_uri =
            uris.package_ontology_uri(package.package_id)
                .ok_or_else(|| ConvertError::MissingUri {
                    kind: "ontology",
                    path: package.path().to_string(),
                })?;
        let base_uri =
            uris.package_base_uri(package.package_id)
                .ok_or_else(|| ConvertError::MissingUri {
                    kind: "base",
                    path: package.path().to_string(),
                })?;

        let subject = internal_id(package.stable_guid());
        Ok(vec![
            Quad::new(&subject, standard::RDF_TYPE, Term::named(vm::PACKAGE)),
            Quad::new(
                &subject,
                vm::ASSIGNED_URI,
                Term::named(ontology_uri.as_str()),
            ),
            Quad::new(&subject, vm::BASE_URI, Term::named(base_uri.as_str())),
        ])
    }
}

impl ConverterHandler for PackageConverterHandler {
    fn name(&self) -> &'static str {
        "PackageConverterHandler"
    }

    // filter_hidden_objects stays the default identity: hidden packages
    // are not a concept in the source tool, only connectors carry the
    // flag.

    fn filter_ignored_objects(&self, model: &mut DataRegistry) -> Result<(), ConvertError> {
        model.packages.retain(|p| !is_ignored(p));
        Ok(())
    }

    fn assign_uris(
        &self,
        model: &DataRegistry,
        uris: &mut UriRegistry,
        namespaces: &mut NamespaceRegistry,
    ) -> Result<(), ConvertError> {
        for package in &model.packages {
            uris.index_package_name(package.name(), package.package_id);

            let base_uri = match single_tag_value(package, TagRole::BaseUri) {
                Some(value) => value,
                None => {
                    warn!(
                        "no value found for tag (baseUri) in package ({}); fallback URI ({}) will be assigned",
                        package.path(),
                        uris.fallback_base_uri()
                    );
                    uris.fallback_base_uri().to_string()
                }
            };

            // Default ontology URI: the base URI without its trailing
            // path separator.
            let namespace = base_uri
                .strip_suffix('/')
                .or_else(|| base_uri.strip_suffix('#'))
                .unwrap_or(&base_uri)
                .to_string();
            let ontology_uri =
                single_tag_value(package, TagRole::OntologyUri).unwrap_or(namespace);

            let base_url = Url::parse(&base_uri).map_err(|source| ConvertError::InvalidUri {
                value: base_uri.clone(),
                path: package.path().to_string(),
                source,
            })?;
            let ontology_url =
                Url::parse(&ontology_uri).map_err(|source| ConvertError::InvalidUri {
                    value: ontology_uri.clone(),
                    path: package.path().to_string(),
                    source,
                })?;

            uris.set_package_base_uri(package.package_id, base_url);
            uris.set_package_ontology_uri(package.package_id, ontology_url);

            for (key, expansion) in parameterized_values(package, TagRole::Prefix) {
                namespaces.register(&key, &expansion);
            }
        }

        Ok(())
    }

    fn convert(
        &self,
        model: &DataRegistry,
        uris: &UriRegistry,
        store: &mut QuadStore,
    ) -> Result<(), ConvertError> {
        // Only the target diagram's owning package is part of the output.
        let target = model.target_diagram()?;
        for package in model
            .packages
            .iter()
            .filter(|p| p.package_id == target.package_id)
        {
            store.add_quads(self.create_quads(package, uris)?);
        }
        Ok(())
    }
}
