//! Run-scoped lookup tables from entity identifiers to assigned URIs.
//!
//! Populated incrementally by the handlers' `assign_uris` phases and
//! consulted during conversion. Every key is written once and read many
//! times; nothing here survives the run.

use std::collections::HashMap;

use url::Url;

/// URI bookkeeping for one conversion run.
#[derive(Debug)]
pub struct UriRegistry {
    fallback_base_uri: Url,
    package_base_uris: HashMap<i64, Url>,
    package_ontology_uris: HashMap<i64, Url>,
    /// Package ids per display name; more than one id under a name means
    /// the name is ambiguous for consumers that look packages up by name.
    packages_by_name: HashMap<String, Vec<i64>>,
    /// Generic entity id to assigned URI, used for scope resolution.
    assigned_uris: HashMap<i64, Url>,
}

impl UriRegistry {
    pub fn new(fallback_base_uri: Url) -> Self {
        Self {
            fallback_base_uri,
            package_base_uris: HashMap::new(),
            package_ontology_uris: HashMap::new(),
            packages_by_name: HashMap::new(),
            assigned_uris: HashMap::new(),
        }
    }

    pub fn fallback_base_uri(&self) -> &Url {
        &self.fallback_base_uri
    }

    pub fn index_package_name(&mut self, name: &str, package_id: i64) {
        self.packages_by_name
            .entry(name.to_string())
            .or_default()
            .push(package_id);
    }

    pub fn packages_with_name(&self, name: &str) -> &[i64] {
        self.packages_by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn set_package_base_uri(&mut self, package_id: i64, uri: Url) {
        self.package_base_uris.insert(package_id, uri);
    }

    pub fn set_package_ontology_uri(&mut self, package_id: i64, uri: Url) {
        self.package_ontology_uris.insert(package_id, uri);
    }

    pub fn package_base_uri(&self, package_id: i64) -> Option<&Url> {
        self.package_base_uris.get(&package_id)
    }

    pub fn package_ontology_uri(&self, package_id: i64) -> Option<&Url> {
        self.package_ontology_uris.get(&package_id)
    }

    pub fn set_assigned_uri(&mut self, entity_id: i64, uri: Url) {
        self.assigned_uris.insert(entity_id, uri);
    }

    pub fn assigned_uri(&self, entity_id: i64) -> Option<&Url> {
        self.assigned_uris.get(&entity_id)
    }
}
