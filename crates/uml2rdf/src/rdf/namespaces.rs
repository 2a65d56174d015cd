//! Per-run namespace prefix registry.
//!
//! Maps short vocabulary prefixes to expansion URIs. A fresh registry is
//! created for every conversion run and passed by reference wherever
//! prefixes are registered (package handler) or resolved (URI minting),
//! so no state leaks between runs.

use std::collections::HashMap;

use url::Url;

use crate::error::ConvertError;

use super::vocab::vm;

/// Built-in prefixes available in every run.
const BUILTINS: [(&str, &str); 16] = [
    ("adms", "http://www.w3.org/ns/adms#"),
    ("dcat", "http://www.w3.org/ns/dcat#"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("person", "http://www.w3.org/ns/person#"),
    ("prov", "http://www.w3.org/ns/prov#"),
    ("qb", "http://purl.org/linked-data/cube#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("shacl", "http://www.w3.org/ns/shacl#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("vann", "http://purl.org/vocab/vann/"),
    ("void", "http://rdfs.org/ns/void#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    (vm::PREFIX, vm::NS),
];

/// Prefix-to-expansion lookup with first-registration-wins semantics.
#[derive(Debug)]
pub struct NamespaceRegistry {
    prefixes: HashMap<String, String>,
}

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        let prefixes = BUILTINS
            .iter()
            .map(|(p, e)| (p.to_string(), e.to_string()))
            .collect();
        Self { prefixes }
    }

    /// Register a custom prefix. A prefix that collides with a built-in
    /// or an earlier registration is skipped silently.
    pub fn register(&mut self, prefix: &str, expansion: &str) {
        self.prefixes
            .entry(prefix.to_string())
            .or_insert_with(|| expansion.to_string());
    }

    pub fn expansion(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Resolve a `prefix:local` string to a full URI, or parse `input`
    /// as an absolute URI when it does not match a registered prefix
    /// pattern.
    pub fn expand(&self, input: &str) -> Result<Url, ConvertError> {
        if let Some((prefix, local)) = input.split_once(':') {
            // A second colon means this is already a full URI (scheme
            // with authority or path), not a compact form.
            if !local.contains(':') && !local.starts_with("//") {
                if let Some(expansion) = self.prefixes.get(prefix) {
                    return Url::parse(&format!("{expansion}{local}")).map_err(|source| {
                        ConvertError::InvalidUri {
                            value: input.to_string(),
                            path: String::new(),
                            source,
                        }
                    });
                }
                // Unregistered prefix: the whole string may still be an
                // absolute URI with an exotic scheme, so fall through.
            }
        }
        Url::parse(input).map_err(|source| ConvertError::InvalidUri {
            value: input.to_string(),
            path: String::new(),
            source,
        })
    }
}
