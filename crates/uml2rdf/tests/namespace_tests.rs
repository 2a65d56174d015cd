use uml2rdf::rdf::namespaces::NamespaceRegistry;

#[test]
fn builtin_prefixes_are_present() {
    let reg = NamespaceRegistry::new();
    assert_eq!(
        reg.expansion("foaf"),
        Some("http://xmlns.com/foaf/0.1/")
    );
    assert_eq!(
        reg.expansion("rdf"),
        Some("http://www.w3.org/1999/02/22-rdf-syntax-ns#")
    );
    assert_eq!(reg.expansion("vm"), Some("http://vocmodel.example/ontology/"));
    assert_eq!(reg.expansion("nope"), None);
}

#[test]
fn first_registration_wins() {
    let mut reg = NamespaceRegistry::new();
    reg.register("ex", "https://first.example/");
    reg.register("ex", "https://second.example/");
    assert_eq!(reg.expansion("ex"), Some("https://first.example/"));
}

#[test]
fn builtins_cannot_be_overridden() {
    let mut reg = NamespaceRegistry::new();
    reg.register("foaf", "https://malicious.example/");
    assert_eq!(reg.expansion("foaf"), Some("http://xmlns.com/foaf/0.1/"));
}

#[test]
fn expand_compact_form() {
    let reg = NamespaceRegistry::new();
    let url = reg.expand("foaf:Person").unwrap();
    assert_eq!(url.as_str(), "http://xmlns.com/foaf/0.1/Person");
}

#[test]
fn expand_registered_custom_prefix() {
    let mut reg = NamespaceRegistry::new();
    reg.register("ex", "https://example.org/ns/");
    let url = reg.expand("ex:Thing").unwrap();
    assert_eq!(url.as_str(), "https://example.org/ns/Thing");
}

#[test]
fn expand_absolute_uri_passes_through() {
    let reg = NamespaceRegistry::new();
    let url = reg.expand("https://example.org/ns/Thing").unwrap();
    assert_eq!(url.as_str(), "https://example.org/ns/Thing");
}

#[test]
fn expand_urn_passes_through() {
    let reg = NamespaceRegistry::new();
    let url = reg.expand("urn:isbn:0451450523").unwrap();
    assert_eq!(url.as_str(), "urn:isbn:0451450523");
}

#[test]
fn expand_unregistered_prefix_falls_through_to_uri_parsing() {
    let reg = NamespaceRegistry::new();
    // `nope:Thing` parses as a URI with scheme `nope`, so the fall-through
    // accepts it rather than erroring on the unknown prefix.
    let url = reg.expand("nope:Thing").unwrap();
    assert_eq!(url.scheme(), "nope");
}

#[test]
fn expand_rejects_garbage() {
    let reg = NamespaceRegistry::new();
    assert!(reg.expand("not a uri at all").is_err());
}
