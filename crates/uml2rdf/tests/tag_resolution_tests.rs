use uml2rdf::config::ConvertConfig;
use uml2rdf::converter::tags::{is_ignored, language_literals, parameterized_values, single_tag_value};
use uml2rdf::model::entities::{Element, ElementKind};
use uml2rdf::model::tags::{Tag, TagRole};

fn element_with(tags: Vec<Tag>) -> Element {
    Element::new(1, "Person", "{G}", ElementKind::Class, 10, None).with_tags(tags)
}

fn config() -> ConvertConfig {
    ConvertConfig::default()
}

// ---------------------------------------------------------------------------
// Language-dependent resolution
// ---------------------------------------------------------------------------

#[test]
fn suffix_selects_language() {
    let e = element_with(vec![
        Tag::new("definition-en", "an English definition"),
        Tag::new("definition-fr", "une definition"),
    ]);
    let terms = language_literals(&config(), &e, TagRole::Definition);
    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0].language(), Some("en"));
    assert_eq!(terms[0].literal_value(), Some("an English definition"));
    assert_eq!(terms[1].language(), Some("fr"));
}

#[test]
fn unknown_suffix_falls_back_to_default_language() {
    let e = element_with(vec![Tag::new("definition", "een definitie")]);
    let terms = language_literals(&config(), &e, TagRole::Definition);
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].language(), Some("nl"));
}

#[test]
fn empty_values_are_skipped() {
    let e = element_with(vec![
        Tag::new("definition-en", ""),
        Tag::new("definition-nl", "een definitie"),
    ]);
    let terms = language_literals(&config(), &e, TagRole::Definition);
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].language(), Some("nl"));
}

#[test]
fn duplicate_language_overwrites() {
    let e = element_with(vec![
        Tag::new("definition-en", "first"),
        Tag::new("definition-en", "second"),
    ]);
    let terms = language_literals(&config(), &e, TagRole::Definition);
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].literal_value(), Some("second"));
}

#[test]
fn suffixed_and_unsuffixed_resolve_to_distinct_languages() {
    let e = element_with(vec![
        Tag::new("definition-en", "a human being"),
        Tag::new("definition", "een mens"),
    ]);
    let terms = language_literals(&config(), &e, TagRole::Definition);
    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0].language(), Some("en"));
    assert_eq!(terms[1].language(), Some("nl"));
    assert_eq!(terms[1].literal_value(), Some("een mens"));
}

#[test]
fn unsuffixed_and_default_language_collide() {
    // An unsuffixed tag and an explicit default-language tag resolve to
    // the same slot; the later one wins.
    let e = element_with(vec![
        Tag::new("definition", "unsuffixed"),
        Tag::new("definition-nl", "suffixed"),
    ]);
    let terms = language_literals(&config(), &e, TagRole::Definition);
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].literal_value(), Some("suffixed"));
}

#[test]
fn values_are_trimmed() {
    let e = element_with(vec![Tag::new("definition-en", "  padded  ")]);
    let terms = language_literals(&config(), &e, TagRole::Definition);
    assert_eq!(terms[0].literal_value(), Some("padded"));
}

#[test]
fn resolution_order_follows_tag_order() {
    let e = element_with(vec![
        Tag::new("label-de", "Person"),
        Tag::new("label-en", "person"),
        Tag::new("label-nl", "persoon"),
    ]);
    let terms = language_literals(&config(), &e, TagRole::Label);
    let languages: Vec<_> = terms.iter().filter_map(|t| t.language()).collect();
    assert_eq!(languages, ["de", "en", "nl"]);
}

#[test]
fn unrelated_tags_do_not_match() {
    let e = element_with(vec![
        Tag::new("ap-definition-en", "application profile"),
        Tag::new("status", "x"),
    ]);
    let terms = language_literals(&config(), &e, TagRole::Definition);
    assert!(terms.is_empty());
}

// ---------------------------------------------------------------------------
// Parameterized resolution
// ---------------------------------------------------------------------------

#[test]
fn suffix_becomes_arbitrary_key() {
    let e = element_with(vec![
        Tag::new("prefix-foaf", "http://xmlns.com/foaf/0.1/"),
        Tag::new("prefix-ex", "https://example.org/ns#"),
    ]);
    let pairs = parameterized_values(&e, TagRole::Prefix);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0], ("foaf".to_string(), "http://xmlns.com/foaf/0.1/".to_string()));
    assert_eq!(pairs[1].0, "ex");
}

#[test]
fn parameterized_duplicate_key_last_write_wins() {
    let e = element_with(vec![
        Tag::new("prefix-ex", "https://first.example/"),
        Tag::new("prefix-ex", "https://second.example/"),
    ]);
    let pairs = parameterized_values(&e, TagRole::Prefix);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].1, "https://second.example/");
}

#[test]
fn parameterized_empty_value_skipped() {
    let e = element_with(vec![Tag::new("prefix-ex", "")]);
    assert!(parameterized_values(&e, TagRole::Prefix).is_empty());
}

// ---------------------------------------------------------------------------
// Exact-name lookup and the ignore marker
// ---------------------------------------------------------------------------

#[test]
fn single_tag_value_requires_exact_name() {
    let e = element_with(vec![
        Tag::new("baseUri-nl", "https://wrong.example/"),
        Tag::new("baseUri", "  https://right.example/ns/  "),
    ]);
    assert_eq!(
        single_tag_value(&e, TagRole::BaseUri),
        Some("https://right.example/ns/".to_string())
    );
}

#[test]
fn single_tag_value_ignores_empty() {
    let e = element_with(vec![Tag::new("baseUri", "")]);
    assert_eq!(single_tag_value(&e, TagRole::BaseUri), None);
}

#[test]
fn ignore_marker_is_case_insensitive() {
    assert!(is_ignored(&element_with(vec![Tag::new("ignore", "true")])));
    assert!(is_ignored(&element_with(vec![Tag::new("ignore", "TRUE")])));
    assert!(is_ignored(&element_with(vec![Tag::new("ignore", " True ")])));
}

#[test]
fn ignore_marker_requires_true() {
    assert!(!is_ignored(&element_with(vec![Tag::new("ignore", "false")])));
    assert!(!is_ignored(&element_with(vec![Tag::new("ignore", "yes")])));
    assert!(!is_ignored(&element_with(vec![])));
}
