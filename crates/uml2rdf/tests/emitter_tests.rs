use uml2rdf::emitter::NQuadsEmitter;
use uml2rdf::rdf::{Quad, Term};

#[test]
fn named_node_object() {
    let mut buf = Vec::new();
    let mut em = NQuadsEmitter::new(&mut buf);
    em.emit(&Quad::new(
        "http://example.org/s",
        "http://example.org/p",
        Term::named("http://example.org/o"),
    ))
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> <http://example.org/o> .\n"
    );
}

#[test]
fn plain_literal_object() {
    let mut buf = Vec::new();
    let mut em = NQuadsEmitter::new(&mut buf);
    em.emit(&Quad::new(
        "http://example.org/s",
        "http://example.org/name",
        Term::literal("hello world"),
    ))
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/name> \"hello world\" .\n"
    );
}

#[test]
fn language_tagged_literal() {
    let mut buf = Vec::new();
    let mut em = NQuadsEmitter::new(&mut buf);
    em.emit(&Quad::new(
        "http://example.org/s",
        "http://example.org/label",
        Term::lang_literal("persoon", "nl"),
    ))
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/label> \"persoon\"@nl .\n"
    );
}

#[test]
fn typed_literal() {
    let mut buf = Vec::new();
    let mut em = NQuadsEmitter::new(&mut buf);
    em.emit(&Quad::new(
        "http://example.org/s",
        "http://example.org/p",
        Term::Literal {
            value: "42".to_string(),
            language: None,
            datatype: Some("http://www.w3.org/2001/XMLSchema#integer".to_string()),
        },
    ))
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n"
    );
}

#[test]
fn named_graph_term_is_appended() {
    let mut buf = Vec::new();
    let mut em = NQuadsEmitter::new(&mut buf);
    let mut quad = Quad::new(
        "http://example.org/s",
        "http://example.org/p",
        Term::named("http://example.org/o"),
    );
    quad.graph = Some("http://example.org/g".to_string());
    em.emit(&quad).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> <http://example.org/o> <http://example.org/g> .\n"
    );
}

#[test]
fn escape_special_chars() {
    let mut buf = Vec::new();
    let mut em = NQuadsEmitter::new(&mut buf);
    em.emit(&Quad::new(
        "http://example.org/s",
        "http://example.org/p",
        Term::literal("line1\nline2\ttab\\slash\"quote"),
    ))
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("\\n"));
    assert!(out.contains("\\t"));
    assert!(out.contains("\\\\"));
    assert!(out.contains("\\\""));
}

#[test]
fn escape_control_chars() {
    let mut buf = Vec::new();
    let mut em = NQuadsEmitter::new(&mut buf);
    // \x01 is a control char that should be escaped as 
    em.emit(&Quad::new(
        "http://example.org/s",
        "http://example.org/p",
        Term::literal("a\x01b"),
    ))
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("\\u0001"), "Expected \\u0001 in: {out}");
}

#[test]
fn unicode_passthrough() {
    let mut buf = Vec::new();
    let mut em = NQuadsEmitter::new(&mut buf);
    // Non-ASCII characters above U+001F should pass through unchanged
    em.emit(&Quad::new(
        "http://example.org/s",
        "http://example.org/p",
        Term::literal("cafe\u{0301}"),
    ))
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(
        out.contains("cafe\u{0301}"),
        "Unicode should pass through: {out}"
    );
}

#[test]
fn quad_count_tracks_emissions() {
    let mut buf = Vec::new();
    let mut em = NQuadsEmitter::new(&mut buf);
    assert_eq!(em.quad_count(), 0);
    let quads = vec![
        Quad::new(
            "http://example.org/s",
            "http://example.org/p",
            Term::named("http://example.org/o"),
        ),
        Quad::new(
            "http://example.org/s",
            "http://example.org/p",
            Term::literal("v"),
        ),
    ];
    em.emit_all(&quads).unwrap();
    assert_eq!(em.quad_count(), 2);
}

#[test]
fn flush_succeeds() {
    let mut buf = Vec::new();
    let mut em = NQuadsEmitter::new(&mut buf);
    em.emit(&Quad::new(
        "http://example.org/s",
        "http://example.org/p",
        Term::named("http://example.org/o"),
    ))
    .unwrap();
    assert!(em.flush().is_ok());
}
