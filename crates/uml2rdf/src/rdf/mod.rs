//! Minimal RDF term and quad types plus the append-only output store.
//!
//! IRIs are plain strings throughout; handlers guarantee validity by
//! parsing URI-bearing inputs before any term is built.

pub mod namespaces;
pub mod vocab;

/// Object position of a quad: an IRI or a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    NamedNode(String),
    Literal {
        value: String,
        /// Language tag; mutually exclusive with `datatype`.
        language: Option<String>,
        datatype: Option<String>,
    },
}

impl Term {
    pub fn named(iri: impl Into<String>) -> Self {
        Term::NamedNode(iri.into())
    }

    /// A plain string literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// A language-tagged literal.
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            Term::NamedNode(iri) => Some(iri),
            Term::Literal { .. } => None,
        }
    }

    pub fn literal_value(&self) -> Option<&str> {
        match self {
            Term::Literal { value, .. } => Some(value),
            Term::NamedNode(_) => None,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Term::Literal { language, .. } => language.as_deref(),
            Term::NamedNode(_) => None,
        }
    }
}

/// One output statement. `graph` is `None` for the default graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quad {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
    pub graph: Option<String>,
}

impl Quad {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
            graph: None,
        }
    }
}

/// Append-only quad accumulator shared by all handlers in a run.
#[derive(Debug, Default)]
pub struct QuadStore {
    quads: Vec<Quad>,
}

impl QuadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_quads(&mut self, quads: Vec<Quad>) {
        self.quads.extend(quads);
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        self.quads.iter()
    }

    /// All quads with the given subject, in insertion order.
    pub fn quads_for_subject<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Quad> {
        self.quads.iter().filter(move |q| q.subject == subject)
    }

    /// All quads with the given predicate, in insertion order.
    pub fn quads_for_predicate<'a>(&'a self, predicate: &'a str) -> impl Iterator<Item = &'a Quad> {
        self.quads.iter().filter(move |q| q.predicate == predicate)
    }
}
