//! N-Quads serialization of the quad store.

use std::io::Write;

use crate::rdf::{Quad, Term};

/// Streams quads as `<s> <p> o [g] .` lines.
pub struct NQuadsEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> NQuadsEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    /// Escape a string for an N-Quads literal (per RDF 1.1 N-Triples spec).
    fn escape_literal(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    // Control chars: \uXXXX
                    out.push_str(&format!("\\u{:04X}", c as u32));
                }
                _ => out.push(c),
            }
        }
        out
    }

    fn render_term(term: &Term) -> String {
        match term {
            Term::NamedNode(iri) => format!("<{iri}>"),
            Term::Literal {
                value,
                language,
                datatype,
            } => {
                let escaped = Self::escape_literal(value);
                if let Some(lang) = language {
                    format!("\"{escaped}\"@{lang}")
                } else if let Some(dt) = datatype {
                    format!("\"{escaped}\"^^<{dt}>")
                } else {
                    format!("\"{escaped}\"")
                }
            }
        }
    }

    pub fn emit(&mut self, quad: &Quad) -> std::io::Result<()> {
        let object = Self::render_term(&quad.object);
        match &quad.graph {
            Some(graph) => writeln!(
                self.writer,
                "<{}> <{}> {} <{}> .",
                quad.subject, quad.predicate, object, graph
            )?,
            None => writeln!(
                self.writer,
                "<{}> <{}> {} .",
                quad.subject, quad.predicate, object
            )?,
        }
        self.count += 1;
        Ok(())
    }

    pub fn emit_all<'a>(
        &mut self,
        quads: impl IntoIterator<Item = &'a Quad>,
    ) -> std::io::Result<()> {
        for quad in quads {
            self.emit(quad)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Number of quads emitted so far.
    pub fn quad_count(&self) -> u64 {
        self.count
    }
}
