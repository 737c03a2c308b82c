//! Tagged result values.
//!
//! Every field of every row handed to clients keeps the shape the SPARQL JSON
//! results format uses for bindings: `{"type": "uri", "value": "..."}` or
//! `{"type": "literal", "value": "..."}`. Clients depend on this shape.

use serde::{Deserialize, Serialize};

/// A single value in a result row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Term {
  /// An IRI, e.g. a person, list or city identifier.
  Uri(String),
  /// A plain string; language tags and datatypes are not carried.
  Literal(String),
}

impl Term {
  pub fn uri(value: impl Into<String>) -> Self { Self::Uri(value.into()) }

  pub fn literal(value: impl Into<String>) -> Self {
    Self::Literal(value.into())
  }

  /// The lexical value, regardless of kind.
  pub fn value(&self) -> &str {
    match self {
      Self::Uri(v) | Self::Literal(v) => v,
    }
  }
}
