//! Decoding of the SPARQL 1.1 Query Results JSON format.
//!
//! Only the parts the fixed queries need are modelled: the `boolean` of an
//! ASK and the `results.bindings` of a SELECT. Each binding is kept as the
//! endpoint sent it and converted to a [`Term`] on access.

use std::collections::HashMap;

use serde::Deserialize;
use webid_core::term::Term;

use crate::{Error, Result};

/// A whole results document, either form.
#[derive(Debug, Deserialize)]
pub struct ResultsDocument {
  #[serde(default)]
  pub boolean: Option<bool>,
  #[serde(default)]
  pub results: Option<Bindings>,
}

#[derive(Debug, Deserialize)]
pub struct Bindings {
  pub bindings: Vec<Solution>,
}

impl ResultsDocument {
  pub fn parse(body: &[u8]) -> Result<Self> { Ok(serde_json::from_slice(body)?) }

  pub fn into_boolean(self) -> Result<bool> {
    self.boolean.ok_or(Error::ResultForm("boolean"))
  }

  pub fn into_solutions(self) -> Result<Vec<Solution>> {
    self
      .results
      .map(|r| r.bindings)
      .ok_or(Error::ResultForm("bindings"))
  }
}

/// One binding as sent by the endpoint. `xml:lang` and `datatype` are ignored.
#[derive(Debug, Clone, Deserialize)]
struct RawTerm {
  #[serde(rename = "type")]
  kind:  String,
  value: String,
}

/// One row of a SELECT result: variable name → bound value.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Solution(HashMap<String, RawTerm>);

impl Solution {
  /// The value bound to `var`, normalized to a [`Term`].
  ///
  /// Virtuoso reports typed values as `typed-literal`; those become plain
  /// literals. Blank nodes never appear in the fixed queries' projections and
  /// are rejected.
  pub fn get(&self, var: &str) -> Result<Term> {
    let raw = self
      .0
      .get(var)
      .ok_or_else(|| Error::MissingVariable(var.to_owned()))?;
    match raw.kind.as_str() {
      "uri" => Ok(Term::Uri(raw.value.clone())),
      "literal" | "typed-literal" => Ok(Term::Literal(raw.value.clone())),
      other => Err(Error::UnsupportedTerm(other.to_owned(), var.to_owned())),
    }
  }
}
