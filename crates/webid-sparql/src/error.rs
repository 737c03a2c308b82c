//! Error type for `webid-sparql`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("endpoint answered {status}: {body}")]
  Status {
    status: reqwest::StatusCode,
    body:   String,
  },

  #[error("malformed results document: {0}")]
  Json(#[from] serde_json::Error),

  /// An ASK was answered without a boolean, or a SELECT without bindings.
  #[error("unexpected result form: expected {0}")]
  ResultForm(&'static str),

  #[error("solution has no binding for ?{0}")]
  MissingVariable(String),

  #[error("unsupported term type {0:?} for ?{1}")]
  UnsupportedTerm(String, String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
