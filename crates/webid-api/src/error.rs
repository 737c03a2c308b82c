//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by a read handler, rendered as
/// `{"success": false, "message": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A required query parameter was absent or empty.
  #[error("Wrong query parameters: \"{0}\" is required")]
  MissingParameter(&'static str),

  #[error(transparent)]
  Core(#[from] webid_core::Error),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
      ApiError::Core(e) => status_for(e),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, Json(json!({ "success": false, "message": self.to_string() })))
      .into_response()
  }
}

/// The HTTP status a core error maps to. Caller mistakes are 400s; a failing
/// dataset is a bad gateway; anything else in the store is a 500.
pub fn status_for(err: &webid_core::Error) -> StatusCode {
  use webid_core::Error;
  match err {
    Error::InvalidRequest(_) | Error::UnknownLblodId(_) | Error::DuplicateIdentity => {
      StatusCode::BAD_REQUEST
    }
    Error::ExternalService(_) => StatusCode::BAD_GATEWAY,
    Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
  }
}
