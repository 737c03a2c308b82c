//! Handlers for the locally stored WebID links.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/store` | Body: `{"uri": "...", "lblod_id": "..."}`; always answers [`StoreResponse`] |
//! | `GET`  | `/get` | All links, ordered by id |

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use webid_core::{
  Error, dataset::ElectionDataset, record::WebIdRecord, registrar, store::IdentityStore,
};

use crate::{AppState, error::ApiError, error::status_for};

// ─── Store ────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /store`. Both fields are required; they are
/// optional here so that a missing field gets the same answer as an empty one.
#[derive(Debug, Deserialize)]
pub struct StoreBody {
  pub uri:      Option<String>,
  pub lblod_id: Option<String>,
}

/// The answer to every `POST /store`.
///
/// `success` reports whether the request was acceptable, `updated` whether a
/// link was written.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreResponse {
  pub success: bool,
  pub updated: bool,
  pub message: String,
}

impl StoreResponse {
  fn created() -> Self {
    Self {
      success: true,
      updated: true,
      message: "WebID successfully added to the database!".to_owned(),
    }
  }

  fn rejected(message: impl Into<String>) -> Self {
    Self { success: false, updated: false, message: message.into() }
  }
}

const MISSING_FIELDS: &str =
  "Please set the \"uri\" and \"lblod_id\" fields in your JSON body";

/// `POST /store`
///
/// The body is parsed as JSON whatever its `Content-Type`, so clients that
/// post a bare string body are served too.
pub async fn store<S, D>(
  State(state): State<AppState<S, D>>,
  body: Bytes,
) -> (StatusCode, Json<StoreResponse>)
where
  S: IdentityStore + 'static,
  D: ElectionDataset + 'static,
{
  let Ok(body) = serde_json::from_slice::<StoreBody>(&body) else {
    return (StatusCode::BAD_REQUEST, Json(StoreResponse::rejected(MISSING_FIELDS)));
  };
  let uri = body.uri.unwrap_or_default();
  let lblod_id = body.lblod_id.unwrap_or_default();

  match registrar::register(&*state.store, &*state.dataset, &uri, &lblod_id).await {
    Ok(_) => (StatusCode::OK, Json(StoreResponse::created())),
    Err(err) => {
      let status = status_for(&err);
      let message = match &err {
        Error::InvalidRequest(_) => MISSING_FIELDS.to_owned(),
        Error::UnknownLblodId(_) => "This lblod ID does not exist in our dataset".to_owned(),
        Error::DuplicateIdentity => "WebID or lblod ID already exists in database".to_owned(),
        Error::ExternalService(_) | Error::Store(_) => {
          tracing::error!(error = %err, "registration failed");
          err.to_string()
        }
      };
      (status, Json(StoreResponse::rejected(message)))
    }
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /get`
pub async fn list<S, D>(
  State(state): State<AppState<S, D>>,
) -> Result<Json<Vec<WebIdRecord>>, ApiError>
where
  S: IdentityStore + 'static,
  D: ElectionDataset + 'static,
{
  let records = state.store.list().await.map_err(Error::store)?;
  Ok(Json(records))
}
