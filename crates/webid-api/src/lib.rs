//! JSON HTTP API linking WebIDs to persons in the election dataset.
//!
//! Exposes an axum [`Router`] backed by any
//! [`IdentityStore`](webid_core::store::IdentityStore) and
//! [`ElectionDataset`](webid_core::dataset::ElectionDataset). CORS, tracing
//! and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = webid_api::api_router(AppState::new(store, dataset));
//! ```

pub mod elections;
pub mod error;
pub mod identities;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use webid_core::{dataset::ElectionDataset, store::IdentityStore};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers. Both backends are injected;
/// handlers never reach for a global connection.
pub struct AppState<S, D> {
  pub store:   Arc<S>,
  pub dataset: Arc<D>,
}

impl<S, D> AppState<S, D> {
  pub fn new(store: S, dataset: D) -> Self {
    Self { store: Arc::new(store), dataset: Arc::new(dataset) }
  }
}

impl<S, D> Clone for AppState<S, D> {
  fn clone(&self) -> Self {
    Self { store: self.store.clone(), dataset: self.dataset.clone() }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, D>(state: AppState<S, D>) -> Router<()>
where
  S: IdentityStore + 'static,
  D: ElectionDataset + 'static,
{
  Router::new()
    // Local links
    .route("/store", post(identities::store::<S, D>))
    .route("/store/", post(identities::store::<S, D>))
    .route("/get", get(identities::list::<S, D>))
    // Election dataset
    .route("/cities", get(elections::cities::<S, D>))
    .route("/lists", get(elections::lists::<S, D>))
    .route("/candidates", get(elections::candidates::<S, D>))
    .route("/person", get(elections::person::<S, D>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::{
    io,
    sync::atomic::{AtomicBool, Ordering},
  };

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use serde_json::{Value, json};
  use tower::ServiceExt as _;
  use webid_core::{
    row::{CandidateListRow, CandidateRow, CityRow, MembershipRow},
    term::Term,
  };
  use webid_store_sqlite::SqliteStore;

  use super::*;

  const WEBID: &str = "https://a.example/card#me";
  const PERSON: &str = "http://data.example/persons/123";
  const OTHER: &str = "http://data.example/persons/456";
  const CITY: &str = "http://data.example/cities/gent";
  const LIST: &str = "http://data.example/lists/1";

  /// A tiny, fixed election dataset.
  #[derive(Default)]
  struct Fixture {
    down: AtomicBool,
  }

  impl Fixture {
    fn check(&self) -> io::Result<()> {
      if self.down.load(Ordering::SeqCst) {
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, "endpoint down"))
      } else {
        Ok(())
      }
    }
  }

  fn candidate(person: &str, name: &str) -> CandidateRow {
    CandidateRow {
      person_uri:  Term::uri(person),
      name:        Term::literal(name),
      family_name: Term::literal("Peeters"),
      web_id:      None,
    }
  }

  impl ElectionDataset for Fixture {
    type Error = io::Error;

    async fn person_exists(&self, lblod_id: &str) -> io::Result<bool> {
      self.check()?;
      Ok(lblod_id == PERSON || lblod_id == OTHER)
    }

    async fn list_cities(&self) -> io::Result<Vec<CityRow>> {
      self.check()?;
      Ok(vec![CityRow {
        city_uri:       Term::uri(CITY),
        city_name:      Term::literal("Gent"),
        location_label: Term::literal("Gemeente"),
      }])
    }

    async fn list_candidate_lists(&self, city_uri: &str) -> io::Result<Vec<CandidateListRow>> {
      self.check()?;
      Ok(if city_uri == CITY {
        vec![CandidateListRow {
          list_uri:  Term::uri(LIST),
          list_name: Term::literal("Groen"),
        }]
      } else {
        Vec::new()
      })
    }

    async fn list_candidates(&self, list_uri: &str) -> io::Result<Vec<CandidateRow>> {
      self.check()?;
      Ok(if list_uri == LIST {
        vec![candidate(OTHER, "An"), candidate(PERSON, "Bart")]
      } else {
        Vec::new()
      })
    }

    async fn person_memberships(&self, person_uri: &str) -> io::Result<Vec<MembershipRow>> {
      self.check()?;
      Ok(if person_uri == PERSON {
        vec![MembershipRow {
          name:        Term::literal("Bart"),
          family_name: Term::literal("Peeters"),
          list_uri:    Term::uri(LIST),
          list_name:   Term::literal("Groen"),
          tracking_nb: Term::literal("4"),
        }]
      } else {
        Vec::new()
      })
    }
  }

  async fn make_state() -> AppState<SqliteStore, Fixture> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    AppState::new(store, Fixture::default())
  }

  async fn send(
    state: AppState<SqliteStore, Fixture>,
    method: &str,
    uri: &str,
    body: Option<&str>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let req = builder
      .body(Body::from(body.unwrap_or_default().to_owned()))
      .unwrap();
    let resp = api_router(state).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  async fn store_link(
    state: &AppState<SqliteStore, Fixture>,
    uri: &str,
    lblod_id: &str,
  ) -> (StatusCode, Value) {
    let body = json!({ "uri": uri, "lblod_id": lblod_id }).to_string();
    send(state.clone(), "POST", "/store", Some(&body)).await
  }

  // ── POST /store ─────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn store_known_person_succeeds() {
    let state = make_state().await;
    let (status, body) = store_link(&state, WEBID, PERSON).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["updated"], true);
    assert!(body["message"].as_str().unwrap().contains("successfully"));
  }

  #[tokio::test]
  async fn store_unknown_person_is_rejected_and_not_persisted() {
    let state = make_state().await;
    let (status, body) = store_link(&state, WEBID, "http://data.example/persons/999").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({
      "success": false,
      "updated": false,
      "message": "This lblod ID does not exist in our dataset",
    }));

    let (_, all) = send(state, "GET", "/get", None).await;
    assert_eq!(all, json!([]));
  }

  #[tokio::test]
  async fn store_twice_yields_duplicate() {
    let state = make_state().await;
    store_link(&state, WEBID, PERSON).await;
    let (status, body) = store_link(&state, WEBID, OTHER).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["updated"], false);
    assert_eq!(body["message"], "WebID or lblod ID already exists in database");

    let (_, all) = send(state, "GET", "/get", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn store_with_missing_or_empty_fields_is_400() {
    let state = make_state().await;
    for body in [
      json!({ "uri": WEBID }).to_string(),
      json!({ "lblod_id": PERSON }).to_string(),
      json!({ "uri": "", "lblod_id": PERSON }).to_string(),
      json!({ "uri": 42, "lblod_id": PERSON }).to_string(),
      "not json".to_owned(),
    ] {
      let (status, resp) = send(state.clone(), "POST", "/store", Some(&body)).await;
      assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
      assert_eq!(resp["success"], false);
      assert_eq!(resp["updated"], false);
      assert!(resp["message"].as_str().unwrap().contains("lblod_id"));
    }
  }

  #[tokio::test]
  async fn store_parses_body_without_content_type() {
    let state = make_state().await;
    let req = Request::builder()
      .method("POST")
      .uri("/store")
      .body(Body::from(json!({ "uri": WEBID, "lblod_id": PERSON }).to_string()))
      .unwrap();
    let resp = api_router(state.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["updated"], true);

    let (_, all) = send(state, "GET", "/get", None).await;
    assert_eq!(all[0]["lblod_id"], PERSON);
  }

  #[tokio::test]
  async fn store_accepts_trailing_slash() {
    let state = make_state().await;
    let body = json!({ "uri": WEBID, "lblod_id": PERSON }).to_string();
    let (status, _) = send(state, "POST", "/store/", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
  }

  #[tokio::test]
  async fn store_with_dataset_down_is_bad_gateway() {
    let state = make_state().await;
    state.dataset.down.store(true, Ordering::SeqCst);

    let (status, body) = store_link(&state, WEBID, PERSON).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert_eq!(body["updated"], false);
  }

  // ── GET /get ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_lists_records_with_iso_dates() {
    let state = make_state().await;
    store_link(&state, WEBID, PERSON).await;
    store_link(&state, "https://b.example/card#me", OTHER).await;

    let (status, body) = send(state, "GET", "/get", None).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["uri"], WEBID);
    assert_eq!(rows[0]["lblod_id"], PERSON);
    assert!(rows[0]["id"].as_i64().unwrap() < rows[1]["id"].as_i64().unwrap());
    let date = rows[0]["date_created"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(date).is_ok(), "{date}");
  }

  // ── Dataset reads ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn cities_are_wrapped_in_envelope() {
    let state = make_state().await;
    let (status, body) = send(state, "GET", "/cities", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({
      "success": true,
      "result": [{
        "cityURI":       { "type": "uri", "value": CITY },
        "cityName":      { "type": "literal", "value": "Gent" },
        "locationLabel": { "type": "literal", "value": "Gemeente" },
      }],
    }));
  }

  #[tokio::test]
  async fn lists_for_unknown_city_is_empty() {
    let state = make_state().await;
    let (status, body) =
      send(state, "GET", "/lists?cityURI=http%3A%2F%2Funknown-city", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "result": [] }));
  }

  #[tokio::test]
  async fn lists_for_known_city() {
    let state = make_state().await;
    let (_, body) = send(state, "GET", &format!("/lists?cityURI={CITY}"), None).await;
    assert_eq!(body["result"][0]["listName"]["value"], "Groen");
  }

  #[tokio::test]
  async fn missing_parameters_are_400() {
    let state = make_state().await;
    for uri in ["/lists", "/candidates", "/person", "/lists?cityURI=", "/candidates?cityURI=x"] {
      let (status, body) = send(state.clone(), "GET", uri, None).await;
      assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
      assert_eq!(body["success"], false, "{uri}");
      assert!(body["message"].as_str().unwrap().starts_with("Wrong query parameters"));
    }
  }

  #[tokio::test]
  async fn undecodable_query_string_is_answered_as_json() {
    let state = make_state().await;
    let uri = format!("/lists?cityURI={CITY}&cityURI={CITY}");
    let (status, body) = send(state, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({
      "success": false,
      "message": "Wrong query parameters: \"cityURI\" is required",
    }));
  }

  #[tokio::test]
  async fn candidates_are_enriched_with_linked_webids() {
    let state = make_state().await;
    store_link(&state, WEBID, PERSON).await;

    let (status, body) = send(state, "GET", &format!("/candidates?listURI={LIST}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["result"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["personURI"]["value"], OTHER);
    assert!(rows[0].get("webID").is_none());
    assert_eq!(rows[1]["personURI"]["value"], PERSON);
    assert_eq!(rows[1]["webID"], json!({ "type": "literal", "value": WEBID }));
  }

  #[tokio::test]
  async fn person_memberships_carry_tracking_number() {
    let state = make_state().await;
    let (status, body) = send(state, "GET", &format!("/person?personURI={PERSON}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"][0]["trackingNb"], json!({ "type": "literal", "value": "4" }));
  }

  #[tokio::test]
  async fn dataset_failure_on_read_is_bad_gateway() {
    let state = make_state().await;
    state.dataset.down.store(true, Ordering::SeqCst);

    let (status, body) = send(state, "GET", "/cities", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
  }
}
