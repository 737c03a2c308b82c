//! Read-through handlers over the external election dataset.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/cities` | Every city with at least one candidate list |
//! | `GET`  | `/lists` | `?cityURI` required |
//! | `GET`  | `/candidates` | `?listURI` required; rows carry `webID` when linked |
//! | `GET`  | `/person` | `?personURI` required; one row per list |
//!
//! Successful answers are wrapped as `{"success": true, "result": [...]}`.

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};
use webid_core::{
  Error,
  dataset::ElectionDataset,
  enrich::enrich,
  row::{CandidateListRow, CandidateRow, CityRow, MembershipRow},
  store::IdentityStore,
};

use crate::{AppState, error::ApiError};

/// The success envelope shared by all dataset endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
  pub success: bool,
  pub result:  Vec<T>,
}

impl<T> Envelope<T> {
  fn ok(result: Vec<T>) -> Json<Self> { Json(Self { success: true, result }) }
}

/// Query parameters of the dataset endpoints. Each endpoint requires exactly
/// one of them.
#[derive(Debug, Default, Deserialize)]
pub struct UriParams {
  #[serde(rename = "cityURI")]
  pub city_uri:   Option<String>,
  #[serde(rename = "listURI")]
  pub list_uri:   Option<String>,
  #[serde(rename = "personURI")]
  pub person_uri: Option<String>,
}

/// Decoded query parameters. A query string that does not decode (e.g. a
/// repeated key) is answered like an absent parameter.
type Params = Result<Query<UriParams>, QueryRejection>;

/// Pick one parameter out of `params`. A blank parameter counts as missing.
fn required(
  params: Params,
  pick: fn(UriParams) -> Option<String>,
  name: &'static str,
) -> Result<String, ApiError> {
  params
    .ok()
    .and_then(|Query(p)| pick(p))
    .filter(|v| !v.is_empty())
    .ok_or(ApiError::MissingParameter(name))
}

/// `GET /cities`
pub async fn cities<S, D>(
  State(state): State<AppState<S, D>>,
) -> Result<Json<Envelope<CityRow>>, ApiError>
where
  S: IdentityStore + 'static,
  D: ElectionDataset + 'static,
{
  let cities = state.dataset.list_cities().await.map_err(Error::external)?;
  Ok(Envelope::ok(cities))
}

/// `GET /lists?cityURI=<uri>`
pub async fn lists<S, D>(
  State(state): State<AppState<S, D>>,
  params: Params,
) -> Result<Json<Envelope<CandidateListRow>>, ApiError>
where
  S: IdentityStore + 'static,
  D: ElectionDataset + 'static,
{
  let city_uri = required(params, |p| p.city_uri, "cityURI")?;
  let lists = state
    .dataset
    .list_candidate_lists(&city_uri)
    .await
    .map_err(Error::external)?;
  Ok(Envelope::ok(lists))
}

/// `GET /candidates?listURI=<uri>`
pub async fn candidates<S, D>(
  State(state): State<AppState<S, D>>,
  params: Params,
) -> Result<Json<Envelope<CandidateRow>>, ApiError>
where
  S: IdentityStore + 'static,
  D: ElectionDataset + 'static,
{
  let list_uri = required(params, |p| p.list_uri, "listURI")?;
  let candidates = state
    .dataset
    .list_candidates(&list_uri)
    .await
    .map_err(Error::external)?;
  Ok(Envelope::ok(enrich(&*state.store, candidates).await))
}

/// `GET /person?personURI=<uri>`
pub async fn person<S, D>(
  State(state): State<AppState<S, D>>,
  params: Params,
) -> Result<Json<Envelope<MembershipRow>>, ApiError>
where
  S: IdentityStore + 'static,
  D: ElectionDataset + 'static,
{
  let person_uri = required(params, |p| p.person_uri, "personURI")?;
  let memberships = state
    .dataset
    .person_memberships(&person_uri)
    .await
    .map_err(Error::external)?;
  Ok(Envelope::ok(memberships))
}
