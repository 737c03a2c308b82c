//! Locally stored WebID links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted link between a WebID and a person in the election dataset.
///
/// Records are created once by the registrar and never updated or deleted.
/// Both `uri` and `lblod_id` are unique across the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebIdRecord {
  pub id:           i64,
  /// The WebID profile URI, e.g. `https://alice.example/profile/card#me`.
  pub uri:          String,
  /// URI of the person in the election dataset.
  pub lblod_id:     String,
  /// Server-assigned creation timestamp.
  pub date_created: DateTime<Utc>,
}

/// Input to [`crate::store::IdentityStore::insert`].
/// `id` and `date_created` are always set by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWebId {
  pub uri:      String,
  pub lblod_id: String,
}

impl NewWebId {
  pub fn new(uri: impl Into<String>, lblod_id: impl Into<String>) -> Self {
    Self { uri: uri.into(), lblod_id: lblod_id.into() }
  }
}

/// Outcome of an insert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
  Created(WebIdRecord),
  /// A record with the same `uri` or `lblod_id` already exists; nothing was
  /// written.
  Duplicate,
}
