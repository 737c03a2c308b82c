//! The `IdentityStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `webid-store-sqlite`).
//! Higher layers (`webid-api`, the registrar, the enricher) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::record::{Insertion, NewWebId, WebIdRecord};

/// Abstraction over the local store of WebID links.
///
/// The store is append-only: records are inserted once and never updated or
/// deleted. Uniqueness of both `uri` and `lblod_id` is enforced by the store
/// itself, so concurrent inserts of the same identity cannot both succeed.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait IdentityStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new link, stamping `id` and `date_created`.
  ///
  /// Returns [`Insertion::Duplicate`] (not an error) if either the `uri` or
  /// the `lblod_id` is already present; the existing record is untouched.
  fn insert(
    &self,
    input: NewWebId,
  ) -> impl Future<Output = Result<Insertion, Self::Error>> + Send + '_;

  /// All records, ordered by `id`.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<WebIdRecord>, Self::Error>> + Send + '_;

  /// The record whose `lblod_id` exactly equals `lblod_id`, if any.
  fn find_by_lblod_id<'a>(
    &'a self,
    lblod_id: &'a str,
  ) -> impl Future<Output = Result<Option<WebIdRecord>, Self::Error>> + Send + 'a;
}
