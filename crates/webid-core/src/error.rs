//! Error types for `webid-core`.

use thiserror::Error;

/// A boxed backend error, as produced by an [`IdentityStore`] or
/// [`ElectionDataset`] implementation.
///
/// [`IdentityStore`]: crate::store::IdentityStore
/// [`ElectionDataset`]: crate::dataset::ElectionDataset
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field was missing or empty.
  #[error("invalid request: {0}")]
  InvalidRequest(String),

  /// The lblod id does not name a person in the external dataset.
  #[error("lblod id does not exist in the dataset: {0}")]
  UnknownLblodId(String),

  /// The WebID or the lblod id is already linked.
  #[error("webid or lblod id already exists")]
  DuplicateIdentity,

  /// The external dataset was unreachable or answered with garbage.
  #[error("external service failure: {0}")]
  ExternalService(#[source] BoxError),

  #[error("store error: {0}")]
  Store(#[source] BoxError),
}

impl Error {
  pub fn external<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::ExternalService(Box::new(err))
  }

  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
