//! Registration of new WebID ↔ lblod id links.
//!
//! This is the one place where a cross-system guarantee is enforced: every
//! stored `lblod_id` named a person in the external dataset at the time it
//! was inserted. It is never re-checked afterwards.
//!
//! No transaction spans the existence check and the insert. Two concurrent
//! registrations may both pass the check; the store's uniqueness constraints
//! reject the second insert, which surfaces as [`Error::DuplicateIdentity`].

use tracing::{info, warn};

use crate::{
  Error, Result,
  dataset::ElectionDataset,
  record::{Insertion, NewWebId, WebIdRecord},
  store::IdentityStore,
};

/// Validate and persist a new link between `uri` and `lblod_id`.
pub async fn register<S, D>(
  store: &S,
  dataset: &D,
  uri: &str,
  lblod_id: &str,
) -> Result<WebIdRecord>
where
  S: IdentityStore,
  D: ElectionDataset,
{
  if uri.trim().is_empty() || lblod_id.trim().is_empty() {
    return Err(Error::InvalidRequest(
      "both \"uri\" and \"lblod_id\" must be set".to_owned(),
    ));
  }

  let exists = dataset
    .person_exists(lblod_id)
    .await
    .map_err(Error::external)?;
  if !exists {
    warn!(%lblod_id, "rejected registration for unknown lblod id");
    return Err(Error::UnknownLblodId(lblod_id.to_owned()));
  }

  match store
    .insert(NewWebId::new(uri, lblod_id))
    .await
    .map_err(Error::store)?
  {
    Insertion::Created(record) => {
      info!(id = record.id, %uri, %lblod_id, "registered webid");
      Ok(record)
    }
    Insertion::Duplicate => {
      warn!(%uri, %lblod_id, "rejected duplicate registration");
      Err(Error::DuplicateIdentity)
    }
  }
}
