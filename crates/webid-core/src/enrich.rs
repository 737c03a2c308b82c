//! Joins candidate rows from the election dataset with local WebID links.

use tracing::warn;

use crate::{row::CandidateRow, store::IdentityStore, term::Term};

/// Attach a `webID` literal to every candidate whose person URI is a stored
/// `lblod_id`.
///
/// Rows without a match are returned unchanged. A failed lookup only affects
/// its own row, which is logged and passed through. Order and length of the
/// input are preserved.
pub async fn enrich<S>(store: &S, candidates: Vec<CandidateRow>) -> Vec<CandidateRow>
where
  S: IdentityStore,
{
  let mut enriched = Vec::with_capacity(candidates.len());
  for mut candidate in candidates {
    let lookup = store.find_by_lblod_id(candidate.person_uri.value()).await;
    match lookup {
      Ok(Some(record)) => candidate.web_id = Some(Term::Literal(record.uri)),
      Ok(None) => {}
      Err(e) => warn!(
        person = candidate.person_uri.value(),
        error = %e,
        "webid lookup failed; leaving candidate unenriched"
      ),
    }
    enriched.push(candidate);
  }
  enriched
}
