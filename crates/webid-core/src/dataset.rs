//! The `ElectionDataset` trait: read-only access to the external election
//! data.
//!
//! Every operation maps to one fixed query. Implementations answer "no
//! matching data" with an empty sequence (or `false`), including for
//! identifiers that are not well-formed URIs; only transport or protocol
//! failures are errors.

use std::future::Future;

use crate::row::{CandidateListRow, CandidateRow, CityRow, MembershipRow};

pub trait ElectionDataset: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Whether a resource typed as a person exists with this identifier.
  fn person_exists<'a>(
    &'a self,
    lblod_id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Every city involved in at least one candidate list, without duplicate
  /// city URIs and without the reserved classification.
  fn list_cities(
    &self,
  ) -> impl Future<Output = Result<Vec<CityRow>, Self::Error>> + Send + '_;

  /// Candidate lists whose governing body is tied to `city_uri`.
  fn list_candidate_lists<'a>(
    &'a self,
    city_uri: &'a str,
  ) -> impl Future<Output = Result<Vec<CandidateListRow>, Self::Error>> + Send + 'a;

  /// Persons on the list `list_uri`. `web_id` is always `None` here; see
  /// [`crate::enrich`].
  fn list_candidates<'a>(
    &'a self,
    list_uri: &'a str,
  ) -> impl Future<Output = Result<Vec<CandidateRow>, Self::Error>> + Send + 'a;

  /// One row per list the person is a member of.
  fn person_memberships<'a>(
    &'a self,
    person_uri: &'a str,
  ) -> impl Future<Output = Result<Vec<MembershipRow>, Self::Error>> + Send + 'a;
}
