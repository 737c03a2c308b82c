//! [`SparqlDataset`]: the SPARQL implementation of [`ElectionDataset`].

use std::collections::HashSet;

use webid_core::{
  dataset::ElectionDataset,
  row::{CandidateListRow, CandidateRow, CityRow, MembershipRow},
};

use crate::{
  Result, SparqlClient,
  query::{self, iri},
  results::Solution,
};

#[derive(Clone)]
pub struct SparqlDataset {
  client: SparqlClient,
}

impl SparqlDataset {
  pub fn new(client: SparqlClient) -> Self { Self { client } }
}

impl ElectionDataset for SparqlDataset {
  type Error = crate::Error;

  async fn person_exists(&self, lblod_id: &str) -> Result<bool> {
    let Some(person) = iri(lblod_id) else {
      return Ok(false);
    };
    self.client.ask(&query::person_exists(&person)).await
  }

  async fn list_cities(&self) -> Result<Vec<CityRow>> {
    let rows = self
      .client
      .select(&query::cities())
      .await?
      .iter()
      .map(city_row)
      .collect::<Result<Vec<_>>>()?;

    // One row per city: a city can match through several bodies or labels.
    let mut seen = HashSet::new();
    Ok(
      rows
        .into_iter()
        .filter(|c| !c.is_reserved())
        .filter(|c| seen.insert(c.city_uri.value().to_owned()))
        .collect(),
    )
  }

  async fn list_candidate_lists(&self, city_uri: &str) -> Result<Vec<CandidateListRow>> {
    let Some(city) = iri(city_uri) else {
      return Ok(Vec::new());
    };
    self
      .client
      .select(&query::candidate_lists(&city))
      .await?
      .iter()
      .map(list_row)
      .collect()
  }

  async fn list_candidates(&self, list_uri: &str) -> Result<Vec<CandidateRow>> {
    let Some(list) = iri(list_uri) else {
      return Ok(Vec::new());
    };
    self
      .client
      .select(&query::candidates(&list))
      .await?
      .iter()
      .map(candidate_row)
      .collect()
  }

  async fn person_memberships(&self, person_uri: &str) -> Result<Vec<MembershipRow>> {
    let Some(person) = iri(person_uri) else {
      return Ok(Vec::new());
    };
    self
      .client
      .select(&query::memberships(&person))
      .await?
      .iter()
      .map(membership_row)
      .collect()
  }
}

fn city_row(s: &Solution) -> Result<CityRow> {
  Ok(CityRow {
    city_uri:       s.get("cityURI")?,
    city_name:      s.get("cityName")?,
    location_label: s.get("locationLabel")?,
  })
}

fn list_row(s: &Solution) -> Result<CandidateListRow> {
  Ok(CandidateListRow {
    list_uri:  s.get("listURI")?,
    list_name: s.get("listName")?,
  })
}

fn candidate_row(s: &Solution) -> Result<CandidateRow> {
  Ok(CandidateRow {
    person_uri:  s.get("personURI")?,
    name:        s.get("name")?,
    family_name: s.get("familyName")?,
    web_id:      None,
  })
}

fn membership_row(s: &Solution) -> Result<MembershipRow> {
  Ok(MembershipRow {
    name:        s.get("name")?,
    family_name: s.get("familyName")?,
    list_uri:    s.get("listURI")?,
    list_name:   s.get("listName")?,
    tracking_nb: s.get("trackingNb")?,
  })
}
