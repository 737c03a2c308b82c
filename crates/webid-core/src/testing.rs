//! In-memory fakes of the two backends, for unit tests.

use std::{
  io,
  sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
  },
};

use chrono::Utc;

use crate::{
  dataset::ElectionDataset,
  record::{Insertion, NewWebId, WebIdRecord},
  row::{CandidateListRow, CandidateRow, CityRow, MembershipRow},
  store::IdentityStore,
};

// ─── Store ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
  records: Mutex<Vec<WebIdRecord>>,
  broken:  Mutex<Vec<String>>,
}

impl MemoryStore {
  pub fn records(&self) -> Vec<WebIdRecord> { self.records.lock().unwrap().clone() }

  pub fn seed(&self, input: NewWebId) -> WebIdRecord {
    match self.insert_now(input) {
      Insertion::Created(record) => record,
      Insertion::Duplicate => panic!("seeded a duplicate record"),
    }
  }

  /// Make every lookup of `lblod_id` fail with an I/O error.
  pub fn fail_lookups_for(&self, lblod_id: &str) {
    self.broken.lock().unwrap().push(lblod_id.to_owned());
  }

  fn insert_now(&self, input: NewWebId) -> Insertion {
    let mut records = self.records.lock().unwrap();
    if records
      .iter()
      .any(|r| r.uri == input.uri || r.lblod_id == input.lblod_id)
    {
      return Insertion::Duplicate;
    }
    let record = WebIdRecord {
      id:           records.len() as i64 + 1,
      uri:          input.uri,
      lblod_id:     input.lblod_id,
      date_created: Utc::now(),
    };
    records.push(record.clone());
    Insertion::Created(record)
  }
}

impl IdentityStore for MemoryStore {
  type Error = io::Error;

  async fn insert(&self, input: NewWebId) -> io::Result<Insertion> {
    Ok(self.insert_now(input))
  }

  async fn list(&self) -> io::Result<Vec<WebIdRecord>> { Ok(self.records()) }

  async fn find_by_lblod_id(&self, lblod_id: &str) -> io::Result<Option<WebIdRecord>> {
    if self.broken.lock().unwrap().iter().any(|b| b == lblod_id) {
      return Err(io::Error::other("lookup failed"));
    }
    Ok(self.records().into_iter().find(|r| r.lblod_id == lblod_id))
  }
}

// ─── Dataset ─────────────────────────────────────────────────────────────────

/// A dataset that knows a fixed set of persons and nothing else.
#[derive(Default)]
pub struct StaticDataset {
  persons:     Vec<String>,
  unreachable: bool,
  asks:        AtomicUsize,
}

impl StaticDataset {
  pub fn with_persons(persons: &[&str]) -> Self {
    Self {
      persons: persons.iter().map(|p| (*p).to_owned()).collect(),
      ..Self::default()
    }
  }

  pub fn unreachable() -> Self { Self { unreachable: true, ..Self::default() } }

  pub fn ask_count(&self) -> usize { self.asks.load(Ordering::SeqCst) }

  fn check(&self) -> io::Result<()> {
    if self.unreachable {
      Err(io::Error::new(io::ErrorKind::ConnectionRefused, "endpoint down"))
    } else {
      Ok(())
    }
  }
}

impl ElectionDataset for StaticDataset {
  type Error = io::Error;

  async fn person_exists(&self, lblod_id: &str) -> io::Result<bool> {
    self.asks.fetch_add(1, Ordering::SeqCst);
    self.check()?;
    Ok(self.persons.iter().any(|p| p == lblod_id))
  }

  async fn list_cities(&self) -> io::Result<Vec<CityRow>> {
    self.check()?;
    Ok(Vec::new())
  }

  async fn list_candidate_lists(&self, _city_uri: &str) -> io::Result<Vec<CandidateListRow>> {
    self.check()?;
    Ok(Vec::new())
  }

  async fn list_candidates(&self, _list_uri: &str) -> io::Result<Vec<CandidateRow>> {
    self.check()?;
    Ok(Vec::new())
  }

  async fn person_memberships(&self, _person_uri: &str) -> io::Result<Vec<MembershipRow>> {
    self.check()?;
    Ok(Vec::new())
  }
}
