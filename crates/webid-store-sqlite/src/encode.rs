//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings.

use chrono::{DateTime, Utc};
use webid_core::record::WebIdRecord;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `webids` row.
pub struct RawWebId {
  pub id:           i64,
  pub uri:          String,
  pub lblod_id:     String,
  pub date_created: String,
}

impl RawWebId {
  pub const COLUMNS: &'static str = "id, uri, lblod_id, date_created";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      uri:          row.get(1)?,
      lblod_id:     row.get(2)?,
      date_created: row.get(3)?,
    })
  }

  pub fn into_record(self) -> Result<WebIdRecord> {
    Ok(WebIdRecord {
      id:           self.id,
      uri:          self.uri,
      lblod_id:     self.lblod_id,
      date_created: decode_dt(&self.date_created)?,
    })
  }
}
