//! [`SqliteStore`]: the SQLite implementation of [`IdentityStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{ErrorCode, OptionalExtension as _};
use tracing::debug;
use webid_core::{
  record::{Insertion, NewWebId, WebIdRecord},
  store::IdentityStore,
};

use crate::{
  Error, Result,
  encode::{RawWebId, encode_dt},
  schema::{SCHEMA, VERSION},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A WebID link store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Every call
/// runs on the connection's own thread, so no handle is ever shared between
/// requests mid-statement.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    let version: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
      })
      .await?;

    if version > VERSION {
      return Err(Error::SchemaVersion(version));
    }

    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── IdentityStore impl ──────────────────────────────────────────────────────

impl IdentityStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, input: NewWebId) -> Result<Insertion> {
    let date_created = Utc::now();
    let at_str = encode_dt(date_created);
    let uri = input.uri.clone();
    let lblod_id = input.lblod_id.clone();

    // `None` when a UNIQUE constraint rejected the row.
    let id: Option<i64> = self
      .conn
      .call(move |conn| {
        match conn.execute(
          "INSERT INTO webids (uri, lblod_id, date_created) VALUES (?1, ?2, ?3)",
          rusqlite::params![uri, lblod_id, at_str],
        ) {
          Ok(_) => Ok(Some(conn.last_insert_rowid())),
          Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == ErrorCode::ConstraintViolation =>
          {
            Ok(None)
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    let Some(id) = id else {
      debug!(uri = %input.uri, lblod_id = %input.lblod_id, "uniqueness constraint hit");
      return Ok(Insertion::Duplicate);
    };

    Ok(Insertion::Created(WebIdRecord {
      id,
      uri: input.uri,
      lblod_id: input.lblod_id,
      date_created,
    }))
  }

  async fn list(&self) -> Result<Vec<WebIdRecord>> {
    let raws: Vec<RawWebId> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM webids ORDER BY id",
          RawWebId::COLUMNS
        ))?;
        let rows = stmt
          .query_map([], RawWebId::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawWebId::into_record).collect()
  }

  async fn find_by_lblod_id(&self, lblod_id: &str) -> Result<Option<WebIdRecord>> {
    let lblod_id = lblod_id.to_owned();

    let raw: Option<RawWebId> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {} FROM webids WHERE lblod_id = ?1", RawWebId::COLUMNS),
              rusqlite::params![lblod_id],
              RawWebId::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawWebId::into_record).transpose()
  }
}
