//! SQL schema for the WebID SQLite store.
//!
//! Executed once at connection startup and gated on `PRAGMA user_version`.

/// The schema version written by [`SCHEMA`].
pub const VERSION: i64 = 1;

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Links are append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS webids (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    uri          TEXT NOT NULL UNIQUE,   -- WebID profile URI
    lblod_id     TEXT NOT NULL UNIQUE,   -- person URI in the election dataset
    date_created TEXT NOT NULL           -- ISO 8601 UTC; server-assigned
);

PRAGMA user_version = 1;
";
