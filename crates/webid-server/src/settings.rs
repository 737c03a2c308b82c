//! Runtime server configuration.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::Context as _;
use serde::Deserialize;
use webid_sparql::{DEFAULT_GRAPH, SparqlConfig};

/// Deserialised from `config.toml` and `WEBID_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:                 String,
  #[serde(default = "default_port")]
  pub port:                 u16,
  #[serde(default = "default_store_path")]
  pub store_path:           PathBuf,
  /// The SPARQL endpoint serving the election dataset.
  pub sparql_url:           String,
  /// `default-graph-uri` sent with every query; empty to omit it.
  #[serde(default = "default_graph")]
  pub default_graph:        String,
  #[serde(default = "default_timeout")]
  pub request_timeout_secs: u64,
}

fn default_host() -> String { "0.0.0.0".to_owned() }

fn default_port() -> u16 { 8000 }

fn default_store_path() -> PathBuf { PathBuf::from("webids.sqlite3") }

fn default_graph() -> String { DEFAULT_GRAPH.to_owned() }

fn default_timeout() -> u64 { 30 }

impl ServerConfig {
  /// Layer the optional file at `path` under `WEBID_*` environment variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("WEBID"))
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn sparql(&self) -> SparqlConfig {
    SparqlConfig {
      endpoint:      self.sparql_url.clone(),
      default_graph: Some(self.default_graph.clone()).filter(|g| !g.is_empty()),
      timeout:       Duration::from_secs(self.request_timeout_secs),
    }
  }

  /// The store path with a leading `~` expanded to the user's home directory.
  pub fn store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
