//! Async HTTP client for a single SPARQL endpoint.

use std::time::Duration;

use reqwest::{Client, header};
use tracing::debug;

use crate::{
  Error, Result,
  results::{ResultsDocument, Solution},
};

/// The graph the election data lives in on the public endpoint.
pub const DEFAULT_GRAPH: &str = "http://api.sep.osoc.be/mandatendatabank";

/// Largest error-body excerpt kept in [`Error::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Connection settings for the SPARQL endpoint.
#[derive(Debug, Clone)]
pub struct SparqlConfig {
  pub endpoint:      String,
  /// Sent as `default-graph-uri`; omitted when `None`.
  pub default_graph: Option<String>,
  pub timeout:       Duration,
}

impl SparqlConfig {
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self {
      endpoint:      endpoint.into(),
      default_graph: Some(DEFAULT_GRAPH.to_owned()),
      timeout:       Duration::from_secs(30),
    }
  }
}

/// Sends queries to the endpoint as `GET ?query=...&format=json`.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based. Failures
/// are never retried.
#[derive(Clone)]
pub struct SparqlClient {
  client: Client,
  config: SparqlConfig,
}

impl SparqlClient {
  pub fn new(config: SparqlConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  pub fn endpoint(&self) -> &str { &self.config.endpoint }

  /// Run an ASK query.
  pub async fn ask(&self, query: &str) -> Result<bool> {
    self.send(query).await?.into_boolean()
  }

  /// Run a SELECT query and return its solutions in endpoint order.
  pub async fn select(&self, query: &str) -> Result<Vec<Solution>> {
    self.send(query).await?.into_solutions()
  }

  async fn send(&self, query: &str) -> Result<ResultsDocument> {
    debug!(endpoint = %self.config.endpoint, %query, "sparql query");

    let mut params = vec![("query", query), ("format", "json")];
    if let Some(graph) = &self.config.default_graph {
      params.push(("default-graph-uri", graph.as_str()));
    }

    let resp = self
      .client
      .get(&self.config.endpoint)
      .header(header::ACCEPT, "application/sparql-results+json")
      .query(&params)
      .send()
      .await?;

    let status = resp.status();
    let body = resp.bytes().await?;
    if !status.is_success() {
      let mut body = String::from_utf8_lossy(&body).into_owned();
      if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
          cut -= 1;
        }
        body.truncate(cut);
      }
      return Err(Error::Status { status, body });
    }

    ResultsDocument::parse(&body)
  }
}
