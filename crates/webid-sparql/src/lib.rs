//! SPARQL-backed implementation of [`webid_core::dataset::ElectionDataset`].
//!
//! [`SparqlClient`] sends fixed queries to a single endpoint over HTTP GET and
//! decodes the SPARQL 1.1 JSON results format; [`SparqlDataset`] turns the
//! decoded solutions into typed rows.

mod client;
mod dataset;
mod query;
mod results;

pub mod error;

pub use client::{DEFAULT_GRAPH, SparqlClient, SparqlConfig};
pub use dataset::SparqlDataset;
pub use error::{Error, Result};
