//! Core types and trait definitions for the WebID ↔ lblod linker.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! local identity store and the external election dataset are both reached
//! through traits ([`store::IdentityStore`], [`dataset::ElectionDataset`]);
//! the two operations that span both systems, registration and candidate
//! enrichment, live here and are generic over them.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod dataset;
pub mod enrich;
pub mod error;
pub mod record;
pub mod registrar;
pub mod row;
pub mod store;
pub mod term;

pub use error::{Error, Result};

#[cfg(test)]
mod testing;
