//! Document-store client and bulk indexing.
//!
//! Talks to an Elasticsearch-compatible service over plain HTTP:
//! existence probe, index creation, per-document upsert, and an info probe.

mod client;
mod indexer;

pub use client::EsClient;
pub use indexer::{index_batch, BatchReport, WriteFailure};
