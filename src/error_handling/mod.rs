//! Error types and run statistics.
//!
//! This module defines the error taxonomy for the ingest pipeline and a
//! thread-safe statistics tracker shared across indexing tasks.

mod stats;
mod types;

pub use stats::IngestStats;
pub use types::{DecodeError, ErrorType, FetchError, InitializationError, StoreError, WarningType};
