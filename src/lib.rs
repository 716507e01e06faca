//! egrid_indexer library: CSV-to-Elasticsearch ingest pipeline.
//!
//! Fetches the eGRID plant-year CSV over HTTP, decodes fixed-position
//! fields into typed records, and upserts each record into an
//! Elasticsearch-compatible index keyed by `"{year}_{code}"`, creating the
//! index when it does not exist.
//!
//! # Example
//!
//! ```no_run
//! use egrid_indexer::{run_ingest, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file_url: "http://localhost/egrid2018_data.csv".into(),
//!     index: "plantyear".into(),
//!     ..Default::default()
//! };
//!
//! let report = run_ingest(config).await?;
//! println!("Indexed {} of {} records", report.indexed, report.records_decoded);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
pub mod record;
pub mod store;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    DecodeError, ErrorType, FetchError, IngestStats, InitializationError, StoreError, WarningType,
};
pub use run::{run_ingest, IngestReport};

// Internal run module (contains the main ingest pipeline)
mod run {
    use std::sync::Arc;

    use anyhow::{bail, Context, Result};
    use log::{info, warn};

    use crate::app::print_ingest_statistics;
    use crate::config::Config;
    use crate::error_handling::{ErrorType, IngestStats};
    use crate::fetch::fetch_records;
    use crate::initialization::init_client;
    use crate::record::RecordBatch;
    use crate::store::{index_batch, EsClient};

    /// Results of a completed ingest run.
    #[derive(Debug, Clone)]
    pub struct IngestReport {
        /// Records decoded from the source file
        pub records_decoded: usize,
        /// Rows skipped because they could not be decoded
        pub rows_skipped: usize,
        /// Numeric fields that failed to parse and were stored as zero
        pub numeric_fields_defaulted: usize,
        /// Documents successfully indexed
        pub indexed: usize,
        /// Documents that failed to index
        pub failed: usize,
        /// Target index name
        pub index: String,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the ingest pipeline with the provided configuration.
    ///
    /// This is the main entry point for the library: fetch the CSV, decode
    /// its rows, probe the document store, ensure the target index exists,
    /// and upsert every record.
    ///
    /// Row-level decode failures are skipped and counted; per-document
    /// write failures are collected and reported. With `config.fail_fast`
    /// the first failure of either kind aborts the run instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the source file cannot be retrieved (including
    /// any non-200 response), if the document store is unreachable, if the
    /// index existence probe or creation fails, if every data row failed to
    /// decode, or - with `fail_fast` - on the first row or write failure.
    pub async fn run_ingest(config: Config) -> Result<IngestReport> {
        let start_time = std::time::Instant::now();
        let stats = Arc::new(IngestStats::new());

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        // Fetch and decode the full batch before touching the store, so a
        // bad source URL aborts with no store-side effects.
        let scanner = fetch_records(&client, &config.file_url, Arc::clone(&stats))
            .await
            .context("Failed to retrieve source file")?;

        let mut records = RecordBatch::new();
        let mut rows_skipped = 0usize;
        for result in scanner {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    stats.increment_error(ErrorType::RowDecodeError);
                    if config.fail_fast {
                        return Err(anyhow::Error::new(e).context("Failed to decode row"));
                    }
                    warn!("Skipping row: {}", e);
                    rows_skipped += 1;
                }
            }
        }
        info!("Record count: {}", records.len());

        if records.is_empty() && rows_skipped > 0 {
            bail!("All {} data rows failed to decode", rows_skipped);
        }

        let store = EsClient::new(Arc::clone(&client), &config.elastic_url);
        store
            .ping()
            .await
            .context("Failed to reach document store")?;
        store
            .ensure_index(&config.index)
            .await
            .context("Failed to ensure target index")?;

        let records_decoded = records.len();
        let report = index_batch(
            &store,
            &config.index,
            records,
            config.max_concurrency,
            config.fail_fast,
            &stats,
        )
        .await?;
        info!("Completed adding records");

        print_ingest_statistics(&stats);

        Ok(IngestReport {
            records_decoded,
            rows_skipped,
            numeric_fields_defaulted: stats
                .get_warning_count(crate::error_handling::WarningType::NumericFieldDefaulted),
            indexed: report.succeeded,
            failed: report.failed,
            index: config.index,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
