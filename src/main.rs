//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `egrid_indexer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use egrid_indexer::initialization::init_logger_with;
use egrid_indexer::{run_ingest, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_ingest(config).await {
        Ok(report) => {
            println!(
                "Indexed {} of {} record{} into '{}' ({} write failure{}, {} row{} skipped) in {:.1}s",
                report.indexed,
                report.records_decoded,
                if report.records_decoded == 1 { "" } else { "s" },
                report.index,
                report.failed,
                if report.failed == 1 { "" } else { "s" },
                report.rows_skipped,
                if report.rows_skipped == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            if report.numeric_fields_defaulted > 0 {
                println!(
                    "Note: {} numeric field(s) failed to parse and were stored as zero",
                    report.numeric_fields_defaulted
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("egrid_indexer error: {:#}", e);
            process::exit(1);
        }
    }
}
