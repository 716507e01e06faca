//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_ELASTIC_URL, DEFAULT_INDEX, DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// This struct is generated by `clap` from the field attributes for CLI use,
/// and implements `Default` so it can be constructed programmatically when
/// the crate is used as a library.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// egrid_indexer https://example.com/egrid2018_data.csv
///
/// # Custom Elasticsearch address and index
/// egrid_indexer https://example.com/egrid2018_data.csv \
///     --elastic-url http://es.internal:9200 --index plantyear_2018
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "egrid_indexer",
    about = "Fetches the eGRID plant-year CSV and indexes each record into Elasticsearch."
)]
pub struct Config {
    /// URL for the CSV data file
    #[arg(value_parser)]
    pub file_url: String,

    /// Base URL for the Elasticsearch service
    #[arg(long, default_value = DEFAULT_ELASTIC_URL)]
    pub elastic_url: String,

    /// Target index name
    #[arg(long, default_value = DEFAULT_INDEX)]
    pub index: String,

    /// Maximum concurrent document writes
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Abort on the first decode or write failure instead of
    /// skip-and-report (legacy behavior)
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_url: String::new(),
            elastic_url: DEFAULT_ELASTIC_URL.to_string(),
            index: DEFAULT_INDEX.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            fail_fast: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
