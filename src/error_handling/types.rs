//! Error type definitions.
//!
//! Each failure domain from the pipeline gets its own error enum:
//! initialization, file retrieval, row decoding, and document-store
//! operations.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for retrieving the source CSV file.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure while fetching the file.
    #[error("File request error: {0}")]
    Request(#[from] ReqwestError),

    /// The server answered with a non-200 status.
    #[error("File not found: {url} (HTTP {status})")]
    BadStatus {
        /// URL that was requested.
        url: String,
        /// Status returned by the server.
        status: StatusCode,
    },
}

/// Error types for decoding one CSV row into a record.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The underlying CSV reader failed to produce a row.
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// The row has fewer fields than the highest positional offset.
    #[error("Row {row} has {len} fields, expected at least {expected}")]
    RowTooShort {
        /// 1-based data row number (header rows excluded).
        row: u64,
        /// Number of fields in the row.
        len: usize,
        /// Minimum number of fields the positional schema needs.
        expected: usize,
    },
}

/// Error types for document-store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Network-level failure talking to the store.
    #[error("Store request error: {0}")]
    Request(#[from] ReqwestError),

    /// The connectivity/info probe was rejected.
    #[error("Store info probe failed with HTTP {status}")]
    Ping {
        /// Status returned by the store.
        status: StatusCode,
    },

    /// The existence probe returned something other than "found" or
    /// "not found".
    #[error("Index existence probe for '{index}' failed with HTTP {status}")]
    Probe {
        /// Index that was probed.
        index: String,
        /// Status returned by the store.
        status: StatusCode,
    },

    /// Index creation was rejected.
    #[error("Creating index '{index}' failed with HTTP {status}")]
    CreateIndex {
        /// Index that was being created.
        index: String,
        /// Status returned by the store.
        status: StatusCode,
    },

    /// A single document upsert was rejected.
    #[error("Indexing document '{id}' failed with HTTP {status}")]
    Write {
        /// Document identifier of the failed upsert.
        id: String,
        /// Status returned by the store.
        status: StatusCode,
    },
}

/// Types of errors that can occur during an ingest run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// A row could not be decoded and was skipped.
    RowDecodeError,
    /// A document upsert failed.
    DocumentWriteError,
}

/// Types of warnings that can occur during an ingest run.
///
/// Warnings track degraded data that does not reject a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// A numeric field failed to parse and was stored as zero.
    NumericFieldDefaulted,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::RowDecodeError => "Row decode error",
            ErrorType::DocumentWriteError => "Document write error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::NumericFieldDefaulted => "Numeric field defaulted to zero",
        }
    }
}
