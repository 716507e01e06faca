//! Plant-year records: the typed form of one CSV row.
//!
//! This module provides:
//! - `PlantRecord`: one observation for one (facility, year) pair
//! - `decode_row`: positional decoding of a CSV row into a record
//! - `PlantScanner`: a lazy, one-pass iterator over decoded records

mod decode;
mod scanner;
mod types;

pub use decode::{decode_row, MIN_ROW_FIELDS};
pub use scanner::PlantScanner;
pub use types::{PlantRecord, RecordBatch};
