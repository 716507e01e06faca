//! Lazy record scanning over a CSV byte stream.

use std::io::Read;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::error_handling::{DecodeError, IngestStats};
use crate::record::{decode_row, PlantRecord};

/// A lazy, finite, one-pass producer of decoded `PlantRecord`s.
///
/// Wraps any readable byte stream, unconditionally discards the first two
/// rows (the source sheet ships a header plus a subheader), then yields one
/// decode result per remaining row. Row widths are not enforced by the CSV
/// reader; short rows surface as `DecodeError::RowTooShort` from the decoder.
pub struct PlantScanner<R: Read> {
    rows: StringRecordsIntoIter<R>,
    row_number: u64,
    stats: Arc<IngestStats>,
}

impl<R: Read> PlantScanner<R> {
    /// Creates a scanner positioned at the first data row.
    pub fn new(reader: R, stats: Arc<IngestStats>) -> Self {
        let mut rows = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        // Skip the header, and the subheader too. A malformed leading row
        // is discarded just the same.
        let _ = rows.next();
        let _ = rows.next();

        PlantScanner {
            rows,
            row_number: 0,
            stats,
        }
    }
}

impl<R: Read> Iterator for PlantScanner<R> {
    type Item = Result<PlantRecord, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row: Result<StringRecord, csv::Error> = self.rows.next()?;
        self.row_number += 1;
        Some(match row {
            Ok(row) => decode_row(&row, self.row_number, &self.stats),
            Err(e) => Err(DecodeError::Csv(e)),
        })
    }
}
