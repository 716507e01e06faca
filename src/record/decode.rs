//! Positional decoding of one CSV row into a `PlantRecord`.
//!
//! Column positions are fixed offsets into the row, not header-driven.
//! The offsets match the eGRID plant-year sheet layout; a change in the
//! upstream column order requires updating the constants below.

use std::sync::Arc;

use csv::StringRecord;

use crate::error_handling::{DecodeError, IngestStats, WarningType};
use crate::record::PlantRecord;

// eGRID plant-year sheet column offsets.
const COL_YEAR: usize = 1;
const COL_NAME: usize = 3;
const COL_CODE: usize = 4;
const COL_NUM_GENERATORS: usize = 22;
const COL_FUEL: usize = 23;
const COL_FUEL_CATEGORY: usize = 24;
const COL_USES_COAL: usize = 25;
const COL_CAPACITY: usize = 27;
const COL_CO2_EMISSIONS: usize = 44;

/// Minimum number of fields a row must have to cover the highest offset.
pub const MIN_ROW_FIELDS: usize = COL_CO2_EMISSIONS + 1;

/// Decodes one data row into a `PlantRecord`.
///
/// * Text fields are copied as-is.
/// * The coal flag is true only for the exact string `"Yes"` (case-sensitive,
///   no trimming), matching the source sheet's convention.
/// * Numeric fields are parsed after stripping comma group separators; a
///   value that still fails to parse is stored as `0.0` and counted as a
///   `NumericFieldDefaulted` warning rather than rejecting the record.
///
/// `row_number` is the 1-based data row number (header rows excluded) and is
/// only used for error reporting.
///
/// # Errors
///
/// Returns `DecodeError::RowTooShort` if the row does not cover all
/// positional offsets.
pub fn decode_row(
    row: &StringRecord,
    row_number: u64,
    stats: &Arc<IngestStats>,
) -> Result<PlantRecord, DecodeError> {
    if row.len() < MIN_ROW_FIELDS {
        return Err(DecodeError::RowTooShort {
            row: row_number,
            len: row.len(),
            expected: MIN_ROW_FIELDS,
        });
    }

    let uses_coal = &row[COL_USES_COAL] == "Yes";

    let capacity = parse_float(&row[COL_CAPACITY]).unwrap_or_else(|| {
        stats.increment_warning(WarningType::NumericFieldDefaulted);
        log::debug!(
            "Row {}: capacity '{}' is not numeric, storing 0",
            row_number,
            &row[COL_CAPACITY]
        );
        0.0
    });

    let co2_emissions = parse_float(&row[COL_CO2_EMISSIONS]).unwrap_or_else(|| {
        stats.increment_warning(WarningType::NumericFieldDefaulted);
        log::debug!(
            "Row {}: CO2 emissions '{}' is not numeric, storing 0",
            row_number,
            &row[COL_CO2_EMISSIONS]
        );
        0.0
    });

    Ok(PlantRecord {
        name: row[COL_NAME].to_string(),
        code: row[COL_CODE].to_string(),
        year: row[COL_YEAR].to_string(),
        num_generators: row[COL_NUM_GENERATORS].to_string(),
        fuel: row[COL_FUEL].to_string(),
        fuel_category: row[COL_FUEL_CATEGORY].to_string(),
        uses_coal,
        capacity,
        co2_emissions,
    })
}

/// Parses a comma-grouped numeric string ("1,234.5") as `f32`.
///
/// Returns `None` if the comma-stripped value is not a number.
fn parse_float(field: &str) -> Option<f32> {
    field.replace(',', "").parse::<f32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a 45-field row with the positional fields filled in.
    fn sample_row(
        year: &str,
        name: &str,
        code: &str,
        coal: &str,
        capacity: &str,
        co2: &str,
    ) -> StringRecord {
        let mut fields = vec![""; MIN_ROW_FIELDS];
        fields[COL_YEAR] = year;
        fields[COL_NAME] = name;
        fields[COL_CODE] = code;
        fields[COL_NUM_GENERATORS] = "3";
        fields[COL_FUEL] = "Coal";
        fields[COL_FUEL_CATEGORY] = "Coal";
        fields[COL_USES_COAL] = coal;
        fields[COL_CAPACITY] = capacity;
        fields[COL_CO2_EMISSIONS] = co2;
        StringRecord::from(fields)
    }

    fn stats() -> Arc<IngestStats> {
        Arc::new(IngestStats::new())
    }

    #[test]
    fn test_decode_full_row() {
        let stats = stats();
        let row = sample_row("2018", "PlantA", "C1", "Yes", "1,200.50", "900,000");
        let record = decode_row(&row, 1, &stats).unwrap();

        assert_eq!(record.name, "PlantA");
        assert_eq!(record.code, "C1");
        assert_eq!(record.year, "2018");
        assert_eq!(record.num_generators, "3");
        assert_eq!(record.fuel, "Coal");
        assert_eq!(record.fuel_category, "Coal");
        assert!(record.uses_coal);
        assert_eq!(record.capacity, 1200.50);
        assert_eq!(record.co2_emissions, 900_000.0);
        assert_eq!(record.id(), "2018_C1");
        assert_eq!(stats.total_warnings(), 0);
    }

    #[test]
    fn test_coal_flag_exact_match_only() {
        let stats = stats();
        for (value, expected) in [
            ("Yes", true),
            ("yes", false),
            ("YES", false),
            ("", false),
            ("No", false),
            (" Yes", false),
        ] {
            let row = sample_row("2018", "P", "1", value, "1", "1");
            let record = decode_row(&row, 1, &stats).unwrap();
            assert_eq!(record.uses_coal, expected, "coal flag for {:?}", value);
        }
    }

    #[test]
    fn test_comma_grouped_numerics() {
        let stats = stats();
        let row = sample_row("2018", "P", "1", "No", "1,234.5", "12,345,678");
        let record = decode_row(&row, 1, &stats).unwrap();
        assert_eq!(record.capacity, 1234.5);
        assert_eq!(record.co2_emissions, 12_345_678.0);
        assert_eq!(stats.total_warnings(), 0);
    }

    #[test]
    fn test_non_numeric_defaults_to_zero_with_warning() {
        let stats = stats();
        let row = sample_row("2018", "P", "1", "No", "N/A", "confidential");
        let record = decode_row(&row, 1, &stats).unwrap();
        assert_eq!(record.capacity, 0.0);
        assert_eq!(record.co2_emissions, 0.0);
        assert_eq!(
            stats.get_warning_count(WarningType::NumericFieldDefaulted),
            2
        );
    }

    #[test]
    fn test_empty_numeric_defaults_to_zero() {
        let stats = stats();
        let row = sample_row("2018", "P", "1", "No", "", "");
        let record = decode_row(&row, 1, &stats).unwrap();
        assert_eq!(record.capacity, 0.0);
        assert_eq!(record.co2_emissions, 0.0);
    }

    #[test]
    fn test_short_row_is_an_error() {
        let stats = stats();
        let row = StringRecord::from(vec!["2018", "55", "PlantA"]);
        let err = decode_row(&row, 4, &stats).unwrap_err();
        match err {
            DecodeError::RowTooShort { row, len, expected } => {
                assert_eq!(row, 4);
                assert_eq!(len, 3);
                assert_eq!(expected, MIN_ROW_FIELDS);
            }
            other => panic!("expected RowTooShort, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("1,234.5"), Some(1234.5));
        assert_eq!(parse_float("0"), Some(0.0));
        assert_eq!(parse_float("-12.5"), Some(-12.5));
        assert_eq!(parse_float("N/A"), None);
        assert_eq!(parse_float(""), None);
    }
}
