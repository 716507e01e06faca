//! Progress logging and end-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, IngestStats, WarningType};

/// Logs progress information about document indexing.
///
/// # Arguments
///
/// * `start_time` - When indexing started
/// * `completed` - Documents indexed so far
/// * `total` - Documents in the batch
pub fn log_progress(start_time: std::time::Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Indexed {}/{} documents in {:.2} seconds (~{:.2} docs/sec)",
        completed, total, elapsed_secs, rate
    );
}

/// Prints error and warning counters accumulated during the run.
///
/// Only non-zero counters are reported; a clean run logs a single
/// confirmation line.
pub fn print_ingest_statistics(stats: &IngestStats) {
    if stats.total_errors() == 0 && stats.total_warnings() == 0 {
        info!("Run completed without errors or warnings");
        return;
    }

    for error_type in ErrorType::iter() {
        let count = stats.get_error_count(error_type);
        if count > 0 {
            log::warn!("{}: {}", error_type.as_str(), count);
        }
    }
    for warning_type in WarningType::iter() {
        let count = stats.get_warning_count(warning_type);
        if count > 0 {
            log::warn!("{}: {}", warning_type.as_str(), count);
        }
    }
}
