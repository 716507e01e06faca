//! Bulk indexing of a record batch.
//!
//! Dispatches one upsert per record under a semaphore-bounded worker pool
//! and waits for the whole batch before reporting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use log::{info, warn};
use tokio::sync::Mutex;

use crate::app::log_progress;
use crate::config::LOGGING_INTERVAL;
use crate::error_handling::{ErrorType, IngestStats};
use crate::record::RecordBatch;
use crate::store::EsClient;

/// One failed document write.
#[derive(Debug)]
pub struct WriteFailure {
    /// Document identifier of the failed upsert.
    pub doc_id: String,
    /// Rendered store error.
    pub error: String,
}

/// Outcome of indexing one batch.
#[derive(Debug)]
pub struct BatchReport {
    /// Number of records submitted.
    pub total: usize,
    /// Number of successful upserts.
    pub succeeded: usize,
    /// Number of failed upserts.
    pub failed: usize,
    /// Per-record failure detail.
    pub failures: Vec<WriteFailure>,
}

/// Indexes every record in the batch, at most `max_concurrency` writes in
/// flight at a time.
///
/// Write failures are collected into the returned `BatchReport` and do not
/// stop the batch unless `fail_fast` is set, in which case the first
/// failure aborts the run.
///
/// # Errors
///
/// With `fail_fast`, returns the first write failure. Task join errors
/// (a panicked worker) are always fatal.
pub async fn index_batch(
    client: &EsClient,
    index: &str,
    records: RecordBatch,
    max_concurrency: usize,
    fail_fast: bool,
    stats: &Arc<IngestStats>,
) -> Result<BatchReport> {
    let total = records.len();
    info!("Adding {} records to index: {}", total, index);

    let semaphore = crate::initialization::init_semaphore(max_concurrency);
    let succeeded = Arc::new(AtomicUsize::new(0));
    let failures = Arc::new(Mutex::new(Vec::new()));
    let start_time = std::time::Instant::now();

    let mut tasks = FuturesUnordered::new();

    for record in records {
        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .expect("semaphore is never closed");

        let client = client.clone();
        let index = index.to_string();
        let succeeded_task = Arc::clone(&succeeded);
        let failures = Arc::clone(&failures);
        let stats = Arc::clone(stats);

        tasks.push(tokio::spawn(async move {
            let _permit = permit;

            let doc_id = record.id();
            match client.put_record(&index, &record).await {
                Ok(()) => {
                    succeeded_task.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
                Err(e) => {
                    stats.increment_error(ErrorType::DocumentWriteError);
                    warn!("Failed to index document {}: {}", doc_id, e);
                    failures.lock().await.push(WriteFailure {
                        doc_id: doc_id.clone(),
                        error: e.to_string(),
                    });
                    Err(doc_id)
                }
            }
        }));

        // Drain completed tasks as we go so the set stays small and
        // fail-fast can trip before the whole batch is submitted.
        while let Some(Some(finished)) = tasks.next().now_or_never() {
            handle_task_result(finished, fail_fast, total, &succeeded, start_time)?;
        }
    }

    while let Some(finished) = tasks.next().await {
        handle_task_result(finished, fail_fast, total, &succeeded, start_time)?;
    }

    let succeeded = succeeded.load(Ordering::SeqCst);
    let failures = Arc::try_unwrap(failures)
        .expect("all indexing tasks have completed")
        .into_inner();

    Ok(BatchReport {
        total,
        succeeded,
        failed: failures.len(),
        failures,
    })
}

/// Handles one finished worker: propagates panics, enforces fail-fast, and
/// emits periodic progress lines.
fn handle_task_result(
    finished: std::result::Result<std::result::Result<(), String>, tokio::task::JoinError>,
    fail_fast: bool,
    total: usize,
    succeeded: &Arc<AtomicUsize>,
    start_time: std::time::Instant,
) -> Result<()> {
    match finished {
        Ok(Ok(())) => {
            let done = succeeded.load(Ordering::SeqCst);
            if done > 0 && done % LOGGING_INTERVAL == 0 {
                log_progress(start_time, done, total);
            }
        }
        Ok(Err(doc_id)) => {
            if fail_fast {
                bail!("Aborting batch: failed to index document {}", doc_id);
            }
        }
        Err(join_error) => {
            bail!("Indexing task panicked: {}", join_error);
        }
    }
    Ok(())
}
