//! HTTP retrieval of the source CSV file.

use std::io::Cursor;
use std::sync::Arc;

use log::info;
use reqwest::StatusCode;

use crate::error_handling::{FetchError, IngestStats};
use crate::record::PlantScanner;

/// Fetches the CSV file at `file_url` and returns a scanner over its rows.
///
/// The run accumulates the whole batch before indexing, so the body is
/// buffered in full rather than streamed.
///
/// # Errors
///
/// Returns `FetchError::Request` on a network failure and
/// `FetchError::BadStatus` for any non-200 response; in both cases the run
/// aborts before any document-store interaction.
pub async fn fetch_records(
    client: &reqwest::Client,
    file_url: &str,
    stats: Arc<IngestStats>,
) -> Result<PlantScanner<Cursor<Vec<u8>>>, FetchError> {
    let response = client.get(file_url).send().await?;

    if response.status() != StatusCode::OK {
        return Err(FetchError::BadStatus {
            url: file_url.to_string(),
            status: response.status(),
        });
    }

    let body = response.bytes().await?.to_vec();
    info!("Fetched {} bytes from {}", body.len(), file_url);

    Ok(PlantScanner::new(Cursor::new(body), stats))
}
