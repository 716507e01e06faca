//! Thin Elasticsearch HTTP client.

use std::sync::Arc;

use log::info;
use reqwest::StatusCode;

use crate::error_handling::StoreError;
use crate::record::PlantRecord;

/// Client for an Elasticsearch-compatible document store.
///
/// Holds a shared `reqwest::Client`, so it is cheap to clone and safe for
/// concurrent use by multiple indexing tasks.
#[derive(Clone)]
pub struct EsClient {
    http: Arc<reqwest::Client>,
    base_url: String,
}

impl EsClient {
    /// Creates a client against the given base address,
    /// e.g. `http://localhost:9200`.
    pub fn new(http: Arc<reqwest::Client>, base_url: &str) -> Self {
        EsClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Connectivity/info probe (`GET /`).
    ///
    /// Logs the cluster info line on success.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store is unreachable or answers with a
    /// non-success status.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let response = self.http.get(&self.base_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Ping { status });
        }
        let body = response.text().await.unwrap_or_default();
        info!("Connected to document store: {}", body.trim());
        Ok(())
    }

    /// Existence probe for an index (`HEAD /{index}`).
    ///
    /// Returns `Ok(true)` for 2xx, `Ok(false)` for 404; any other status
    /// is an error.
    pub async fn index_exists(&self, index: &str) -> Result<bool, StoreError> {
        let url = format!("{}/{}", self.base_url, index);
        let response = self.http.head(&url).send().await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(StoreError::Probe {
                index: index.to_string(),
                status,
            }),
        }
    }

    /// Creates an index (`PUT /{index}`).
    pub async fn create_index(&self, index: &str) -> Result<(), StoreError> {
        let url = format!("{}/{}", self.base_url, index);
        let response = self.http.put(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::CreateIndex {
                index: index.to_string(),
                status,
            });
        }
        info!("Created index '{}'", index);
        Ok(())
    }

    /// Ensures the target index exists, creating it when the existence
    /// probe reports "not found".
    ///
    /// Any probe outcome other than found/not-found is fatal, as is a
    /// rejected creation.
    pub async fn ensure_index(&self, index: &str) -> Result<(), StoreError> {
        if self.index_exists(index).await? {
            log::debug!("Index '{}' already exists", index);
            return Ok(());
        }
        self.create_index(index).await
    }

    /// Upserts one record (`PUT /{index}/_doc/{id}`), keyed by the
    /// record's `"{year}_{code}"` identifier.
    pub async fn put_record(&self, index: &str, record: &PlantRecord) -> Result<(), StoreError> {
        let id = record.id();
        let url = format!("{}/{}/_doc/{}", self.base_url, index, id);
        let response = self.http.put(&url).json(record).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Write { id, status });
        }
        Ok(())
    }
}
