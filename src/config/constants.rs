//! Configuration constants used as CLI defaults.

/// Default base address for the Elasticsearch service.
pub const DEFAULT_ELASTIC_URL: &str = "http://localhost:9200";

/// Default index name for plant-year documents.
pub const DEFAULT_INDEX: &str = "plantyear";

/// Default number of in-flight document writes.
///
/// The upstream Elasticsearch bulk thread pool handles small bursts fine;
/// anything much higher mostly queues on the server side.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Default per-request HTTP timeout in seconds.
///
/// The source CSV is tens of megabytes, so this is deliberately more generous
/// than a typical API timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How many document writes between progress log lines.
pub const LOGGING_INTERVAL: usize = 500;
