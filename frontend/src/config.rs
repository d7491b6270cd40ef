//! Application configuration.
//!
//! Centralized configuration for the Book Scraper frontend.
//! Everything here is compile-time: the simulation has no backend, no
//! environment and no persisted settings.

/// Application name, shown in the page title.
pub const APP_NAME: &str = "Book Data Scraper";

/// Delay before "connecting" once a run starts (ms).
pub const INIT_DELAY_MS: u32 = 1_000;

/// Delay spent "analyzing" each source (ms).
pub const ANALYZE_DELAY_MS: u32 = 800;

/// Delay spent "extracting" each source (ms).
pub const EXTRACT_DELAY_MS: u32 = 1_200;

/// Pause after a record lands in the table (ms).
pub const SETTLE_DELAY_MS: u32 = 600;

/// Delay spent "processing and cleaning" after the last source (ms).
pub const FINALIZE_DELAY_MS: u32 = 1_000;

/// A run fails when the final random draw is strictly above this value.
///
/// 0.95 gives roughly a 5% failure rate.
pub const FAILURE_THRESHOLD: f64 = 0.95;

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// File name offered for the CSV download.
pub const EXPORT_FILE_NAME: &str = "books.csv";
