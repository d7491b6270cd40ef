//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Record Types** - Mock book records shown in the results table
//! - **Log Types** - Timestamped activity history
//! - **Error Types** - Frontend error handling

use thiserror::Error;

use crate::config::MAX_LOG_ENTRIES;
use crate::state::Phase;

// =============================================================================
// Record Types
// =============================================================================

/// A single "scraped" book.
///
/// Every record comes from the fixture in [`crate::fixtures`]; nothing is
/// ever fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookRecord {
    /// Stable row key
    pub id: &'static str,
    /// Book title
    pub title: &'static str,
    /// Display price, currency included
    pub price: &'static str,
    /// Product page
    pub link: &'static str,
}

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
    /// Debug message (verbose)
    Debug,
}

impl LogLevel {
    /// Level used for a status message emitted while in `phase`.
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Idle => LogLevel::Debug,
            Phase::Running => LogLevel::Info,
            Phase::Done => LogLevel::Success,
            Phase::Failed => LogLevel::Error,
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
            LogLevel::Debug => "log-debug",
        }
    }
}

/// A single entry of the activity log.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Entry stamped with the current local time.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Append `entry`, dropping the oldest entries beyond [`MAX_LOG_ENTRIES`].
pub fn push_capped(logs: &mut Vec<LogEntry>, entry: LogEntry) {
    logs.push(entry);
    if logs.len() > MAX_LOG_ENTRIES {
        let overflow = logs.len() - MAX_LOG_ENTRIES;
        logs.drain(..overflow);
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ScrapeError {
    /// The end-of-run dice roll came up above the failure threshold.
    #[error("Simulated scraping failure (draw {draw:.3})")]
    SimulatedFailure { draw: f64 },

    /// An action was requested from a phase that does not offer it.
    #[error("Cannot {action} while {from}")]
    InvalidTransition { from: Phase, action: &'static str },

    /// Collected records could not be written as CSV.
    #[error("CSV export failed: {0}")]
    Export(String),
}

impl From<csv::Error> for ScrapeError {
    fn from(err: csv::Error) -> Self {
        ScrapeError::Export(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_capped_drops_oldest() {
        let mut logs = Vec::new();
        for i in 0..MAX_LOG_ENTRIES + 3 {
            push_capped(&mut logs, LogEntry::now(LogLevel::Info, format!("entry {}", i)));
        }

        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "entry 3");
        assert_eq!(logs.last().unwrap().message, format!("entry {}", MAX_LOG_ENTRIES + 2));
    }

    #[test]
    fn test_log_level_follows_phase() {
        assert_eq!(LogLevel::for_phase(Phase::Running), LogLevel::Info);
        assert_eq!(LogLevel::for_phase(Phase::Done), LogLevel::Success);
        assert_eq!(LogLevel::for_phase(Phase::Failed), LogLevel::Error);
        assert_eq!(LogLevel::Error.css_class(), "log-error");
    }

    #[test]
    fn test_timestamp_format() {
        let entry = LogEntry::now(LogLevel::Debug, "tick");
        assert_eq!(entry.timestamp.len(), 8);
        assert_eq!(entry.timestamp.matches(':').count(), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = ScrapeError::InvalidTransition { from: Phase::Running, action: "reset" };
        assert_eq!(err.to_string(), "Cannot reset while running");

        let err = ScrapeError::SimulatedFailure { draw: 0.97 };
        assert_eq!(err.to_string(), "Simulated scraping failure (draw 0.970)");
    }
}
