//! UI Components for the Book Scraper application.
//!
//! Every component reads the run-state signal; only the start and reset
//! handlers in [`start`] write to it.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`StartPanel`] - Start button (idle only)
//! - [`ProgressPanel`] - Progress bar and source grid while running
//! - [`StatusBanner`] - Current status message
//! - [`ResultsTable`] - Collected records, reset and CSV export
//! - [`ErrorPanel`] - Failure message with retry
//! - [`ActivityLog`] - Timestamped status history

mod hero;
mod start;
mod progress;
mod status;
mod results;
mod failure;
mod footer;
mod logs;

pub use hero::*;
pub use start::*;
pub use progress::*;
pub use status::*;
pub use results::*;
pub use failure::*;
pub use footer::*;
pub use logs::*;
