//! Non-visual services.
//!
//! # Services
//!
//! - [`sequencer`] - The simulated scraping run and its timer seam
//! - [`export`] - CSV download of collected records

pub mod sequencer;
pub mod export;

pub use sequencer::*;
pub use export::*;
