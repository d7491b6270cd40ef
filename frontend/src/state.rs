//! Run state shared between the sequencer and the view.
//!
//! The sequencer is the only writer. Components receive cloned snapshots
//! through a signal and derive everything they display from them.

use std::fmt;

use crate::fixtures::{SOURCES, SOURCE_COUNT};
use crate::types::{AppResult, BookRecord, ScrapeError};

// =============================================================================
// Phase
// =============================================================================

/// Where a run currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing started yet, or reset after a run.
    #[default]
    Idle,
    /// The sequencer is walking the sources.
    Running,
    /// All sources processed and the final draw passed.
    Done,
    /// The final draw came up above the failure threshold.
    Failed,
}

impl Phase {
    /// Terminal phases are the only ones a reset is offered from.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Done | Phase::Failed)
    }

    /// Icon shown next to the status message.
    pub fn icon(&self) -> &'static str {
        match self {
            Phase::Idle => "",
            Phase::Running => "🔍",
            Phase::Done => "✅",
            Phase::Failed => "⚠️",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Done => "done",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Source grid
// =============================================================================

/// How a tile of the source grid is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceStatus {
    /// Being scraped right now.
    Active,
    /// Its record is already in the table.
    Completed,
    /// Will be picked up next.
    Next,
    /// Not reached yet.
    Pending,
}

impl SourceStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            SourceStatus::Active => "source-tile active",
            SourceStatus::Completed => "source-tile completed",
            SourceStatus::Next => "source-tile next",
            SourceStatus::Pending => "source-tile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SourceStatus::Active => "🔍",
            SourceStatus::Completed => "✔",
            SourceStatus::Next | SourceStatus::Pending => "🌐",
        }
    }
}

// =============================================================================
// Run state
// =============================================================================

/// Snapshot of one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunState {
    pub phase: Phase,
    /// Replaced wholesale at every transition.
    pub message: String,
    /// Percentage in `0..=100`, never decreasing within a run.
    pub progress: u8,
    pub active_source: Option<&'static str>,
    /// True only while the active source is in its extraction step.
    pub extracting: bool,
    pub collected: Vec<BookRecord>,
    /// Always `collected.len()`.
    pub collected_count: usize,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the idle defaults after a finished run.
    ///
    /// Rejected while a run is in flight; a no-op when already idle.
    pub fn reset(&mut self) -> AppResult<()> {
        if self.phase == Phase::Running {
            return Err(ScrapeError::InvalidTransition {
                from: self.phase,
                action: "reset",
            });
        }
        *self = Self::default();
        Ok(())
    }

    /// Grid status of source `index`.
    pub fn source_status(&self, index: usize) -> SourceStatus {
        let is_active = SOURCES
            .get(index)
            .map_or(false, |source| self.active_source == Some(*source));

        if is_active {
            SourceStatus::Active
        } else if self.collected_count > index {
            SourceStatus::Completed
        } else if self.collected_count == index {
            SourceStatus::Next
        } else {
            SourceStatus::Pending
        }
    }

    /// Skeleton rows shown below the collected ones while running.
    pub fn placeholder_rows(&self) -> usize {
        match self.phase {
            Phase::Running => SOURCE_COUNT.saturating_sub(self.collected.len()),
            _ => 0,
        }
    }

    /// At least one record has landed; drives the data-flow strip.
    pub fn has_records(&self) -> bool {
        self.collected_count > 0
    }

    /// Whether the results table is on screen.
    pub fn shows_results(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Done) && !self.collected.is_empty()
    }

    /// Collected records paired with the source they came from.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &BookRecord)> + '_ {
        SOURCES.iter().copied().zip(self.collected.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::MOCK_BOOKS;

    fn mid_run(collected: usize, active: Option<usize>) -> RunState {
        RunState {
            phase: Phase::Running,
            message: "Scraping...".to_string(),
            progress: 20,
            active_source: active.map(|i| SOURCES[i]),
            extracting: false,
            collected: MOCK_BOOKS[..collected].to_vec(),
            collected_count: collected,
        }
    }

    #[test]
    fn test_reset_from_terminal_phases() {
        for phase in [Phase::Done, Phase::Failed] {
            let mut state = mid_run(5, None);
            state.phase = phase;
            state.progress = 90;
            state.extracting = true;

            state.reset().unwrap();
            assert_eq!(state, RunState::default());
        }
    }

    #[test]
    fn test_reset_rejected_while_running() {
        let mut state = mid_run(2, Some(2));
        let before = state.clone();

        let err = state.reset().unwrap_err();
        assert_eq!(
            err,
            ScrapeError::InvalidTransition { from: Phase::Running, action: "reset" }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_from_idle_is_noop() {
        let mut state = RunState::new();
        state.reset().unwrap();
        assert_eq!(state, RunState::default());
    }

    #[test]
    fn test_source_status_grid() {
        // Two records in, third source being scraped.
        let state = mid_run(2, Some(2));
        assert_eq!(state.source_status(0), SourceStatus::Completed);
        assert_eq!(state.source_status(1), SourceStatus::Completed);
        assert_eq!(state.source_status(2), SourceStatus::Active);
        assert_eq!(state.source_status(3), SourceStatus::Pending);
        assert_eq!(state.source_status(4), SourceStatus::Pending);

        // Between sources nothing is active and the next one is highlighted.
        let state = mid_run(2, None);
        assert_eq!(state.source_status(2), SourceStatus::Next);
        assert_eq!(state.source_status(3), SourceStatus::Pending);
    }

    #[test]
    fn test_placeholder_rows() {
        assert_eq!(mid_run(0, Some(0)).placeholder_rows(), 5);
        assert_eq!(mid_run(3, None).placeholder_rows(), 2);

        let mut done = mid_run(5, None);
        done.phase = Phase::Done;
        assert_eq!(done.placeholder_rows(), 0);
    }

    #[test]
    fn test_shows_results() {
        assert!(!RunState::new().shows_results());
        assert!(!mid_run(0, Some(0)).shows_results());
        assert!(mid_run(1, None).shows_results());

        let mut failed = mid_run(5, None);
        failed.phase = Phase::Failed;
        assert!(!failed.shows_results());
    }

    #[test]
    fn test_has_records() {
        assert!(!RunState::new().has_records());
        assert!(!mid_run(0, Some(0)).has_records());
        assert!(mid_run(1, None).has_records());
    }

    #[test]
    fn test_rows_pair_sources_with_records() {
        let state = mid_run(3, None);
        let rows: Vec<_> = state.rows().map(|(source, book)| (source, book.title)).collect();

        assert_eq!(
            rows,
            vec![
                ("bookstore.com", "The Great Gatsby"),
                ("amazon.com", "To Kill a Mockingbird"),
                ("goodreads.com", "1984"),
            ]
        );
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Idle.to_string(), "idle");
        assert_eq!(Phase::Failed.to_string(), "failed");
        assert!(Phase::Done.is_terminal());
        assert!(!Phase::Running.is_terminal());
    }
}
