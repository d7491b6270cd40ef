//! The simulated scraping run.
//!
//! [`Sequencer::run`] walks [`SOURCES`] in order, pausing between steps and
//! appending the matching fixture record for each source. Every transition is
//! handed to an observer as a [`RunState`] snapshot; the view copies those into
//! its signal. Nothing is fetched: the only "work" is waiting.
//!
//! Both the pauses and the end-of-run dice roll are injected so a run can be
//! driven to either outcome without a browser:
//!
//! ```rust,ignore
//! let mut seq = Sequencer::new(TimerPause, rand::thread_rng());
//! spawn_local(async move {
//!     let _ = seq.run(|snapshot| set_run.set(snapshot.clone())).await;
//! });
//! ```

use std::future::Future;

use rand::Rng;

use crate::config::{
    ANALYZE_DELAY_MS, EXTRACT_DELAY_MS, FAILURE_THRESHOLD, FINALIZE_DELAY_MS, INIT_DELAY_MS,
    SETTLE_DELAY_MS,
};
use crate::fixtures::{MOCK_BOOKS, SOURCES, SOURCE_COUNT};
use crate::state::{Phase, RunState};
use crate::types::{AppResult, ScrapeError};

// =============================================================================
// Pauses
// =============================================================================

/// Something a run can wait on between steps.
pub trait Pause {
    fn pause(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Browser timer backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerPause;

impl Pause for TimerPause {
    fn pause(&self, ms: u32) -> impl Future<Output = ()> {
        gloo_timers::future::TimeoutFuture::new(ms)
    }
}

/// Delay before each step of a run, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub init_ms: u32,
    pub analyze_ms: u32,
    pub extract_ms: u32,
    pub settle_ms: u32,
    pub finalize_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            init_ms: INIT_DELAY_MS,
            analyze_ms: ANALYZE_DELAY_MS,
            extract_ms: EXTRACT_DELAY_MS,
            settle_ms: SETTLE_DELAY_MS,
            finalize_ms: FINALIZE_DELAY_MS,
        }
    }
}

impl Timings {
    /// No waiting at all.
    pub fn instant() -> Self {
        Self {
            init_ms: 0,
            analyze_ms: 0,
            extract_ms: 0,
            settle_ms: 0,
            finalize_ms: 0,
        }
    }
}

// =============================================================================
// Sequencer
// =============================================================================

/// Progress shown once `done` sources have been handled.
fn source_progress(done: usize) -> u8 {
    (20 + done * 12).min(100) as u8
}

/// Drives one run at a time and owns its [`RunState`].
pub struct Sequencer<P, R> {
    pause: P,
    rng: R,
    timings: Timings,
    state: RunState,
}

impl<P: Pause, R: Rng> Sequencer<P, R> {
    /// Sequencer with the default delays.
    pub fn new(pause: P, rng: R) -> Self {
        Self::with_timings(pause, rng, Timings::default())
    }

    pub fn with_timings(pause: P, rng: R, timings: Timings) -> Self {
        Self {
            pause,
            rng,
            timings,
            state: RunState::default(),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Play a full run, calling `publish` after every transition.
    ///
    /// Returns [`ScrapeError::SimulatedFailure`] when the run ends in
    /// [`Phase::Failed`], and [`ScrapeError::InvalidTransition`] without
    /// touching the state when the sequencer is not idle.
    pub async fn run<F>(&mut self, mut publish: F) -> AppResult<()>
    where
        F: FnMut(&RunState),
    {
        if self.state.phase != Phase::Idle {
            return Err(ScrapeError::InvalidTransition {
                from: self.state.phase,
                action: "start",
            });
        }

        log::info!("🚀 Starting simulated scrape of {} sources", SOURCE_COUNT);
        self.state = RunState {
            phase: Phase::Running,
            message: "Initializing scraper...".to_string(),
            ..RunState::default()
        };
        publish(&self.state);

        self.pause.pause(self.timings.init_ms).await;
        self.state.message = "Connecting to book sources...".to_string();
        self.state.progress = 10;
        publish(&self.state);

        for (i, (source, book)) in SOURCES.into_iter().zip(MOCK_BOOKS).enumerate() {
            log::debug!("Scraping {} ({}/{})", source, i + 1, SOURCE_COUNT);
            self.state.active_source = Some(source);
            self.state.extracting = false;
            self.state.message = format!("Scraping {}...", source);
            publish(&self.state);

            self.pause.pause(self.timings.analyze_ms).await;
            self.state.message = format!("Analyzing page structure on {}...", source);
            self.state.progress = source_progress(i);
            publish(&self.state);

            self.state.extracting = true;
            publish(&self.state);
            self.pause.pause(self.timings.extract_ms).await;
            self.state.message = format!("Extracting book data from {}...", source);
            self.state.extracting = false;

            self.state.collected.push(book);
            self.state.collected_count = self.state.collected.len();
            self.state.progress = source_progress(i + 1);
            publish(&self.state);

            self.pause.pause(self.timings.settle_ms).await;
        }

        self.state.active_source = None;
        self.state.message = "Processing and cleaning data...".to_string();
        self.state.progress = 90;
        publish(&self.state);
        self.pause.pause(self.timings.finalize_ms).await;

        // One roll per run, after collection.
        let draw: f64 = self.rng.gen();
        if draw > FAILURE_THRESHOLD {
            log::warn!("⚠️ Simulated scraping failure (draw {:.3})", draw);
            self.state.phase = Phase::Failed;
            self.state.message = "Error occurred during scraping ❌".to_string();
            publish(&self.state);
            return Err(ScrapeError::SimulatedFailure { draw });
        }

        self.state.progress = 100;
        self.state.message = "Scraping complete ✅".to_string();
        self.state.phase = Phase::Done;
        publish(&self.state);
        log::info!("✅ Collected {} records", self.state.collected_count);
        Ok(())
    }
}
