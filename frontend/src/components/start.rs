//! Start control and the run/reset handlers shared by the panels.

use leptos::*;

use crate::services::{Sequencer, TimerPause};
use crate::{push_capped, LogEntry, LogLevel, Phase, RunState, ScrapeError};

/// Spawn a run unless one already exists.
///
/// Every snapshot is copied into `set_run`, and each new status message is
/// appended to the activity log. Writes go through `try_*` so a run that
/// outlives the mounted view is harmless.
pub fn start_run(
    run: ReadSignal<RunState>,
    set_run: WriteSignal<RunState>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) {
    let phase = run.get_untracked().phase;
    if phase != Phase::Idle {
        log::warn!("Start ignored while {}", phase);
        return;
    }

    set_logs.set(Vec::new());

    spawn_local(async move {
        let mut sequencer = Sequencer::new(TimerPause, rand::thread_rng());
        let mut last_message = String::new();

        let result = sequencer
            .run(|snapshot| {
                if snapshot.message != last_message {
                    last_message.clone_from(&snapshot.message);
                    let entry = LogEntry::now(
                        LogLevel::for_phase(snapshot.phase),
                        snapshot.message.clone(),
                    );
                    let _ = set_logs.try_update(|logs| push_capped(logs, entry));
                }
                let _ = set_run.try_set(snapshot.clone());
            })
            .await;

        match result {
            Ok(()) => {}
            Err(e @ ScrapeError::SimulatedFailure { .. }) => log::warn!("{}", e),
            Err(e) => {
                log::error!("❌ {}", e);
                let _ = set_logs.try_update(|logs| {
                    push_capped(logs, LogEntry::now(LogLevel::Warning, e.to_string()))
                });
            }
        }
    });
}

/// Back to idle from `Done` or `Failed`.
pub fn reset_run(set_run: WriteSignal<RunState>) {
    set_run.update(|state| match state.reset() {
        Ok(()) => log::debug!("Run state reset"),
        Err(e) => log::warn!("{}", e),
    });
}

#[component]
pub fn StartPanel(
    run: ReadSignal<RunState>,
    set_run: WriteSignal<RunState>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    view! {
        <div class="start-panel">
            <button
                class="btn btn-primary start-button"
                on:click=move |_| start_run(run, set_run, set_logs)
            >
                <span class="start-icon">"▶"</span>
                "Start Scraping"
            </button>
        </div>
    }
}
