//! Book Data Scraper - Frontend Rust/Leptos Application
//!
//! A WebAssembly page that plays a scripted "scraping" run over five mock
//! book sources. No request ever leaves the browser: the sources and records
//! are fixtures, and the run is a sequence of timed pauses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── StartPanel | ProgressPanel | ErrorPanel (by phase)      │
//! │  ├── StatusBanner                                            │
//! │  ├── ResultsTable (once records arrive)                      │
//! │  └── ActivityLog                                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`fixtures`] - Mock sources and book records
//! - [`state`] - Run state and the values the view derives from it
//! - [`types`] - Common types (BookRecord, LogEntry, errors)
//! - [`components`] - UI components
//! - [`services`] - Sequencer and CSV export

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod fixtures;
pub mod state;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Fixtures
pub use fixtures::{MOCK_BOOKS, SOURCES, SOURCE_COUNT};

// State
pub use state::{Phase, RunState, SourceStatus};

// Types
pub use types::{
    // Records
    BookRecord,
    // Logs
    LogEntry, LogLevel, push_capped,
    // Errors
    ScrapeError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Book Scraper - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Written only by the start/reset handlers
    let (run, set_run) = create_signal(RunState::new());
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    let phase = move || run.get().phase;

    view! {
        <div class="container">
            <Hero/>

            <Show
                when=move || phase() == Phase::Idle
                fallback=|| view! { }
            >
                <StartPanel run=run set_run=set_run set_logs=set_logs/>
            </Show>

            <Show
                when=move || phase() == Phase::Running
                fallback=|| view! { }
            >
                <ProgressPanel run=run/>
            </Show>

            <StatusBanner run=run/>

            <Show
                when=move || run.get().shows_results()
                fallback=|| view! { }
            >
                <ResultsTable run=run set_run=set_run/>
            </Show>

            <Show
                when=move || phase() == Phase::Failed
                fallback=|| view! { }
            >
                <ErrorPanel set_run=set_run/>
            </Show>

            <ActivityLog logs=logs set_logs=set_logs/>
        </div>

        <Footer/>
    }
}
