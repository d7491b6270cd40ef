//! Terminal panel for a failed run.

use leptos::*;

use crate::components::reset_run;
use crate::RunState;

#[component]
pub fn ErrorPanel(set_run: WriteSignal<RunState>) -> impl IntoView {
    view! {
        <div class="error-panel">
            <div class="error-icon">"⚠️"</div>
            <h3>"Scraping Failed"</h3>
            <p class="error-message">
                "Unable to complete the scraping process. Please try again."
            </p>
            // Full reset, not a resume
            <button class="btn btn-danger" on:click=move |_| reset_run(set_run)>
                "Try Again"
            </button>
        </div>
    }
}
