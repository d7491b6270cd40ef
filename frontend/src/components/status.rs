use leptos::*;

use crate::RunState;

/// Current status message with a phase icon.
#[component]
pub fn StatusBanner(run: ReadSignal<RunState>) -> impl IntoView {
    view! {
        <Show
            when=move || !run.get().message.is_empty()
            fallback=|| view! { }
        >
            <div class="status-banner">
                <span class="status-icon">{move || run.get().phase.icon()}</span>
                <span class="status-text">{move || run.get().message}</span>
            </div>
        </Show>
    }
}
