//! Activity log of the current run.
//!
//! Every status message the sequencer emits lands here with a timestamp,
//! newest at the bottom, auto-scrolled into view.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::LogEntry;

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("requestAnimationFrame unavailable, skipping log scroll");
        return;
    }
    closure.forget();
}

/// Activity log panel (display only, entries are pushed by the run handler)
#[component]
pub fn ActivityLog(
    /// Signal for logs data
    logs: ReadSignal<Vec<LogEntry>>,
    /// Set logs signal (for clearing)
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        let _ = logs.get();

        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <Show
            when=move || !logs.get().is_empty()
            fallback=|| view! { }
        >
            <div class="logs-panel">
                <div class="logs-header">
                    <span class="logs-title">"📋 Activity"</span>
                    <button
                        class="logs-clear"
                        on:click=move |_| set_logs.set(vec![])
                    >
                        "Clear"
                    </button>
                </div>
                <div class="logs-content" node_ref=logs_container>
                    <For
                        each=move || logs.get().into_iter().enumerate()
                        key=|(i, entry)| (*i, entry.timestamp.clone())
                        children=move |(_, entry)| {
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
