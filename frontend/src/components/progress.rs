use leptos::*;

use crate::{RunState, SourceStatus, SOURCES};

/// Live view of a running scrape: loader, progress bar, current source and
/// the per-source grid.
#[component]
pub fn ProgressPanel(run: ReadSignal<RunState>) -> impl IntoView {
    let progress = move || run.get().progress;
    let extracting = move || run.get().extracting;
    let has_records = move || run.get().has_records();

    view! {
        <div class="scrape-panel">
            <div class="book-loader">
                <ul>
                    {(0..6).map(|_| view! { <li class="book-page">"📖"</li> }).collect_view()}
                </ul>
                <span>"Processing Books"</span>
            </div>

            <div class="progress-card">
                <div class="progress-header">
                    <h3>"Scraping Progress"</h3>
                    <div class="progress-percent">{move || format!("{}%", progress())}</div>
                </div>
                <div class="progress-bar">
                    <div class="progress-fill" style=move || format!("width: {}%;", progress())></div>
                </div>

                <Show
                    when=move || run.get().active_source.is_some()
                    fallback=|| view! { }
                >
                    <div class="current-source">
                        <span class="globe" class:spinning=extracting>"🌐"</span>
                        <div>
                            <div class="current-label">"Currently scraping:"</div>
                            <div class="current-name">
                                {move || run.get().active_source.unwrap_or_default()}
                            </div>
                        </div>
                        <Show when=extracting fallback=|| view! { }>
                            <div class="extract-dots">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </Show>
                    </div>
                </Show>

                <div class="source-grid">
                    {SOURCES
                        .iter()
                        .enumerate()
                        .map(|(index, source)| {
                            let status = move || run.get().source_status(index);
                            view! {
                                <div class=move || status().css_class()>
                                    <div class="source-icon">{move || status().icon()}</div>
                                    <div class="source-name">{*source}</div>
                                    <Show
                                        when=move || status() == SourceStatus::Active && extracting()
                                        fallback=|| view! { }
                                    >
                                        <div class="extract-bar"></div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <Show
                    when=has_records
                    fallback=|| view! { }
                >
                    <div class="data-flow">
                        <span>"🌐"</span>
                        <div class="flow-dots">
                            {(0..5).map(|_| view! { <span class="flow-dot"></span> }).collect_view()}
                        </div>
                        <span>"⬇"</span>
                        <div class="flow-dots">
                            {(0..5).map(|_| view! { <span class="flow-dot"></span> }).collect_view()}
                        </div>
                        <span>"🗄"</span>
                    </div>
                </Show>
            </div>
        </div>
    }
}
