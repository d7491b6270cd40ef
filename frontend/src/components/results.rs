//! Results table, filled row by row while a run is going.

use leptos::*;

use crate::components::reset_run;
use crate::services::{csv_data_uri, to_csv};
use crate::{BookRecord, Phase, RunState, EXPORT_FILE_NAME, SOURCE_COUNT};

#[component]
pub fn ResultsTable(run: ReadSignal<RunState>, set_run: WriteSignal<RunState>) -> impl IntoView {
    let export_href = move || match to_csv(run.get().rows()) {
        Ok(csv) => Some(csv_data_uri(&csv)),
        Err(e) => {
            log::error!("❌ {}", e);
            None
        }
    };

    let rows = move || {
        run.get()
            .rows()
            .map(|(source, book)| (source, *book))
            .collect::<Vec<(&'static str, BookRecord)>>()
    };

    view! {
        <div class="results-card">
            <div class="results-header">
                <h2>"🗄 Scraped Books (" {move || run.get().collected_count} "/" {SOURCE_COUNT} ")"</h2>
                <Show
                    when=move || run.get().phase == Phase::Done
                    fallback=|| view! { }
                >
                    <div class="results-actions">
                        <a class="btn btn-secondary" href=export_href download=EXPORT_FILE_NAME>
                            "Export CSV"
                        </a>
                        <button class="btn btn-primary" on:click=move |_| reset_run(set_run)>
                            "Scrape Again"
                        </button>
                    </div>
                </Show>
            </div>

            <table class="results-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Price"</th>
                        <th>"Source"</th>
                        <th>"Link"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|(_, book)| book.id
                        children=move |(source, book)| {
                            view! {
                                <tr class="result-row">
                                    <td>
                                        <span class="book-icon">"📖"</span>
                                        <span class="book-title">{book.title}</span>
                                    </td>
                                    <td><span class="book-price">{book.price}</span></td>
                                    <td><span class="book-source">{source}</span></td>
                                    <td>
                                        <a
                                            class="book-link"
                                            href=book.link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            "↗ View"
                                        </a>
                                    </td>
                                </tr>
                            }
                        }
                    />
                    // Skeleton rows for sources not reached yet
                    {move || {
                        (0..run.get().placeholder_rows())
                            .map(|_| view! {
                                <tr class="loading-row">
                                    <td><div class="skeleton wide"></div></td>
                                    <td><div class="skeleton"></div></td>
                                    <td><div class="skeleton"></div></td>
                                    <td><div class="skeleton narrow"></div></td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
