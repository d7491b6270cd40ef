//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-title">
                <span class="hero-icon">"🗄"</span>
                <h1>"Book Data Scraper"</h1>
            </div>
            <p class="subtitle">"Extract book information from multiple sources"</p>
        </div>
    }
}
