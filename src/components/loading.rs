//! Loading Component
//!
//! Loading spinners for pages and panels.

use leptos::*;

/// Full-panel loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}
