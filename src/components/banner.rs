//! Error Banner Component
//!
//! Transient error surface; messages auto-clear after five seconds.
//! Success stays log-only until a real toast UI exists.

use leptos::*;

use crate::state::global::GlobalState;

/// Fixed-position error banner fed by the global error signal
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-4 right-4 z-50">
            {move || {
                let state = state.clone();
                state.error.get().map(|msg| view! {
                    // Click to dismiss early; otherwise the 5s timer clears it
                    <div
                        class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg cursor-pointer"
                        on:click=move |_| state.clear_error()
                    >
                        <span class="text-lg">"✕"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
