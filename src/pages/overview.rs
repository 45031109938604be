//! Overview Page
//!
//! Dashboard totals for the clinician's caseload.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::models::SummaryTotals;

/// Overview page component
#[component]
pub fn Overview() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (totals, set_totals) = create_signal(SummaryTotals::default());

    // Fetch totals on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_summary().await {
                Ok(summary) => {
                    set_totals.set(summary);
                    state.report_success("Dashboard loaded");
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Overview"</h1>
                <p class="text-gray-400 mt-1">"Your caseload at a glance"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard
                    label="Total Patients"
                    value=Signal::derive(move || totals.get().total_patients)
                    accent="text-blue-400"
                />
                <StatCard
                    label="Sessions This Week"
                    value=Signal::derive(move || totals.get().sessions_this_week)
                    accent="text-green-400"
                />
                <StatCard
                    label="Critical Patients"
                    value=Signal::derive(move || totals.get().critical_patients)
                    accent="text-red-400"
                />
            </div>
        </div>
    }
}

/// Single counter card
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<u32>,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class=format!("text-4xl font-bold mt-2 {}", accent)>
                {move || value.get()}
            </div>
        </div>
    }
}
