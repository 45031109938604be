//! Risk Monitor Page
//!
//! Severity tallies over the clinician-wide alert feed plus a capped list
//! of recent alerts.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::global::{DetailTab, GlobalState};
use crate::state::models::{format_date, tally_alerts};
use crate::state::severity::risk_color;

/// How many alerts the feed shows, in API order.
const FEED_LIMIT: usize = 10;

/// Risk monitor page component
#[component]
pub fn RiskMonitor() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the alert feed on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            let request = state.risk_req.begin();
            match api::fetch_risk_alerts().await {
                Ok(alerts) => {
                    if state.risk_req.is_current(request) {
                        state.alerts.set(alerts);
                        state.report_success("Risk dashboard loaded");
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    });

    let alerts = state.alerts;
    let counts = create_memo(move |_| tally_alerts(&alerts.get()));

    let state_for_jump = state.clone();
    let navigate = use_navigate();
    let open_patient_alerts = move |username: String| {
        let state = state_for_jump.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::fetch_patient(&username).await {
                Ok(patient) => {
                    state.select_patient(patient);
                    state.detail_tab.set(DetailTab::Alerts);
                    navigate("/patients", Default::default());
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Risk Monitor"</h1>
                <p class="text-gray-400 mt-1">"Alert severity across your caseload"</p>
            </div>

            // Severity counters
            <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                <RiskCounter label="Critical" value=Signal::derive(move || counts.get().critical) accent="text-red-400" />
                <RiskCounter label="High" value=Signal::derive(move || counts.get().high) accent="text-orange-400" />
                <RiskCounter label="Moderate" value=Signal::derive(move || counts.get().moderate) accent="text-yellow-400" />
                <RiskCounter label="Low" value=Signal::derive(move || counts.get().low) accent="text-green-400" />
                <RiskCounter label="Unreviewed" value=Signal::derive(move || counts.get().unreviewed) accent="text-blue-400" />
            </div>

            // Alert feed, capped, API order
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Active Alerts"</h2>
                {move || {
                    let feed = alerts.get();
                    if feed.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-6">"No active alerts"</p>
                        }.into_view()
                    } else {
                        let open_patient_alerts = open_patient_alerts.clone();
                        view! {
                            <div class="flex flex-col gap-3">
                                {feed.iter().take(FEED_LIMIT).map(|alert| {
                                    let color = risk_color(alert.risk_label());
                                    let username = alert.patient_username.clone();
                                    let open = open_patient_alerts.clone();
                                    view! {
                                        <div
                                            class="bg-gray-700 rounded-lg p-4 cursor-pointer hover:bg-gray-600 transition-colors"
                                            style=format!("border-left: 4px solid {}", color)
                                            on:click=move |_| open(username.clone())
                                        >
                                            <div class="flex items-center justify-between">
                                                <div>
                                                    <strong style=format!("color: {}", color)>
                                                        {alert.patient_name.clone()}
                                                    </strong>
                                                    <p class="my-1 text-sm">
                                                        {alert.trigger.clone().unwrap_or_else(|| "Risk alert".to_string())}
                                                    </p>
                                                    <span class="text-xs text-gray-400">{format_date(&alert.date)}</span>
                                                </div>
                                                <span
                                                    class="text-white text-xs font-semibold px-2 py-1 rounded"
                                                    style=format!("background-color: {}", color)
                                                >
                                                    {alert.risk_label().to_string()}
                                                </span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Single severity counter card
#[component]
fn RiskCounter(
    label: &'static str,
    #[prop(into)]
    value: Signal<usize>,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 text-center">
            <div class=format!("text-3xl font-bold {}", accent)>
                {move || value.get()}
            </div>
            <span class="text-gray-400 text-sm">{label}</span>
        </div>
    }
}
