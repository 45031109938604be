//! Patients Page
//!
//! Patient directory with risk/inactivity filter and name search, plus the
//! single-selection detail view.

use chrono::Utc;
use leptos::*;

use crate::api;
use crate::pages::patient_detail::PatientDetail;
use crate::state::filters::{self, PatientFilter};
use crate::state::global::GlobalState;
use crate::state::models::{format_date, Patient};
use crate::state::severity::risk_color;

/// Patients page component
#[component]
pub fn Patients() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Reload the full list whenever the directory is visible: on first
    // mount and again after the detail view closes.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        if state_for_effect.selected_patient.get().is_some() {
            return;
        }
        let state = state_for_effect.clone();
        spawn_local(async move {
            let request = state.patients_req.begin();
            match api::fetch_patients().await {
                Ok(patients) => {
                    // Drop responses that a newer load has superseded.
                    if state.patients_req.is_current(request) {
                        state.report_success(&format!("Loaded {} patients", patients.len()));
                        state.patients.set(patients);
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    });

    let state_for_view = state.clone();
    view! {
        {move || {
            if state_for_view.selected_patient.get().is_some() {
                view! { <PatientDetail /> }.into_view()
            } else {
                view! { <PatientDirectory /> }.into_view()
            }
        }}
    }
}

/// Patient list with filter and search controls
#[component]
fn PatientDirectory() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_memo = state.clone();
    let visible = create_memo(move |_| {
        filters::apply(
            &state_for_memo.patients.get(),
            state_for_memo.patient_filter.get(),
            &state_for_memo.patient_search.get(),
            Utc::now(),
        )
    });

    let search = state.patient_search;
    let filter = state.patient_filter;

    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Patients"</h1>
                <p class="text-gray-400 mt-1">"Your assigned caseload"</p>
            </div>

            // Search and filter controls
            <div class="flex flex-col md:flex-row gap-3">
                <input
                    type="text"
                    placeholder="Search by name or username"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <select
                    on:change=move |ev| filter.set(PatientFilter::from_key(&event_target_value(&ev)))
                    prop:value=move || filter.get().as_key()
                    class="bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="all">"All patients"</option>
                    <option value="high_risk">"High risk"</option>
                    <option value="inactive">"Inactive (7+ days)"</option>
                </select>
            </div>

            // Patient table
            <div class="bg-gray-800 rounded-xl overflow-hidden border border-gray-700">
                {move || {
                    let patients = visible.get();
                    if patients.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-12">"No patients found"</p>
                        }.into_view()
                    } else {
                        view! {
                            <table class="w-full text-left">
                                <thead class="bg-gray-700 text-gray-300 text-sm">
                                    <tr>
                                        <th class="px-4 py-3">"Name"</th>
                                        <th class="px-4 py-3">"Email"</th>
                                        <th class="px-4 py-3">"Last Session"</th>
                                        <th class="px-4 py-3">"Risk Level"</th>
                                        <th class="px-4 py-3 text-center">"Action"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {patients.into_iter().map(|patient| view! {
                                        <PatientRow patient=patient />
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// Single directory row
#[component]
fn PatientRow(patient: Patient) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let last_session = patient
        .last_session
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "Never".to_string());
    let risk_label = patient.risk_label().to_string();
    let badge_color = risk_color(&risk_label);

    let username = patient.username.clone();
    let on_view = move |_| {
        let username = username.clone();
        let state = state.clone();
        spawn_local(async move {
            match api::fetch_patient(&username).await {
                Ok(detail) => {
                    state.report_success(&format!("Loaded patient: {}", detail.full_name()));
                    state.select_patient(detail);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    };

    view! {
        <tr class="border-t border-gray-700 hover:bg-gray-750">
            <td class="px-4 py-3">{patient.full_name()}</td>
            <td class="px-4 py-3 text-gray-400">{patient.email.clone()}</td>
            <td class="px-4 py-3 text-gray-400">{last_session}</td>
            <td class="px-4 py-3">
                <span
                    class="text-white text-xs font-semibold px-3 py-1 rounded"
                    style=format!("background-color: {}", badge_color)
                >
                    {risk_label}
                </span>
            </td>
            <td class="px-4 py-3 text-center">
                <button
                    on:click=on_view
                    class="px-3 py-1 bg-primary-600 hover:bg-primary-700 rounded text-sm font-medium transition-colors"
                >
                    "View"
                </button>
            </td>
        </tr>
    }
}
