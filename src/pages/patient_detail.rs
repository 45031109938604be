//! Patient Detail View
//!
//! Seven subtabs over the selected patient. Every tab fetches its own
//! endpoint on activation; a failed fetch leaves the tab untouched and is
//! surfaced once through the error banner.

use chrono::{Duration, Utc};
use leptos::*;

use crate::api::{self, MoodLogsResponse, SessionsResponse};
use crate::components::{ActivityChart, Loading, MoodChart};
use crate::state::global::{DetailTab, GlobalState};
use crate::state::models::{format_date, Analytics, AssessmentResult, Assessments, Patient, RiskAlert};
use crate::state::severity::{assessment_color, mood_color, risk_color};

/// Patient detail section with subtab navigation
#[component]
pub fn PatientDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_name = state.clone();
    let name = move || {
        state_for_name
            .selected_patient
            .get()
            .map(|p| p.full_name())
            .unwrap_or_default()
    };

    let state_for_username = state.clone();
    let username = create_memo(move |_| {
        state_for_username
            .selected_patient
            .get()
            .map(|p| p.username)
            .unwrap_or_default()
    });

    let tab = state.detail_tab;
    let state_for_close = state.clone();

    view! {
        <div class="space-y-6">
            // Header with close control
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{name}</h1>
                    <p class="text-gray-400 mt-1">"Patient detail"</p>
                </div>
                <button
                    on:click=move |_| state_for_close.close_patient_detail()
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "← Back to list"
                </button>
            </div>

            // Subtab controls
            <div class="flex flex-wrap gap-2">
                {DetailTab::ALL.into_iter().map(|t| view! {
                    <button
                        on:click=move |_| tab.set(t)
                        class=move || {
                            let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors border border-primary-600";
                            if tab.get() == t {
                                format!("{} bg-primary-600 text-white", base)
                            } else {
                                format!("{} bg-transparent text-primary-400 hover:bg-gray-700", base)
                            }
                        }
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            // Active subtab; remounts (and refetches) on every activation
            {move || {
                let username = username.get();
                if username.is_empty() {
                    return view! { <Loading /> }.into_view();
                }
                match tab.get() {
                    DetailTab::Summary => view! { <SummaryTab username=username /> }.into_view(),
                    DetailTab::Profile => view! { <ProfileTab username=username /> }.into_view(),
                    DetailTab::Moods => view! { <MoodsTab username=username /> }.into_view(),
                    DetailTab::Assessments => view! { <AssessmentsTab username=username /> }.into_view(),
                    DetailTab::Sessions => view! { <SessionsTab username=username /> }.into_view(),
                    DetailTab::Alerts => view! { <AlertsTab username=username /> }.into_view(),
                    DetailTab::Charts => view! { <ChartsTab username=username /> }.into_view(),
                }
            }}
        </div>
    }
}

/// Labeled field in an info grid
#[component]
fn Field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <strong class="block text-primary-400 text-sm mb-1">{label}</strong>
            <p class="m-0">{value}</p>
        </div>
    }
}

/// Summary subtab: patient info plus treatment goals
#[component]
fn SummaryTab(username: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (patient, set_patient) = create_signal(None::<Patient>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let username = username.clone();
        spawn_local(async move {
            let request = state.detail_req.begin();
            match api::fetch_patient(&username).await {
                Ok(detail) => {
                    if state.detail_req.is_current(request) {
                        set_patient.set(Some(detail));
                        state.report_success("Patient summary loaded");
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    });

    view! {
        {move || match patient.get() {
            None => view! { <Loading /> }.into_view(),
            Some(p) => {
                let risk_label = p.risk_level.clone().unwrap_or_else(|| "Unknown".to_string());
                let risk_style = format!("color: {}; font-weight: 600;", risk_color(p.risk_label()));
                let last_assessed = p
                    .risk_date
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| Utc::now().format("%b %d, %Y").to_string());
                let goals = p.treatment_goals.clone();

                view! {
                    <div class="space-y-6">
                        <section class="bg-gray-800 rounded-xl p-6 border-l-4 border-primary-600">
                            <h4 class="text-lg font-semibold mb-4">"📋 Patient Information"</h4>
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-5">
                                <Field label="Name" value=p.full_name() />
                                <Field label="Email" value=p.email.clone() />
                                <Field label="Phone" value=p.phone.clone().unwrap_or_else(|| "Not provided".to_string()) />
                                <div>
                                    <strong class="block text-primary-400 text-sm mb-1">"Current Risk Level"</strong>
                                    <p class="m-0" style=risk_style>{risk_label}</p>
                                </div>
                                <Field label="Sessions Completed" value=p.sessions_count.to_string() />
                                <Field label="Last Assessment" value=last_assessed />
                            </div>
                        </section>

                        // Goals block is omitted entirely when empty
                        {(!goals.is_empty()).then(|| view! {
                            <section class="bg-gray-800 rounded-xl p-6 border-l-4 border-green-500">
                                <h4 class="text-lg font-semibold mb-4">"🎯 Treatment Goals"</h4>
                                <ul class="list-disc pl-5 space-y-2">
                                    {goals.iter().map(|goal| view! {
                                        <li>
                                            {goal.goal_text.clone()}
                                            " "
                                            <span class="text-sm text-gray-400">{format!("({})", goal.status)}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </section>
                        })}
                    </div>
                }.into_view()
            }
        }}
    }
}

/// Profile subtab: full static fields with explicit defaults
#[component]
fn ProfileTab(username: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (patient, set_patient) = create_signal(None::<Patient>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let username = username.clone();
        spawn_local(async move {
            let request = state.detail_req.begin();
            match api::fetch_patient(&username).await {
                Ok(detail) => {
                    if state.detail_req.is_current(request) {
                        set_patient.set(Some(detail));
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    });

    view! {
        {move || match patient.get() {
            None => view! { <Loading /> }.into_view(),
            Some(p) => view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h4 class="text-lg font-semibold mb-4">"👤 Full Profile"</h4>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <Field label="Full Name" value=p.full_name() />
                        <Field label="Username" value=p.username.clone() />
                        <Field label="Email" value=p.email.clone() />
                        <Field label="Phone" value=p.phone.clone().unwrap_or_else(|| "Not provided".to_string()) />
                        <Field
                            label="Date of Birth"
                            value=p.dob.as_deref().map(format_date).unwrap_or_else(|| "Not provided".to_string())
                        />
                        <Field label="Gender" value=p.gender.clone().unwrap_or_else(|| "Not specified".to_string()) />
                    </div>
                </section>
            }.into_view(),
        }}
    }
}

/// Moods subtab: weekly average plus the full log table
#[component]
fn MoodsTab(username: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (logs, set_logs) = create_signal(None::<MoodLogsResponse>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let username = username.clone();
        spawn_local(async move {
            let request = state.detail_req.begin();
            match api::fetch_mood_logs(&username).await {
                Ok(response) => {
                    if state.detail_req.is_current(request) {
                        set_logs.set(Some(response));
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    });

    view! {
        {move || match logs.get() {
            None => view! { <Loading /> }.into_view(),
            Some(data) => view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h4 class="text-lg font-semibold mb-4">"😊 Mood Logs"</h4>
                    <div class="bg-gray-700 rounded-lg px-4 py-3 mb-4">
                        <strong>"Weekly Average: "</strong>
                        {format!("{:.1}/10", data.week_avg)}
                    </div>

                    {if data.logs.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-6">"No mood logs found"</p>
                        }.into_view()
                    } else {
                        view! {
                            <table class="w-full text-left">
                                <thead class="bg-gray-700 text-gray-300 text-sm">
                                    <tr>
                                        <th class="px-3 py-2">"Date"</th>
                                        <th class="px-3 py-2">"Mood"</th>
                                        <th class="px-3 py-2">"Energy"</th>
                                        <th class="px-3 py-2">"Notes"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {data.logs.iter().map(|log| view! {
                                        <tr class="border-t border-gray-700">
                                            <td class="px-3 py-2">{format_date(&log.date)}</td>
                                            <td class="px-3 py-2">
                                                <span
                                                    class="text-white text-xs font-semibold px-2 py-1 rounded"
                                                    style=format!("background-color: {}", mood_color(log.mood))
                                                >
                                                    {format!("{}/10", log.mood)}
                                                </span>
                                            </td>
                                            <td class="px-3 py-2">
                                                {log.energy.map(|e| e.to_string()).unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class="px-3 py-2 text-sm text-gray-400">
                                                {log.notes.clone().unwrap_or_else(|| "-".to_string())}
                                            </td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view()
                    }}
                </section>
            }.into_view(),
        }}
    }
}

/// Assessments subtab: PHQ-9 and GAD-7 cards when present
#[component]
fn AssessmentsTab(username: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (assessments, set_assessments) = create_signal(None::<Assessments>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let username = username.clone();
        spawn_local(async move {
            let request = state.detail_req.begin();
            match api::fetch_assessments(&username).await {
                Ok(response) => {
                    if state.detail_req.is_current(request) {
                        set_assessments.set(Some(response));
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    });

    view! {
        {move || match assessments.get() {
            None => view! { <Loading /> }.into_view(),
            Some(data) => view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h4 class="text-lg font-semibold mb-4">"📋 Clinical Assessments"</h4>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                        {data.phq9.clone().map(|result| view! {
                            <AssessmentCard title="PHQ-9 (Depression)" max_score=27 result=result />
                        })}
                        {data.gad7.clone().map(|result| view! {
                            <AssessmentCard title="GAD-7 (Anxiety)" max_score=21 result=result />
                        })}
                    </div>
                </section>
            }.into_view(),
        }}
    }
}

/// One instrument card, colored by the shared severity bands
#[component]
fn AssessmentCard(
    title: &'static str,
    max_score: u32,
    result: AssessmentResult,
) -> impl IntoView {
    let color = assessment_color(result.score);

    view! {
        <div
            class="bg-gray-700 rounded-lg p-4"
            style=format!("border-left: 4px solid {}", color)
        >
            <h5 class="font-semibold" style=format!("color: {}", color)>{title}</h5>
            <p class="mt-2">
                <strong>"Score: "</strong>
                <span class="text-2xl font-bold" style=format!("color: {}", color)>
                    {result.score}
                </span>
                {format!("/{}", max_score)}
            </p>
            <p class="mt-2">
                <strong>"Severity: "</strong>
                {result.interpretation.clone().unwrap_or_else(|| "Unknown".to_string())}
            </p>
            <p class="mt-2 text-sm text-gray-400">
                {format!("Last assessed: {}", format_date(&result.date))}
            </p>
        </div>
    }
}

/// Sessions subtab: total count plus sessions in API order
#[component]
fn SessionsTab(username: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (sessions, set_sessions) = create_signal(None::<SessionsResponse>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let username = username.clone();
        spawn_local(async move {
            let request = state.detail_req.begin();
            match api::fetch_sessions(&username).await {
                Ok(response) => {
                    if state.detail_req.is_current(request) {
                        set_sessions.set(Some(response));
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    });

    view! {
        {move || match sessions.get() {
            None => view! { <Loading /> }.into_view(),
            Some(data) => view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h4 class="text-lg font-semibold mb-2">"💬 Therapy Sessions"</h4>
                    <p class="text-gray-400 mb-4">
                        <strong>"Total Sessions: "</strong>
                        {data.total}
                    </p>

                    {if data.sessions.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-6">"No therapy sessions recorded"</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="flex flex-col gap-4">
                                {data.sessions.iter().map(|session| view! {
                                    <div class="bg-gray-700 rounded-lg p-4 border-l-4 border-primary-600">
                                        <div class="flex items-start justify-between mb-2">
                                            <div>
                                                <strong class="block">{format_date(&session.date)}</strong>
                                                <span class="text-sm text-gray-400">
                                                    {format!("Duration: {} minutes", session.duration)}
                                                </span>
                                            </div>
                                            <div class="text-right text-sm">
                                                {session.mood_before.map(|mood| view! {
                                                    <div>
                                                        "Before: "
                                                        <strong style=format!("color: {}", mood_color(mood))>
                                                            {format!("{}/10", mood)}
                                                        </strong>
                                                    </div>
                                                })}
                                                {session.mood_after.map(|mood| view! {
                                                    <div>
                                                        "After: "
                                                        <strong style=format!("color: {}", mood_color(mood))>
                                                            {format!("{}/10", mood)}
                                                        </strong>
                                                    </div>
                                                })}
                                            </div>
                                        </div>
                                        {session.notes.clone().map(|notes| view! {
                                            <p class="text-sm text-gray-300 mt-2">{notes}</p>
                                        })}
                                    </div>
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                </section>
            }.into_view(),
        }}
    }
}

/// Alerts subtab: clinician-wide feed filtered to the selected patient.
/// There is no per-patient alert endpoint, so this scans the full feed.
#[component]
fn AlertsTab(username: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (alerts, set_alerts) = create_signal(None::<Vec<RiskAlert>>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let username = username.clone();
        spawn_local(async move {
            let request = state.detail_req.begin();
            match api::fetch_risk_alerts().await {
                Ok(feed) => {
                    if state.detail_req.is_current(request) {
                        let mine: Vec<RiskAlert> = feed
                            .into_iter()
                            .filter(|a| a.patient_username == username)
                            .collect();
                        set_alerts.set(Some(mine));
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    });

    let state_for_ack = state.clone();
    let acknowledge = move |alert_id: i64| {
        // No acknowledge endpoint exists yet; flip local state so the
        // tally and button reflect the review.
        set_alerts.update(|alerts| {
            if let Some(list) = alerts {
                if let Some(alert) = list.iter_mut().find(|a| a.alert_id == alert_id) {
                    alert.acknowledged = true;
                }
            }
        });
        state_for_ack.report_success("Alert acknowledged");
    };

    view! {
        {move || match alerts.get() {
            None => view! { <Loading /> }.into_view(),
            Some(list) => view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h4 class="text-lg font-semibold mb-4">"🚨 Risk Alerts"</h4>

                    {if list.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-6">"No risk alerts for this patient"</p>
                        }.into_view()
                    } else {
                        let acknowledge = acknowledge.clone();
                        view! {
                            <div class="flex flex-col gap-3">
                                {list.iter().map(|alert| {
                                    let color = risk_color(alert.risk_label());
                                    let alert_id = alert.alert_id;
                                    let acknowledged = alert.acknowledged;
                                    let acknowledge = acknowledge.clone();
                                    view! {
                                        <div
                                            class="bg-gray-700 rounded-lg p-4"
                                            style=format!("border-left: 4px solid {}", color)
                                        >
                                            <div class="flex items-center justify-between">
                                                <div>
                                                    <strong style=format!("color: {}", color)>
                                                        {alert.risk_label().to_uppercase()}
                                                    </strong>
                                                    <p class="my-1">
                                                        {alert.trigger.clone().unwrap_or_else(|| "Risk detected".to_string())}
                                                    </p>
                                                    <span class="text-sm text-gray-400">{format_date(&alert.date)}</span>
                                                </div>
                                                <button
                                                    on:click=move |_| acknowledge(alert_id)
                                                    disabled=acknowledged
                                                    class="px-3 py-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 rounded text-sm font-medium transition-colors"
                                                >
                                                    {if acknowledged { "✅ Acknowledged" } else { "⏳ Acknowledge" }}
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                </section>
            }.into_view(),
        }}
    }
}

/// Charts subtab: trailing-30-day default range with quick-range buttons
#[component]
fn ChartsTab(username: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let today = Utc::now().date_naive();
    let (from_date, set_from_date) =
        create_signal((today - Duration::days(30)).format("%Y-%m-%d").to_string());
    let (to_date, set_to_date) = create_signal(today.format("%Y-%m-%d").to_string());
    let (analytics, set_analytics) = create_signal(Analytics::default());

    let state_for_load = state.clone();
    let load = move || {
        let state = state_for_load.clone();
        let username = username.clone();
        spawn_local(async move {
            let request = state.detail_req.begin();
            match api::fetch_analytics(&username).await {
                Ok(data) => {
                    if state.detail_req.is_current(request) {
                        set_analytics.set(data);
                        state.report_success("Charts loaded");
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    };

    let load_for_mount = load.clone();
    create_effect(move |_| load_for_mount());

    let set_range = move |days: i64| {
        let today = Utc::now().date_naive();
        set_from_date.set((today - Duration::days(days)).format("%Y-%m-%d").to_string());
        set_to_date.set(today.format("%Y-%m-%d").to_string());
        load();
    };
    let range_7 = set_range.clone();
    let range_30 = set_range.clone();
    let range_90 = set_range;

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-6">
            // Range controls
            <div class="flex flex-wrap items-center gap-3">
                <input
                    type="date"
                    prop:value=move || from_date.get()
                    on:input=move |ev| set_from_date.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-3 py-2 border border-gray-600"
                />
                <span class="text-gray-400">"to"</span>
                <input
                    type="date"
                    prop:value=move || to_date.get()
                    on:input=move |ev| set_to_date.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-3 py-2 border border-gray-600"
                />
                <div class="flex space-x-2 ml-auto">
                    <button
                        on:click=move |_| range_7(7)
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                    >
                        "7D"
                    </button>
                    <button
                        on:click=move |_| range_30(30)
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                    >
                        "30D"
                    </button>
                    <button
                        on:click=move |_| range_90(90)
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                    >
                        "90D"
                    </button>
                </div>
            </div>

            // Mood chart, fixed 0-10 axis
            <div>
                <h4 class="text-lg font-semibold mb-3">"Mood"</h4>
                <MoodChart data=Signal::derive(move || analytics.get().mood_data) />
            </div>

            // Activity chart, auto-scaled
            <div>
                <h4 class="text-lg font-semibold mb-3">"Activity"</h4>
                <ActivityChart data=Signal::derive(move || analytics.get().activity_data) />
            </div>
        </section>
    }
}
