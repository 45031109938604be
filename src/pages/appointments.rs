//! Appointments Page
//!
//! New-appointment scheduling for a patient on the caseload.

use leptos::*;

use crate::api::{self, AppointmentRequest};
use crate::state::global::GlobalState;

/// Appointments page component
#[component]
pub fn Appointments() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (show_form, set_show_form) = create_signal(false);

    // The form's patient dropdown needs the caseload
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            let request = state.patients_req.begin();
            match api::fetch_patients().await {
                Ok(patients) => {
                    if state.patients_req.is_current(request) {
                        state.patients.set(patients);
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    });

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Appointments"</h1>
                    <p class="text-gray-400 mt-1">"Schedule sessions with your patients"</p>
                </div>

                <button
                    on:click=move |_| set_show_form.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ New Appointment"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    view! {
                        <NewAppointmentForm on_close=move || set_show_form.set(false) />
                    }.into_view()
                } else {
                    view! {
                        <section class="bg-gray-800 rounded-xl p-6">
                            <p class="text-center text-gray-400 py-12">
                                "Use + New Appointment to schedule a session"
                            </p>
                        </section>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// New appointment form
#[component]
fn NewAppointmentForm(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (patient, set_patient) = create_signal(String::new());
    let (date_time, set_date_time) = create_signal(String::new());
    let (duration, set_duration) = create_signal("50".to_string());
    let (notes, set_notes) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username = patient.get();
        let when = date_time.get();
        let minutes = duration.get().parse::<u32>().unwrap_or(0);

        // datetime-local values are "YYYY-MM-DDTHH:MM"
        let Some((date, time)) = when.split_once('T') else {
            state.show_error("Please fill in all required fields");
            return;
        };

        if username.is_empty() || minutes == 0 {
            state.show_error("Please fill in all required fields");
            return;
        }

        set_submitting.set(true);

        let request = AppointmentRequest {
            date: date.to_string(),
            time: time.to_string(),
            duration: minutes,
            notes: notes.get(),
        };

        let state_for_create = state.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_appointment(&username, &request).await {
                Ok(()) => {
                    state_for_create.report_success("Appointment created successfully");
                    set_patient.set(String::new());
                    set_date_time.set(String::new());
                    set_duration.set("50".to_string());
                    set_notes.set(String::new());
                    on_close_inner();
                }
                Err(e) => {
                    state_for_create.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    let state_for_options = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"New Appointment"</h2>

            <form on:submit=on_submit class="space-y-4">
                // Patient
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Patient"</label>
                    <select
                        on:change=move |ev| set_patient.set(event_target_value(&ev))
                        prop:value=move || patient.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"Select a patient"</option>
                        {move || {
                            state_for_options.patients.get().into_iter().map(|p| view! {
                                <option value=p.username.clone()>{p.full_name()}</option>
                            }).collect_view()
                        }}
                    </select>
                </div>

                // Date and time
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Date and time"</label>
                    <input
                        type="datetime-local"
                        prop:value=move || date_time.get()
                        on:input=move |ev| set_date_time.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Duration
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Duration (minutes)"</label>
                    <input
                        type="number"
                        min="5"
                        step="5"
                        prop:value=move || duration.get()
                        on:input=move |ev| set_duration.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Notes
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Notes (optional)"</label>
                    <textarea
                        rows="3"
                        prop:value=move || notes.get()
                        on:input=move |ev| set_notes.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Buttons
                <div class="flex space-x-3 pt-2">
                    <button
                        type="button"
                        on:click=move |_| on_close_for_cancel()
                        class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
