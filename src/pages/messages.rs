//! Messages Page
//!
//! Inbox/Sent placeholders and the compose form. There is no conversation
//! threading or read-state tracking yet.

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, MessageTab};

/// Messages page component
#[component]
pub fn Messages() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let tab = state.message_tab;

    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Messages"</h1>
                <p class="text-gray-400 mt-1">"Exchange messages with your patients"</p>
            </div>

            // Subtab controls, identified by their bound tab value
            <div class="flex gap-2">
                {MessageTab::ALL.into_iter().map(|t| view! {
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

            {move || match tab.get() {
                MessageTab::Inbox => view! {
                    <Placeholder text="No messages in inbox" />
                }.into_view(),
                MessageTab::Sent => view! {
                    <Placeholder text="No sent messages" />
                }.into_view(),
                MessageTab::Compose => view! { <ComposeForm /> }.into_view(),
            }}
        </div>
    }
}

/// Static placeholder panel for the inbox and sent views
#[component]
fn Placeholder(text: &'static str) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <p class="text-center text-gray-400 py-12">{text}</p>
        </section>
    }
}

/// New-message form
#[component]
fn ComposeForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (recipient, set_recipient) = create_signal(String::new());
    let (subject, set_subject) = create_signal(String::new());
    let (body, set_body) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let to = recipient.get();
        let text = body.get();

        if to.is_empty() || text.is_empty() {
            state.show_error("Please fill in required fields");
            return;
        }

        set_sending.set(true);

        let state_for_send = state.clone();
        spawn_local(async move {
            match api::send_message(&to, &text).await {
                Ok(()) => {
                    set_recipient.set(String::new());
                    set_subject.set(String::new());
                    set_body.set(String::new());
                    state_for_send.report_success("Message sent successfully");
                    state_for_send.message_tab.set(MessageTab::Inbox);
                }
                Err(e) => {
                    state_for_send.show_error(&e);
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"New Message"</h2>

            <form on:submit=on_submit class="space-y-4">
                // Recipient
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Recipient username"</label>
                    <input
                        type="text"
                        placeholder="e.g., jdoe"
                        prop:value=move || recipient.get()
                        on:input=move |ev| set_recipient.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Subject (display-only; the wire format carries no subject)
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Subject"</label>
                    <input
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| set_subject.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Body
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Message"</label>
                    <textarea
                        rows="5"
                        prop:value=move || body.get()
                        on:input=move |ev| set_body.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || sending.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}
