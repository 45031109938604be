//! Global Application State
//!
//! Reactive state management using Leptos signals. The single patient
//! selection, the fetched lists, and the notification channel all live
//! here and are provided to the component tree via context.

use leptos::*;

use crate::state::filters::PatientFilter;
use crate::state::models::{Patient, RiskAlert};

/// Subtabs of the patient detail section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Summary,
    Profile,
    Moods,
    Assessments,
    Sessions,
    Alerts,
    Charts,
}

impl DetailTab {
    pub const ALL: [DetailTab; 7] = [
        DetailTab::Summary,
        DetailTab::Profile,
        DetailTab::Moods,
        DetailTab::Assessments,
        DetailTab::Sessions,
        DetailTab::Alerts,
        DetailTab::Charts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Summary => "Summary",
            DetailTab::Profile => "Profile",
            DetailTab::Moods => "Moods",
            DetailTab::Assessments => "Assessments",
            DetailTab::Sessions => "Sessions",
            DetailTab::Alerts => "Alerts",
            DetailTab::Charts => "Charts",
        }
    }
}

/// Subtabs of the messages section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageTab {
    #[default]
    Inbox,
    Sent,
    Compose,
}

impl MessageTab {
    pub const ALL: [MessageTab; 3] = [MessageTab::Inbox, MessageTab::Sent, MessageTab::Compose];

    pub fn label(self) -> &'static str {
        match self {
            MessageTab::Inbox => "Inbox",
            MessageTab::Sent => "Sent",
            MessageTab::Compose => "Compose",
        }
    }
}

/// Monotonically increasing per-view request counter. A response is only
/// applied when its token is still current, so a stale fetch can never
/// overwrite a newer one.
#[derive(Clone, Copy)]
pub struct RequestToken(RwSignal<u64>);

impl RequestToken {
    pub fn new() -> Self {
        Self(create_rw_signal(0))
    }

    /// Start a request and return its token.
    pub fn begin(&self) -> u64 {
        self.0.update(|seq| *seq += 1);
        self.0.get_untracked()
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get_untracked() == token
    }
}

impl Default for RequestToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Single-slot patient selection; detail views read the latest value.
    pub selected_patient: RwSignal<Option<Patient>>,
    /// Active patient-detail subtab.
    pub detail_tab: RwSignal<DetailTab>,
    /// Last fetched patient list.
    pub patients: RwSignal<Vec<Patient>>,
    /// Risk/inactivity filter for the directory.
    pub patient_filter: RwSignal<PatientFilter>,
    /// Name/username search for the directory.
    pub patient_search: RwSignal<String>,
    /// Clinician-wide alert feed.
    pub alerts: RwSignal<Vec<RiskAlert>>,
    /// Active message subtab.
    pub message_tab: RwSignal<MessageTab>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display in the banner.
    pub error: RwSignal<Option<String>>,
    /// Request guards, one per independently fetched view.
    pub patients_req: RequestToken,
    pub detail_req: RequestToken,
    pub risk_req: RequestToken,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        selected_patient: create_rw_signal(None),
        detail_tab: create_rw_signal(DetailTab::default()),
        patients: create_rw_signal(Vec::new()),
        patient_filter: create_rw_signal(PatientFilter::default()),
        patient_search: create_rw_signal(String::new()),
        alerts: create_rw_signal(Vec::new()),
        message_tab: create_rw_signal(MessageTab::default()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        patients_req: RequestToken::new(),
        detail_req: RequestToken::new(),
        risk_req: RequestToken::new(),
    };

    provide_context(state);
}

impl GlobalState {
    /// Replace the selection and open the detail view on the Summary tab.
    pub fn select_patient(&self, patient: Patient) {
        self.selected_patient.set(Some(patient));
        self.detail_tab.set(DetailTab::Summary);
    }

    /// Clear the selection and restore the unfiltered directory.
    pub fn close_patient_detail(&self) {
        self.selected_patient.set(None);
        self.patient_filter.set(PatientFilter::All);
        self.patient_search.set(String::new());
    }

    /// Show an error banner (auto-clears after 5 seconds).
    pub fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Success is log-only; there is no success toast yet.
    pub fn report_success(&self, message: &str) {
        web_sys::console::log_1(&message.into());
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GlobalState {
        GlobalState {
            selected_patient: create_rw_signal(None),
            detail_tab: create_rw_signal(DetailTab::Charts),
            patients: create_rw_signal(Vec::new()),
            patient_filter: create_rw_signal(PatientFilter::HighRisk),
            patient_search: create_rw_signal("smith".to_string()),
            alerts: create_rw_signal(Vec::new()),
            message_tab: create_rw_signal(MessageTab::Inbox),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            patients_req: RequestToken::new(),
            detail_req: RequestToken::new(),
            risk_req: RequestToken::new(),
        }
    }

    #[test]
    fn test_request_token_discards_stale_responses() {
        let runtime = create_runtime();

        let token = RequestToken::new();
        let first = token.begin();
        let second = token.begin();
        assert!(!token.is_current(first));
        assert!(token.is_current(second));

        runtime.dispose();
    }

    #[test]
    fn test_close_detail_resets_filter_and_search() {
        let runtime = create_runtime();

        let state = test_state();
        state.close_patient_detail();
        assert!(state.selected_patient.get_untracked().is_none());
        assert_eq!(state.patient_filter.get_untracked(), PatientFilter::All);
        assert!(state.patient_search.get_untracked().is_empty());

        runtime.dispose();
    }

    #[test]
    fn test_detail_tab_defaults_to_summary() {
        assert_eq!(DetailTab::default(), DetailTab::Summary);
        assert_eq!(DetailTab::ALL.len(), 7);
    }
}
