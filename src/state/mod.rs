//! State Management
//!
//! Global application state, view models, and the pure filtering and
//! severity logic shared by the pages.

pub mod filters;
pub mod global;
pub mod models;
pub mod severity;

pub use filters::PatientFilter;
pub use global::{provide_global_state, DetailTab, GlobalState, MessageTab, RequestToken};
pub use models::{
    tally_alerts, AlertCounts, Analytics, Assessments, MoodLog, Patient, RiskAlert, Session,
    SummaryTotals,
};
