//! Pages
//!
//! Top-level page components for each route.

pub mod appointments;
pub mod messages;
pub mod overview;
pub mod patient_detail;
pub mod patients;
pub mod risk;

pub use appointments::Appointments;
pub use messages::Messages;
pub use overview::Overview;
pub use patients::Patients;
pub use risk::RiskMonitor;
