//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod banner;
pub mod chart;
pub mod loading;
pub mod nav;

pub use banner::ErrorBanner;
pub use chart::{ActivityChart, MoodChart};
pub use loading::Loading;
pub use nav::Nav;
