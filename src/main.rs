//! CareDash
//!
//! Clinician dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Patient directory with risk/inactivity filter and search
//! - Patient detail views: summary, profile, moods, assessments,
//!   sessions, alerts, charts
//! - Risk alert monitoring with severity tallies
//! - Messaging and appointment scheduling
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It is a thin presentation layer over the clinician REST API;
//! authentication, storage, and risk computation live server-side.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
