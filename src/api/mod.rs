//! API Layer
//!
//! Typed HTTP access to the clinician REST backend.

pub mod client;

pub use client::*;
