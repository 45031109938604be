//! HTTP API Client
//!
//! Functions for communicating with the clinician REST API.

use gloo_net::http::Request;

use crate::state::models::{
    Analytics, Assessments, MoodLog, Patient, RiskAlert, Session, SummaryTotals,
};

/// Default API base URL (empty = same origin, server-relative paths)
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("caredash_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct PatientListResponse {
    #[serde(default)]
    patients: Vec<Patient>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct MoodLogsResponse {
    #[serde(default)]
    pub week_avg: f64,
    #[serde(default)]
    pub logs: Vec<MoodLog>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct SessionsResponse {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

#[derive(Debug, serde::Deserialize)]
struct AlertsResponse {
    #[serde(default)]
    alerts: Vec<RiskAlert>,
}

/// Request body for creating an appointment.
#[derive(Debug, serde::Serialize)]
pub struct AppointmentRequest {
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub notes: String,
}

// ============ Request Plumbing ============

/// Fetch the anti-forgery token; a failed fetch falls back to an empty
/// token rather than blocking the primary request.
pub async fn fetch_csrf_token() -> String {
    #[derive(serde::Deserialize)]
    struct TokenResponse {
        #[serde(default)]
        token: Option<String>,
    }

    let url = format!("{}/api/csrf-token", get_api_base());
    let response = match Request::get(&url).send().await {
        Ok(response) => response,
        Err(_) => {
            web_sys::console::warn_1(&"Could not fetch CSRF token".into());
            return String::new();
        }
    };

    match response.json::<TokenResponse>().await {
        Ok(body) => body.token.unwrap_or_default(),
        Err(_) => {
            web_sys::console::warn_1(&"Could not fetch CSRF token".into());
            String::new()
        }
    }
}

/// Extract the server's `error` field from a non-success response, falling
/// back to a generic status-coded message.
async fn response_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let error: ApiError = response.json().await.unwrap_or(ApiError {
        error: format!("API error: {}", status),
        code: None,
    });
    error.error
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

async fn post_json<B: serde::Serialize>(path: &str, body: &B) -> Result<(), String> {
    let token = fetch_csrf_token().await;

    let response = Request::post(&format!("{}{}", get_api_base(), path))
        .header("X-CSRF-Token", &token)
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    // Success bodies are acknowledgement-only; discard them.
    let _ = response.json::<serde_json::Value>().await;
    Ok(())
}

// ============ API Functions ============

/// Fetch dashboard totals for the overview page
pub async fn fetch_summary() -> Result<SummaryTotals, String> {
    get_json("/api/clinician/summary").await
}

/// Fetch the clinician's full patient list
pub async fn fetch_patients() -> Result<Vec<Patient>, String> {
    let result: PatientListResponse = get_json("/api/clinician/patients").await?;
    Ok(result.patients)
}

/// Fetch full detail for a single patient
pub async fn fetch_patient(username: &str) -> Result<Patient, String> {
    let mut patient: Patient =
        get_json(&format!("/api/clinician/patient/{}", username)).await?;
    // The detail payload may omit the username; the caller supplied it.
    if patient.username.is_empty() {
        patient.username = username.to_string();
    }
    Ok(patient)
}

/// Fetch a patient's mood history with its weekly average
pub async fn fetch_mood_logs(username: &str) -> Result<MoodLogsResponse, String> {
    get_json(&format!("/api/clinician/patient/{}/mood-logs", username)).await
}

/// Fetch a patient's PHQ-9/GAD-7 results
pub async fn fetch_assessments(username: &str) -> Result<Assessments, String> {
    get_json(&format!("/api/clinician/patient/{}/assessments", username)).await
}

/// Fetch a patient's therapy sessions
pub async fn fetch_sessions(username: &str) -> Result<SessionsResponse, String> {
    get_json(&format!("/api/clinician/patient/{}/sessions", username)).await
}

/// Fetch a patient's chart time series
pub async fn fetch_analytics(username: &str) -> Result<Analytics, String> {
    get_json(&format!("/api/clinician/patient/{}/analytics", username)).await
}

/// Fetch the clinician-wide risk alert feed
pub async fn fetch_risk_alerts() -> Result<Vec<RiskAlert>, String> {
    let result: AlertsResponse = get_json("/api/clinician/risk-alerts").await?;
    Ok(result.alerts)
}

/// Send a message to a patient
pub async fn send_message(recipient_username: &str, message: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct MessageRequest {
        recipient_username: String,
        message: String,
    }

    post_json(
        "/api/clinician/message",
        &MessageRequest {
            recipient_username: recipient_username.to_string(),
            message: message.to_string(),
        },
    )
    .await
}

/// Create an appointment for a patient
pub async fn create_appointment(
    username: &str,
    request: &AppointmentRequest,
) -> Result<(), String> {
    post_json(
        &format!("/api/clinician/patient/{}/appointments", username),
        request,
    )
    .await
}
