//! Patient Directory Filters
//!
//! Pure filtering and search over the fetched patient list, applied in
//! memory after every fetch.

use chrono::{DateTime, Utc};

use crate::state::models::Patient;

/// Risk/inactivity filter applied before the name search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatientFilter {
    #[default]
    All,
    HighRisk,
    Inactive,
}

impl PatientFilter {
    pub fn from_key(key: &str) -> Self {
        match key {
            "high_risk" => PatientFilter::HighRisk,
            "inactive" => PatientFilter::Inactive,
            _ => PatientFilter::All,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            PatientFilter::All => "all",
            PatientFilter::HighRisk => "high_risk",
            PatientFilter::Inactive => "inactive",
        }
    }
}

/// Filter then search. The search is a case-insensitive substring match on
/// first name, last name, or username; an empty search is a no-op.
pub fn apply(
    patients: &[Patient],
    filter: PatientFilter,
    search: &str,
    now: DateTime<Utc>,
) -> Vec<Patient> {
    patients
        .iter()
        .filter(|p| matches_filter(p, filter, now))
        .filter(|p| matches_search(p, search))
        .cloned()
        .collect()
}

fn matches_filter(patient: &Patient, filter: PatientFilter, now: DateTime<Utc>) -> bool {
    match filter {
        PatientFilter::All => true,
        PatientFilter::HighRisk => patient.is_high_risk(),
        PatientFilter::Inactive => patient.is_inactive(now),
    }
}

pub fn matches_search(patient: &Patient, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    patient.first_name.to_lowercase().contains(&needle)
        || patient.last_name.to_lowercase().contains(&needle)
        || patient.username.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn patient(username: &str, first: &str, last: &str, risk: Option<&str>, last_session: Option<&str>) -> Patient {
        Patient {
            username: username.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.org", username),
            phone: None,
            dob: None,
            gender: None,
            risk_level: risk.map(str::to_string),
            risk_date: None,
            last_session: last_session.map(str::to_string),
            sessions_count: 0,
            treatment_goals: Vec::new(),
        }
    }

    fn roster() -> Vec<Patient> {
        vec![
            patient("adavis", "Alice", "Davis", Some("critical"), Some("2026-08-22T09:00:00+00:00")),
            patient("bkhan", "Bilal", "Khan", Some("high"), None),
            patient("cmorris", "Cara", "Morris", Some("moderate"), Some("2026-08-01T09:00:00+00:00")),
            patient("dlee", "Dana", "Lee", Some("low"), Some("2026-08-21T09:00:00+00:00")),
            patient("eruiz", "Elena", "Ruiz", None, None),
        ]
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_high_risk_is_subset_of_high_or_critical() {
        let input = roster();
        let out = apply(&input, PatientFilter::HighRisk, "", now());
        assert_eq!(out.len(), 2);
        for p in &out {
            assert!(matches!(p.risk_label(), "high" | "critical"));
            assert!(input.contains(p));
        }
    }

    #[test]
    fn test_inactive_selects_exactly_stale_or_missing_sessions() {
        let input = roster();
        let out = apply(&input, PatientFilter::Inactive, "", now());
        let names: Vec<&str> = out.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(names, vec!["bkhan", "cmorris", "eruiz"]);
    }

    #[test]
    fn test_all_filter_is_identity() {
        let input = roster();
        assert_eq!(apply(&input, PatientFilter::All, "", now()), input);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let input = roster();
        let out = apply(&input, PatientFilter::All, "MORR", now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].username, "cmorris");
    }

    #[test]
    fn test_search_matches_username_and_names_only() {
        let input = roster();
        // Matches username.
        assert_eq!(apply(&input, PatientFilter::All, "bkhan", now()).len(), 1);
        // Matches first name.
        assert_eq!(apply(&input, PatientFilter::All, "elena", now()).len(), 1);
        // Email domain must not match.
        assert!(apply(&input, PatientFilter::All, "example.org", now()).is_empty());
    }

    #[test]
    fn test_search_applies_after_filter() {
        let input = roster();
        // "a" appears in Alice/adavis and Cara and Dana and eruiz, but only
        // Alice survives the high-risk filter with a matching name.
        let out = apply(&input, PatientFilter::HighRisk, "alice", now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].username, "adavis");
    }

    #[test]
    fn test_filter_keys_round_trip() {
        for filter in [PatientFilter::All, PatientFilter::HighRisk, PatientFilter::Inactive] {
            assert_eq!(PatientFilter::from_key(filter.as_key()), filter);
        }
        assert_eq!(PatientFilter::from_key("garbage"), PatientFilter::All);
    }
}
