//! View Models
//!
//! Transient shapes deserialized from API responses. Nothing here is
//! persisted by the dashboard; every value is overwritten on the next fetch.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// A patient on the clinician's caseload.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Patient {
    #[serde(default)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub risk_date: Option<String>,
    #[serde(default)]
    pub last_session: Option<String>,
    #[serde(default)]
    pub sessions_count: u32,
    #[serde(default)]
    pub treatment_goals: Vec<TreatmentGoal>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Risk level with the neutral fallback for absent values.
    pub fn risk_label(&self) -> &str {
        self.risk_level.as_deref().unwrap_or("unknown")
    }

    pub fn is_high_risk(&self) -> bool {
        matches!(self.risk_label(), "high" | "critical")
    }

    /// A patient is inactive when they have no recorded session, or their
    /// last session is at least seven days old.
    pub fn is_inactive(&self, now: DateTime<Utc>) -> bool {
        match self.last_session.as_deref().and_then(parse_timestamp) {
            Some(ts) => ts <= now - chrono::Duration::days(7),
            None => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TreatmentGoal {
    pub goal_text: String,
    #[serde(default)]
    pub status: String,
}

/// A single mood log entry (mood on a 0-10 scale).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MoodLog {
    pub date: String,
    pub mood: f64,
    #[serde(default)]
    pub energy: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One standardized instrument result (PHQ-9 or GAD-7).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AssessmentResult {
    pub score: u32,
    #[serde(default)]
    pub interpretation: Option<String>,
    #[serde(default)]
    pub date: String,
}

/// Assessment payload; either instrument may be absent.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Assessments {
    #[serde(default)]
    pub phq9: Option<AssessmentResult>,
    #[serde(default)]
    pub gad7: Option<AssessmentResult>,
}

/// A therapy session record.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Session {
    pub date: String,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub mood_before: Option<f64>,
    #[serde(default)]
    pub mood_after: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A clinician-wide risk alert.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct RiskAlert {
    pub alert_id: i64,
    pub patient_username: String,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub acknowledged: bool,
}

impl RiskAlert {
    pub fn risk_label(&self) -> &str {
        self.risk_level.as_deref().unwrap_or("unknown")
    }
}

/// Alert counts per severity plus the acknowledgement backlog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlertCounts {
    pub critical: usize,
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    pub unreviewed: usize,
}

/// Tally an alert feed by severity. `unreviewed` counts unacknowledged
/// alerts regardless of severity, so acknowledged + unreviewed == total.
pub fn tally_alerts(alerts: &[RiskAlert]) -> AlertCounts {
    let mut counts = AlertCounts::default();
    for alert in alerts {
        match alert.risk_label() {
            "critical" => counts.critical += 1,
            "high" => counts.high += 1,
            "moderate" => counts.moderate += 1,
            "low" => counts.low += 1,
            _ => {}
        }
        if !alert.acknowledged {
            counts.unreviewed += 1;
        }
    }
    counts
}

/// Dashboard totals for the overview page.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize)]
pub struct SummaryTotals {
    #[serde(default)]
    pub total_patients: u32,
    #[serde(default)]
    pub sessions_this_week: u32,
    #[serde(default)]
    pub critical_patients: u32,
}

/// One point of the mood time series.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MoodPoint {
    pub date: String,
    pub mood: f64,
}

/// One bar of the activity series. The backend labels points either by
/// week or by date, and values arrive as `hours` or `value`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ActivityPoint {
    #[serde(default)]
    pub week: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
}

impl ActivityPoint {
    pub fn label(&self) -> &str {
        self.week
            .as_deref()
            .or(self.date.as_deref())
            .unwrap_or("")
    }

    pub fn amount(&self) -> f64 {
        self.hours.or(self.value).unwrap_or(0.0)
    }
}

/// Time-series payload for the patient charts tab.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub mood_data: Vec<MoodPoint>,
    #[serde(default)]
    pub activity_data: Vec<ActivityPoint>,
}

/// Parse a backend timestamp; accepts RFC 3339 or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// Format a backend timestamp for display, passing unparseable input through.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(level: Option<&str>, acknowledged: bool) -> RiskAlert {
        RiskAlert {
            alert_id: 1,
            patient_username: "pat".to_string(),
            patient_name: "Pat Doe".to_string(),
            risk_level: level.map(str::to_string),
            trigger: None,
            date: "2026-01-01".to_string(),
            acknowledged,
        }
    }

    #[test]
    fn test_tally_counts_per_level() {
        let alerts = vec![
            alert(Some("critical"), false),
            alert(Some("high"), true),
            alert(Some("moderate"), false),
            alert(Some("low"), true),
            alert(Some("critical"), true),
        ];
        let counts = tally_alerts(&alerts);
        assert_eq!(counts.critical, 2);
        assert_eq!(counts.high, 1);
        assert_eq!(counts.moderate, 1);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.unreviewed, 2);
    }

    #[test]
    fn test_tally_invariant_acknowledged_plus_unreviewed() {
        let alerts = vec![
            alert(Some("high"), false),
            alert(Some("low"), false),
            alert(None, true),
            alert(Some("critical"), true),
            alert(Some("nonsense"), false),
        ];
        let counts = tally_alerts(&alerts);
        let acknowledged = alerts.iter().filter(|a| a.acknowledged).count();
        assert_eq!(acknowledged + counts.unreviewed, alerts.len());
    }

    #[test]
    fn test_missing_risk_level_falls_back_to_unknown() {
        let a = alert(None, false);
        assert_eq!(a.risk_label(), "unknown");
    }

    #[test]
    fn test_inactive_without_last_session() {
        let patient = Patient {
            username: "jdoe".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: String::new(),
            phone: None,
            dob: None,
            gender: None,
            risk_level: None,
            risk_date: None,
            last_session: None,
            sessions_count: 0,
            treatment_goals: Vec::new(),
        };
        assert!(patient.is_inactive(Utc::now()));
    }

    #[test]
    fn test_inactive_boundary_at_seven_days() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
        let mut patient = Patient {
            username: "jdoe".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: String::new(),
            phone: None,
            dob: None,
            gender: None,
            risk_level: None,
            risk_date: None,
            last_session: Some("2026-08-16T12:00:00+00:00".to_string()),
            sessions_count: 3,
            treatment_goals: Vec::new(),
        };
        // Exactly seven days old counts as inactive.
        assert!(patient.is_inactive(now));

        patient.last_session = Some("2026-08-17T12:00:00+00:00".to_string());
        assert!(!patient.is_inactive(now));
    }

    #[test]
    fn test_parse_timestamp_bare_date() {
        let ts = parse_timestamp("2026-03-05").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_format_date_passes_garbage_through() {
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_activity_point_alternate_keys() {
        let by_week = ActivityPoint {
            week: Some("W12".to_string()),
            date: None,
            hours: Some(6.5),
            value: None,
        };
        assert_eq!(by_week.label(), "W12");
        assert_eq!(by_week.amount(), 6.5);

        let by_date = ActivityPoint {
            week: None,
            date: Some("2026-03-05".to_string()),
            hours: None,
            value: Some(4.0),
        };
        assert_eq!(by_date.label(), "2026-03-05");
        assert_eq!(by_date.amount(), 4.0);
    }
}
