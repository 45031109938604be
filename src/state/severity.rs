//! Severity Tiers
//!
//! One threshold-parameterized mapping shared by mood ratings and the
//! PHQ-9/GAD-7 instruments, plus the risk-level color table.

/// Four-step severity band, ordered from best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Low,
    Moderate,
    High,
    Critical,
}

impl Tier {
    pub fn color(self) -> &'static str {
        match self {
            Tier::Low => "#2ecc71",
            Tier::Moderate => "#f39c12",
            Tier::High => "#e67e22",
            Tier::Critical => "#e74c3c",
        }
    }
}

/// PHQ-9 and GAD-7 share the same bands: <5, <10, <15, else critical.
pub const ASSESSMENT_THRESHOLDS: [f64; 3] = [5.0, 10.0, 15.0];

/// Mood bands on the 0-10 scale: >=8 best, >=6, >=4, else worst.
pub const MOOD_THRESHOLDS: [f64; 3] = [8.0, 6.0, 4.0];

/// Tier for scales where higher values are worse.
pub fn tier_ascending(value: f64, thresholds: [f64; 3]) -> Tier {
    if value < thresholds[0] {
        Tier::Low
    } else if value < thresholds[1] {
        Tier::Moderate
    } else if value < thresholds[2] {
        Tier::High
    } else {
        Tier::Critical
    }
}

/// Tier for scales where higher values are better.
pub fn tier_descending(value: f64, thresholds: [f64; 3]) -> Tier {
    if value >= thresholds[0] {
        Tier::Low
    } else if value >= thresholds[1] {
        Tier::Moderate
    } else if value >= thresholds[2] {
        Tier::High
    } else {
        Tier::Critical
    }
}

pub fn assessment_tier(score: u32) -> Tier {
    tier_ascending(score as f64, ASSESSMENT_THRESHOLDS)
}

pub fn mood_tier(mood: f64) -> Tier {
    tier_descending(mood, MOOD_THRESHOLDS)
}

pub fn assessment_color(score: u32) -> &'static str {
    assessment_tier(score).color()
}

pub fn mood_color(mood: f64) -> &'static str {
    mood_tier(mood).color()
}

/// Badge color for a risk level tag; unrecognized levels get the neutral
/// fallback.
pub fn risk_color(level: &str) -> &'static str {
    match level {
        "critical" => "#ff4444",
        "high" => "#ff8800",
        "moderate" => "#ffcc00",
        "low" => "#44ff44",
        _ => "#999",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_tier_boundaries() {
        assert_eq!(assessment_tier(4), Tier::Low);
        assert_eq!(assessment_tier(5), Tier::Moderate);
        assert_eq!(assessment_tier(9), Tier::Moderate);
        assert_eq!(assessment_tier(10), Tier::High);
        assert_eq!(assessment_tier(14), Tier::High);
        assert_eq!(assessment_tier(15), Tier::Critical);
        assert_eq!(assessment_tier(27), Tier::Critical);
    }

    #[test]
    fn test_mood_tier_boundaries() {
        assert_eq!(mood_tier(8.0), Tier::Low);
        assert_eq!(mood_tier(6.0), Tier::Moderate);
        assert_eq!(mood_tier(4.0), Tier::High);
        assert_eq!(mood_tier(3.0), Tier::Critical);
        assert_eq!(mood_tier(10.0), Tier::Low);
        assert_eq!(mood_tier(0.0), Tier::Critical);
    }

    #[test]
    fn test_both_instruments_share_bands() {
        // PHQ-9 tops out at 27, GAD-7 at 21; the bands are identical.
        for score in 0..=27 {
            assert_eq!(
                tier_ascending(score as f64, ASSESSMENT_THRESHOLDS),
                assessment_tier(score)
            );
        }
    }

    #[test]
    fn test_risk_color_fallback() {
        assert_eq!(risk_color("critical"), "#ff4444");
        assert_eq!(risk_color("low"), "#44ff44");
        assert_eq!(risk_color("unknown"), "#999");
        assert_eq!(risk_color(""), "#999");
    }
}
