use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::RISK_MAX;

/// Risk score in [0, 100], rounded to one decimal. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Clamp to [0, 100] and round to one decimal place.
    pub fn new(raw: f64) -> Self {
        let clamped = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, RISK_MAX) };
        Self(round_tenth(clamped))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn level(self) -> RiskLevel {
        RiskLevel::from_score(self.0)
    }
}

/// Nearest tenth of the exact binary value; exact ties go to the even digit.
fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Qualitative risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Self::High
        } else if score >= 50.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
