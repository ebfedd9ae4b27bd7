use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{SCORE_MAX, SCORE_MIN};

/// Priority score clamped to [0, 100].
///
/// Construction never fails: values below 0 become 0, values above 100 become 100.
/// Deserialization clamps the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    /// Create a new Score, clamping to [0, 100].
    pub fn new(value: i64) -> Self {
        // Clamped into 0..=100, so the narrowing cast is lossless.
        Self(value.clamp(SCORE_MIN, SCORE_MAX) as u8)
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// `self >= threshold`.
    pub fn at_least(self, threshold: u8) -> bool {
        self.0 >= threshold
    }

    /// `self <= ceiling`.
    pub fn at_most(self, ceiling: u8) -> bool {
        self.0 <= ceiling
    }

    /// Value as f64, for the risk formula.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        i64::from(score.0)
    }
}
