use stratus_core::traits::IRiskScorer;
use stratus_core::{RiskScore, ScoreVector};

use crate::formula::{self, RiskBreakdown};

/// Stateless risk scorer. Coefficients are constants in [`formula`], not
/// configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score with every weighted term exposed.
    pub fn breakdown(&self, scores: &ScoreVector) -> RiskBreakdown {
        formula::compute_breakdown(scores)
    }
}

impl IRiskScorer for RiskScorer {
    fn score(&self, scores: &ScoreVector) -> RiskScore {
        let risk = formula::compute(scores);
        tracing::debug!(risk = %risk, level = %risk.level(), "risk scored");
        risk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        let scorer = RiskScorer::new();
        assert_eq!(scorer.score(&ScoreVector::uniform(0)).value(), 90.0);
        assert_eq!(scorer.score(&ScoreVector::uniform(100)).value(), 40.0);
    }
}
