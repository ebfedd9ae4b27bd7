use crate::models::RiskScore;
use crate::scores::ScoreVector;

/// Summarizes the exposure implied by a score vector.
pub trait IRiskScorer: Send + Sync {
    fn score(&self, scores: &ScoreVector) -> RiskScore;
}
