use crate::models::{AdvisorRole, Observation};
use crate::scores::ScoreVector;

/// Produces short advisory observations for one role.
pub trait IReasoner: Send + Sync {
    /// Observations for `role`, given the scores and the free-text context.
    fn reason(&self, role: &AdvisorRole, scores: &ScoreVector, context: &str) -> Vec<Observation>;
}
