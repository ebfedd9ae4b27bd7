use serde::{Deserialize, Serialize};

use super::defaults;

/// Advisory reasoning thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasoningConfig {
    /// Security score at or above which the least-privilege note fires.
    pub security_threshold: u8,
    /// Scale score at or above which the autoscaling note fires.
    pub scale_threshold: u8,
    /// Latency score at or above which the edge-placement note fires.
    pub latency_threshold: u8,
    /// Cost score at or below which the serverless/spot note fires.
    pub cost_ceiling: u8,
    /// Maximum observations returned per advisor.
    pub max_observations: usize,
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            security_threshold: defaults::DEFAULT_REASONING_SECURITY_THRESHOLD,
            scale_threshold: defaults::DEFAULT_REASONING_SCALE_THRESHOLD,
            latency_threshold: defaults::DEFAULT_REASONING_LATENCY_THRESHOLD,
            cost_ceiling: defaults::DEFAULT_REASONING_COST_CEILING,
            max_observations: defaults::DEFAULT_MAX_OBSERVATIONS,
        }
    }
}
