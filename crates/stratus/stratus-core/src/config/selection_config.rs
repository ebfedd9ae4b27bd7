use serde::{Deserialize, Serialize};

use super::defaults;

/// Decision-table thresholds for the architecture selector. All boundaries are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Performance score selecting container-orchestrated compute.
    pub performance_threshold: u8,
    /// Security score that, together with performance, selects the HA database.
    pub security_threshold: u8,
    /// Latency score selecting the managed distributed cache.
    pub latency_threshold: u8,
    /// Scale score selecting the managed async queue.
    pub scale_threshold: u8,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            performance_threshold: defaults::DEFAULT_SELECTION_PERFORMANCE_THRESHOLD,
            security_threshold: defaults::DEFAULT_SELECTION_SECURITY_THRESHOLD,
            latency_threshold: defaults::DEFAULT_SELECTION_LATENCY_THRESHOLD,
            scale_threshold: defaults::DEFAULT_SELECTION_SCALE_THRESHOLD,
        }
    }
}
