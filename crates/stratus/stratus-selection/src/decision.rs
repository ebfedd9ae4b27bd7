//! Individual rows of the decision table.

use stratus_core::config::SelectionConfig;
use stratus_core::keywords::contains_any;
use stratus_core::{Component, FocusCategory, ScoreVector};

/// Focus-label keywords that imply stream ingestion.
pub const STREAM_FOCUS_KEYWORDS: &[&str] = &["iot", "analytics", "stream"];

/// performance ≥ threshold → container-orchestrated, else serverless.
pub fn compute(config: &SelectionConfig, scores: &ScoreVector) -> Component {
    if scores.performance().at_least(config.performance_threshold) {
        Component::ContainerCompute
    } else {
        Component::ServerlessCompute
    }
}

/// performance and security both at threshold → HA relational, else standard.
pub fn database(config: &SelectionConfig, scores: &ScoreVector) -> Component {
    if scores.performance().at_least(config.performance_threshold)
        && scores.security().at_least(config.security_threshold)
    {
        Component::RelationalDbHa
    } else {
        Component::RelationalDbStandard
    }
}

/// latency ≥ threshold → distributed cache, else local in-memory.
pub fn cache(config: &SelectionConfig, scores: &ScoreVector) -> Component {
    if scores.latency().at_least(config.latency_threshold) {
        Component::DistributedCache
    } else {
        Component::LocalCache
    }
}

/// scale ≥ threshold → async queue.
pub fn queue(config: &SelectionConfig, scores: &ScoreVector) -> Option<Component> {
    scores
        .scale()
        .at_least(config.scale_threshold)
        .then_some(Component::AsyncQueue)
}

/// Recognized focus whose label mentions IoT, analytics or streaming → stream ingestion.
/// Unrecognized focus labels never add a stream.
pub fn stream(focus: &FocusCategory) -> Option<Component> {
    (focus.is_recognized() && contains_any(focus.label(), STREAM_FOCUS_KEYWORDS))
        .then_some(Component::StreamIngestion)
}
