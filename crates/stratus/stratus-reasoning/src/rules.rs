//! The shared rule table, in priority order.

use stratus_core::config::ReasoningConfig;
use stratus_core::keywords::contains_any;
use stratus_core::{ObservationKind, ScoreVector};

const STREAMING_KEYWORDS: &[&str] = &["iot", "sensor", "stream"];
const ANALYTICS_KEYWORDS: &[&str] = &["analytics"];
const INFERENCE_KEYWORDS: &[&str] = &["ml", "ai"];

/// One advisory rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReasoningRule {
    pub kind: ObservationKind,
    pub text: &'static str,
}

/// Threshold rules first, then keyword rules. The fallback is not part of the table.
pub const RULE_TABLE: [ReasoningRule; 7] = [
    ReasoningRule {
        kind: ObservationKind::LeastPrivilege,
        text: "Prioritize IAM least-privilege, KMS encryption, and private networking.",
    },
    ReasoningRule {
        kind: ObservationKind::Autoscaling,
        text: "Add auto-scaling groups and managed queues to handle bursts.",
    },
    ReasoningRule {
        kind: ObservationKind::EdgePlacement,
        text: "Place compute close to users and cache aggressively.",
    },
    ReasoningRule {
        kind: ObservationKind::CostControl,
        text: "Prefer serverless and spot options to reduce spend.",
    },
    ReasoningRule {
        kind: ObservationKind::StreamingIngestion,
        text: "Use streaming ingestion with schema-on-read and time-series buckets.",
    },
    ReasoningRule {
        kind: ObservationKind::Analytics,
        text: "Add batch + streaming analytics paths with cost-aware storage tiers.",
    },
    ReasoningRule {
        kind: ObservationKind::ContainerizedInference,
        text: "Containerize inference and isolate GPU/CPU pools for cost control.",
    },
];

/// Emitted when nothing in the table fires.
pub const FALLBACK: ReasoningRule = ReasoningRule {
    kind: ObservationKind::Balanced,
    text: "Balance tradeoffs using managed services and clear SLOs.",
};

impl ReasoningRule {
    /// Whether this rule applies.
    pub fn fires(&self, config: &ReasoningConfig, scores: &ScoreVector, context: &str) -> bool {
        match self.kind {
            ObservationKind::LeastPrivilege => scores.security().at_least(config.security_threshold),
            ObservationKind::Autoscaling => scores.scale().at_least(config.scale_threshold),
            ObservationKind::EdgePlacement => scores.latency().at_least(config.latency_threshold),
            ObservationKind::CostControl => scores.cost().at_most(config.cost_ceiling),
            ObservationKind::StreamingIngestion => contains_any(context, STREAMING_KEYWORDS),
            ObservationKind::Analytics => contains_any(context, ANALYTICS_KEYWORDS),
            ObservationKind::ContainerizedInference => contains_any(context, INFERENCE_KEYWORDS),
            ObservationKind::Balanced => false,
        }
    }
}
