use serde::{Deserialize, Serialize};
use std::fmt;

/// Which reasoning rule produced an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationKind {
    LeastPrivilege,
    Autoscaling,
    EdgePlacement,
    CostControl,
    StreamingIngestion,
    Analytics,
    ContainerizedInference,
    Balanced,
}

impl ObservationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeastPrivilege => "least_privilege",
            Self::Autoscaling => "autoscaling",
            Self::EdgePlacement => "edge_placement",
            Self::CostControl => "cost_control",
            Self::StreamingIngestion => "streaming_ingestion",
            Self::Analytics => "analytics",
            Self::ContainerizedInference => "containerized_inference",
            Self::Balanced => "balanced",
        }
    }
}

/// A single advisory bullet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub kind: ObservationKind,
    pub text: String,
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
