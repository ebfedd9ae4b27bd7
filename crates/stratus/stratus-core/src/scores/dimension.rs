use serde::{Deserialize, Serialize};
use std::fmt;

/// The six design-priority axes, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Latency,
    Load,
    Cost,
    Performance,
    Security,
    Scale,
}

impl Dimension {
    /// All variants in canonical order.
    pub const ALL: [Dimension; 6] = [
        Self::Latency,
        Self::Load,
        Self::Cost,
        Self::Performance,
        Self::Security,
        Self::Scale,
    ];

    /// Short key, as used in the closing explanation line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latency => "latency",
            Self::Load => "load",
            Self::Cost => "cost",
            Self::Performance => "performance",
            Self::Security => "security",
            Self::Scale => "scale",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Latency => "Latency",
            Self::Load => "Load Balancing",
            Self::Cost => "Cloud Cost",
            Self::Performance => "Performance",
            Self::Security => "Security",
            Self::Scale => "Scalability",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
