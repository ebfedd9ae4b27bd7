//! Engine configuration, loaded from TOML with per-section defaults.

pub mod defaults;
mod narrative_config;
mod observability_config;
mod reasoning_config;
mod selection_config;

pub use narrative_config::{LabelStyle, NarrativeConfig};
pub use observability_config::{ObservabilityConfig, LOG_LEVELS};
pub use reasoning_config::ReasoningConfig;
pub use selection_config::SelectionConfig;

use serde::{Deserialize, Serialize};

use crate::constants::SCORE_MAX;
use crate::errors::{StratusError, StratusResult};

/// Root configuration for the whole engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StratusConfig {
    pub reasoning: ReasoningConfig,
    pub selection: SelectionConfig,
    pub narrative: NarrativeConfig,
    pub observability: ObservabilityConfig,
}

impl StratusConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> StratusResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> StratusResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reject values the engine cannot honor.
    pub fn validate(&self) -> StratusResult<()> {
        let thresholds = [
            ("reasoning.security_threshold", self.reasoning.security_threshold),
            ("reasoning.scale_threshold", self.reasoning.scale_threshold),
            ("reasoning.latency_threshold", self.reasoning.latency_threshold),
            ("reasoning.cost_ceiling", self.reasoning.cost_ceiling),
            ("selection.performance_threshold", self.selection.performance_threshold),
            ("selection.security_threshold", self.selection.security_threshold),
            ("selection.latency_threshold", self.selection.latency_threshold),
            ("selection.scale_threshold", self.selection.scale_threshold),
        ];
        for (field, value) in thresholds {
            if i64::from(value) > SCORE_MAX {
                return Err(invalid(field, format!("{value} exceeds {SCORE_MAX}")));
            }
        }

        if self.reasoning.max_observations == 0 {
            return Err(invalid("reasoning.max_observations", "must be at least 1".into()));
        }
        if self.narrative.max_explanation_lines == 0 {
            return Err(invalid(
                "narrative.max_explanation_lines",
                "must be at least 1".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(invalid(
                "observability.log_level",
                format!("unknown level {:?}", self.observability.log_level),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> StratusError {
    StratusError::InvalidConfig {
        field: field.to_string(),
        reason,
    }
}
