use serde::{Deserialize, Serialize};

use super::defaults;

/// How component names are rendered in generated documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Provider-neutral names ("managed async queue").
    #[default]
    Generic,
    /// AWS service names ("Amazon SQS").
    Aws,
}

/// Narrative composition configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Line cap for the architecture explanation. The score echo line always survives.
    pub max_explanation_lines: usize,
    /// Component naming used by the explanation and both documents.
    pub label_style: LabelStyle,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            max_explanation_lines: defaults::DEFAULT_MAX_EXPLANATION_LINES,
            label_style: LabelStyle::default(),
        }
    }
}
