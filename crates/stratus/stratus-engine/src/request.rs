use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stratus_core::{FocusCategory, ScoreVector};

/// Input to one design call.
///
/// Missing scores take the slider defaults and a missing use case is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    #[serde(default)]
    pub scores: ScoreVector,
    pub focus: FocusCategory,
    #[serde(default)]
    pub use_case: String,
    /// Stamped into both documents when set. Leave unset for reproducible output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl DesignRequest {
    pub fn new(scores: ScoreVector, focus: impl Into<FocusCategory>, use_case: impl Into<String>) -> Self {
        Self {
            scores,
            focus: focus.into(),
            use_case: use_case.into(),
            generated_at: None,
        }
    }

    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Free text the reasoning rules scan: the use case, a space, the focus label.
    pub fn reasoning_context(&self) -> String {
        format!("{} {}", self.use_case, self.focus.label())
    }
}
