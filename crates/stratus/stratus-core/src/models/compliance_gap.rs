use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgent a compliance gap is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    /// A control is missing from the selection.
    Action,
    /// A process reminder that applies to every design.
    Advisory,
}

/// An advisory flagging a regulatory consideration the selection does not fully address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplianceGap {
    /// Identifier of the rule that raised the gap.
    pub rule_id: String,
    pub severity: GapSeverity,
    pub message: String,
}

impl fmt::Display for ComplianceGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
