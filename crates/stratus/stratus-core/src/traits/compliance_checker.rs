use crate::models::{ArchitectureSelection, ComplianceGap};

/// Flags regulatory considerations a selection leaves open.
pub trait IComplianceChecker: Send + Sync {
    /// Gaps in rule-declaration order.
    fn check_gaps(&self, selection: &ArchitectureSelection) -> Vec<ComplianceGap>;
}
