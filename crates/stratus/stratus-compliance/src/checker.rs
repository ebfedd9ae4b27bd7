use std::fmt;

use stratus_core::traits::IComplianceChecker;
use stratus_core::{ArchitectureSelection, ComplianceGap};

use crate::rules::{self, ComplianceRule};

/// Runs every registered rule over a selection.
pub struct ComplianceChecker {
    rules: Vec<Box<dyn ComplianceRule>>,
}

impl ComplianceChecker {
    /// Checker with the built-in rules.
    pub fn new() -> Self {
        Self {
            rules: rules::default_rules(),
        }
    }

    /// Append a custom rule after the existing ones.
    pub fn with_rule(mut self, rule: Box<dyn ComplianceRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registered rule identifiers, in evaluation order.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }
}

impl Default for ComplianceChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComplianceChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplianceChecker")
            .field("rules", &self.rule_ids())
            .finish()
    }
}

impl IComplianceChecker for ComplianceChecker {
    fn check_gaps(&self, selection: &ArchitectureSelection) -> Vec<ComplianceGap> {
        let gaps: Vec<ComplianceGap> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(selection))
            .collect();
        tracing::debug!(gaps = gaps.len(), rules = self.rules.len(), "compliance checked");
        gaps
    }
}
