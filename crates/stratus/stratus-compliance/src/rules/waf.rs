use stratus_core::models::GapSeverity;
use stratus_core::{ArchitectureSelection, ComplianceGap, SecurityControl};

use super::ComplianceRule;

/// Raises an action item when the security stack has no WAF.
///
/// The baseline stack always carries one, so this only fires for selections
/// whose stack was replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct WafPresenceRule;

impl ComplianceRule for WafPresenceRule {
    fn id(&self) -> &'static str {
        "waf_presence"
    }

    fn evaluate(&self, selection: &ArchitectureSelection) -> Option<ComplianceGap> {
        if selection.has_control(SecurityControl::Waf) {
            return None;
        }
        Some(ComplianceGap {
            rule_id: self.id().to_string(),
            severity: GapSeverity::Action,
            message: "Add WAF for L7 filtering.".to_string(),
        })
    }
}
