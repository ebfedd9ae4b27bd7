//! Compliance rules. Each produces at most one gap.

mod gdpr;
mod waf;

pub use gdpr::{DpiaReminderRule, RetentionScheduleRule};
pub use waf::WafPresenceRule;

use stratus_core::{ArchitectureSelection, ComplianceGap};

/// A single compliance check over a selection.
pub trait ComplianceRule: Send + Sync {
    /// Stable identifier, reported on every gap the rule raises.
    fn id(&self) -> &'static str;

    /// The gap this rule raises for `selection`, if any.
    fn evaluate(&self, selection: &ArchitectureSelection) -> Option<ComplianceGap>;
}

/// Built-in rules in declaration order.
pub fn default_rules() -> Vec<Box<dyn ComplianceRule>> {
    vec![
        Box::new(WafPresenceRule),
        Box::new(DpiaReminderRule),
        Box::new(RetentionScheduleRule),
    ]
}
