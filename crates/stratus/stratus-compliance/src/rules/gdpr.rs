//! GDPR process reminders. They apply to every design.

use stratus_core::models::GapSeverity;
use stratus_core::{ArchitectureSelection, ComplianceGap};

use super::ComplianceRule;

fn advisory(rule_id: &str, message: &str) -> ComplianceGap {
    ComplianceGap {
        rule_id: rule_id.to_string(),
        severity: GapSeverity::Advisory,
        message: message.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DpiaReminderRule;

impl ComplianceRule for DpiaReminderRule {
    fn id(&self) -> &'static str {
        "dpia_reminder"
    }

    fn evaluate(&self, _selection: &ArchitectureSelection) -> Option<ComplianceGap> {
        Some(advisory(
            self.id(),
            "Ensure DPIA where required and document lawful basis for processing.",
        ))
    }
}

/// Storage limitation, GDPR Art. 5(1)(e).
#[derive(Debug, Clone, Copy, Default)]
pub struct RetentionScheduleRule;

impl ComplianceRule for RetentionScheduleRule {
    fn id(&self) -> &'static str {
        "retention_schedule"
    }

    fn evaluate(&self, _selection: &ArchitectureSelection) -> Option<ComplianceGap> {
        Some(advisory(
            self.id(),
            "Formalize data retention & deletion schedules per GDPR Art. 5(1)(e).",
        ))
    }
}
