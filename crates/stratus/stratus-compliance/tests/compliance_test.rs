//! Compliance gaps: ordering, WAF rule liveness, custom rules.

use stratus_compliance::{ComplianceChecker, ComplianceRule};
use stratus_core::models::GapSeverity;
use stratus_core::traits::IComplianceChecker;
use stratus_core::{ArchitectureSelection, ComplianceGap, SecurityControl};
use test_fixtures::{all_selections, full_selection, minimal_selection};

const DPIA: &str = "Ensure DPIA where required and document lawful basis for processing.";
const RETENTION: &str = "Formalize data retention & deletion schedules per GDPR Art. 5(1)(e).";

fn messages(gaps: &[ComplianceGap]) -> Vec<&str> {
    gaps.iter().map(|gap| gap.message.as_str()).collect()
}

#[test]
fn baseline_stack_yields_two_advisories() {
    let gaps = ComplianceChecker::new().check_gaps(&full_selection());
    assert_eq!(messages(&gaps), vec![DPIA, RETENTION]);
    assert!(gaps.iter().all(|gap| gap.severity == GapSeverity::Advisory));
    assert_eq!(gaps[0].rule_id, "dpia_reminder");
    assert_eq!(gaps[1].rule_id, "retention_schedule");
}

#[test]
fn never_empty_for_any_selection() {
    let checker = ComplianceChecker::default();
    for selection in all_selections() {
        assert!(checker.check_gaps(&selection).len() >= 2);
    }
}

#[test]
fn missing_waf_comes_first() {
    let selection = minimal_selection().with_security_stack(vec![
        SecurityControl::Iam,
        SecurityControl::Kms,
        SecurityControl::SecurityGroups,
        SecurityControl::PrivateSubnets,
    ]);
    let gaps = ComplianceChecker::new().check_gaps(&selection);
    assert_eq!(
        messages(&gaps),
        vec!["Add WAF for L7 filtering.", DPIA, RETENTION]
    );
    assert_eq!(gaps[0].severity, GapSeverity::Action);
    assert_eq!(gaps[0].rule_id, "waf_presence");
}

#[test]
fn empty_stack_only_adds_waf_gap() {
    let selection = full_selection().with_security_stack(Vec::new());
    assert_eq!(ComplianceChecker::new().check_gaps(&selection).len(), 3);
}

struct NoStreamRetention;

impl ComplianceRule for NoStreamRetention {
    fn id(&self) -> &'static str {
        "stream_retention"
    }

    fn evaluate(&self, selection: &ArchitectureSelection) -> Option<ComplianceGap> {
        selection.stream().map(|_| ComplianceGap {
            rule_id: self.id().to_string(),
            severity: GapSeverity::Advisory,
            message: "Set a stream retention period.".to_string(),
        })
    }
}

#[test]
fn custom_rules_run_after_defaults() {
    let checker = ComplianceChecker::new().with_rule(Box::new(NoStreamRetention));
    assert_eq!(
        checker.rule_ids(),
        vec!["waf_presence", "dpia_reminder", "retention_schedule", "stream_retention"]
    );

    let with_stream = checker.check_gaps(&full_selection());
    assert_eq!(with_stream.len(), 3);
    assert_eq!(with_stream[2].rule_id, "stream_retention");

    let without_stream = checker.check_gaps(&minimal_selection());
    assert_eq!(without_stream.len(), 2);
}

#[test]
fn checking_is_deterministic() {
    let checker = ComplianceChecker::new();
    let selection = full_selection();
    assert_eq!(checker.check_gaps(&selection), checker.check_gaps(&selection));
}

#[test]
fn gap_displays_its_message() {
    let gaps = ComplianceChecker::new().check_gaps(&minimal_selection());
    assert_eq!(gaps[0].to_string(), DPIA);
}
