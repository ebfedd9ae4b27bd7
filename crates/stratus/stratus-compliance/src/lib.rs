//! # stratus-compliance
//!
//! Flags regulatory considerations a selection leaves open. Each rule is
//! evaluated independently and gaps are reported in rule-declaration order.
//! Two GDPR process reminders always apply, so the result is never empty.

pub mod checker;
pub mod rules;

pub use checker::ComplianceChecker;
pub use rules::ComplianceRule;
