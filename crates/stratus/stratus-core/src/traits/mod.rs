//! Seams between the engine facade and the subsystem crates.
//!
//! Every operation is total: none of these traits return `Result`.

mod compliance_checker;
mod reasoner;
mod risk_scorer;
mod selector;

pub use compliance_checker::IComplianceChecker;
pub use reasoner::IReasoner;
pub use risk_scorer::IRiskScorer;
pub use selector::IArchitectureSelector;
