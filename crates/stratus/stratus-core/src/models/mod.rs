mod advisor;
mod compliance_gap;
mod component;
mod observation;
mod risk;
mod selection;

pub use advisor::{AdvisorNotes, AdvisorRole};
pub use compliance_gap::{ComplianceGap, GapSeverity};
pub use component::{ComplianceNote, Component, SecurityControl};
pub use observation::{Observation, ObservationKind};
pub use risk::{RiskLevel, RiskScore};
pub use selection::{ArchitectureSelection, INGRESS_CHAIN};
