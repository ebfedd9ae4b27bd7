//! # stratus-core
//!
//! Foundation crate for the Stratus architecture engine.
//! Defines the score vector, focus categories, component catalog, the
//! architecture selection record, errors, config, and the traits every
//! subsystem crate implements.

pub mod config;
pub mod constants;
pub mod errors;
pub mod focus;
pub mod keywords;
pub mod models;
pub mod scores;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StratusConfig;
pub use errors::{StratusError, StratusResult};
pub use focus::FocusCategory;
pub use models::{
    AdvisorNotes, AdvisorRole, ArchitectureSelection, ComplianceGap, ComplianceNote, Component,
    Observation, ObservationKind, RiskLevel, RiskScore, SecurityControl,
};
pub use scores::{Dimension, Score, ScoreVector};
