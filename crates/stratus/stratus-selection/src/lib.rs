//! # stratus-selection
//!
//! The authoritative component selection. A fixed decision table over the
//! score vector picks compute, database, cache and queue; the focus category
//! decides whether stream ingestion is added. Every branch has a default, so
//! selection cannot fail.

pub mod decision;
pub mod selector;

pub use selector::ArchitectureSelector;
