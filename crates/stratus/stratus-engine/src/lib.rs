//! # stratus-engine
//!
//! Single entry point for hosts. [`DesignEngine::design`] takes the six
//! priority scores, a focus category and a use-case string, and returns the
//! full report: advisory notes, selection, topology, risk, compliance gaps,
//! explanation and both documents. Every output is derived from the same
//! selection and is a deterministic function of the request.

pub mod engine;
pub mod report;
pub mod request;

pub use engine::DesignEngine;
pub use report::DesignReport;
pub use request::DesignRequest;
