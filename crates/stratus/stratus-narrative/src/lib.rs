//! # stratus-narrative
//!
//! Pure template fill over a selection. The explanation is a short fixed-order
//! paragraph with a line cap; the tutorial and design document are longer
//! fixed templates. Component names follow the configured label style.

pub mod documents;
pub mod explanation;
pub mod templates;

pub use documents::DocumentComposer;
pub use explanation::{Explanation, ExplanationComposer};
