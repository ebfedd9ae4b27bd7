//! # stratus-reasoning
//!
//! Advisory reasoning for the design panel. Every role shares one rule table:
//! four score thresholds followed by three use-case keyword rules. All
//! applicable rules fire, in priority order, and the result is capped.
//!
//! [`pacing`] is an optional presentation helper; the engine never uses it.

pub mod engine;
pub mod pacing;
pub mod rules;

pub use engine::ReasoningEngine;
pub use pacing::{paced, PacedLine};
pub use rules::{ReasoningRule, RULE_TABLE};
