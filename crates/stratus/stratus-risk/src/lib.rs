//! # stratus-risk
//!
//! Summarizes the exposure implied by a score vector as a single number in
//! [0, 100]. Lower is better. Strong security and scale pull the score down;
//! weak load handling and performance push it up, with a small contribution
//! from latency and cost pressure.

pub mod formula;
pub mod scorer;

pub use formula::RiskBreakdown;
pub use scorer::RiskScorer;
