use serde::{Deserialize, Serialize};
use stratus_core::{RiskScore, ScoreVector};

/// Starting exposure before any term applies.
pub const BASELINE: f64 = 70.0;
pub const SECURITY_WEIGHT: f64 = 0.25;
pub const SCALE_WEIGHT: f64 = 0.15;
pub const LOAD_WEIGHT: f64 = 0.10;
pub const PERFORMANCE_WEIGHT: f64 = 0.10;
pub const LATENCY_WEIGHT: f64 = 0.05;
pub const COST_WEIGHT: f64 = 0.05;

/// Linear risk formula.
///
/// ```text
/// risk = 70
///   − (0.25 × security + 0.15 × scale)
///   + 0.10 × (100 − load)
///   + 0.10 × (100 − performance)
///   + 0.05 × latency
///   + 0.05 × cost
/// ```
///
/// Terms are summed left to right in exactly this grouping. Integer inputs
/// often land on a half-way tenth, where the last bit decides the rounding.
/// Inputs are already clamped by `ScoreVector`. The result is clamped to
/// [0, 100] and rounded to one decimal by `RiskScore::new`.
pub fn compute(scores: &ScoreVector) -> RiskScore {
    compute_breakdown(scores).risk
}

/// Each weighted term individually, for explanation and debugging.
///
/// Reliefs are subtracted from the baseline, gaps and pressures are added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub baseline: f64,
    pub security_relief: f64,
    pub scale_relief: f64,
    pub load_gap: f64,
    pub performance_gap: f64,
    pub latency_pressure: f64,
    pub cost_pressure: f64,
    /// Sum of all terms before clamping and rounding.
    pub raw: f64,
    pub risk: RiskScore,
}

/// Compute the formula with a full breakdown of each term.
pub fn compute_breakdown(scores: &ScoreVector) -> RiskBreakdown {
    let security_relief = SECURITY_WEIGHT * scores.security().as_f64();
    let scale_relief = SCALE_WEIGHT * scores.scale().as_f64();
    let load_gap = LOAD_WEIGHT * (100.0 - scores.load().as_f64());
    let performance_gap = PERFORMANCE_WEIGHT * (100.0 - scores.performance().as_f64());
    let latency_pressure = LATENCY_WEIGHT * scores.latency().as_f64();
    let cost_pressure = COST_WEIGHT * scores.cost().as_f64();

    let raw = BASELINE - (security_relief + scale_relief)
        + load_gap
        + performance_gap
        + latency_pressure
        + cost_pressure;

    RiskBreakdown {
        baseline: BASELINE,
        security_relief,
        scale_relief,
        load_gap,
        performance_gap,
        latency_pressure,
        cost_pressure,
        raw,
        risk: RiskScore::new(raw),
    }
}
