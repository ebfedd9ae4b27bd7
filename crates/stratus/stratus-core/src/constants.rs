/// Stratus engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of every priority score.
pub const SCORE_MIN: i64 = 0;

/// Upper bound of every priority score.
pub const SCORE_MAX: i64 = 100;

/// Upper bound of the risk score.
pub const RISK_MAX: f64 = 100.0;
