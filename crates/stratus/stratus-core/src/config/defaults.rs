// Single source of truth for all default values.

// --- Reasoning ---
pub const DEFAULT_REASONING_SECURITY_THRESHOLD: u8 = 80;
pub const DEFAULT_REASONING_SCALE_THRESHOLD: u8 = 75;
pub const DEFAULT_REASONING_LATENCY_THRESHOLD: u8 = 70;
pub const DEFAULT_REASONING_COST_CEILING: u8 = 50;
pub const DEFAULT_MAX_OBSERVATIONS: usize = 3;

// --- Selection ---
pub const DEFAULT_SELECTION_PERFORMANCE_THRESHOLD: u8 = 70;
pub const DEFAULT_SELECTION_SECURITY_THRESHOLD: u8 = 70;
pub const DEFAULT_SELECTION_LATENCY_THRESHOLD: u8 = 60;
pub const DEFAULT_SELECTION_SCALE_THRESHOLD: u8 = 70;

// --- Narrative ---
pub const DEFAULT_MAX_EXPLANATION_LINES: usize = 9;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
