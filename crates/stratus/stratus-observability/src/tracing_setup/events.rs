//! Structured log events for the design pipeline.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the start of a design call.
pub fn design_started(focus: &str, recognized: bool, use_case_len: usize) {
    tracing::info!(
        event = "design_started",
        focus = %focus,
        recognized = recognized,
        use_case_len = use_case_len,
        "design started"
    );
}

/// Log the authoritative component selection.
pub fn selection_made(compute: &str, database: &str, queue: Option<&str>, stream: Option<&str>) {
    tracing::info!(
        event = "selection_made",
        compute = %compute,
        database = %database,
        queue = ?queue,
        stream = ?stream,
        "selection made"
    );
}

/// Log the computed risk score.
pub fn risk_scored(risk: f64, level: &str) {
    tracing::info!(
        event = "risk_scored",
        risk = risk,
        level = %level,
        "risk scored"
    );
}

/// Log one compliance gap. Missing controls are warnings; process
/// reminders are informational.
pub fn compliance_gap_found(rule_id: &str, actionable: bool, message: &str) {
    if actionable {
        tracing::warn!(
            event = "compliance_gap_found",
            rule_id = %rule_id,
            gap = %message,
            "compliance gap found"
        );
    } else {
        tracing::info!(
            event = "compliance_gap_found",
            rule_id = %rule_id,
            gap = %message,
            "compliance gap found"
        );
    }
}

/// Log completion of a design call.
pub fn design_completed(fingerprint: &str, nodes: usize, edges: usize, gaps: usize) {
    tracing::info!(
        event = "design_completed",
        fingerprint = %fingerprint,
        nodes = nodes,
        edges = edges,
        gaps = gaps,
        "design completed"
    );
}
