//! Span definitions for the design pipeline.

/// Span wrapping one full design call.
#[macro_export]
macro_rules! design_span {
    ($focus:expr) => {
        tracing::info_span!("stratus.design", focus = %$focus)
    };
}

/// Span wrapping one pipeline stage inside a design call.
#[macro_export]
macro_rules! stage_span {
    ($stage:expr) => {
        tracing::debug_span!("stratus.stage", stage = %$stage)
    };
}
