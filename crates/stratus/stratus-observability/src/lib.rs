//! # stratus-observability
//!
//! Subscriber setup and structured events for the design pipeline. Library
//! crates only emit through `tracing`; installing a subscriber is left to
//! the host.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
