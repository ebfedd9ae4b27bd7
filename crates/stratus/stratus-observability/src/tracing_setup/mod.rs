//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use stratus_core::config::ObservabilityConfig;
use stratus_core::{StratusError, StratusResult};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted by [`init_tracing`].
pub const LOG_ENV: &str = "STRATUS_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `STRATUS_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Fails if a global subscriber is
/// already installed.
pub fn init_tracing() -> StratusResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .map_err(already_installed)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> StratusResult<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| StratusError::InvalidConfig {
        field: "observability.log_level".to_string(),
        reason: e.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .map_err(already_installed)
}

/// Initialize from the `[observability]` config section. `STRATUS_LOG`
/// still wins over the configured level when set.
pub fn init_from_config(config: &ObservabilityConfig) -> StratusResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    installed.map_err(already_installed)
}

fn already_installed(err: impl std::fmt::Display) -> StratusError {
    StratusError::ConfigError {
        message: format!("tracing subscriber not installed: {err}"),
    }
}
