//! Error types for the ambient layer.
//!
//! The design pipeline itself is total: out-of-range scores are clamped and
//! unknown focus labels degrade to [`FocusCategory::Other`](crate::FocusCategory).
//! Errors only come from loading configuration and serializing results.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum StratusError {
    #[error("config error: {message}")]
    ConfigError { message: String },

    #[error("invalid config value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<toml::de::Error> for StratusError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError {
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for StratusError {
    fn from(err: toml::ser::Error) -> Self {
        Self::ConfigError {
            message: err.to_string(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type StratusResult<T> = Result<T, StratusError>;
