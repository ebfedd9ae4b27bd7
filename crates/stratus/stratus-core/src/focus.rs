use serde::{Deserialize, Serialize};
use std::fmt;

/// Architecture focus chosen by the caller.
///
/// Recognized labels map to fixed variants; anything else is kept verbatim in
/// [`FocusCategory::Other`] and treated as "no special category".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FocusCategory {
    ECommerce,
    RealTimeAnalytics,
    IotStreaming,
    MlInference,
    ZeroTrustMicroservices,
    DataLakehouse,
    Other(String),
}

impl FocusCategory {
    /// All recognized categories, in menu order.
    pub const RECOGNIZED: [FocusCategory; 6] = [
        Self::ECommerce,
        Self::RealTimeAnalytics,
        Self::IotStreaming,
        Self::MlInference,
        Self::ZeroTrustMicroservices,
        Self::DataLakehouse,
    ];

    /// Resolve a label. Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        let wanted = label.trim();
        Self::RECOGNIZED
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
            .unwrap_or_else(|| Self::Other(label.to_string()))
    }

    /// Display label. `Other` returns the caller's original text.
    pub fn label(&self) -> &str {
        match self {
            Self::ECommerce => "E-commerce (web & APIs)",
            Self::RealTimeAnalytics => "Real-time analytics pipeline",
            Self::IotStreaming => "IoT ingest + stream processing",
            Self::MlInference => "ML inference service",
            Self::ZeroTrustMicroservices => "Zero-trust microservices",
            Self::DataLakehouse => "Data lakehouse ETL/ELT",
            Self::Other(label) => label,
        }
    }

    /// Whether this is one of the fixed menu categories.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for FocusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for FocusCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<&str> for FocusCategory {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<FocusCategory> for String {
    fn from(focus: FocusCategory) -> Self {
        match focus {
            FocusCategory::Other(label) => label,
            recognized => recognized.label().to_string(),
        }
    }
}
