use serde::{Deserialize, Serialize};

use super::observation::Observation;

/// An advisory role on the design panel. Roles are data; they all share one rule table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdvisorRole {
    pub title: String,
    pub brief: String,
}

impl AdvisorRole {
    pub fn new(title: impl Into<String>, brief: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            brief: brief.into(),
        }
    }

    /// The four-seat default panel.
    pub fn default_panel() -> Vec<AdvisorRole> {
        vec![
            Self::new(
                "Data Architect",
                "Designs data flows, storage, ETL/ELT, and analytics.",
            ),
            Self::new(
                "Security Architect",
                "Applies zero-trust, IAM, IAM boundaries, encryption, and compliance controls.",
            ),
            Self::new(
                "Solution Architect",
                "Assembles AWS components into a scalable, reliable blueprint.",
            ),
            Self::new(
                "AI Architect",
                "Adds ML/GenAI add-ons where useful, within free/open-source limits.",
            ),
        ]
    }
}

/// Observations one advisor produced for a design request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorNotes {
    pub role: AdvisorRole,
    pub observations: Vec<Observation>,
}
