//! Progressive-reveal decorator for advisory lines.
//!
//! Assigns each line a cumulative display offset so a host UI can reveal
//! observations one at a time. Purely additive: nothing here sleeps or reads
//! the clock, and the offsets depend only on the line index.

use std::time::Duration;

use serde::Serialize;
use stratus_core::AdvisorNotes;

/// An observation with its reveal offset, relative to the start of its advisor's block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PacedLine {
    pub advisor: String,
    pub text: String,
    pub offset: Duration,
}

/// Offsets are `step × (index + 1)` within each advisor's block.
pub fn paced(notes: &[AdvisorNotes], step: Duration) -> Vec<PacedLine> {
    let mut lines = Vec::new();
    for advisor in notes {
        let mut offset = Duration::ZERO;
        for observation in &advisor.observations {
            offset += step;
            lines.push(PacedLine {
                advisor: advisor.role.title.clone(),
                text: observation.text.clone(),
                offset,
            });
        }
    }
    lines
}
