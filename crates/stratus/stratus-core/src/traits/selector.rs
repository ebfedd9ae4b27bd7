use crate::focus::FocusCategory;
use crate::models::ArchitectureSelection;
use crate::scores::ScoreVector;

/// Maps priorities and focus to concrete component choices.
pub trait IArchitectureSelector: Send + Sync {
    fn select(&self, focus: &FocusCategory, scores: &ScoreVector) -> ArchitectureSelection;
}
