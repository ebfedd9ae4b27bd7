use stratus_core::config::SelectionConfig;
use stratus_core::traits::IArchitectureSelector;
use stratus_core::{ArchitectureSelection, FocusCategory, ScoreVector};

use crate::decision;

/// Evaluates the decision table. Scores are already clamped by [`ScoreVector`].
#[derive(Debug, Clone, Default)]
pub struct ArchitectureSelector {
    config: SelectionConfig,
}

impl ArchitectureSelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }
}

impl IArchitectureSelector for ArchitectureSelector {
    fn select(&self, focus: &FocusCategory, scores: &ScoreVector) -> ArchitectureSelection {
        let selection = ArchitectureSelection::new(
            decision::compute(&self.config, scores),
            decision::database(&self.config, scores),
            decision::cache(&self.config, scores),
            decision::queue(&self.config, scores),
            decision::stream(focus),
        );

        tracing::debug!(
            focus = %focus,
            compute = %selection.compute(),
            database = %selection.database(),
            cache = %selection.cache(),
            queue = selection.queue().is_some(),
            stream = selection.stream().is_some(),
            "architecture selected"
        );
        selection
    }
}
