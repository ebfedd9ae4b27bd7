//! ReasoningEngine: evaluates the rule table for a role and caps the result.

use stratus_core::config::ReasoningConfig;
use stratus_core::traits::IReasoner;
use stratus_core::{AdvisorNotes, AdvisorRole, Observation, ScoreVector};

use crate::rules::{ReasoningRule, FALLBACK, RULE_TABLE};

/// Rule-based advisor shared by every role on the panel.
#[derive(Debug, Clone, Default)]
pub struct ReasoningEngine {
    config: ReasoningConfig,
}

impl ReasoningEngine {
    pub fn new(config: ReasoningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReasoningConfig {
        &self.config
    }

    /// Every rule that applies, uncapped, in priority order.
    pub fn matching_rules(&self, scores: &ScoreVector, context: &str) -> Vec<ReasoningRule> {
        RULE_TABLE
            .iter()
            .filter(|rule| rule.fires(&self.config, scores, context))
            .copied()
            .collect()
    }

    /// Run every role of `panel` against the same inputs, in panel order.
    pub fn deliberate(
        &self,
        panel: &[AdvisorRole],
        scores: &ScoreVector,
        context: &str,
    ) -> Vec<AdvisorNotes> {
        panel
            .iter()
            .map(|role| AdvisorNotes {
                role: role.clone(),
                observations: self.reason(role, scores, context),
            })
            .collect()
    }
}

impl IReasoner for ReasoningEngine {
    fn reason(&self, role: &AdvisorRole, scores: &ScoreVector, context: &str) -> Vec<Observation> {
        let mut matched = self.matching_rules(scores, context);
        if matched.is_empty() {
            matched.push(FALLBACK);
        }
        matched.truncate(self.config.max_observations);

        tracing::debug!(
            role = %role.title,
            observations = matched.len(),
            "advisor reasoning complete"
        );

        matched
            .into_iter()
            .map(|rule| Observation {
                kind: rule.kind,
                text: rule.text.to_string(),
            })
            .collect()
    }
}
