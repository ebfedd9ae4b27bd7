//! Downloadable documents: a build tutorial and a technical design document.
//!
//! Both are deterministic unless a generation time is supplied, in which case
//! a `Time:` line follows the title.

use chrono::{DateTime, Utc};
use stratus_core::config::{LabelStyle, NarrativeConfig};
use stratus_core::{ArchitectureSelection, Component, FocusCategory, ScoreVector, SecurityControl};

use crate::templates::{vocabulary, NONE};

pub const TUTORIAL_TITLE: &str = "TUTORIAL - How to Build This Architecture (Generated)";
pub const DESIGN_DOC_TITLE: &str = "TECHNICAL DESIGN DOCUMENT (Generated)";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentComposer {
    style: LabelStyle,
}

impl DocumentComposer {
    pub fn new(style: LabelStyle) -> Self {
        Self { style }
    }

    pub fn from_config(config: &NarrativeConfig) -> Self {
        Self::new(config.label_style)
    }

    fn name(&self, component: Component) -> &'static str {
        component.styled(self.style)
    }

    fn optional(&self, component: Option<Component>) -> &'static str {
        component.map_or(NONE, |c| self.name(c))
    }

    fn header(title: &str, generated_at: Option<DateTime<Utc>>) -> Vec<String> {
        let mut lines = vec![title.to_string()];
        if let Some(at) = generated_at {
            lines.push(format!("Time: {}", at.format(TIMESTAMP_FORMAT)));
        }
        lines.push(String::new());
        lines
    }

    /// Ten build steps. The focus is accepted for symmetry with the design
    /// document; the steps depend only on the selection.
    pub fn tutorial(
        &self,
        _focus: &FocusCategory,
        selection: &ArchitectureSelection,
        generated_at: Option<DateTime<Utc>>,
    ) -> String {
        let style = self.style;
        let dns = self.name(Component::Dns);
        let cdn = self.name(Component::Cdn);
        let lb = self.name(Component::LoadBalancer);

        let steps = [
            format!("DNS & Edge: Configure {dns} -> {cdn} for global entry and caching."),
            format!(
                "Ingress: Route from {cdn} to {lb} with {} enabled.",
                SecurityControl::Waf.styled(style)
            ),
            format!(
                "Compute: Deploy {} with stateless design.",
                vocabulary::compute_units(selection.compute(), style)
            ),
            format!(
                "State: Use {} for OLTP; {} for objects, logs, and backups.",
                self.name(selection.database()),
                self.name(selection.object_storage())
            ),
            format!(
                "Caching: {} for hot keys and session tokens.",
                self.name(selection.cache())
            ),
            format!(
                "Decoupling: {} for async jobs and spikes.",
                self.optional(selection.queue())
            ),
            format!(
                "Streaming: {} for real-time events (if applicable).",
                self.optional(selection.stream())
            ),
            "Security: IAM least-privilege, KMS encryption, security groups, private subnets."
                .to_string(),
            format!(
                "Observability: {}; structured app logs.",
                vocabulary::monitoring(style)
            ),
            format!(
                "Compliance: Data minimization, regional residency, {}.",
                vocabulary::audit_trail(style)
            ),
        ];

        let mut lines = Self::header(TUTORIAL_TITLE, generated_at);
        lines.extend(
            steps
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}) {}", i + 1, step)),
        );
        finish(lines)
    }

    /// Component summary, non-functional targets and the high-level request
    /// sequence.
    pub fn design_doc(
        &self,
        focus: &FocusCategory,
        scores: &ScoreVector,
        selection: &ArchitectureSelection,
        generated_at: Option<DateTime<Utc>>,
    ) -> String {
        let queue = self.optional(selection.queue());
        let ingress = selection
            .ingress()
            .iter()
            .map(|&c| self.name(c))
            .collect::<Vec<_>>();
        let security = selection
            .security_stack()
            .iter()
            .map(|control| control.styled(self.style))
            .collect::<Vec<_>>()
            .join(", ");
        let compliance = selection
            .compliance_notes()
            .iter()
            .map(|note| note.label())
            .collect::<Vec<_>>()
            .join(", ");
        let stream_hop = match selection.stream() {
            Some(stream) => format!("Stream: {}", self.name(stream)),
            None => format!("Optional stream: {NONE}"),
        };
        let entry = ingress.last().copied().unwrap_or(NONE);

        let mut lines = Self::header(DESIGN_DOC_TITLE, generated_at);
        lines.extend([
            format!("Focus: {focus}"),
            format!("Primary Compute: {}", self.name(selection.compute())),
            format!("Data Store: {}", self.name(selection.database())),
            format!("Cache: {}", self.name(selection.cache())),
            format!("Queue: {queue}"),
            format!("Stream: {}", self.optional(selection.stream())),
            format!("Object Storage: {}", self.name(selection.object_storage())),
            format!("Ingress: {}", ingress.join(", ")),
            String::new(),
            "Non-Functional:".to_string(),
            format!(
                "- Performance target guided by sliders (latency={}, performance={})",
                scores.latency(),
                scores.performance()
            ),
            format!(
                "- Resilience via load balancing={}, decoupling={queue}",
                scores.load()
            ),
            format!("- Scalability target={}", scores.scale()),
            format!("- Security baseline={security}"),
            format!("- Compliance: {compliance}"),
            String::new(),
            "Sequence (high-level):".to_string(),
            format!("1) Client -> {}", ingress.join(" -> ")),
            format!("2) {entry} -> {}", self.name(selection.compute())),
            format!(
                "3) App -> {} (R/W), {} (hot path)",
                self.name(selection.database()),
                self.name(selection.cache())
            ),
            format!("4) App -> {stream_hop}"),
            format!(
                "5) Data -> {} for objects/logs",
                self.name(selection.object_storage())
            ),
        ]);
        finish(lines)
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
