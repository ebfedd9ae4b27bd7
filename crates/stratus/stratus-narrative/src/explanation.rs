use std::fmt;

use serde::{Deserialize, Serialize};
use stratus_core::config::NarrativeConfig;
use stratus_core::{ArchitectureSelection, Component, FocusCategory, ScoreVector};

use crate::templates::{self, render};

/// The auto-generated architecture summary, one sentence per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Explanation {
    lines: Vec<String>,
}

impl Explanation {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Newline-joined text.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Composes the explanation paragraph.
#[derive(Debug, Clone, Default)]
pub struct ExplanationComposer {
    config: NarrativeConfig,
}

impl ExplanationComposer {
    pub fn new(config: NarrativeConfig) -> Self {
        Self { config }
    }

    /// Fixed-order explanation. Optional sentences appear only for a
    /// non-local cache, a queue, or a stream. When the body exceeds the line
    /// cap it is truncated and the closing score line is kept.
    pub fn compose(
        &self,
        focus: &FocusCategory,
        scores: &ScoreVector,
        selection: &ArchitectureSelection,
    ) -> Explanation {
        let style = self.config.label_style;
        let name = |component: Component| component.styled(style);

        let ingress = selection
            .ingress()
            .iter()
            .map(|&component| name(component))
            .collect::<Vec<_>>()
            .join(", ");

        let mut body = vec![
            render(templates::FOCUS, &[("focus", focus.label())]),
            render(
                templates::INGRESS,
                &[("ingress", ingress.as_str()), ("compute", name(selection.compute()))],
            ),
        ];
        if selection.cache() != Component::LocalCache {
            body.push(render(templates::CACHE, &[("cache", name(selection.cache()))]));
        }
        body.push(render(
            templates::PERSISTENCE,
            &[
                ("database", name(selection.database())),
                ("storage", name(selection.object_storage())),
            ],
        ));
        if let Some(queue) = selection.queue() {
            body.push(render(templates::QUEUE, &[("queue", name(queue))]));
        }
        if let Some(stream) = selection.stream() {
            body.push(render(templates::STREAM, &[("stream", name(stream))]));
        }
        body.push(templates::SECURITY.to_string());
        body.push(templates::COMPLIANCE.to_string());

        let closing = score_line(scores);
        let cap = self.config.max_explanation_lines.max(1);
        body.truncate(cap - 1);
        body.push(closing);

        Explanation { lines: body }
    }
}

fn score_line(scores: &ScoreVector) -> String {
    let values = [
        scores.latency().to_string(),
        scores.load().to_string(),
        scores.cost().to_string(),
        scores.performance().to_string(),
        scores.security().to_string(),
        scores.scale().to_string(),
    ];
    render(
        templates::SCORES,
        &[
            ("latency", values[0].as_str()),
            ("load", values[1].as_str()),
            ("cost", values[2].as_str()),
            ("performance", values[3].as_str()),
            ("security", values[4].as_str()),
            ("scale", values[5].as_str()),
        ],
    )
}
