use stratus_compliance::ComplianceChecker;
use stratus_core::models::GapSeverity;
use stratus_core::traits::{IArchitectureSelector, IComplianceChecker, IRiskScorer};
use stratus_core::{AdvisorRole, StratusConfig, StratusResult};
use stratus_narrative::{DocumentComposer, ExplanationComposer};
use stratus_observability::tracing_setup::events;
use stratus_observability::{design_span, stage_span};
use stratus_reasoning::ReasoningEngine;
use stratus_risk::RiskScorer;
use stratus_selection::ArchitectureSelector;
use stratus_topology::TopologyBuilder;

use crate::report::DesignReport;
use crate::request::DesignRequest;

/// Runs the whole design pipeline. Holds no per-call state, so one engine
/// can serve any number of requests from any thread.
pub struct DesignEngine {
    config: StratusConfig,
    panel: Vec<AdvisorRole>,
    reasoner: ReasoningEngine,
    selector: Box<dyn IArchitectureSelector>,
    risk_scorer: RiskScorer,
    compliance: Box<dyn IComplianceChecker>,
    explanation: ExplanationComposer,
    documents: DocumentComposer,
}

impl DesignEngine {
    pub fn new(config: StratusConfig) -> Self {
        Self {
            panel: AdvisorRole::default_panel(),
            reasoner: ReasoningEngine::new(config.reasoning.clone()),
            selector: Box::new(ArchitectureSelector::new(config.selection.clone())),
            risk_scorer: RiskScorer::new(),
            compliance: Box::new(ComplianceChecker::new()),
            explanation: ExplanationComposer::new(config.narrative.clone()),
            documents: DocumentComposer::from_config(&config.narrative),
            config,
        }
    }

    /// Build from a TOML config document.
    pub fn from_toml(source: &str) -> StratusResult<Self> {
        Ok(Self::new(StratusConfig::from_toml(source)?))
    }

    /// Replace the advisory panel.
    pub fn with_panel(mut self, panel: Vec<AdvisorRole>) -> Self {
        self.panel = panel;
        self
    }

    /// Replace the component selector.
    pub fn with_selector(mut self, selector: Box<dyn IArchitectureSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Replace the compliance checker, e.g. one carrying extra rules.
    pub fn with_compliance_checker(mut self, checker: Box<dyn IComplianceChecker>) -> Self {
        self.compliance = checker;
        self
    }

    pub fn config(&self) -> &StratusConfig {
        &self.config
    }

    pub fn panel(&self) -> &[AdvisorRole] {
        &self.panel
    }

    /// Produce the full report for one request.
    pub fn design(&self, request: &DesignRequest) -> DesignReport {
        let span = design_span!(request.focus);
        let _guard = span.enter();

        let focus = &request.focus;
        let scores = &request.scores;
        events::design_started(focus.label(), focus.is_recognized(), request.use_case.len());

        let advice = {
            let _stage = stage_span!("reason").entered();
            self.reasoner
                .deliberate(&self.panel, scores, &request.reasoning_context())
        };

        let selection = self.selector.select(focus, scores);
        events::selection_made(
            selection.compute().label(),
            selection.database().label(),
            selection.queue().map(|c| c.label()),
            selection.stream().map(|c| c.label()),
        );

        let graph = TopologyBuilder::build(&selection);

        let risk = self.risk_scorer.score(scores);
        let risk_breakdown = self.risk_scorer.breakdown(scores);
        events::risk_scored(risk.value(), risk.level().as_str());

        let compliance_gaps = self.compliance.check_gaps(&selection);
        for gap in &compliance_gaps {
            events::compliance_gap_found(
                &gap.rule_id,
                gap.severity == GapSeverity::Action,
                &gap.message,
            );
        }

        let (explanation, tutorial, design_doc) = {
            let _stage = stage_span!("narrate").entered();
            (
                self.explanation.compose(focus, scores, &selection),
                self.documents
                    .tutorial(focus, &selection, request.generated_at),
                self.documents
                    .design_doc(focus, scores, &selection, request.generated_at),
            )
        };

        // Serializing a selection cannot fail in practice; a failure only
        // blanks the digest.
        let fingerprint = selection.fingerprint().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "selection fingerprint unavailable");
            String::new()
        });

        events::design_completed(
            &fingerprint,
            graph.node_count(),
            graph.edge_count(),
            compliance_gaps.len(),
        );

        DesignReport {
            focus: focus.clone(),
            scores: *scores,
            advice,
            topology: graph.snapshot(),
            layout: graph.layout(),
            selection,
            risk,
            risk_level: risk.level(),
            risk_breakdown,
            compliance_gaps,
            explanation,
            tutorial,
            design_doc,
            fingerprint,
            graph,
        }
    }
}

impl Default for DesignEngine {
    fn default() -> Self {
        Self::new(StratusConfig::default())
    }
}
