use serde::Serialize;
use stratus_core::{
    AdvisorNotes, ArchitectureSelection, ComplianceGap, FocusCategory, RiskLevel, RiskScore,
    ScoreVector, StratusResult,
};
use stratus_narrative::Explanation;
use stratus_risk::RiskBreakdown;
use stratus_topology::{NodePosition, TopologyGraph, TopologySnapshot};

/// Everything one design call produces.
#[derive(Debug, Clone, Serialize)]
pub struct DesignReport {
    pub focus: FocusCategory,
    /// Scores after clamping.
    pub scores: ScoreVector,
    /// Observations per advisor, in panel order.
    pub advice: Vec<AdvisorNotes>,
    pub selection: ArchitectureSelection,
    /// Nodes and edges of the data-flow graph.
    pub topology: TopologySnapshot,
    pub layout: Vec<NodePosition>,
    pub risk: RiskScore,
    pub risk_level: RiskLevel,
    pub risk_breakdown: RiskBreakdown,
    pub compliance_gaps: Vec<ComplianceGap>,
    pub explanation: Explanation,
    pub tutorial: String,
    pub design_doc: String,
    /// blake3 digest of the selection.
    pub fingerprint: String,
    #[serde(skip)]
    pub(crate) graph: TopologyGraph,
}

impl DesignReport {
    /// The live topology graph.
    pub fn graph(&self) -> &TopologyGraph {
        &self.graph
    }

    /// Graphviz rendering of the topology.
    pub fn to_dot(&self) -> String {
        self.graph.to_dot()
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> StratusResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
