//! petgraph::StableGraph wrapper with TopologyNode and FlowKind weights.

use std::collections::HashMap;
use std::fmt;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};
use stratus_core::Component;

/// A node in the topology, representing one selected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyNode {
    pub component: Component,
}

impl fmt::Display for TopologyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component.label())
    }
}

/// What travels along an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Hop along the ingress chain.
    Ingress,
    /// Last ingress hop into compute.
    Route,
    /// Compute reads/writes the database.
    Persist,
    /// Compute reads/writes the cache.
    Cache,
    /// Compute offloads work to the queue.
    Enqueue,
    /// Compute publishes events to the stream.
    Publish,
    /// Objects and logs land in object storage.
    Archive,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingress => "ingress",
            Self::Route => "route",
            Self::Persist => "persist",
            Self::Cache => "cache",
            Self::Enqueue => "enqueue",
            Self::Publish => "publish",
            Self::Archive => "archive",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge, by component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyEdge {
    pub from: Component,
    pub to: Component,
    pub kind: FlowKind,
}

/// Serializable view of a topology: node names and edges in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    pub nodes: Vec<Component>,
    pub edges: Vec<TopologyEdge>,
}

/// The underlying directed graph type.
pub type TopologyStableGraph = StableGraph<TopologyNode, FlowKind, Directed>;

/// Wrapper providing component-indexed access to the topology.
#[derive(Debug, Clone)]
pub struct TopologyGraph {
    /// The petgraph stable graph.
    pub graph: TopologyStableGraph,
    /// Map from component → NodeIndex for O(1) lookup.
    node_index: HashMap<Component, NodeIndex>,
}

impl TopologyGraph {
    /// Create an empty topology.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Get or create the node for a component.
    pub fn ensure_node(&mut self, component: Component) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&component) {
            return idx;
        }
        let idx = self.graph.add_node(TopologyNode { component });
        self.node_index.insert(component, idx);
        idx
    }

    /// Look up a node index by component.
    pub fn get_node(&self, component: Component) -> Option<NodeIndex> {
        self.node_index.get(&component).copied()
    }

    /// Add a directed flow, creating missing endpoints.
    pub fn add_flow(&mut self, from: Component, to: Component, kind: FlowKind) {
        let source = self.ensure_node(from);
        let target = self.ensure_node(to);
        self.graph.add_edge(source, target, kind);
    }

    pub fn contains(&self, component: Component) -> bool {
        self.node_index.contains_key(&component)
    }

    /// Whether a `from → to` edge exists. Direction matters.
    pub fn has_edge(&self, from: Component, to: Component) -> bool {
        match (self.get_node(from), self.get_node(to)) {
            (Some(source), Some(target)) => self.graph.find_edge(source, target).is_some(),
            _ => false,
        }
    }

    /// Flow kind of the `from → to` edge, if present.
    pub fn flow(&self, from: Component, to: Component) -> Option<FlowKind> {
        let source = self.get_node(from)?;
        let target = self.get_node(to)?;
        let edge = self.graph.find_edge(source, target)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Components in insertion order.
    pub fn nodes(&self) -> Vec<Component> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .map(|node| node.component)
            .collect()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> Vec<TopologyEdge> {
        self.graph
            .edge_indices()
            .filter_map(|edge| {
                let (source, target) = self.graph.edge_endpoints(edge)?;
                Some(TopologyEdge {
                    from: self.graph.node_weight(source)?.component,
                    to: self.graph.node_weight(target)?.component,
                    kind: *self.graph.edge_weight(edge)?,
                })
            })
            .collect()
    }

    /// Direct downstream components, in edge insertion order.
    pub fn successors(&self, component: Component) -> Vec<Component> {
        let Some(idx) = self.get_node(component) else {
            return Vec::new();
        };
        let mut out: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        out.sort_by_key(|(edge_id, _)| *edge_id);
        out.into_iter()
            .filter_map(|(_, target)| self.graph.node_weight(target))
            .map(|node| node.component)
            .collect()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn snapshot(&self) -> TopologySnapshot {
        TopologySnapshot {
            nodes: self.nodes(),
            edges: self.edges(),
        }
    }
}

impl Default for TopologyGraph {
    fn default() -> Self {
        Self::new()
    }
}
