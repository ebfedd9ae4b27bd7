//! Graph storage, edge semantics and acyclicity checks.

pub mod acyclic;
mod stable_graph;

pub use stable_graph::{
    FlowKind, TopologyEdge, TopologyGraph, TopologyNode, TopologySnapshot, TopologyStableGraph,
};
