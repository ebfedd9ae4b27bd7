//! # stratus-topology
//!
//! Turns an architecture selection into a directed data-flow graph
//! (`petgraph`). Nodes are components; edges follow fixed flow rules from the
//! ingress chain through compute to the data stores. The graph is rebuilt per
//! design and never persisted.

pub mod builder;
pub mod export;
pub mod graph;
pub mod layout;

pub use builder::TopologyBuilder;
pub use graph::{FlowKind, TopologyEdge, TopologyGraph, TopologyNode, TopologySnapshot};
pub use layout::NodePosition;
