//! Deterministic layered layout for diagram rendering.
//!
//! A node's layer is the length of the longest path reaching it from any
//! root, so DNS sits at layer 0 and object storage lands last. Within a layer
//! rows follow node insertion order.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use stratus_core::Component;

use crate::graph::TopologyGraph;

/// Grid position of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePosition {
    pub component: Component,
    pub layer: usize,
    pub row: usize,
}

impl TopologyGraph {
    /// Positions for every node, in node insertion order.
    ///
    /// A cyclic graph cannot be layered; every node then shares layer 0.
    pub fn layout(&self) -> Vec<NodePosition> {
        let mut layers: HashMap<NodeIndex, usize> = HashMap::new();
        if let Ok(order) = toposort(&self.graph, None) {
            for idx in order {
                let layer = self
                    .graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .filter_map(|pred| layers.get(&pred))
                    .map(|layer| layer + 1)
                    .max()
                    .unwrap_or(0);
                layers.insert(idx, layer);
            }
        }

        let mut rows: HashMap<usize, usize> = HashMap::new();
        self.graph
            .node_indices()
            .filter_map(|idx| {
                let node = self.graph.node_weight(idx)?;
                let layer = layers.get(&idx).copied().unwrap_or(0);
                let next_row = rows.entry(layer).or_insert(0);
                let row = *next_row;
                *next_row += 1;
                Some(NodePosition {
                    component: node.component,
                    layer,
                    row,
                })
            })
            .collect()
    }

    /// Number of layers in the layout.
    pub fn depth(&self) -> usize {
        self.layout()
            .iter()
            .map(|p| p.layer + 1)
            .max()
            .unwrap_or(0)
    }
}
