//! Cycle detection using Tarjan's SCC. Data flows one way, so every
//! topology the builder produces must be a DAG.

use petgraph::algo::tarjan_scc;
use stratus_core::Component;

use super::TopologyGraph;

/// Strongly connected components with more than one node (i.e., cycles),
/// plus self-loops.
pub fn find_cycles(topology: &TopologyGraph) -> Vec<Vec<Component>> {
    tarjan_scc(&topology.graph)
        .into_iter()
        .filter(|scc| {
            scc.len() > 1
                || scc
                    .first()
                    .is_some_and(|&idx| topology.graph.find_edge(idx, idx).is_some())
        })
        .map(|scc| {
            scc.into_iter()
                .filter_map(|idx| topology.graph.node_weight(idx))
                .map(|node| node.component)
                .collect()
        })
        .collect()
}

pub fn is_acyclic(topology: &TopologyGraph) -> bool {
    find_cycles(topology).is_empty()
}
