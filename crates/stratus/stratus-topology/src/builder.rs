//! Builds the data-flow topology from a selection.

use stratus_core::{ArchitectureSelection, Component};

use crate::graph::{FlowKind, TopologyGraph};

/// Stateless topology builder.
pub struct TopologyBuilder;

impl TopologyBuilder {
    /// Build the directed flow graph for a selection.
    ///
    /// Nodes are inserted in selection order first, so node order is stable
    /// regardless of edge order. Edge rules:
    /// - each ingress hop points at the next, the last one routes to compute
    /// - compute points at database, cache, and the queue and stream if present
    /// - the stream archives to object storage when present, otherwise compute does
    pub fn build(selection: &ArchitectureSelection) -> TopologyGraph {
        let mut topology = TopologyGraph::new();
        for component in selection.components() {
            topology.ensure_node(component);
        }

        let compute = selection.compute();
        let ingress = selection.ingress();
        for hop in ingress.windows(2) {
            topology.add_flow(hop[0], hop[1], FlowKind::Ingress);
        }
        if let Some(&last) = ingress.last() {
            topology.add_flow(last, compute, FlowKind::Route);
        }

        topology.add_flow(compute, selection.database(), FlowKind::Persist);
        topology.add_flow(compute, selection.cache(), FlowKind::Cache);
        if let Some(queue) = selection.queue() {
            topology.add_flow(compute, queue, FlowKind::Enqueue);
        }

        let archiver: Component = match selection.stream() {
            Some(stream) => {
                topology.add_flow(compute, stream, FlowKind::Publish);
                stream
            }
            None => compute,
        };
        topology.add_flow(archiver, selection.object_storage(), FlowKind::Archive);

        tracing::debug!(
            nodes = topology.node_count(),
            edges = topology.edge_count(),
            "topology built"
        );
        topology
    }
}
