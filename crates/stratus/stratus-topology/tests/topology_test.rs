//! Topology construction: edge rules, node order, acyclicity, layout, export.

use stratus_core::Component;
use stratus_selection::ArchitectureSelector;
use stratus_core::traits::IArchitectureSelector;
use stratus_topology::graph::acyclic::{find_cycles, is_acyclic};
use stratus_topology::{FlowKind, TopologyBuilder, TopologyGraph};
use test_fixtures::{all_selections, full_selection, minimal_selection, queue_only_selection};

#[test]
fn golden_scenarios_have_expected_counts() {
    let selector = ArchitectureSelector::default();
    for scenario in test_fixtures::scenarios() {
        let selection = selector.select(&scenario.focus_category(), &scenario.score_vector());
        let topology = TopologyBuilder::build(&selection);
        assert_eq!(
            topology.node_count(),
            scenario.expected.node_count,
            "{}: node count",
            scenario.name
        );
        assert_eq!(
            topology.edge_count(),
            scenario.expected.edge_count,
            "{}: edge count",
            scenario.name
        );
    }
}

#[test]
fn ingress_chain_routes_into_compute() {
    let topology = TopologyBuilder::build(&minimal_selection());
    assert_eq!(topology.flow(Component::Dns, Component::Cdn), Some(FlowKind::Ingress));
    assert_eq!(
        topology.flow(Component::Cdn, Component::LoadBalancer),
        Some(FlowKind::Ingress)
    );
    assert_eq!(
        topology.flow(Component::LoadBalancer, Component::ServerlessCompute),
        Some(FlowKind::Route)
    );
    assert!(!topology.has_edge(Component::Cdn, Component::Dns));
}

#[test]
fn minimal_selection_archives_from_compute() {
    let topology = TopologyBuilder::build(&minimal_selection());
    assert_eq!(topology.node_count(), 7);
    assert_eq!(topology.edge_count(), 6);
    assert_eq!(
        topology.flow(Component::ServerlessCompute, Component::ObjectStore),
        Some(FlowKind::Archive)
    );
    assert!(!topology.contains(Component::AsyncQueue));
    assert!(!topology.contains(Component::StreamIngestion));
}

#[test]
fn queue_without_stream_still_archives_from_compute() {
    let topology = TopologyBuilder::build(&queue_only_selection());
    assert_eq!(
        topology.flow(Component::ContainerCompute, Component::AsyncQueue),
        Some(FlowKind::Enqueue)
    );
    assert!(topology.has_edge(Component::ContainerCompute, Component::ObjectStore));
    assert!(!topology.has_edge(Component::AsyncQueue, Component::ObjectStore));
    assert!(!topology.has_edge(Component::StreamIngestion, Component::ObjectStore));
}

#[test]
fn stream_takes_over_archiving() {
    let topology = TopologyBuilder::build(&full_selection());
    assert_eq!(
        topology.flow(Component::ContainerCompute, Component::StreamIngestion),
        Some(FlowKind::Publish)
    );
    assert_eq!(
        topology.flow(Component::StreamIngestion, Component::ObjectStore),
        Some(FlowKind::Archive)
    );
    assert!(!topology.has_edge(Component::ContainerCompute, Component::ObjectStore));
}

#[test]
fn nodes_follow_selection_order() {
    let selection = full_selection();
    let topology = TopologyBuilder::build(&selection);
    assert_eq!(topology.nodes(), selection.components());
}

#[test]
fn compute_successors_in_rule_order() {
    let topology = TopologyBuilder::build(&full_selection());
    assert_eq!(
        topology.successors(Component::ContainerCompute),
        vec![
            Component::RelationalDbHa,
            Component::DistributedCache,
            Component::AsyncQueue,
            Component::StreamIngestion,
        ]
    );
    assert!(topology.successors(Component::ObjectStore).is_empty());
    assert!(topology.successors(Component::LocalCache).is_empty());
}

#[test]
fn every_selection_builds_a_dag() {
    for selection in all_selections() {
        let topology = TopologyBuilder::build(&selection);
        assert!(is_acyclic(&topology), "cycle in {:?}", selection);
        let expected_nodes = 7
            + usize::from(selection.queue().is_some())
            + usize::from(selection.stream().is_some());
        assert_eq!(topology.node_count(), expected_nodes);
        assert_eq!(topology.edge_count(), expected_nodes - 1);
    }
}

#[test]
fn find_cycles_reports_a_manual_loop() {
    let mut topology = TopologyGraph::new();
    topology.add_flow(Component::ContainerCompute, Component::AsyncQueue, FlowKind::Enqueue);
    topology.add_flow(Component::AsyncQueue, Component::ContainerCompute, FlowKind::Route);
    let cycles = find_cycles(&topology);
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].len(), 2);
}

#[test]
fn layout_layers_follow_longest_path() {
    let topology = TopologyBuilder::build(&full_selection());
    let layout = topology.layout();
    assert_eq!(layout.len(), topology.node_count());

    let layer_of = |component: Component| {
        layout
            .iter()
            .find(|p| p.component == component)
            .map(|p| p.layer)
    };
    assert_eq!(layer_of(Component::Dns), Some(0));
    assert_eq!(layer_of(Component::Cdn), Some(1));
    assert_eq!(layer_of(Component::LoadBalancer), Some(2));
    assert_eq!(layer_of(Component::ContainerCompute), Some(3));
    assert_eq!(layer_of(Component::RelationalDbHa), Some(4));
    assert_eq!(layer_of(Component::StreamIngestion), Some(4));
    assert_eq!(layer_of(Component::ObjectStore), Some(5));
    assert_eq!(topology.depth(), 6);
}

#[test]
fn layout_rows_are_unique_within_a_layer() {
    for selection in all_selections() {
        let layout = TopologyBuilder::build(&selection).layout();
        for a in &layout {
            for b in &layout {
                if a.component != b.component && a.layer == b.layer {
                    assert_ne!(a.row, b.row);
                }
            }
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let selection = queue_only_selection();
    let first = TopologyBuilder::build(&selection).layout();
    let second = TopologyBuilder::build(&selection).layout();
    assert_eq!(first, second);
}

#[test]
fn dot_export_names_nodes_and_flows() {
    let dot = TopologyBuilder::build(&full_selection()).to_dot();
    assert!(dot.starts_with("digraph topology {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains("\"DNS\""));
    assert!(dot.contains("\"managed stream ingestion\""));
    assert!(dot.contains("\"archive\""));
    assert!(dot.contains("->"));
}

#[test]
fn snapshot_serializes_nodes_and_edges() {
    let snapshot = TopologyBuilder::build(&minimal_selection()).snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["nodes"][0], "dns");
    assert_eq!(json["edges"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["edges"][0]["kind"], "ingress");
    assert_eq!(json["edges"][5]["kind"], "archive");
}

mod property {
    use proptest::prelude::*;
    use stratus_core::traits::IArchitectureSelector;
    use stratus_core::{FocusCategory, ScoreVector};
    use stratus_selection::ArchitectureSelector;
    use stratus_topology::graph::acyclic::is_acyclic;
    use stratus_topology::TopologyBuilder;

    proptest! {
        #[test]
        fn selected_topologies_are_trees_rooted_at_dns(
            scores in proptest::array::uniform6(-50i64..150),
            focus_idx in 0usize..7,
        ) {
            let focus = FocusCategory::RECOGNIZED
                .get(focus_idx)
                .cloned()
                .unwrap_or_else(|| FocusCategory::Other("Batch ETL".to_string()));
            let selection = ArchitectureSelector::default()
                .select(&focus, &ScoreVector::from(scores));
            let topology = TopologyBuilder::build(&selection);

            prop_assert!(is_acyclic(&topology));
            prop_assert_eq!(topology.edge_count() + 1, topology.node_count());
            let roots: Vec<_> = topology
                .layout()
                .into_iter()
                .filter(|p| p.layer == 0)
                .map(|p| p.component)
                .collect();
            prop_assert_eq!(roots, vec![stratus_core::Component::Dns]);
        }
    }
}
