//! Graphviz export.

use petgraph::dot::{Config, Dot};

use crate::graph::TopologyGraph;

impl TopologyGraph {
    /// Render as a left-to-right Graphviz `digraph`. Node labels are the
    /// provider-neutral component names; edge labels are flow kinds.
    pub fn to_dot(&self) -> String {
        let body = format!("{}", Dot::with_config(&self.graph, &[Config::GraphContentOnly]));
        let mut out = String::from("digraph topology {\n    rankdir=LR;\n");
        for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }
}
