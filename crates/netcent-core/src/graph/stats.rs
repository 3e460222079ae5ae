//! Summary statistics for an edge graph.
//!
//! - **node_count** / **edge_count**: sizes of the graph (self-loops count as
//!   edges).
//! - **density**: `2 * simple_edges / (n * (n - 1))`, where self-loops are not
//!   simple edges. Zero for graphs with fewer than two nodes.
//! - **component_count**: number of connected components.
//! - **self_loop_count**: number of `A -- A` edges.

use petgraph::algo::connected_components;
use serde::Serialize;

use crate::graph::build::EdgeGraph;

/// Summary statistics logged for every processed file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub component_count: usize,
    pub self_loop_count: usize,
}

impl GraphStats {
    /// Compute statistics from an [`EdgeGraph`].
    #[must_use]
    pub fn from_graph(g: &EdgeGraph) -> Self {
        let node_count = g.node_count();
        let edge_count = g.edge_count();
        let self_loop_count = g.self_loop_count();

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count - self_loop_count),
            component_count: connected_components(&g.graph),
            self_loop_count,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(nodes: usize, simple_edges: usize) -> f64 {
    if nodes < 2 {
        return 0.0;
    }
    let possible = (nodes * (nodes - 1)) as f64 / 2.0;
    simple_edges as f64 / possible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::EdgeRecord;

    fn graph(edges: &[(&str, &str)]) -> EdgeGraph {
        let records: Vec<EdgeRecord> = edges
            .iter()
            .map(|(a, b)| EdgeRecord::new(a, "t", b, 1.0))
            .collect();
        EdgeGraph::from_records(&records)
    }

    #[test]
    fn empty_graph_stats() {
        let stats = GraphStats::from_graph(&EdgeGraph::default());
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.component_count, 0);
        assert!((stats.density - 0.0).abs() < 1e-12);
    }

    #[test]
    fn triangle_is_complete() {
        let stats = GraphStats::from_graph(&graph(&[("A", "B"), ("B", "C"), ("C", "A")]));
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 3);
        assert!((stats.density - 1.0).abs() < 1e-12);
        assert_eq!(stats.component_count, 1);
    }

    #[test]
    fn disjoint_pairs_and_self_loop() {
        let stats = GraphStats::from_graph(&graph(&[("A", "B"), ("C", "D"), ("D", "D")]));
        assert_eq!(stats.component_count, 2);
        assert_eq!(stats.self_loop_count, 1);
        // 2 simple edges out of 6 possible.
        assert!((stats.density - 2.0 / 6.0).abs() < 1e-12);
    }
}
