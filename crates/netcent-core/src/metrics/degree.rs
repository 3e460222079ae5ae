//! Degree centrality.
//!
//! `degree(v) = distinct_neighbours(v) / (n - 1)`. Self-loops are ignored, so
//! scores stay within `[0, 1]`. A single-node graph scores `1.0`.

use crate::graph::EdgeGraph;

/// Normalized degree centrality per node, in node-index order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(g: &EdgeGraph) -> Vec<f64> {
    let n = g.node_count();
    if n <= 1 {
        return vec![1.0; n];
    }

    let scale = 1.0 / (n - 1) as f64;
    g.neighbor_counts()
        .into_iter()
        .map(|count| count as f64 * scale)
        .collect()
}
