//! Centrality metrics for an [`EdgeGraph`].
//!
//! # Overview
//!
//! Each metric answers a different question about node importance:
//!
//! - **Degree centrality** (`degree`): what fraction of the other nodes is
//!   this node directly connected to?
//! - **Eigenvector centrality** (`eigenvector`): is this node connected to
//!   other high-scoring nodes (weighted by edge weight)?
//! - **Betweenness centrality** (`betweenness`): what fraction of weighted
//!   shortest paths between other pairs passes through this node? Edge
//!   weight is a *distance* here: lower weight means a shorter path.
//!
//! [`compute_centrality`] runs all three and zips them into one
//! [`CentralityRow`] per node, in node-index order.

pub mod betweenness;
pub mod degree;
pub mod eigenvector;

use serde::Serialize;
use tracing::instrument;

use crate::config::CentralityConfig;
use crate::error::Result;
use crate::graph::EdgeGraph;

/// The three centrality scores of one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityRow {
    #[serde(rename = "Name")]
    pub node: String,
    #[serde(rename = "Degree")]
    pub degree: f64,
    #[serde(rename = "Eigenvector")]
    pub eigenvector: f64,
    #[serde(rename = "Betweenness")]
    pub betweenness: f64,
}

/// Compute degree, eigenvector and betweenness centrality for every node.
///
/// Rows come back in node-index order (first appearance in the edge list).
///
/// # Errors
///
/// Returns [`crate::NetcentError::NegativeWeight`] when an edge length is
/// negative, and [`crate::NetcentError::Convergence`] when eigenvector power
/// iteration exhausts `config.max_iter`. No partial rows are returned.
#[instrument(skip(g), fields(nodes = g.node_count(), edges = g.edge_count()))]
pub fn compute_centrality(g: &EdgeGraph, config: &CentralityConfig) -> Result<Vec<CentralityRow>> {
    let degree = degree::degree_centrality(g);
    let betweenness = betweenness::betweenness_centrality(g)?;
    let eigen = eigenvector::eigenvector_centrality(g, config.max_iter, config.tolerance)?;

    let rows = g
        .labels()
        .zip(degree)
        .zip(eigen.scores)
        .zip(betweenness)
        .map(|(((node, degree), eigenvector), betweenness)| CentralityRow {
            node: node.to_string(),
            degree,
            eigenvector,
            betweenness,
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetcentError;
    use crate::load::EdgeRecord;

    fn path_graph() -> EdgeGraph {
        EdgeGraph::from_records(&[
            EdgeRecord::new("A", "t", "B", 1.0),
            EdgeRecord::new("B", "t", "C", 2.0),
        ])
    }

    #[test]
    fn rows_follow_node_order() {
        let rows = compute_centrality(&path_graph(), &CentralityConfig::default()).expect("rows");
        let names: Vec<&str> = rows.iter().map(|r| r.node.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn path_graph_reference_values() {
        let rows = compute_centrality(&path_graph(), &CentralityConfig::default()).expect("rows");
        assert!((rows[0].degree - 0.5).abs() < 1e-12);
        assert!((rows[1].degree - 1.0).abs() < 1e-12);
        assert!((rows[2].degree - 0.5).abs() < 1e-12);
        assert!((rows[1].betweenness - 1.0).abs() < 1e-12);
        assert!(rows[1].eigenvector > rows[0].eigenvector);
        // The heavier B-C edge pulls C above A.
        assert!(rows[2].eigenvector > rows[0].eigenvector);
    }

    #[test]
    fn convergence_failure_yields_no_rows() {
        let cfg = CentralityConfig {
            max_iter: 1,
            tolerance: 1e-12,
        };
        let err = compute_centrality(&path_graph(), &cfg).expect_err("should not converge");
        assert!(matches!(err, NetcentError::Convergence { iterations: 1 }));
    }

    #[test]
    fn empty_graph_has_no_rows() {
        let rows =
            compute_centrality(&EdgeGraph::default(), &CentralityConfig::default()).expect("rows");
        assert!(rows.is_empty());
    }
}
