//! Graph construction from loaded edge records.
//!
//! # Duplicate pairs
//!
//! The graph holds at most one edge per unordered node pair. Records are
//! applied in file order and a later record naming the same pair (in either
//! direction) overwrites the earlier weight.
//!
//! # Self-loops
//!
//! A record whose `source` equals its `target` becomes a self-loop edge.
//! Self-loops never count toward a node's degree and are skipped by
//! shortest-path metrics, but they do contribute to eigenvector centrality
//! through the weighted adjacency.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::load::EdgeRecord;

// ---------------------------------------------------------------------------
// EdgeGraph
// ---------------------------------------------------------------------------

/// An undirected weighted graph keyed by node label.
///
/// Nodes are added in first-appearance order, so node indices (and every
/// per-node vector derived from them) follow the order in which labels
/// first occur in the edge list.
#[derive(Debug, Clone, Default)]
pub struct EdgeGraph {
    /// Undirected graph: nodes = labels, edge weights = record weights.
    pub graph: UnGraph<String, f64>,
    /// Mapping from node label to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl EdgeGraph {
    /// Build the graph from `records`, last weight winning on duplicate pairs.
    #[must_use]
    pub fn from_records(records: &[EdgeRecord]) -> Self {
        let mut eg = Self::default();
        let mut overwritten = 0_usize;

        for record in records {
            let a = eg.intern(&record.source);
            let b = eg.intern(&record.target);
            if eg.graph.find_edge(a, b).is_some() {
                overwritten += 1;
            }
            // update_edge replaces the weight of an existing undirected edge.
            eg.graph.update_edge(a, b, record.weight);
        }

        debug!(
            nodes = eg.node_count(),
            edges = eg.edge_count(),
            overwritten,
            "built edge graph"
        );

        eg
    }

    fn intern(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(label.to_string());
        self.node_map.insert(label.to_string(), idx);
        idx
    }

    /// Return the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges (self-loops included).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a label.
    #[must_use]
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    /// Return the label of a node.
    #[must_use]
    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Labels in node-index order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Weight of the edge between two labels, in either direction.
    #[must_use]
    pub fn weight_between(&self, a: &str, b: &str) -> Option<f64> {
        let edge = self
            .graph
            .find_edge(self.node_index(a)?, self.node_index(b)?)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Weighted adjacency lists indexed by `NodeIndex::index()`.
    ///
    /// Every non-loop edge appears in both endpoint lists; a self-loop
    /// appears once, in its own node's list.
    #[must_use]
    pub fn adjacency(&self) -> Vec<Vec<(usize, f64)>> {
        let mut adj = vec![Vec::new(); self.node_count()];
        for edge in self.graph.edge_references() {
            let a = edge.source().index();
            let b = edge.target().index();
            let w = *edge.weight();
            adj[a].push((b, w));
            if a != b {
                adj[b].push((a, w));
            }
        }
        adj
    }

    /// Number of distinct neighbours of each node, self excluded.
    #[must_use]
    pub fn neighbor_counts(&self) -> Vec<usize> {
        self.adjacency()
            .iter()
            .enumerate()
            .map(|(i, nbrs)| nbrs.iter().filter(|(j, _)| *j != i).count())
            .collect()
    }

    /// Number of self-loop edges.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.graph
            .edge_references()
            .filter(|e| e.source() == e.target())
            .count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
