//! Undirected weighted graph built from an edge list.
//!
//! ## Pipeline
//!
//! ```text
//! Vec<EdgeRecord>
//!        ↓  build::EdgeGraph::from_records()
//! EdgeGraph (UnGraph<String, f64>, one edge per unordered pair)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (density, component count, self-loops, …)
//! ```

pub mod build;
pub mod stats;

pub use build::EdgeGraph;
pub use stats::GraphStats;
