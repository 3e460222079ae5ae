#![forbid(unsafe_code)]
//! netcent-core library.
//!
//! Loads tab-delimited weighted edge lists, builds undirected graphs,
//! computes degree, eigenvector and betweenness centrality, and renders
//! node-link layouts to PNG.
//!
//! # Conventions
//!
//! - **Errors**: Use [`error::Result`] (backed by [`error::NetcentError`]).
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//!
//! # Pipeline
//!
//! ```text
//! input::resolve()          path -> [file, ...]
//!        ↓  load::load_edges()
//! Vec<EdgeRecord>
//!        ↓  graph::EdgeGraph::from_records()
//! EdgeGraph ──────────────┐
//!        ↓                ↓
//! metrics::compute_centrality()   layout::compute_layout()
//!        ↓                ↓
//! table::write_table()    render::render_graph()
//! ```
//!
//! [`pipeline::run`] drives the whole sequence over every resolved file.

pub mod artifact;
pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod layout;
pub mod load;
pub mod metrics;
pub mod pipeline;
pub mod render;
pub mod table;

pub use error::{NetcentError, Result};
