//! Edge-list loading.
//!
//! Input files are tab-delimited text with a header row naming at least the
//! columns `source`, `type`, `target` and `weight` (case-sensitive, any order,
//! extra columns ignored). Each following row is one undirected edge.
//!
//! Row policy:
//!
//! - a missing required column fails the whole file ([`NetcentError::Schema`]);
//! - a non-numeric or non-finite `weight` fails the whole file
//!   ([`NetcentError::Parse`]);
//! - a row with an empty `source` or `target` is dropped with a warning.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{NetcentError, Result};

/// Columns every edge list must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["source", "type", "target", "weight"];

/// One row of an edge list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub source: String,
    /// Descriptive relation type. Carried through, never interpreted.
    #[serde(rename = "type")]
    pub edge_type: String,
    pub target: String,
    pub weight: f64,
}

impl EdgeRecord {
    #[must_use]
    pub fn new(source: &str, edge_type: &str, target: &str, weight: f64) -> Self {
        Self {
            source: source.to_string(),
            edge_type: edge_type.to_string(),
            target: target.to_string(),
            weight,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    source: usize,
    edge_type: usize,
    target: usize,
    weight: usize,
}

impl ColumnIndex {
    fn from_headers(path: &Path, headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| find(**name).is_none())
            .map(|name| (*name).to_string())
            .collect();

        match (find("source"), find("type"), find("target"), find("weight")) {
            (Some(source), Some(edge_type), Some(target), Some(weight)) => Ok(Self {
                source,
                edge_type,
                target,
                weight,
            }),
            _ => Err(NetcentError::Schema {
                path: path.to_path_buf(),
                missing,
            }),
        }
    }
}

/// Load every edge from the tab-delimited file at `path`, in file order.
///
/// # Errors
///
/// Returns [`NetcentError::Csv`] if the file cannot be opened or read,
/// [`NetcentError::Schema`] for a header without the required columns and
/// [`NetcentError::Parse`] for the first unreadable weight.
pub fn load_edges(path: &Path) -> Result<Vec<EdgeRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let columns = ColumnIndex::from_headers(path, reader.headers()?)?;

    let mut edges = Vec::new();
    let mut dropped = 0_usize;

    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);

        let field = |idx: usize| row.get(idx).unwrap_or_default();
        let source = field(columns.source);
        let target = field(columns.target);

        if source.is_empty() || target.is_empty() {
            warn!(
                path = %path.display(),
                line,
                "dropping row with missing source or target"
            );
            dropped += 1;
            continue;
        }

        let raw_weight = field(columns.weight);
        let weight = parse_weight(raw_weight).ok_or_else(|| NetcentError::Parse {
            path: path.to_path_buf(),
            line,
            value: raw_weight.to_string(),
        })?;

        edges.push(EdgeRecord::new(
            source,
            field(columns.edge_type),
            target,
            weight,
        ));
    }

    debug!(
        path = %path.display(),
        edges = edges.len(),
        dropped,
        "loaded edge list"
    );

    Ok(edges)
}

fn parse_weight(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|w| w.is_finite())
}
