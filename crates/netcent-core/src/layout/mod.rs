//! Two-dimensional node layouts.
//!
//! | Layout         | Algorithm                                           |
//! |----------------|-----------------------------------------------------|
//! | `kamada_kawai` | stress majorization on weighted graph distances     |
//! | `circular`     | nodes evenly spaced on the unit circle              |
//! | `spring`       | Fruchterman-Reingold force simulation               |
//! | `random`       | uniform placement in the unit square                |
//!
//! Every layout is deterministic for a given graph and [`LayoutConfig`]:
//! the random and spring layouts draw from a seeded RNG. Coordinates are in
//! an arbitrary layout space; the renderer fits them to the canvas.

pub mod circular;
pub mod kamada_kawai;
pub mod random;
pub mod spring;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::instrument;

use crate::config::LayoutConfig;
use crate::error::NetcentError;
use crate::graph::EdgeGraph;

/// Supported layout algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    KamadaKawai,
    Circular,
    #[default]
    Spring,
    Random,
}

impl LayoutKind {
    pub const ALL: [Self; 4] = [Self::KamadaKawai, Self::Circular, Self::Spring, Self::Random];

    /// Name used on the command line and in output file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KamadaKawai => "kamada_kawai",
            Self::Circular => "circular",
            Self::Spring => "spring",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = NetcentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| NetcentError::UnknownLayout {
                name: s.to_string(),
                expected: Self::ALL.map(Self::as_str).join(", "),
            })
    }
}

/// Rendering parameters chosen on the command surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutParams {
    pub layout: LayoutKind,
    pub scale_node_by_degree: bool,
    pub scale_edge_by_weight: bool,
}

/// A node position in layout space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Compute positions for every node, indexed by `NodeIndex::index()`.
#[must_use]
#[instrument(skip(g, config), fields(nodes = g.node_count()))]
pub fn compute_layout(g: &EdgeGraph, kind: LayoutKind, config: &LayoutConfig) -> Vec<Point> {
    match kind {
        LayoutKind::KamadaKawai => kamada_kawai::kamada_kawai_layout(g, config.stress_iterations),
        LayoutKind::Circular => circular::circular_layout(g.node_count()),
        LayoutKind::Spring => spring::spring_layout(g, config.spring_iterations, config.seed),
        LayoutKind::Random => random::random_layout(g.node_count(), config.seed),
    }
}

/// Edge length used by the distance-driven layouts.
///
/// Weights are lengths, as in betweenness; non-positive weights have no
/// usable length and fall back to 1.
#[must_use]
pub fn layout_length(weight: f64) -> f64 {
    if weight > 0.0 { weight } else { 1.0 }
}

/// Center `points` on their mean and scale so the largest absolute
/// coordinate equals 1.
#[allow(clippy::cast_precision_loss)]
pub fn rescale(points: &mut [Point]) {
    if points.is_empty() {
        return;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

    let mut limit: f64 = 0.0;
    for p in points.iter_mut() {
        p.x -= mean_x;
        p.y -= mean_y;
        limit = limit.max(p.x.abs()).max(p.y.abs());
    }

    if limit > 0.0 {
        for p in points.iter_mut() {
            p.x /= limit;
            p.y /= limit;
        }
    }
}
