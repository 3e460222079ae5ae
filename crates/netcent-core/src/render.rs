//! Layout rendering to PNG.
//!
//! # Visual encoding
//!
//! - Node radius: fixed `node_radius`, or, with degree scaling, the node's
//!   neighbour count mapped linearly onto `node_radius_range`.
//! - Edge width: fixed `edge_width`, or, with weight scaling, the edge
//!   weight mapped linearly onto `edge_width_range`.
//! - Labels: node names next to each node. Labels need a font file; without
//!   one the image is still rendered, unlabelled, and a warning is logged.
//!
//! Layout coordinates are fitted to the canvas preserving aspect ratio, with
//! `margin` pixels left free on every side.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use petgraph::visit::EdgeRef;
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::artifact;
use crate::config::{LayoutConfig, RenderConfig};
use crate::error::{NetcentError, Result};
use crate::graph::EdgeGraph;
use crate::layout::{LayoutParams, Point, compute_layout};

const LABEL_FONT: &str = "netcent-label";
const NODE_COLOR: RGBColor = RGBColor(70, 130, 180);
const EDGE_COLOR: RGBColor = RGBColor(150, 150, 150);
const LABEL_COLOR: RGBColor = RGBColor(20, 20, 20);

/// Fonts tried, in order, when neither `font_path` nor `NETCENT_FONT` is set.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static LABEL_FONT_READY: OnceLock<bool> = OnceLock::new();

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

/// Closed output interval for a linear visual scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl ScaleRange {
    /// Map `value` from `[domain_min, domain_max]` onto `[self.min, self.max]`.
    ///
    /// Strictly increasing in `value` whenever the domain is non-degenerate.
    /// A degenerate domain (every value equal) maps to the midpoint.
    #[must_use]
    pub fn scale(self, value: f64, domain_min: f64, domain_max: f64) -> f64 {
        let span = domain_max - domain_min;
        if !(span > 0.0 && span.is_finite()) {
            return f64::midpoint(self.min, self.max);
        }
        let t = ((value - domain_min) / span).clamp(0.0, 1.0);
        t.mul_add(self.max - self.min, self.min)
    }
}

/// Drawn radius of every node, in node-index order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn node_radii(g: &EdgeGraph, scale_by_degree: bool, cfg: &RenderConfig) -> Vec<f64> {
    if !scale_by_degree {
        return vec![cfg.node_radius; g.node_count()];
    }
    let degrees: Vec<f64> = g.neighbor_counts().into_iter().map(|d| d as f64).collect();
    scale_all(&degrees, cfg.node_radius_range)
}

/// Drawn width of every edge, in edge-index order.
#[must_use]
pub fn edge_widths(g: &EdgeGraph, scale_by_weight: bool, cfg: &RenderConfig) -> Vec<f64> {
    if !scale_by_weight {
        return vec![cfg.edge_width; g.edge_count()];
    }
    let weights: Vec<f64> = g.graph.edge_weights().copied().collect();
    scale_all(&weights, cfg.edge_width_range)
}

fn scale_all(values: &[f64], range: ScaleRange) -> Vec<f64> {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|&v| range.scale(v, lo, hi)).collect()
}

// ---------------------------------------------------------------------------
// Canvas mapping
// ---------------------------------------------------------------------------

/// Fit layout coordinates into the canvas, preserving aspect ratio.
///
/// The layout's y axis points up; pixel rows grow downward.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fit_to_canvas(points: &[Point], cfg: &RenderConfig) -> Vec<(i32, i32)> {
    if points.is_empty() {
        return Vec::new();
    }

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let span = (max_x - min_x).max(max_y - min_y);
    let usable_w = cfg.width.saturating_sub(2 * cfg.margin);
    let usable_h = cfg.height.saturating_sub(2 * cfg.margin);
    let side = f64::from(usable_w.min(usable_h));
    let scale = if span > 0.0 { side / span } else { 0.0 };

    let cx = f64::from(cfg.width) / 2.0;
    let cy = f64::from(cfg.height) / 2.0;
    let mid_x = f64::midpoint(min_x, max_x);
    let mid_y = f64::midpoint(min_y, max_y);

    points
        .iter()
        .map(|p| {
            let px = (p.x - mid_x).mul_add(scale, cx);
            let py = (mid_y - p.y).mul_add(scale, cy);
            (px.round() as i32, py.round() as i32)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Lay out `g`, draw it, and write the PNG to `dest`.
///
/// The image is drawn into a staging file beside `dest` and renamed into
/// place only after encoding succeeds.
///
/// # Errors
///
/// Returns [`NetcentError::Render`] if drawing or encoding fails and
/// [`NetcentError::Io`] if the staging file cannot be created or moved.
#[instrument(skip(g, layout, cfg, dest), fields(nodes = g.node_count(), dest = %dest.display()))]
pub fn render_graph(
    g: &EdgeGraph,
    params: &LayoutParams,
    layout: &LayoutConfig,
    cfg: &RenderConfig,
    dest: &Path,
) -> Result<()> {
    let positions = compute_layout(g, params.layout, layout);
    let pixels = fit_to_canvas(&positions, cfg);
    let radii = node_radii(g, params.scale_node_by_degree, cfg);
    let widths = edge_widths(g, params.scale_edge_by_weight, cfg);
    let labels = label_font_available(cfg);

    let staged = artifact::staging_file(dest, ".png")?;
    draw(g, &pixels, &radii, &widths, labels, cfg, staged.path())?;
    artifact::commit(staged, dest)?;

    debug!(labels, "rendered layout");
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw(
    g: &EdgeGraph,
    pixels: &[(i32, i32)],
    radii: &[f64],
    widths: &[f64],
    labels: bool,
    cfg: &RenderConfig,
    path: &Path,
) -> Result<()> {
    let to_px = |v: f64| v.round().max(1.0) as u32;

    let root = BitMapBackend::new(path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    for edge in g.graph.edge_references() {
        let a = edge.source().index();
        let b = edge.target().index();
        let style = EDGE_COLOR.stroke_width(to_px(widths[edge.id().index()]));
        if a == b {
            // Self-loop: a small ring touching the node's upper right.
            let r = to_px(radii[a]) as i32;
            let (x, y) = pixels[a];
            root.draw(&Circle::new((x + r, y - r), r.unsigned_abs(), style))
                .map_err(render_error)?;
        } else {
            root.draw(&PathElement::new(vec![pixels[a], pixels[b]], style))
                .map_err(render_error)?;
        }
    }

    for (&center, &radius) in pixels.iter().zip(radii) {
        root.draw(&Circle::new(center, to_px(radius), NODE_COLOR.filled()))
            .map_err(render_error)?;
    }

    if labels {
        let font_size = f64::from(cfg.font_size);
        for ((x, y), (label, &radius)) in pixels.iter().zip(g.labels().zip(radii)) {
            let anchor = (x + to_px(radius) as i32 + 2, y - (cfg.font_size / 2) as i32);
            let style = (LABEL_FONT, font_size).into_font().color(&LABEL_COLOR);
            root.draw(&Text::new(label.to_string(), anchor, style))
                .map_err(render_error)?;
        }
    }

    root.present().map_err(render_error)?;
    Ok(())
}

fn render_error(e: impl std::fmt::Display) -> NetcentError {
    NetcentError::Render(e.to_string())
}

// ---------------------------------------------------------------------------
// Label font
// ---------------------------------------------------------------------------

/// Whether a label font has been registered. Resolved once per process.
fn label_font_available(cfg: &RenderConfig) -> bool {
    *LABEL_FONT_READY.get_or_init(|| register_label_font(cfg.font_path.as_deref()))
}

fn register_label_font(explicit: Option<&Path>) -> bool {
    let from_env = std::env::var_os("NETCENT_FONT").map(PathBuf::from);
    let candidates = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(from_env)
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from));

    for path in candidates {
        let Ok(bytes) = fs::read(&path) else {
            continue;
        };
        // The font registry holds fonts for the life of the process.
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        if register_font(LABEL_FONT, FontStyle::Normal, bytes).is_ok() {
            debug!(font = %path.display(), "registered label font");
            return true;
        }
        warn!(font = %path.display(), "unusable font file");
    }

    warn!("no label font found (set NETCENT_FONT or render.font_path); labels will be omitted");
    false
}
