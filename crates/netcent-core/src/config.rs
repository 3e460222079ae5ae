//! Run configuration.
//!
//! Every value has a serde default, so a config file only needs the keys it
//! wants to override:
//!
//! ```toml
//! [output]
//! dir = "results"
//!
//! [render]
//! width = 1600
//! height = 1600
//! node_radius_range = { min = 3.0, max = 24.0 }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NetcentError, Result};
use crate::render::ScaleRange;

/// Top-level configuration threaded through [`crate::pipeline::run`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub centrality: CentralityConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl RunConfig {
    /// Load a config file, falling back to defaults for any missing key.
    ///
    /// # Errors
    ///
    /// Returns [`NetcentError::Io`] if the file cannot be read and
    /// [`NetcentError::Config`] if it is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str::<Self>(&content).map_err(|e| NetcentError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the centrality tables and layout images.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Power-iteration bounds for eigenvector centrality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralityConfig {
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    /// Per-node convergence tolerance; the iteration stops once the L1
    /// change of the score vector drops below `n * tolerance`.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            max_iter: default_max_iter(),
            tolerance: default_tolerance(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Seed for the random and spring layouts.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_spring_iterations")]
    pub spring_iterations: usize,
    #[serde(default = "default_stress_iterations")]
    pub stress_iterations: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            spring_iterations: default_spring_iterations(),
            stress_iterations: default_stress_iterations(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_canvas_side")]
    pub width: u32,
    #[serde(default = "default_canvas_side")]
    pub height: u32,
    #[serde(default = "default_margin")]
    pub margin: u32,
    /// Radius used for every node when degree scaling is off.
    #[serde(default = "default_node_radius")]
    pub node_radius: f64,
    #[serde(default = "default_node_radius_range")]
    pub node_radius_range: ScaleRange,
    /// Stroke width used for every edge when weight scaling is off.
    #[serde(default = "default_edge_width")]
    pub edge_width: f64,
    #[serde(default = "default_edge_width_range")]
    pub edge_width_range: ScaleRange,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// TTF/OTF file used for node labels. Falls back to `NETCENT_FONT`
    /// and then to a few well-known system locations.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_side(),
            height: default_canvas_side(),
            margin: default_margin(),
            node_radius: default_node_radius(),
            node_radius_range: default_node_radius_range(),
            edge_width: default_edge_width(),
            edge_width_range: default_edge_width_range(),
            font_size: default_font_size(),
            font_path: None,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

const fn default_max_iter() -> usize {
    100
}

const fn default_tolerance() -> f64 {
    1.0e-6
}

const fn default_seed() -> u64 {
    42
}

const fn default_spring_iterations() -> usize {
    50
}

const fn default_stress_iterations() -> usize {
    300
}

const fn default_canvas_side() -> u32 {
    1200
}

const fn default_margin() -> u32 {
    60
}

const fn default_node_radius() -> f64 {
    6.0
}

const fn default_node_radius_range() -> ScaleRange {
    ScaleRange { min: 4.0, max: 18.0 }
}

const fn default_edge_width() -> f64 {
    1.0
}

const fn default_edge_width_range() -> ScaleRange {
    ScaleRange { min: 1.0, max: 8.0 }
}

const fn default_font_size() -> u32 {
    14
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.output.dir, PathBuf::from("output"));
        assert_eq!(cfg.centrality.max_iter, 100);
        assert!((cfg.centrality.tolerance - 1.0e-6).abs() < f64::EPSILON);
        assert_eq!(cfg.layout.seed, 42);
        assert_eq!(cfg.render.width, 1200);
        assert!(cfg.render.font_path.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: RunConfig = toml::from_str(
            r#"
            [output]
            dir = "results"

            [render]
            width = 800
            node_radius_range = { min = 2.0, max = 30.0 }
            "#,
        )
        .expect("parse");

        assert_eq!(cfg.output.dir, PathBuf::from("results"));
        assert_eq!(cfg.render.width, 800);
        assert_eq!(cfg.render.height, 1200);
        assert_eq!(cfg.render.node_radius_range, ScaleRange { min: 2.0, max: 30.0 });
        assert_eq!(cfg.centrality, CentralityConfig::default());
    }

    #[test]
    fn empty_file_is_default() {
        let cfg: RunConfig = toml::from_str("").expect("parse");
        assert_eq!(cfg, RunConfig::default());
    }

    #[test]
    fn load_reports_bad_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("netcent.toml");
        std::fs::write(&path, "[centrality]\nmax_iter = \"many\"\n").expect("write");

        let err = RunConfig::load(&path).expect_err("should fail");
        assert!(matches!(err, NetcentError::Config { .. }));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = RunConfig::load(Path::new("/nonexistent/netcent.toml")).expect_err("missing");
        assert!(matches!(err, NetcentError::Io(_)));
    }
}
