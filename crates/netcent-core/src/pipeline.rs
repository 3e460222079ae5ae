//! Run driver: apply the full pipeline to every resolved input file.
//!
//! Files are processed sequentially and independently. Failures are
//! contained at the narrowest level that makes sense:
//!
//! | Failure                        | Scope                                  |
//! |--------------------------------|----------------------------------------|
//! | `NotFound`, `NoInputFiles`     | whole run, before any file is loaded   |
//! | `Schema`, `Parse`, I/O on load | that file; the run continues           |
//! | `Convergence`, `NegativeWeight`| that file's table; the image is drawn  |
//! | table write / render failure   | that artifact only                     |
//!
//! Every contained failure is logged with `warn!` and recorded in the
//! file's [`FileReport`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::artifact;
use crate::config::RunConfig;
use crate::error::{NetcentError, Result};
use crate::graph::{EdgeGraph, GraphStats};
use crate::input;
use crate::layout::LayoutParams;
use crate::load::load_edges;
use crate::metrics::compute_centrality;
use crate::render::render_graph;
use crate::table::write_table;

/// Outcome of processing one input file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    /// Present once the file loaded and its graph was built.
    pub stats: Option<GraphStats>,
    /// Path of the centrality table, if written.
    pub table: Option<PathBuf>,
    /// Path of the layout image, if written.
    pub image: Option<PathBuf>,
    /// Recoverable errors hit while processing this file.
    pub errors: Vec<String>,
}

impl FileReport {
    fn new(input: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            ..Self::default()
        }
    }

    /// Both artifacts were produced.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.table.is_some() && self.image.is_some()
    }

    fn record(&mut self, stage: &str, err: &NetcentError) {
        warn!(input = %self.input.display(), stage, error = %err, "file step failed");
        self.errors.push(format!("{stage}: {err}"));
    }
}

/// Outcome of a whole run, one report per resolved file in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub files: Vec<FileReport>,
}

impl RunSummary {
    /// Files that produced both artifacts.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.files.iter().filter(|f| f.is_complete()).count()
    }

    /// Files that recorded at least one error.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| !f.errors.is_empty()).count()
    }
}

/// Run the pipeline over `input` (a file or a directory of edge lists).
///
/// # Errors
///
/// Only run-level failures are returned: [`NetcentError::NotFound`] if
/// `input` does not exist, [`NetcentError::NoInputFiles`] if it resolves to
/// no files, and [`NetcentError::Io`] if the output directory cannot be
/// created. Per-file failures are reported in the [`RunSummary`].
#[instrument(skip(input, params, config), fields(input = %input.display(), layout = %params.layout))]
pub fn run(input: &Path, params: &LayoutParams, config: &RunConfig) -> Result<RunSummary> {
    let files = input::resolve(input)?;
    if files.is_empty() {
        return Err(NetcentError::NoInputFiles(input.to_path_buf()));
    }

    let output_dir = config.output.dir.clone();
    fs::create_dir_all(&output_dir)?;
    info!(files = files.len(), output_dir = %output_dir.display(), "starting run");

    let reports: Vec<FileReport> = files
        .iter()
        .map(|file| process_file(file, params, config))
        .collect();

    let summary = RunSummary {
        output_dir,
        files: reports,
    };
    info!(
        files = summary.files.len(),
        processed = summary.processed(),
        failed = summary.failed(),
        "run finished"
    );
    Ok(summary)
}

/// Load, analyse and render a single file. Never fails; problems are
/// recorded on the returned report.
#[instrument(skip(file, params, config), fields(file = %file.display()))]
pub fn process_file(file: &Path, params: &LayoutParams, config: &RunConfig) -> FileReport {
    let mut report = FileReport::new(file);

    let records = match load_edges(file) {
        Ok(records) => records,
        Err(e) => {
            report.record("load", &e);
            return report;
        }
    };

    let graph = EdgeGraph::from_records(&records);
    let stats = GraphStats::from_graph(&graph);
    info!(
        nodes = stats.node_count,
        edges = stats.edge_count,
        density = stats.density,
        components = stats.component_count,
        self_loops = stats.self_loop_count,
        "graph built"
    );
    report.stats = Some(stats);

    let output_dir = &config.output.dir;

    let table_dest = artifact::table_path(output_dir, file);
    match compute_centrality(&graph, &config.centrality)
        .and_then(|rows| write_table(&rows, &table_dest))
    {
        Ok(()) => report.table = Some(table_dest),
        Err(e) if e.is_centrality_failure() => report.record("centrality", &e),
        Err(e) => report.record("table", &e),
    }

    let image_dest = artifact::image_path(output_dir, file, params);
    match render_graph(&graph, params, &config.layout, &config.render, &image_dest) {
        Ok(()) => report.image = Some(image_dest),
        Err(e) => report.record("render", &e),
    }

    if report.errors.is_empty() {
        info!("file processed");
    }
    report
}
