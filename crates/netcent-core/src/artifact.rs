//! Output artifact naming and atomic placement.
//!
//! Artifact names depend only on the input file's base name and the run
//! parameters, so re-running the same input overwrites the previous output:
//!
//! ```text
//! {output_dir}/{base}_network.csv
//! {output_dir}/{base}_{layout}_{scale_node_by_degree}_{scale_edge_by_weight}.png
//! ```
//!
//! Writers stage into a hidden temporary file in the output directory and
//! rename it over the destination once complete, so an interrupted run never
//! leaves a truncated artifact behind.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{NetcentError, Result};
use crate::layout::LayoutParams;

/// Base name of an input file: its file name without the final extension.
#[must_use]
pub fn base_name(input: &Path) -> String {
    input
        .file_stem()
        .map_or_else(|| "edges".to_string(), |s| s.to_string_lossy().into_owned())
}

/// Destination of the centrality table for `input`.
#[must_use]
pub fn table_path(output_dir: &Path, input: &Path) -> PathBuf {
    output_dir.join(format!("{}_network.csv", base_name(input)))
}

/// Destination of the layout image for `input` under `params`.
#[must_use]
pub fn image_path(output_dir: &Path, input: &Path, params: &LayoutParams) -> PathBuf {
    output_dir.join(format!(
        "{}_{}_{}_{}.png",
        base_name(input),
        params.layout,
        params.scale_node_by_degree,
        params.scale_edge_by_weight
    ))
}

/// Create a hidden staging file next to `dest`, keeping `suffix` so
/// extension-sniffing encoders pick the right format.
pub(crate) fn staging_file(dest: &Path, suffix: &str) -> Result<NamedTempFile> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(tempfile::Builder::new()
        .prefix(".netcent-")
        .suffix(suffix)
        .tempfile_in(dir)?)
}

/// Atomically move a finished staging file onto `dest`.
pub(crate) fn commit(staged: NamedTempFile, dest: &Path) -> Result<()> {
    staged
        .persist(dest)
        .map(drop)
        .map_err(|e| NetcentError::Io(e.error))
}
