//! Error type shared by every stage of the pipeline.

use std::io;
use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetcentError>;

/// Errors that can occur while resolving, loading, analysing or rendering
/// an edge list.
#[derive(Debug, thiserror::Error)]
pub enum NetcentError {
    /// The input path is neither a file nor a directory.
    #[error("input path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input resolved, but to zero processable files.
    #[error("no edge-list files found under {}", .0.display())]
    NoInputFiles(PathBuf),

    /// The header row lacks one or more required columns.
    #[error("{}: missing required column(s): {}", path.display(), missing.join(", "))]
    Schema {
        path: PathBuf,
        missing: Vec<String>,
    },

    /// A `weight` cell could not be read as a finite number.
    #[error("{}:{line}: weight `{value}` is not a finite number", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        value: String,
    },

    /// Eigenvector power iteration exhausted its iteration bound.
    #[error("eigenvector centrality did not converge within {iterations} iterations")]
    Convergence { iterations: usize },

    /// Weighted shortest paths are undefined with negative edge lengths.
    #[error("edge {source_node} -- {target_node} has negative weight {weight}")]
    NegativeWeight {
        source_node: String,
        target_node: String,
        weight: f64,
    },

    /// The requested layout name is not one of the supported layouts.
    #[error("unknown layout `{name}` (expected one of: {expected})")]
    UnknownLayout { name: String, expected: String },

    /// A config file could not be parsed.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Drawing or encoding the layout image failed.
    #[error("render error: {0}")]
    Render(String),

    /// Delimited-text reader or writer failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl NetcentError {
    /// Returns `true` for errors that invalidate the whole run rather than a
    /// single input file.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::NoInputFiles(_) | Self::UnknownLayout { .. } | Self::Config { .. }
        )
    }

    /// Returns `true` for failures that only affect the centrality table of a
    /// file; the layout image is still produced.
    #[must_use]
    pub const fn is_centrality_failure(&self) -> bool {
        matches!(self, Self::Convergence { .. } | Self::NegativeWeight { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_classification() {
        assert!(NetcentError::NotFound(PathBuf::from("x")).is_fatal());
        assert!(
            NetcentError::UnknownLayout {
                name: "triangular".into(),
                expected: "spring".into(),
            }
            .is_fatal()
        );
        assert!(!NetcentError::Convergence { iterations: 100 }.is_fatal());
        assert!(
            !NetcentError::Schema {
                path: PathBuf::from("a.csv"),
                missing: vec!["weight".into()],
            }
            .is_fatal()
        );
    }

    #[test]
    fn centrality_failures_are_recoverable() {
        let err = NetcentError::Convergence { iterations: 3 };
        assert!(err.is_centrality_failure());
        assert!(!NetcentError::Render("boom".into()).is_centrality_failure());
    }

    #[test]
    fn schema_message_lists_columns() {
        let err = NetcentError::Schema {
            path: PathBuf::from("data/edges.csv"),
            missing: vec!["target".into(), "weight".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("data/edges.csv"));
        assert!(msg.contains("target, weight"));
    }
}
