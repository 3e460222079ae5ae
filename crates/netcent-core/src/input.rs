//! Input resolution: turn a user-supplied path into the ordered list of
//! edge-list files to process.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NetcentError, Result};

/// Extensions accepted when scanning a directory (compared case-insensitively).
pub const EDGE_LIST_EXTENSIONS: &[&str] = &["csv", "tsv", "tab", "txt"];

/// Resolve `path` into the files the pipeline should process.
///
/// A file resolves to itself regardless of extension. A directory resolves
/// to its direct children (no recursion) that are regular, non-hidden files
/// with one of [`EDGE_LIST_EXTENSIONS`], sorted lexicographically. An empty
/// result is not an error here; the driver decides what that means.
///
/// # Errors
///
/// Returns [`NetcentError::NotFound`] when `path` is neither a file nor a
/// directory, and [`NetcentError::Io`] if the directory cannot be listed.
pub fn resolve(path: &Path) -> Result<Vec<PathBuf>> {
    let Ok(meta) = fs::metadata(path) else {
        return Err(NetcentError::NotFound(path.to_path_buf()));
    };

    if meta.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !meta.is_dir() {
        return Err(NetcentError::NotFound(path.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let candidate = entry?.path();
        if !candidate.is_file() {
            continue;
        }
        if is_edge_list_name(&candidate) {
            files.push(candidate);
        } else {
            debug!(path = %candidate.display(), "skipping non edge-list file");
        }
    }
    files.sort();
    Ok(files)
}

fn is_edge_list_name(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'));
    if hidden {
        return false;
    }

    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            EDGE_LIST_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, "source\ttype\ttarget\tweight\n").expect("write");
        p
    }

    #[test]
    fn single_file_resolves_to_itself() {
        let dir = tempfile::tempdir().expect("tempdir");
        let f = touch(dir.path(), "edges.weird");
        assert_eq!(resolve(&f).expect("resolve"), vec![f]);
    }

    #[test]
    fn directory_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().expect("tempdir");
        let b = touch(dir.path(), "b.csv");
        let a = touch(dir.path(), "a.TSV");
        touch(dir.path(), "notes.md");
        touch(dir.path(), ".hidden.csv");
        fs::create_dir(dir.path().join("nested.csv")).expect("mkdir");

        let files = resolve(dir.path()).expect("resolve");
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn subdirectories_are_not_walked() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).expect("mkdir");
        touch(&sub, "inner.csv");

        assert!(resolve(dir.path()).expect("resolve").is_empty());
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = resolve(Path::new("/definitely/not/here")).expect_err("missing");
        assert!(matches!(err, NetcentError::NotFound(_)));
    }
}
