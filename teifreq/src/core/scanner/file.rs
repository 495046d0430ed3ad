// src/core/scanner/file.rs
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::scanner::Failure;
use crate::utils::is_hidden;

/// Lists the documents to process: the explicit files first, then every file under `directory`.
///
/// # Arguments
///
/// * `files` - Files named on the command line, kept in the given order
/// * `directory` - An optional directory walked recursively, following symlinks
///
/// # Returns
///
/// The paths to process and one [`Failure`] per directory entry that could
/// not be read. Hidden entries below `directory` are skipped. There is no
/// extension filtering.
#[must_use]
pub fn collect_files(files: &[PathBuf], directory: Option<&Path>) -> (Vec<PathBuf>, Vec<Failure>) {
    let mut paths = files.to_vec();
    let mut failures = Vec::new();

    let Some(dir) = directory else {
        return (paths, failures);
    };

    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        match entry {
            Ok(entry) if entry.file_type().is_file() => found.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => {
                let path = err.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                failures.push(Failure::new(path, anyhow::Error::new(err)));
            }
        }
    }

    found.sort();
    paths.extend(found);
    (paths, failures)
}
