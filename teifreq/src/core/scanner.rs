// src/core/scanner.rs
mod document;
mod file;
#[cfg(test)]
pub(crate) mod test_utils;

pub use document::{DocumentReport, analyze_document, analyze_file};
pub use file::collect_files;

use crate::config::Settings;
use crate::models::FrequencyTable;
use std::path::PathBuf;
use tracing::debug;

/// A path that could not be processed, with the reason.
#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

impl Failure {
    #[inline]
    #[must_use]
    pub const fn new(path: PathBuf, error: anyhow::Error) -> Self {
        Self { path, error }
    }
}

/// Results of a batch run: one report per processed document and one failure per skipped path.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<DocumentReport>,
    pub failures: Vec<Failure>,
}

impl BatchOutcome {
    /// Number of documents attempted, successful or not.
    #[inline]
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.reports.len().saturating_add(self.failures.len())
    }

    /// Merges every document table into one corpus-wide table.
    #[must_use]
    pub fn corpus_table(&self) -> FrequencyTable {
        let mut corpus = FrequencyTable::new();
        for report in &self.reports {
            corpus.merge(report.table.clone());
        }
        corpus
    }
}

/// Analyzes every input named by `settings`, isolating failures per file.
///
/// A file that cannot be read, or whose metadata cannot be derived, is
/// recorded as a [`Failure`] and the batch carries on with the next one.
///
/// # Arguments
///
/// * `settings` - Resolved run settings naming the files, directory, tag and exclusions
///
/// # Returns
///
/// * `BatchOutcome` - Reports in input order, then the failures
#[must_use]
pub fn analyze_batch(settings: &Settings) -> BatchOutcome {
    let (paths, mut failures) = collect_files(&settings.files, settings.directory.as_deref());
    debug!(files = paths.len(), tag = %settings.tag, "starting batch");

    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        match analyze_file(&path, settings) {
            Ok(report) => reports.push(report),
            Err(err) => failures.push(Failure::new(path, err)),
        }
    }

    BatchOutcome { reports, failures }
}
