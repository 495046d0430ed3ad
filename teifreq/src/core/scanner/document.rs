// src/core/scanner/document.rs
use anyhow::{Context as _, Result};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::config::Settings;
use crate::core::aggregate::Aggregator;
use crate::core::markup::{exclude_sections, extract_spans};
use crate::core::metadata::extract_metadata;
use crate::core::normalize::normalize;
use crate::models::{FrequencyTable, Metadata};

/// The frequency table of one document, plus its metadata when requested.
#[derive(Debug)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub metadata: Option<Metadata>,
    pub table: FrequencyTable,
}

/// Runs the text pipeline over one document: section exclusion, span
/// extraction, normalization, aggregation.
#[must_use]
pub fn analyze_document<S: AsRef<str>>(document: &str, tag: &str, exclude: &[S]) -> FrequencyTable {
    let body = exclude_sections(document, exclude);
    let mut aggregator = Aggregator::new();

    for span in extract_spans(&body, tag) {
        let phrase = normalize(span);
        trace!(%phrase, "normalized span");
        aggregator.add(phrase);
    }

    aggregator.finish()
}

/// Reads and analyzes one file.
///
/// The whole file is read before processing. Bytes that are not valid UTF-8
/// are replaced rather than rejected.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * Metadata is requested and the file name or main title is malformed
pub fn analyze_file(path: &Path, settings: &Settings) -> Result<DocumentReport> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let document = String::from_utf8_lossy(&bytes);
    if matches!(document, Cow::Owned(_)) {
        warn!(path = %path.display(), "file is not valid UTF-8, invalid bytes replaced");
    }

    let metadata = if settings.metadata {
        let metadata = extract_metadata(path, &document)
            .with_context(|| format!("Failed to derive metadata for {}", path.display()))?;
        Some(metadata)
    } else {
        None
    };

    let table = analyze_document(&document, &settings.tag, settings.exclude.as_slice());
    debug!(
        path = %path.display(),
        entries = table.len(),
        spans = table.total_count(),
        "analyzed document"
    );

    Ok(DocumentReport {
        path: path.to_path_buf(),
        metadata,
        table,
    })
}
