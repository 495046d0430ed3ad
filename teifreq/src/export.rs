// src/export.rs
use crate::core::scanner::BatchOutcome;
use crate::models::{FrequencyEntry, FrequencyTable, Metadata};
use std::io::{self, Write};

pub const FIELD_SEPARATOR: &str = "\t";
pub const VARIANT_SEPARATOR: &str = "|";

/// Formats one row: metadata fields, representative variant, all variants, count.
#[must_use]
pub fn format_row(metadata: Option<&Metadata>, entry: &FrequencyEntry) -> String {
    let variants = entry
        .variants
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(VARIANT_SEPARATOR);
    let count = entry.count.to_string();

    let mut fields: Vec<&str> = metadata.map_or_else(Vec::new, |m| m.fields().to_vec());
    fields.extend([entry.representative(), variants.as_str(), count.as_str()]);
    fields.join(FIELD_SEPARATOR)
}

/// Writes one tab-separated row per entry, in ascending canonical key order.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_table<W: Write>(
    out: &mut W,
    table: &FrequencyTable,
    metadata: Option<&Metadata>,
) -> io::Result<usize> {
    for (_, entry) in table.iter() {
        writeln!(out, "{}", format_row(metadata, entry))?;
    }
    Ok(table.len())
}

/// Writes a batch: one table per document, or a single merged table in corpus mode.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &BatchOutcome, corpus: bool) -> io::Result<usize> {
    if corpus {
        return write_table(out, &outcome.corpus_table(), None);
    }

    let mut rows: usize = 0;
    for report in &outcome.reports {
        let written = write_table(out, &report.table, report.metadata.as_ref())?;
        rows = rows.saturating_add(written);
    }
    Ok(rows)
}
