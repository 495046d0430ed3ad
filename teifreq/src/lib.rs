// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod models;
mod utils;

pub use cli::Args;
pub use config::{FileConfig, Settings, load_config};
pub use crate::core::aggregate::{Aggregator, aggregate};
pub use crate::core::markup::{exclude_section, exclude_sections, extract_spans};
pub use crate::core::metadata::{extract_metadata, parse_date, parse_filename};
pub use crate::core::normalize::{canonical_key, normalize};
pub use crate::core::scanner::{
    BatchOutcome, DocumentReport, Failure, analyze_batch, analyze_document, analyze_file,
    collect_files,
};
pub use error::{ConfigError, MetadataError};
pub use export::{write_outcome, write_table};
pub use models::{FrequencyEntry, FrequencyTable, Metadata};

use anyhow::{Context as _, Result, bail};
use std::env;
use tracing::{error, info};

/// Runs one invocation: resolve settings, analyze every input, export the tables.
///
/// Every document is processed even when some fail; the failures are logged
/// and then reported together as the returned error.
///
/// # Errors
///
/// This function may return an error if:
/// * The settings are invalid or the config file cannot be loaded
/// * The output cannot be written
/// * Any document failed to be read or to yield its metadata
pub fn run(args: Args) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let file_config = load_config(args.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(&args, file_config)?;

    let outcome = analyze_batch(&settings);

    let mut out = utils::open_output(settings.output.as_deref())?;
    let rows = write_outcome(&mut out, &outcome, settings.corpus)
        .and_then(|rows| out.flush().map(|()| rows))
        .context("Failed to write frequency table")?;

    info!(
        documents = outcome.reports.len(),
        failed = outcome.failures.len(),
        rows,
        "finished"
    );

    if !outcome.failures.is_empty() {
        for failure in &outcome.failures {
            error!(path = %failure.path.display(), "skipped: {:#}", failure.error);
        }
        bail!(
            "{} of {} documents failed",
            outcome.failures.len(),
            outcome.attempted()
        );
    }

    Ok(())
}
