// src/config.rs
pub mod loader;

pub use loader::{CONFIG_FILE_NAME, load_config};

use crate::cli::Args;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_EXCLUDED_SECTION: &str = "teiHeader";

/// Settings read from a `teifreq.yaml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Tag whose spans are counted
    pub tag: Option<String>,
    /// Sections removed before extraction
    pub exclude: Option<Vec<String>>,
    /// Prefix rows with author, work and date
    pub metadata: bool,
    /// Merge every document into a single table
    pub corpus: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub files: Vec<PathBuf>,
    pub directory: Option<PathBuf>,
    pub tag: String,
    pub exclude: Vec<String>,
    pub metadata: bool,
    pub corpus: bool,
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Combines command line arguments with file settings, the command line taking precedence.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when no input is given, no tag is set, a tag
    /// or section name is empty, or metadata is requested in corpus mode.
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        if args.files.is_empty() && args.directory.is_none() {
            return Err(ConfigError::MissingInput);
        }

        let tag = args
            .tag
            .clone()
            .or(file.tag)
            .ok_or(ConfigError::MissingTag)?;
        if tag.trim().is_empty() {
            return Err(ConfigError::EmptyName { field: "tag" });
        }

        let exclude = if args.exclude.is_empty() {
            file.exclude
                .unwrap_or_else(|| vec![String::from(DEFAULT_EXCLUDED_SECTION)])
        } else {
            args.exclude.clone()
        };
        if exclude.iter().any(|section| section.trim().is_empty()) {
            return Err(ConfigError::EmptyName { field: "exclude" });
        }

        let metadata = !args.no_metadata && (args.metadata || file.metadata);
        let corpus = !args.no_corpus && (args.corpus || file.corpus);
        if metadata && corpus {
            return Err(ConfigError::MetadataInCorpusMode);
        }

        Ok(Self {
            files: args.files.clone(),
            directory: args.directory.clone(),
            tag: tag.trim().to_owned(),
            exclude: exclude.iter().map(|s| s.trim().to_owned()).collect(),
            metadata,
            corpus,
            output: args.output.clone(),
        })
    }
}
