// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Invalid run settings, reported before any document is read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one file (-f) or a directory (-d) is required")]
    MissingInput,
    #[error("no tag to extract: pass -t/--tag or set `tag` in the config file")]
    MissingTag,
    #[error("{field} contains an empty tag name")]
    EmptyName { field: &'static str },
    #[error("metadata cannot be attached in corpus mode")]
    MetadataInCorpusMode,
}

/// A document whose author, work or date cannot be derived.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("file name {} does not match <author>.<work>.<extension>", .0.display())]
    MalformedFilename(PathBuf),
    #[error("no <title type=\"main\"> element")]
    MissingTitle,
    #[error("main title {0:?} is too short to end in a year")]
    TitleTooShort(String),
}
