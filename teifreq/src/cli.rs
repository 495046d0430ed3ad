// src/cli.rs
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files to process
    #[arg(short, long, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Directory whose files are all processed, recursively
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Tag whose spans are counted (e.g., "persName")
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Section removed before extraction, repeatable (defaults to "teiHeader")
    #[arg(short = 'x', long)]
    pub exclude: Vec<String>,

    /// Prefix each row with author, work and date
    #[arg(short, long, overrides_with = "no_metadata")]
    pub metadata: bool,

    /// Leave out author, work and date even if the config file asks for them
    #[arg(long, overrides_with = "metadata")]
    pub no_metadata: bool,

    /// Merge all documents into one table
    #[arg(long, overrides_with = "no_corpus")]
    pub corpus: bool,

    /// One table per document even if the config file asks for a corpus table
    #[arg(long, overrides_with = "corpus")]
    pub no_corpus: bool,

    /// YAML config file (defaults to the nearest teifreq.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the table to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// More logging: -v for debug, -vv for trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
