// src/config/loader.rs
use crate::config::FileConfig;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "teifreq.yaml";

/// Loads run settings from a YAML file.
///
/// When `explicit` is given that file must exist. Otherwise the search starts
/// at `dir` and walks up through parent directories until a `teifreq.yaml` is
/// found; if none exists the defaults are returned.
///
/// # Arguments
///
/// * `explicit` - A config path given on the command line
/// * `dir` - The directory where the search for `teifreq.yaml` starts
///
/// # Returns
///
/// * `Ok(FileConfig)` containing the loaded settings
///
/// # Errors
///
/// This function may return an error if:
/// * The explicit config file is missing or unreadable
/// * A found config file cannot be read
/// * The file is not valid YAML or has unknown keys
#[inline]
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            return read_config(&config_file);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    debug!("no {CONFIG_FILE_NAME} found, using defaults");
    Ok(FileConfig::default())
}

fn read_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config file");

    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
