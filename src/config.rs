use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TagverError};
use crate::source::LoadMode;

/// File name searched for in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "tagver.toml";

/// Represents the complete configuration for tagver.
///
/// Contains tag recognition settings and behavior options. Command-line flags
/// and their environment variables take precedence over every value here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// How tags are recognised and which one is current.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TagsConfig {
    /// Literal text in front of every version tag (e.g. "v")
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub mode: LoadMode,
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Answer yes to confirmation prompts
    #[serde(default)]
    pub assume_yes: bool,
}

/// Candidate configuration files, most specific first.
fn search_paths(config_path: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = config_path {
        return vec![path.to_path_buf()];
    }

    let mut paths = vec![PathBuf::from(".").join(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("tagver").join(CONFIG_FILE_NAME));
    }
    paths
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `tagver.toml` in current directory
/// 3. `<config dir>/tagver/tagver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or the explicit
///   path does not exist
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let explicit = config_path.is_some();

    for path in search_paths(config_path) {
        if !explicit && !path.exists() {
            continue;
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            TagverError::config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loading configuration");
        return parse_config(&contents);
    }

    Ok(Config::default())
}

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| TagverError::config(e.to_string()))
}
