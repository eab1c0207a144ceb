//! cream_options: `cream.json` parsing and run options.
//!
//! The configuration file is optional. Every field in it is optional too,
//! and command-line flags win over whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up next to the script.
pub const CONFIG_FILE_NAME: &str = "cream.json";

pub const DEFAULT_MAX_HISTORY_SIZE: usize = 1000;

/// How scanned tokens are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
    /// `KIND lexeme literal`, one token per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// The `cream.json` file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreamConfig {
    pub token_format: Option<TokenFormat>,
    pub color: Option<bool>,
    pub history: Option<bool>,
    pub max_history_size: Option<usize>,
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub token_format: TokenFormat,
    /// `None` means decide from whether stderr is a terminal.
    pub color: Option<bool>,
    pub history: bool,
    pub max_history_size: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            token_format: TokenFormat::Text,
            color: None,
            history: true,
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
        }
    }
}

impl From<CreamConfig> for RunOptions {
    fn from(config: CreamConfig) -> Self {
        let defaults = RunOptions::default();
        Self {
            token_format: config.token_format.unwrap_or(defaults.token_format),
            color: config.color,
            history: config.history.unwrap_or(defaults.history),
            max_history_size: config.max_history_size.unwrap_or(defaults.max_history_size),
        }
    }
}

/// Errors loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("could not read config file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file '{}'", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a `cream.json` file from a string.
pub fn parse_config(content: &str) -> Result<CreamConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a `cream.json` file from a path.
pub fn parse_config_file(path: &Path) -> Result<CreamConfig, OptionsError> {
    let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| OptionsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Look for `cream.json` directly inside `dir`.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}
