//! Optional TOML configuration.
//!
//! ```toml
//! verbose = false
//!
//! [generate]
//! alphabetize = true
//! exportType = true
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use ts_open_api_core::GenerateOptions;

use crate::error::CliError;

/// Looked up in the working directory first.
pub const CONFIG_FILE_NAME: &str = "open-api.toml";
const CONFIG_DIR_NAME: &str = "open-api";
const USER_CONFIG_FILE_NAME: &str = "config.toml";

/// Settings read from `open-api.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log progress at `info` instead of `warn`.
    pub verbose: bool,
    /// Option defaults the command-line flags are layered over.
    pub generate: GenerateOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: true,
            generate: GenerateOptions::default(),
        }
    }
}

impl Config {
    /// Path of the config file to use, if any exists.
    pub fn locate(cwd: &Path) -> Option<PathBuf> {
        let local = cwd.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(USER_CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Load the config for `cwd`, or defaults when there is none.
    pub fn load(cwd: &Path) -> Result<Self, CliError> {
        match Self::locate(cwd) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
