//! Error types for the command-line front end.

use std::path::PathBuf;

use thiserror::Error;
use ts_open_api_core::GenerateError;

/// Everything that can stop a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read the input document
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        /// Offending file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated declarations
    #[error("Failed to write output file '{}': {source}", path.display())]
    Write {
        /// Offending file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Input is not a valid JSON OpenAPI document
    #[error("Failed to parse '{}' as JSON: {source}", path.display())]
    Json {
        /// Offending file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },

    /// Input is not a valid YAML OpenAPI document
    #[error("Failed to parse '{}' as YAML: {source}", path.display())]
    Yaml {
        /// Offending file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_yaml::Error,
    },

    /// Config file exists but cannot be read or parsed
    #[error("Invalid configuration in '{}': {source}", path.display())]
    Config {
        /// Offending file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: toml::de::Error,
    },

    /// Type generation failed
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
