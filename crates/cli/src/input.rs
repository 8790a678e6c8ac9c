//! Reading the input document.

use std::fs;
use std::path::Path;
use tracing::debug;
use ts_open_api_core::OpenApiDocument;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    /// Unknown extension: JSON first, then YAML.
    Sniff,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Sniff,
        }
    }
}

/// Read and parse an OpenAPI document from disk.
pub fn load_document(path: &Path) -> Result<OpenApiDocument, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &contents)
}

/// Parse document text, choosing the format from the path's extension.
pub fn parse_document(path: &Path, contents: &str) -> Result<OpenApiDocument, CliError> {
    let json = |contents: &str| -> Result<OpenApiDocument, CliError> {
        serde_json::from_str(contents).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })
    };
    let yaml = |contents: &str| -> Result<OpenApiDocument, CliError> {
        serde_yaml::from_str(contents).map_err(|source| CliError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    };

    match Format::of(path) {
        Format::Json => json(contents),
        Format::Yaml => yaml(contents),
        Format::Sniff => json(contents).or_else(|err| {
            debug!(path = %path.display(), "input is not JSON, retrying as YAML");
            yaml(contents).map_err(|_| err)
        }),
    }
}
