//! The default command: read, generate, write.

use console::style;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use ts_open_api_core::{GenerateOptions, generate};

use crate::error::CliError;
use crate::input::load_document;

/// Generate declarations for `input` and write them to `output`.
///
/// Returns the process exit code.
pub fn run(input: &Path, output: &Path, options: &GenerateOptions, silent: bool) -> i32 {
    let start = Instant::now();
    match run_inner(input, output, options) {
        Ok(()) => {
            info!(
                input = %input.display(),
                output = %output.display(),
                elapsed = ?start.elapsed(),
                "generation finished"
            );
            if !silent {
                println!(
                    "{} Types written to {}",
                    style("✓").green(),
                    style(output.display()).cyan()
                );
            }
            0
        }
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red().bold());
            1
        }
    }
}

fn run_inner(input: &Path, output: &Path, options: &GenerateOptions) -> Result<(), CliError> {
    debug!(input = %input.display(), "reading OpenAPI document");
    let document = load_document(input)?;
    let text = generate(&document, options)?;
    write_output(output, &text)
}

/// Write the generated text, creating missing parent directories.
pub fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, text).map_err(write_err)
}
