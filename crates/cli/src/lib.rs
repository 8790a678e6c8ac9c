//! Command-line front end for `ts-open-api-core`.
//!
//! Everything that touches the outside world lives here: argument parsing,
//! config lookup, reading the input document, logging and writing the result.

#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

mod args;
mod config;
mod error;
mod generate;
mod input;
mod logging;

pub use args::{Cli, Commands, DEFAULT_OUTPUT, GenerateArgs};
pub use config::{CONFIG_FILE_NAME, Config};
pub use error::CliError;
pub use input::{load_document, parse_document};
pub use logging::{LOG_ENV, init_tracing};

/// Run with the process arguments. Returns the exit code.
pub fn run() -> i32 {
    run_from(std::env::args_os())
}

/// Run with explicit arguments (the first one is the program name).
pub fn run_from<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Version) => {
                println!("open-api {}", env!("CARGO_PKG_VERSION"));
                0
            }
            None => run_generate(&cli.generate),
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

fn run_generate(args: &GenerateArgs) -> i32 {
    let Some(input) = &args.input else {
        let e = Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            "an input document is required: open-api <INPUT>",
        );
        let code = e.exit_code();
        let _ = e.print();
        return code;
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match Config::load(&cwd) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    init_tracing(config.verbose, args.silent);
    let options = args.apply(config.generate);
    generate::run(input, &args.output, &options, args.silent)
}
