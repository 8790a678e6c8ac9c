//! Stderr logging for the CLI.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "OPEN_API_LOG";

const LOG_TARGETS: [&str; 2] = ["ts_open_api_core", "ts_open_api_cli"];

/// Install the stderr subscriber. Warns instead of failing when one is already set.
pub fn init_tracing(verbose: bool, silent: bool) {
    let filter = filter_spec(std::env::var(LOG_ENV).ok().as_deref(), verbose, silent);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

/// OPEN_API_LOG accepts "trace", "debug", "info", "warn", "error" or a full
/// filter spec like "ts_open_api_core=debug". Without it the level follows
/// `--silent` and the config's `verbose` flag.
pub fn filter_spec(env: Option<&str>, verbose: bool, silent: bool) -> String {
    match env {
        Some(level) if is_plain_level(level) => targets_at(level),
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ if silent => targets_at("error"),
        _ if verbose => targets_at("info"),
        _ => targets_at("warn"),
    }
}

fn targets_at(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
