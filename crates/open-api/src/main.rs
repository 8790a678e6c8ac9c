//! Command-line entry point for the ts-open-api generator.

fn main() {
    std::process::exit(ts_open_api_cli::run());
}
