//! Xyston CLI binary.

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;
use xyston::cli::{args::*, commands::*};

#[tokio::main]
async fn main() {
    // Parse command line arguments using clap
    let args = XystonArgs::parse();

    // Map verbosity to a log filter; an explicit RUST_LOG wins.
    let default_level = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so JSON output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Execute the command
    if let Err(e) = execute_command(args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
