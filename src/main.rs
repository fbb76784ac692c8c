//! platonic CLI - Platonic dice frequency simulator
//!
//! Command-line interface for rolling dice and printing frequency tables.

use std::process::ExitCode;

use platonic::cli::{run_cli, Args};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    run_cli(Args::parse())
}
