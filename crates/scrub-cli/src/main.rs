//! Scrub CLI - one-shot CSV cleaning.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "scrub=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::clean::run(cli.input, cli.output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
