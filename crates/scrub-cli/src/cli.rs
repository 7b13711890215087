//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Scrub: clean a CSV dataset in one pass
#[derive(Parser)]
#[command(name = "scrub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the raw CSV file
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the cleaned CSV file
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,
}
