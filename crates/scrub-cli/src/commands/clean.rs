//! Clean command - run the full pipeline from one CSV to another.

use std::path::PathBuf;

use colored::Colorize;
use scrub::{Pipeline, StatusLevel, StatusSink};

/// Prints status lines to stdout.
struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn emit(&mut self, level: StatusLevel, message: &str) {
        match level {
            StatusLevel::Info => println!("{}", message),
            StatusLevel::Success => println!("{} {}", "✓".green(), message),
            StatusLevel::Warning => println!("{} {}", "Warning:".yellow().bold(), message),
        }
    }
}

pub fn run(input: PathBuf, output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let report = Pipeline::new().run(&input, &output, &mut ConsoleSink)?;

    tracing::debug!(
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        "clean finished"
    );

    println!();
    println!(
        "{} {} -> {} rows",
        "Done:".green().bold(),
        report.rows_in,
        report.rows_out.to_string().white().bold()
    );

    Ok(())
}
