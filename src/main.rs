//! csv-validator CLI - CSV validation report

use clap::Parser;
use csv_validator::Validator;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// CSV Validator - Analyzes and validates CSV files.
///
/// Checks encoding and column alignment, then reports row, duplicate,
/// null and per-column statistics. The report is printed and saved as
/// `<name>_validation_report_<timestamp>.txt` in the current directory.
#[derive(Parser, Debug)]
#[command(name = "csv-validator")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the CSV file to analyze
    file_path: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::new("csv_validator=warn"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    match validate_file(&args.file_path) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the file passed validation.
fn validate_file(path: &PathBuf) -> Result<bool, Box<dyn std::error::Error>> {
    let validator = Validator::new();
    let report = validator.validate_path(path)?;

    print!("{report}");
    let written = validator.write_report(&report)?;
    println!();
    println!("Report saved to {}", written.display());

    if let Some(reason) = report.failure_reason() {
        eprintln!("Error: {reason}");
    }

    Ok(report.is_valid())
}
