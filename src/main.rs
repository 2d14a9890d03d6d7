// src/main.rs

mod error;
mod reader;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Peek at a downloaded weather-observation CSV: list its column names, or
/// print the first few values of one column.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the CSV file
    #[arg(long)]
    input: PathBuf,

    /// Exact column name to extract; when omitted, the column names are listed instead
    #[arg(long)]
    column: Option<String>,

    /// Number of values to print in extraction mode
    #[arg(short, long, default_value_t = 5)]
    n: usize,
}

fn run(args: &Args) -> error::Result<Vec<String>> {
    match &args.column {
        None => reader::list_columns(&args.input),
        Some(column) => reader::first_values(&args.input, column, args.n),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Extraction output is collected fully before printing, so a failure
    // mid-scan never leaves partial output behind.
    match run(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
