//! Fingir CLI
//!
//! Command-line front end for the fictitious metric evaluator.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate one parameter triple
//! fingir evaluate --threshold 0.5 --epochs 20 --learning-rate 0.001
//!
//! # Same, with custom weights and JSON output
//! fingir evaluate -t 0.5 -e 20 -l 0.001 --weights weights.yaml --json
//!
//! # Tabulate a learning-rate curve with log spacing
//! fingir curve loss-lr --start 1e-4 --end 1.0 --points 20 --log
//! ```

use clap::Parser;
use fingir::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
