//! CLI command implementations

mod curve;
mod evaluate;

use crate::cli::args::{Cli, Command};
use crate::cli::logging::LogLevel;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Evaluate(args) => evaluate::run_evaluate(args, log_level),
        Command::Curve(args) => curve::run_curve(args, log_level),
    }
}
