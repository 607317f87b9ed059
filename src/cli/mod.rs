//! CLI module for fingir
//!
//! This module contains all CLI command handlers and utilities.

pub mod args;
mod commands;
mod logging;

pub use args::Cli;
pub use commands::run_command;
pub use logging::LogLevel;
