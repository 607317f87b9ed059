//! CLI argument types - Cli, Command, and per-command argument structs

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Fingir: Fictitious Classifier Metrics
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "fingir")]
#[command(version)]
#[command(about = "Closed-form classifier-metric emulation for hyperparameter tuning loops")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate the fictitious model for one parameter triple
    Evaluate(EvaluateArgs),

    /// Tabulate one univariate metric curve
    Curve(CurveArgs),
}

/// Arguments for the evaluate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EvaluateArgs {
    /// Decision threshold (conventionally in [0, 1])
    #[arg(short, long)]
    pub threshold: f64,

    /// Epoch count (must stay below 120)
    #[arg(short, long)]
    pub epochs: f64,

    /// Learning rate (positive, below 10^0.9)
    #[arg(short, long)]
    pub learning_rate: f64,

    /// Optional YAML file with metric weights (missing fields default to 1.0)
    #[arg(short, long)]
    pub weights: Option<PathBuf>,

    /// Emit the result as pretty-printed JSON
    #[arg(long)]
    pub json: bool,
}

/// Univariate curve selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// precision_of_threshold
    PrecisionThreshold,
    /// recall_of_threshold
    RecallThreshold,
    /// loss_of_epoch
    LossEpoch,
    /// accuracy_of_epoch
    AccuracyEpoch,
    /// loss_of_lr
    LossLr,
    /// accuracy_of_lr
    AccuracyLr,
}

/// Arguments for the curve command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CurveArgs {
    /// Which curve to tabulate
    #[arg(value_enum)]
    pub curve: CurveKind,

    /// Interval start
    #[arg(short, long)]
    pub start: f64,

    /// Interval end
    #[arg(short, long)]
    pub end: f64,

    /// Number of sample points (min 2)
    #[arg(short, long, default_value_t = 20)]
    pub points: usize,

    /// Log-spaced sampling (useful for learning-rate curves)
    #[arg(long)]
    pub log: bool,

    /// Emit the samples as pretty-printed JSON
    #[arg(long)]
    pub json: bool,
}
