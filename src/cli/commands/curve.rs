//! Curve command implementation

use crate::cli::args::{CurveArgs, CurveKind};
use crate::cli::logging::{log, LogLevel};
use crate::metrics::curves::{
    accuracy_of_epoch, accuracy_of_lr, loss_of_epoch, loss_of_lr, precision_of_threshold,
    recall_of_threshold,
};
use crate::metrics::{sample_curve, CurvePoint};

fn curve_fn(kind: CurveKind) -> impl Fn(f64) -> crate::metrics::Result<f64> {
    move |x| match kind {
        CurveKind::PrecisionThreshold => Ok(precision_of_threshold(x)),
        CurveKind::RecallThreshold => Ok(recall_of_threshold(x)),
        CurveKind::LossEpoch => Ok(loss_of_epoch(x)),
        CurveKind::AccuracyEpoch => accuracy_of_epoch(x),
        CurveKind::LossLr => loss_of_lr(x),
        CurveKind::AccuracyLr => accuracy_of_lr(x),
    }
}

/// Format sampled points as a fixed-width table
fn format_table(points: &[CurvePoint]) -> String {
    let mut table = String::new();
    table.push_str(&format!("{:>14} {:>14}\n", "x", "y"));
    table.push_str(&"-".repeat(29));
    table.push('\n');
    for p in points {
        table.push_str(&format!("{:>14.6} {:>14.6}\n", p.x, p.y));
    }
    table
}

/// Tabulate one univariate curve and print the samples
pub fn run_curve(args: CurveArgs, log_level: LogLevel) -> Result<(), String> {
    log(
        log_level,
        LogLevel::Verbose,
        &format!(
            "Sampling {:?} over [{}, {}] with {} points ({} spacing)",
            args.curve,
            args.start,
            args.end,
            args.points.max(2),
            if args.log { "log" } else { "linear" }
        ),
    );

    let points = sample_curve(curve_fn(args.curve), args.start, args.end, args.points, args.log)
        .map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&points)
            .map_err(|e| format!("Failed to serialize samples: {e}"))?;
        log(log_level, LogLevel::Normal, &json);
    } else {
        log(log_level, LogLevel::Normal, &format_table(&points));
    }

    Ok(())
}
