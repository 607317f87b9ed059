//! Text report for one evaluation

use super::model::{MetricResult, TuningParameters};

/// Format one evaluation as a fixed-width table.
///
/// # Example
/// ```ignore
/// use fingir::metrics::{metric_report, FictitiousModel, TuningParameters};
///
/// let params = TuningParameters::new(0.5, 20.0, 0.001);
/// let result = FictitiousModel::default().evaluate(&params)?;
/// println!("{}", metric_report(&params, &result));
/// ```
pub fn metric_report(params: &TuningParameters, result: &MetricResult) -> String {
    let mut report = String::new();

    report.push_str(&format!("{:>14} {:>14}\n", "parameter", "value"));
    report.push_str(&"-".repeat(29));
    report.push('\n');
    report.push_str(&format!("{:>14} {:>14.6}\n", "threshold", params.threshold));
    report.push_str(&format!("{:>14} {:>14.6}\n", "epochs", params.epochs));
    report.push_str(&format!(
        "{:>14} {:>14.6}\n",
        "learning_rate", params.learning_rate
    ));
    report.push('\n');

    report.push_str(&format!("{:>14} {:>14}\n", "metric", "value"));
    report.push_str(&"-".repeat(29));
    report.push('\n');
    report.push_str(&format!("{:>14} {:>14.6}\n", "precision", result.precision));
    report.push_str(&format!("{:>14} {:>14.6}\n", "recall", result.recall));
    report.push_str(&format!("{:>14} {:>14.6}\n", "f1", result.f1));
    report.push_str(&format!("{:>14} {:>14.6}\n", "accuracy", result.accuracy));
    report.push_str(&format!("{:>14} {:>14.6}\n", "loss", result.loss));

    report
}
