//! Evaluate command implementation

use std::fs;
use std::path::Path;

use crate::cli::args::EvaluateArgs;
use crate::cli::logging::{log, LogLevel};
use crate::metrics::{metric_report, FictitiousModel, MetricWeights, TuningParameters};

/// Load metric weights from a YAML file; missing fields default to 1.0.
pub fn load_weights(path: &Path) -> Result<MetricWeights, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read weights file {}: {e}", path.display()))?;
    serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse weights file {}: {e}", path.display()))
}

/// Run one evaluation and print the result
pub fn run_evaluate(args: EvaluateArgs, log_level: LogLevel) -> Result<(), String> {
    let weights = match &args.weights {
        Some(path) => {
            let w = load_weights(path)?;
            log(
                log_level,
                LogLevel::Verbose,
                &format!("Loaded weights from {}: {w:?}", path.display()),
            );
            w
        }
        None => MetricWeights::default(),
    };

    let params = TuningParameters::new(args.threshold, args.epochs, args.learning_rate);
    let model = FictitiousModel::new(weights);
    let result = model.evaluate(&params).map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize result: {e}"))?;
        log(log_level, LogLevel::Normal, &json);
    } else {
        log(log_level, LogLevel::Normal, &metric_report(&params, &result));
    }

    Ok(())
}
