//! Metric evaluation error types

use thiserror::Error;

/// Domain violations in the closed-form metric functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("{function}: log10 argument {argument} is not positive (input {input})")]
    LogDomain {
        /// Curve that rejected the input
        function: &'static str,
        /// Raw parameter value passed by the caller
        input: f64,
        /// Offending log10 argument derived from it
        argument: f64,
    },

    #[error("f1 undefined: precision ({precision}) + recall ({recall}) is zero")]
    F1Undefined { precision: f64, recall: f64 },
}

/// Result type for metric evaluation
pub type Result<T> = std::result::Result<T, MetricError>;
