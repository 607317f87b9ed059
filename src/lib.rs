//! Fingir: Fictitious Classifier Metrics
//!
//! A closed-form stand-in for a trainable classifier, intended to exercise
//! hyperparameter-tuning pipelines without real training. Three tuning
//! parameters (decision threshold, epoch count, learning rate) map to
//! emulated precision, recall, loss, and accuracy, plus the derived F1
//! score a tuning orchestrator optimizes.
//!
//! Evaluation is pure and deterministic: no state, no randomness, safe to
//! call concurrently. Inputs outside a curve's log10 domain surface as
//! [`MetricError`] rather than NaN.
//!
//! # Example
//!
//! ```
//! use fingir::{FictitiousModel, TuningParameters};
//!
//! let model = FictitiousModel::default();
//! let result = model.evaluate(&TuningParameters::new(0.5, 20.0, 0.001))?;
//! assert!(result.f1 > 0.0 && result.f1 < 1.0);
//! # Ok::<(), fingir::MetricError>(())
//! ```

pub mod cli;
pub mod metrics;

pub use metrics::{
    f1_score, metric_report, sample_curve, CurvePoint, FictitiousModel, MetricError, MetricResult,
    MetricWeights, TuningParameters,
};
