//! Fictitious metric model
//!
//! Multivariate composition of the univariate curves: each emulated metric
//! combines two or three tuning parameters, scaled by a configurable weight.
//! The model is a deterministic stand-in for a real training run - a tuning
//! orchestrator calls [`FictitiousModel::evaluate`] per sampled configuration
//! and reads back `f1` as the objective.
//!
//! Evaluation is a pure function of (parameters, weights): no hidden state,
//! no randomness, bit-identical results for identical inputs.

use serde::{Deserialize, Serialize};

use super::curves::{
    accuracy_of_epoch, accuracy_of_lr, loss_of_epoch, loss_of_lr, precision_of_threshold,
    recall_of_threshold,
};
use super::error::{MetricError, Result};

/// One sampled tuning configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningParameters {
    /// Decision threshold, conventionally in [0, 1]
    pub threshold: f64,
    /// Epoch count; must stay below 120 for the accuracy curve
    pub epochs: f64,
    /// Learning rate; must be positive and below 10^0.9 (≈ 7.94)
    pub learning_rate: f64,
}

impl TuningParameters {
    /// Create a new parameter triple
    pub fn new(threshold: f64, epochs: f64, learning_rate: f64) -> Self {
        Self {
            threshold,
            epochs,
            learning_rate,
        }
    }
}

/// Scalar weights applied to each composed metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricWeights {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub loss: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            accuracy: 1.0,
            precision: 1.0,
            recall: 1.0,
            loss: 1.0,
        }
    }
}

/// Emulated metrics for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub precision: f64,
    pub recall: f64,
    pub loss: f64,
    pub accuracy: f64,
    pub f1: f64,
}

/// Harmonic mean of precision and recall.
///
/// Errors when `precision + recall` is zero (both metrics vanish
/// simultaneously, or cancel under negative weights).
pub fn f1_score(precision: f64, recall: f64) -> Result<f64> {
    if precision + recall == 0.0 {
        return Err(MetricError::F1Undefined { precision, recall });
    }
    Ok(2.0 * precision * recall / (precision + recall))
}

/// Closed-form classifier stand-in
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FictitiousModel {
    weights: MetricWeights,
}

impl FictitiousModel {
    /// Create a model with the given metric weights
    pub fn new(weights: MetricWeights) -> Self {
        Self { weights }
    }

    /// The configured weights
    pub fn weights(&self) -> &MetricWeights {
        &self.weights
    }

    /// Emulated accuracy: `k_accuracy * accuracy_of_epoch * accuracy_of_lr`
    pub fn accuracy(&self, epochs: f64, learning_rate: f64) -> Result<f64> {
        Ok(self.weights.accuracy * accuracy_of_epoch(epochs)? * accuracy_of_lr(learning_rate)?)
    }

    /// Emulated precision: `k_precision * precision_of_threshold * accuracy`
    pub fn precision(&self, threshold: f64, epochs: f64, learning_rate: f64) -> Result<f64> {
        Ok(self.weights.precision
            * precision_of_threshold(threshold)
            * self.accuracy(epochs, learning_rate)?)
    }

    /// Emulated recall: `k_recall * recall_of_threshold * accuracy`
    pub fn recall(&self, threshold: f64, epochs: f64, learning_rate: f64) -> Result<f64> {
        Ok(self.weights.recall
            * recall_of_threshold(threshold)
            * self.accuracy(epochs, learning_rate)?)
    }

    /// Emulated loss: `k_loss * loss_of_epoch * loss_of_lr`
    pub fn loss(&self, epochs: f64, learning_rate: f64) -> Result<f64> {
        Ok(self.weights.loss * loss_of_epoch(epochs) * loss_of_lr(learning_rate)?)
    }

    /// Evaluate all metrics for one parameter triple
    pub fn evaluate(&self, params: &TuningParameters) -> Result<MetricResult> {
        let TuningParameters {
            threshold,
            epochs,
            learning_rate,
        } = *params;

        let accuracy = self.accuracy(epochs, learning_rate)?;
        let precision = self.weights.precision * precision_of_threshold(threshold) * accuracy;
        let recall = self.weights.recall * recall_of_threshold(threshold) * accuracy;
        let loss = self.loss(epochs, learning_rate)?;
        let f1 = f1_score(precision, recall)?;

        Ok(MetricResult {
            precision,
            recall,
            loss,
            accuracy,
            f1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn golden_params() -> TuningParameters {
        TuningParameters::new(0.5, 20.0, 0.001)
    }

    // =========================================================================
    // f1_score
    // =========================================================================

    #[test]
    fn test_f1_equal_inputs_is_identity() {
        for p in [0.1, 0.35, 0.5, 0.99] {
            assert_abs_diff_eq!(f1_score(p, p).unwrap(), p, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_f1_zero_denominator() {
        let err = f1_score(0.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            MetricError::F1Undefined {
                precision: 0.0,
                recall: 0.0
            }
        );
        // Cancellation (reachable with negative weights) is guarded too
        assert!(f1_score(0.5, -0.5).is_err());
    }

    #[test]
    fn test_f1_known_value() {
        // 2 * 0.8 * 0.4 / 1.2
        assert_abs_diff_eq!(f1_score(0.8, 0.4).unwrap(), 0.64 / 1.2, epsilon = 1e-12);
    }

    // =========================================================================
    // Golden scenario: thr=0.5, epochs=20, lr=0.001, unit weights
    // =========================================================================

    #[test]
    fn test_evaluate_golden_scenario() {
        let model = FictitiousModel::default();
        let result = model.evaluate(&golden_params()).unwrap();

        assert_abs_diff_eq!(result.accuracy, 0.409745371002611, epsilon = 1e-9);
        assert_abs_diff_eq!(result.precision, 0.341521350018481, epsilon = 1e-9);
        assert_abs_diff_eq!(result.recall, 0.335784018928826, epsilon = 1e-9);
        assert_abs_diff_eq!(result.loss, 5.292815519445680, epsilon = 1e-9);
        assert_abs_diff_eq!(result.f1, 0.338628384527469, epsilon = 1e-9);
    }

    #[test]
    fn test_evaluate_matches_single_metric_accessors() {
        let model = FictitiousModel::default();
        let p = golden_params();
        let result = model.evaluate(&p).unwrap();

        assert_eq!(
            result.accuracy,
            model.accuracy(p.epochs, p.learning_rate).unwrap()
        );
        assert_eq!(
            result.precision,
            model.precision(p.threshold, p.epochs, p.learning_rate).unwrap()
        );
        assert_eq!(
            result.recall,
            model.recall(p.threshold, p.epochs, p.learning_rate).unwrap()
        );
        assert_eq!(result.loss, model.loss(p.epochs, p.learning_rate).unwrap());
    }

    #[test]
    fn test_evaluate_idempotent_bitwise() {
        let model = FictitiousModel::default();
        let a = model.evaluate(&golden_params()).unwrap();
        let b = model.evaluate(&golden_params()).unwrap();

        assert_eq!(a.precision.to_bits(), b.precision.to_bits());
        assert_eq!(a.recall.to_bits(), b.recall.to_bits());
        assert_eq!(a.loss.to_bits(), b.loss.to_bits());
        assert_eq!(a.accuracy.to_bits(), b.accuracy.to_bits());
        assert_eq!(a.f1.to_bits(), b.f1.to_bits());
    }

    // =========================================================================
    // Weights
    // =========================================================================

    #[test]
    fn test_default_weights_are_unit() {
        let w = MetricWeights::default();
        assert_eq!(w.accuracy, 1.0);
        assert_eq!(w.precision, 1.0);
        assert_eq!(w.recall, 1.0);
        assert_eq!(w.loss, 1.0);
    }

    #[test]
    fn test_weights_scale_metrics() {
        let unit = FictitiousModel::default();
        let scaled = FictitiousModel::new(MetricWeights {
            accuracy: 1.0,
            precision: 2.0,
            recall: 3.0,
            loss: 0.5,
        });
        let p = golden_params();

        let base = unit.evaluate(&p).unwrap();
        let out = scaled.evaluate(&p).unwrap();

        assert_abs_diff_eq!(out.precision, 2.0 * base.precision, epsilon = 1e-12);
        assert_abs_diff_eq!(out.recall, 3.0 * base.recall, epsilon = 1e-12);
        assert_abs_diff_eq!(out.loss, 0.5 * base.loss, epsilon = 1e-12);
        assert_abs_diff_eq!(out.accuracy, base.accuracy, epsilon = 1e-12);
    }

    #[test]
    fn test_accuracy_weight_scales_precision_and_recall() {
        // precision and recall both ride on the composed accuracy
        let p = golden_params();
        let base = FictitiousModel::default().evaluate(&p).unwrap();
        let doubled = FictitiousModel::new(MetricWeights {
            accuracy: 2.0,
            ..MetricWeights::default()
        })
        .evaluate(&p)
        .unwrap();

        assert_abs_diff_eq!(doubled.accuracy, 2.0 * base.accuracy, epsilon = 1e-12);
        assert_abs_diff_eq!(doubled.precision, 2.0 * base.precision, epsilon = 1e-12);
        assert_abs_diff_eq!(doubled.recall, 2.0 * base.recall, epsilon = 1e-12);
    }

    // =========================================================================
    // Domain violations propagate
    // =========================================================================

    #[test]
    fn test_evaluate_propagates_epoch_domain() {
        let model = FictitiousModel::default();
        let params = TuningParameters::new(0.5, 130.0, 0.001);
        let err = model.evaluate(&params).unwrap_err();
        assert!(matches!(
            err,
            MetricError::LogDomain {
                function: "accuracy_of_epoch",
                ..
            }
        ));
    }

    #[test]
    fn test_evaluate_propagates_lr_domain() {
        let model = FictitiousModel::default();
        let params = TuningParameters::new(0.5, 20.0, 10.0);
        // lr = 10 exceeds 10^0.9; accuracy_of_lr (10^1.4 bound) still accepts
        // it, so the loss curve reports the violation
        let err = model.evaluate(&params).unwrap_err();
        assert!(matches!(
            err,
            MetricError::LogDomain {
                function: "loss_of_lr",
                ..
            }
        ));
    }

    #[test]
    fn test_evaluate_f1_undefined_with_zero_weights() {
        let model = FictitiousModel::new(MetricWeights {
            precision: 0.0,
            recall: 0.0,
            ..MetricWeights::default()
        });
        let err = model.evaluate(&golden_params()).unwrap_err();
        assert!(matches!(err, MetricError::F1Undefined { .. }));
    }

    // =========================================================================
    // Serde
    // =========================================================================

    #[test]
    fn test_tuning_parameters_serde() {
        let p = golden_params();
        let json = serde_json::to_string(&p).unwrap();
        let parsed: TuningParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(p, parsed);
    }

    #[test]
    fn test_metric_weights_serde_defaults() {
        // Missing fields fall back to 1.0
        let parsed: MetricWeights = serde_json::from_str(r#"{"loss": 0.5}"#).unwrap();
        assert_eq!(parsed.loss, 0.5);
        assert_eq!(parsed.accuracy, 1.0);
        assert_eq!(parsed.precision, 1.0);
        assert_eq!(parsed.recall, 1.0);
    }

    #[test]
    fn test_metric_result_serde() {
        let result = FictitiousModel::default().evaluate(&golden_params()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: MetricResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }
}
