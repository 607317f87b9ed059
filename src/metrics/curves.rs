//! Univariate metric curves
//!
//! Closed-form building blocks for the fictitious model, one tuning
//! parameter each (all other parameters implicitly held at a reference
//! point):
//! - `precision_of_threshold` / `recall_of_threshold` - opposing sigmoids
//! - `loss_of_epoch` / `accuracy_of_epoch` - training-length curves
//! - `loss_of_lr` / `accuracy_of_lr` - learning-rate curves
//!
//! Curves containing a `log10` have a restricted domain and return
//! `Result`; the rest are total over the reals.

use super::error::{MetricError, Result};

/// Check a log10 argument before taking it, so domain violations surface
/// as errors instead of NaN or -inf.
fn checked_log10(function: &'static str, input: f64, argument: f64) -> Result<f64> {
    if argument > 0.0 {
        Ok(argument.log10())
    } else {
        Err(MetricError::LogDomain {
            function,
            input,
            argument,
        })
    }
}

/// Emulated precision as a function of decision threshold.
///
/// Formula: `0.1 + 0.9 / (1 + 5000 * exp(-20 * thr))`
///
/// Monotonically increasing sigmoid, bounded in (0.1, 1.0) on [0, 1].
pub fn precision_of_threshold(thr: f64) -> f64 {
    0.1 + 0.9 / (1.0 + 5000.0 * (-20.0 * thr).exp())
}

/// Emulated recall as a function of decision threshold.
///
/// Formula: `1 / (1 + 1e-5 * exp(20 * thr))`
///
/// Monotonically decreasing sigmoid, bounded in (0, 1.0) on [0, 1].
pub fn recall_of_threshold(thr: f64) -> f64 {
    1.0 / (1.0 + 1e-5 * (20.0 * thr).exp())
}

/// Emulated loss as a function of epoch count.
///
/// Formula: `3 + 7 * exp(-0.05 * epoch)`
///
/// Monotonically decreasing, asymptotes to 3.
pub fn loss_of_epoch(epoch: f64) -> f64 {
    3.0 + 7.0 * (-0.05 * epoch).exp()
}

/// Emulated accuracy as a function of epoch count.
///
/// Formula: `0.95 - 3 * log10(3 - 0.025 * epoch)^2`
///
/// Peaks at epoch 80 (value 0.95) and degrades on both sides, modeling
/// overfitting past the peak. Domain: `epoch < 120`.
pub fn accuracy_of_epoch(epoch: f64) -> Result<f64> {
    let log = checked_log10("accuracy_of_epoch", epoch, 3.0 - 0.025 * epoch)?;
    Ok(0.95 - 3.0 * log * log)
}

/// Emulated loss as a function of learning rate.
///
/// Formula: `0.6 + log10(0.9 - log10(lr))^2`
///
/// Domain: `0 < lr < 10^0.9` (≈ 7.94); the boundary itself is an error.
pub fn loss_of_lr(lr: f64) -> Result<f64> {
    let log_lr = checked_log10("loss_of_lr", lr, lr)?;
    let log = checked_log10("loss_of_lr", lr, 0.9 - log_lr)?;
    Ok(0.6 + log * log)
}

/// Emulated accuracy as a function of learning rate.
///
/// Formula: `0.98 - log10(0.7 - 0.5 * log10(lr))^2`
///
/// Domain: `0 < lr < 10^1.4` (≈ 25.1).
pub fn accuracy_of_lr(lr: f64) -> Result<f64> {
    let log_lr = checked_log10("accuracy_of_lr", lr, lr)?;
    let log = checked_log10("accuracy_of_lr", lr, 0.7 - 0.5 * log_lr)?;
    Ok(0.98 - log * log)
}
