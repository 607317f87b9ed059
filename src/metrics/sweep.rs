//! Curve tabulation
//!
//! Samples a univariate metric curve over an interval, linearly or
//! log-spaced, producing (x, y) points for inspection or external plotting.

use serde::{Deserialize, Serialize};

use super::error::Result;

/// One sample of a univariate curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Generate sample positions over [start, end].
///
/// Log spacing interpolates in ln-space; non-positive endpoints are clamped
/// to the smallest positive double before taking the log.
fn grid_values(start: f64, end: f64, n_points: usize, log_scale: bool) -> Vec<f64> {
    let n_points = n_points.max(2);
    let divisor = (n_points - 1) as f64;
    if log_scale {
        let log_start = start.max(f64::MIN_POSITIVE).ln();
        let log_end = end.max(f64::MIN_POSITIVE).ln();
        (0..n_points)
            .map(|i| {
                let t = i as f64 / divisor;
                (log_start + t * (log_end - log_start)).exp()
            })
            .collect()
    } else {
        (0..n_points)
            .map(|i| {
                let t = i as f64 / divisor;
                start + t * (end - start)
            })
            .collect()
    }
}

/// Tabulate `f` over [start, end] with `n_points` samples (min 2).
///
/// A domain violation at any sample point aborts the sweep with that error.
pub fn sample_curve<F>(
    f: F,
    start: f64,
    end: f64,
    n_points: usize,
    log_scale: bool,
) -> Result<Vec<CurvePoint>>
where
    F: Fn(f64) -> Result<f64>,
{
    grid_values(start, end, n_points, log_scale)
        .into_iter()
        .map(|x| Ok(CurvePoint { x, y: f(x)? }))
        .collect()
}
