//! Fictitious Metric Evaluator
//!
//! Closed-form emulation of classifier metrics for exercising tuning loops:
//!
//! - `curves`: univariate building blocks (one per tuning parameter)
//! - `model`: multivariate composition and the derived F1 score
//! - `sweep`: curve tabulation over an interval
//! - `report`: text report for one evaluation
//!
//! # Example
//!
//! ```ignore
//! use fingir::metrics::{FictitiousModel, TuningParameters};
//!
//! let model = FictitiousModel::default();
//! let result = model.evaluate(&TuningParameters::new(0.5, 20.0, 0.001))?;
//! println!("f1 = {:.6}", result.f1);
//! ```

pub mod curves;
mod error;
mod model;
mod report;
mod sweep;

pub use curves::{
    accuracy_of_epoch, accuracy_of_lr, loss_of_epoch, loss_of_lr, precision_of_threshold,
    recall_of_threshold,
};
pub use error::{MetricError, Result};
pub use model::{f1_score, FictitiousModel, MetricResult, MetricWeights, TuningParameters};
pub use report::metric_report;
pub use sweep::{sample_curve, CurvePoint};
