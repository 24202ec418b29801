//! Mean-squared error shared by the reference cost functions.
use ndarray::ArrayView1;

use crate::cost_functions::errors::{CostFnError, CostFnResult};

/// Average squared residual between `y_true` and `y_pred`.
///
/// # Errors
/// - [`CostFnError::ShapeMismatch`] if the two series differ in length.
/// - [`CostFnError::EmptyData`] if both are empty.
pub fn mean_squared_error(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> CostFnResult<f64> {
    if y_true.len() != y_pred.len() {
        return Err(CostFnError::ShapeMismatch { expected: y_true.len(), found: y_pred.len() });
    }
    if y_true.is_empty() {
        return Err(CostFnError::EmptyData);
    }
    let sse: f64 = y_true.iter().zip(y_pred.iter()).map(|(t, p)| (t - p) * (t - p)).sum();
    Ok(sse / y_true.len() as f64)
}
