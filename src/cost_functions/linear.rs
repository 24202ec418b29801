//! Linear-regression cost: mean-squared error of `X · θ` against targets.
use ndarray::{Array1, Array2, ArrayView2};

use crate::{
    cost_functions::{
        errors::{CostFnError, CostFnResult},
        loss::mean_squared_error,
    },
    optimization::{
        errors::OptResult,
        gradient_descent::{Cost, CostFunction, Theta},
    },
};

/// LinearCost: MSE cost of a linear model on a fixed training set.
///
/// Purpose
/// -------
/// Hold an `n × m` feature matrix and `n` targets, and score a length-`m`
/// coefficient vector by the mean-squared error of its predictions. An
/// intercept is modelled by including a column of ones in `features`.
///
/// Invariants
/// ----------
/// - `features.nrows() == y_true.len() > 0` (checked in [`LinearCost::new`]).
/// - `theta.len() == features.ncols()` is checked on every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearCost {
    features: Array2<f64>,
    y_true: Array1<f64>,
}

impl LinearCost {
    /// # Errors
    /// - [`CostFnError::FeatureRowMismatch`] if row count and target count
    ///   differ.
    /// - [`CostFnError::EmptyData`] if there are no observations.
    pub fn new(features: Array2<f64>, y_true: Array1<f64>) -> CostFnResult<Self> {
        if features.nrows() != y_true.len() {
            return Err(CostFnError::FeatureRowMismatch {
                rows: features.nrows(),
                targets: y_true.len(),
            });
        }
        if y_true.is_empty() {
            return Err(CostFnError::EmptyData);
        }
        Ok(Self { features, y_true })
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn targets(&self) -> &Array1<f64> {
        &self.y_true
    }

    /// Predict `features · params` for an arbitrary feature matrix.
    ///
    /// # Errors
    /// [`CostFnError::ParamLengthMismatch`] if `params.len()` differs from
    /// the number of feature columns.
    pub fn predict(&self, features: ArrayView2<f64>, params: &Theta) -> CostFnResult<Array1<f64>> {
        if params.len() != features.ncols() {
            return Err(CostFnError::ParamLengthMismatch {
                expected: features.ncols(),
                found: params.len(),
            });
        }
        Ok(features.dot(params))
    }
}

impl CostFunction for LinearCost {
    fn cost(&self, theta: &Theta) -> OptResult<Cost> {
        let predictions = self.predict(self.features.view(), theta)?;
        Ok(mean_squared_error(self.y_true.view(), predictions.view())?)
    }
}
