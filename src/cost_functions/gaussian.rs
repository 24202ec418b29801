//! Gaussian-fit cost: mean-squared error between a normal density with
//! parameters `(μ, σ)` and observed curve heights.
use ndarray::{Array1, ArrayView1};
use statrs::distribution::{Continuous, Normal};

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

/// Number of parameters: `[mu, sigma]`.
pub const GAUSSIAN_PARAMS: usize = 2;

/// GaussianCost: fit a normal density curve to `(x, y)` samples.
///
/// Purpose
/// -------
/// Score a parameter vector `θ = [μ, σ]` by the mean-squared error between
/// `y_true` and the normal pdf `φ(x; μ, σ)` evaluated at each `x` in
/// `features`.
///
/// Invariants
/// ----------
/// - `features.len() == y_true.len() > 0` (checked in [`GaussianCost::new`]).
/// - Evaluation rejects `θ` of length ≠ 2, a non-finite `μ`, and a `σ`
///   that is non-finite or ≤ 0. The optimizer does not bound parameters,
///   so a step that drives `σ` through zero surfaces as
///   `OptError::InvalidSigma` from the run.
///
/// Notes
/// -----
/// - The closed-form density `exp(-z²/2) / (σ√(2π))` is defined for any
///   non-zero `σ` (negative `σ` gives a negated curve), and a plain
///   closed-form model keeps iterating after `σ` changes sign. This type
///   departs from that and rejects `σ ≤ 0`, matching the domain of
///   `statrs::Normal`. Callers that want the unconstrained behavior can
///   wrap the closed form in a closure.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianCost {
    features: Array1<f64>,
    y_true: Array1<f64>,
}

impl GaussianCost {
    /// # Errors
    /// - [`CostFnError::ShapeMismatch`] if `features` and `y_true` differ in
    ///   length.
    /// - [`CostFnError::EmptyData`] if there are no observations.
    pub fn new(features: Array1<f64>, y_true: Array1<f64>) -> CostFnResult<Self> {
        if features.len() != y_true.len() {
            return Err(CostFnError::ShapeMismatch {
                expected: y_true.len(),
                found: features.len(),
            });
        }
        if y_true.is_empty() {
            return Err(CostFnError::EmptyData);
        }
        Ok(Self { features, y_true })
    }

    pub fn features(&self) -> &Array1<f64> {
        &self.features
    }

    pub fn targets(&self) -> &Array1<f64> {
        &self.y_true
    }

    /// Normal density `φ(x; μ, σ)` at every `x` in `features`.
    ///
    /// # Errors
    /// - [`CostFnError::ParamLengthMismatch`] if `params.len() != 2`.
    /// - [`CostFnError::InvalidMean`] / [`CostFnError::InvalidSigma`] for
    ///   out-of-domain parameters.
    pub fn predict(&self, features: ArrayView1<f64>, params: &Theta) -> CostFnResult<Array1<f64>> {
        let normal = normal_from_params(params)?;
        Ok(features.mapv(|x| normal.pdf(x)))
    }
}

impl CostFunction for GaussianCost {
    fn cost(&self, theta: &Theta) -> OptResult<Cost> {
        let predictions = self.predict(self.features.view(), theta)?;
        Ok(mean_squared_error(self.y_true.view(), predictions.view())?)
    }
}

fn normal_from_params(params: &Theta) -> CostFnResult<Normal> {
    if params.len() != GAUSSIAN_PARAMS {
        return Err(CostFnError::ParamLengthMismatch {
            expected: GAUSSIAN_PARAMS,
            found: params.len(),
        });
    }
    let (mu, sigma) = (params[0], params[1]);
    if !mu.is_finite() {
        return Err(CostFnError::InvalidMean { value: mu });
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(CostFnError::InvalidSigma { value: sigma });
    }
    Normal::new(mu, sigma).map_err(|_| CostFnError::InvalidSigma { value: sigma })
}
