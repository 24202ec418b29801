//! cost_functions: reference implementations of the `CostFunction` contract.
//!
//! Purpose
//! -------
//! Ship the two model costs the optimizer is typically fitted against, so
//! the gradient-descent layer can be exercised end-to-end:
//!
//! - [`LinearCost`]: linear regression, `ŷ = X · θ`.
//! - [`GaussianCost`]: normal-density curve fit, `ŷ = φ(x; μ, σ)` with
//!   `θ = [μ, σ]`.
//!
//! Both score parameters by the mean-squared error ([`loss`]) between
//! predictions and targets, and both expose `predict(features, params)`
//! alongside `cost`. The optimizer only ever calls `cost`.
//!
//! Conventions
//! -----------
//! - Training data are fixed at construction and validated there.
//! - Evaluation errors are reported as [`CostFnError`] internally and reach
//!   the optimizer's caller as the matching `OptError` variant.

pub mod errors;
pub mod gaussian;
pub mod linear;
pub mod loss;

pub use self::errors::{CostFnError, CostFnResult};
pub use self::gaussian::GaussianCost;
pub use self::linear::LinearCost;

pub mod prelude {
    pub use super::errors::{CostFnError, CostFnResult};
    pub use super::gaussian::GaussianCost;
    pub use super::linear::LinearCost;
    pub use super::loss::mean_squared_error;
}
