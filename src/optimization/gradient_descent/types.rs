//! gradient_descent::types: shared numeric aliases.
//!
//! Purpose
//! -------
//! Centralize the numeric types used by the finite-difference estimator and
//! the gradient-descent driver so the rest of the module stays agnostic to
//! `ndarray` generics.
//!
//! Conventions
//! -----------
//! - `Theta` and `Grad` are treated as column vectors with length equal to
//!   the number of free parameters.
//! - This module defines no runtime behavior; there are no dedicated tests.
use ndarray::Array1;

/// Parameter vector `θ` being fitted.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the optimizer.
pub type Theta = Array1<f64>;

/// Gradient vector `∇c(θ)`, matching the shape of `Theta`.
pub type Grad = Array1<f64>;

/// Scalar cost value `c(θ)`; smaller is better.
pub type Cost = f64;

/// Chronological history of parameter vectors visited by a run.
///
/// Entry 0 is the starting point; entry `k + 1` is the point produced by
/// iteration `k`.
pub type Trajectory = Vec<Theta>;
