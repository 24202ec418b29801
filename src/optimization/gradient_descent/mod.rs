//! gradient_descent: fixed-step gradient descent on finite-difference gradients.
//!
//! Purpose
//! -------
//! Provide a small optimization layer for **minimizing** a scalar cost
//! `c(θ)` when no analytic gradient is available. Callers implement a
//! single trait, [`CostFunction`], and invoke [`GradientDescent::optimize`]
//! (or [`GradientDescent::optimize_with_trajectory`]) to iterate
//! `θ ← θ − step_size · ∇̂c(θ)` with a forward-difference gradient `∇̂c`.
//!
//! Key behaviors
//! -------------
//! - Estimate gradients with [`FiniteDiffGradient`]: one baseline
//!   evaluation plus one probe per coordinate, each probe on an isolated
//!   copy of `θ`.
//! - Drive the iteration through a single shared loop (`run`) used by
//!   both entry points, with an optional trajectory sink.
//! - Stop when every component of `step_size · gradient` is strictly below
//!   `tol` ([`Termination::Converged`]) or after `max_iter` iterations
//!   ([`Termination::Exhausted`]). Neither is an error.
//! - Bridge any [`CostFunction`] into argmin via [`adapter::ArgMinAdapter`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Configuration ([`GDOptions`]) is validated on construction:
//!   `step_size > 0`, `max_iter ≥ 1`, `tol ≥ 0`, `delta ≠ 0`, all finite.
//! - Cost functions are pure: the same `θ` always yields the same value.
//! - The caller's starting vector is never mutated; every iteration
//!   produces a fresh [`Theta`].
//! - Divergence is not detected. A run that reaches `NaN` exhausts
//!   `max_iter`. A run whose parameters grow so large that `θ_i + δ` rounds
//!   back to `θ_i` sees an exactly zero gradient and is reported as
//!   [`Termination::Converged`], so a converged outcome with huge or
//!   non-finite `theta_hat` and `grad_norm == 0` signals divergence.
//!
//! Conventions
//! -----------
//! - [`GDOutcome::iterations`] is the **0-based index** of the iteration on
//!   which the run stopped, not a count of completed iterations: a run that
//!   converges on its first update reports `0`, and an exhausted run reports
//!   `max_iter − 1`. [`GDOutcome::termination`] tells the two apart.
//! - The trajectory holds the starting point plus one entry per iteration,
//!   so its length is always `iterations + 2`.
//! - Errors bubble up as [`OptResult<T>`](crate::optimization::errors::OptResult).
//!   A cost-function error aborts the run and reaches the caller unchanged.
//! - Diagnostics go through the `log` facade: a `debug!` summary at the end
//!   of each run, plus a `trace!` per iteration when `verbose` is set.
//!
//! Downstream usage
//! ----------------
//! - Model code implements [`CostFunction`] (or passes a closure), builds
//!   [`GDOptions`], and calls [`GradientDescent::optimize`].
//! - Code that only needs derivatives uses [`FiniteDiffGradient`] directly.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover:
//!   - estimator accuracy, evaluation counts and non-mutation in
//!     [`finite_diff`],
//!   - stopping rule, index reporting and divergence in `run`,
//!   - configuration validation in [`traits`] and [`validation`],
//!   - argmin round-trips in [`adapter`].
//! - Integration tests fit the reference cost functions end-to-end.

pub mod adapter;
pub mod api;
pub mod finite_diff;
pub(crate) mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::GradientDescent;
pub use self::finite_diff::FiniteDiffGradient;
pub use self::traits::{CostFunction, GDOptions, GDOutcome, Termination, TracedOutcome};
pub use self::types::{Cost, Grad, Theta, Trajectory};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use numopt::optimization::gradient_descent::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::GradientDescent;
    pub use super::finite_diff::FiniteDiffGradient;
    pub use super::traits::{CostFunction, GDOptions, GDOutcome, Termination, TracedOutcome};
    pub use super::types::{Cost, Grad, Theta, Trajectory};
}
