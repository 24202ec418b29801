//! Public API surface for gradient-descent fitting.
//!
//! - [`CostFunction`]: trait users implement for the quantity to minimize.
//! - [`GDOptions`]: validated optimizer configuration.
//! - [`Termination`]: which terminal state a run reached.
//! - [`GDOutcome`] / [`TracedOutcome`]: normalized results returned by
//!   [`GradientDescent`](super::api::GradientDescent).
//!
//! Convention: we *minimize* the cost `c(θ)` directly. Gradients are never
//! requested from the user; they are always estimated by forward
//! differences of `c`.
use crate::optimization::{
    errors::OptResult,
    gradient_descent::{
        Cost, Grad, Theta, Trajectory,
        validation::{verify_delta, verify_max_iter, verify_step_size, verify_tol},
    },
};
use argmin_math::ArgminL2Norm;

/// User-implemented cost interface.
///
/// `cost` must be a pure function of `theta`: evaluating it twice at the
/// same point must give the same value, because the optimizer probes
/// every coordinate around the current point.
///
/// Required:
/// - `cost(&Theta) -> OptResult<Cost>`: evaluate `c(θ)`.
///   - Errors: return any `OptError`; it reaches the optimizer's caller
///     unchanged.
///
/// Closures of the form `Fn(&Theta) -> OptResult<Cost>` implement this
/// trait directly.
pub trait CostFunction {
    fn cost(&self, theta: &Theta) -> OptResult<Cost>;
}

impl<F> CostFunction for F
where
    F: Fn(&Theta) -> OptResult<Cost>,
{
    fn cost(&self, theta: &Theta) -> OptResult<Cost> {
        self(theta)
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `step_size: f64`: learning rate applied to the gradient (> 0).
/// - `max_iter: usize`: hard cap on the number of iterations (≥ 1).
/// - `tol: f64`: convergence threshold on every `|step_size · g_i|` (≥ 0).
/// - `delta: f64`: finite-difference perturbation (≠ 0).
/// - `verbose: bool`: if `true`, every iteration emits a `trace!` record.
///
/// Default:
/// - `step_size = 1e-2`, `max_iter = 1000`, `tol = 1e-6`, `delta = 1e-6`,
///   `verbose = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GDOptions {
    pub step_size: f64,
    pub max_iter: usize,
    pub tol: f64,
    pub delta: f64,
    pub verbose: bool,
}

impl GDOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - [`OptError::InvalidStepSize`](crate::optimization::errors::OptError::InvalidStepSize)
    ///   for a non-finite or non-positive `step_size`.
    /// - `OptError::InvalidMaxIter` if `max_iter == 0`.
    /// - `OptError::InvalidTol` for a non-finite or negative `tol`.
    /// - `OptError::InvalidDelta` for a non-finite or zero `delta`.
    pub fn new(
        step_size: f64, max_iter: usize, tol: f64, delta: f64, verbose: bool,
    ) -> OptResult<Self> {
        verify_step_size(step_size)?;
        verify_max_iter(max_iter)?;
        verify_tol(tol)?;
        verify_delta(delta)?;
        Ok(Self { step_size, max_iter, tol, delta, verbose })
    }
}

impl Default for GDOptions {
    fn default() -> Self {
        Self { step_size: 1e-2, max_iter: 1000, tol: 1e-6, delta: 1e-6, verbose: false }
    }
}

/// Terminal state of a gradient-descent run. Neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every component of `step_size · gradient` fell strictly below `tol`.
    Converged,
    /// `max_iter` iterations ran without satisfying the tolerance.
    Exhausted,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Converged => write!(f, "Converged"),
            Termination::Exhausted => write!(f, "Exhausted"),
        }
    }
}

/// Canonical result returned by `GradientDescent::optimize`.
///
/// - `theta_hat`: parameter vector after the last update.
/// - `iterations`: **0-based index** of the iteration on which the run
///   stopped. A run that converges on its first update reports `0`; an
///   exhausted run reports `max_iter - 1`.
/// - `termination`: whether the tolerance was met. Use this rather than
///   `iterations == max_iter - 1`, which cannot tell a last-iteration
///   convergence from exhaustion.
/// - `cost_evals`: number of cost-function evaluations performed.
/// - `grad_norm`: L2 norm of the last estimated gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GDOutcome {
    pub theta_hat: Theta,
    pub iterations: usize,
    pub termination: Termination,
    pub cost_evals: usize,
    pub grad_norm: f64,
}

impl GDOutcome {
    /// Build an outcome from the final loop state.
    pub fn new(
        theta_hat: Theta, iterations: usize, termination: Termination, cost_evals: usize,
        last_grad: &Grad,
    ) -> Self {
        let grad_norm = last_grad.l2_norm();
        Self { theta_hat, iterations, termination, cost_evals, grad_norm }
    }

    /// `true` if the run stopped on the tolerance rather than the cap.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Result of `GradientDescent::optimize_with_trajectory`.
///
/// `trajectory.len() == outcome.iterations + 2`: the starting point plus
/// one entry per completed iteration, including the one that stopped the
/// run.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedOutcome {
    pub outcome: GDOutcome,
    pub trajectory: Trajectory,
}
