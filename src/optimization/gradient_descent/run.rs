//! Execution helper that runs the fixed-step gradient-descent iteration and
//! returns a crate-friendly [`GDOutcome`].
//!
//! Both public entry points of
//! [`GradientDescent`](super::api::GradientDescent) go through
//! [`run_gradient_descent`]; the only difference is whether a trajectory
//! buffer is passed in.
use log::{debug, trace};

use crate::optimization::{
    errors::OptResult,
    gradient_descent::{
        Grad, Theta, Trajectory,
        finite_diff::{FiniteDiffGradient, evals_per_gradient},
        traits::{CostFunction, GDOptions, GDOutcome, Termination},
    },
};

/// Run gradient descent from `theta0` until the tolerance is met or
/// `opts.max_iter` iterations have been spent.
///
/// Each iteration `k = 0, 1, …`:
/// 1. estimates `g = ∇c(θ_k)` with `fd`,
/// 2. forms `change = step_size · g` and `θ_{k+1} = θ_k − change`,
/// 3. appends `θ_{k+1}` to `trajectory` when one is supplied,
/// 4. stops with [`Termination::Converged`] and reports `k` if every
///    `|change_i| < tol`.
///
/// If the cap is reached the run reports `max_iter − 1` and
/// [`Termination::Exhausted`].
///
/// # Arguments
/// - `theta0`: starting point. Cloned, never mutated; also pushed as the
///   first trajectory entry.
/// - `trajectory`: optional sink for visited points. It is appended to, not
///   cleared.
///
/// # Errors
/// - Propagates any error from the cost function unchanged; no partial
///   outcome is returned in that case.
///
/// # Notes
/// - The tolerance is applied to the scaled step, not to the raw gradient,
///   so convergence sensitivity depends on `step_size`.
/// - Nothing guards against divergence. `NaN` never satisfies the strict
///   `<` test and runs to the cap. A run that grows through finite values can
///   stop as [`Termination::Converged`]: once `|θ_i|` is large enough that
///   `θ_i + δ` rounds back to `θ_i`, the estimated gradient is exactly zero.
///   Check `theta_hat` for finiteness and scale before trusting a result.
/// - Callers go through [`GradientDescent`](super::api::GradientDescent),
///   which guarantees `opts` passed validation and `fd` carries `opts.delta`.
pub(crate) fn run_gradient_descent<C>(
    cost_fn: &C, theta0: &Theta, opts: &GDOptions, fd: &FiniteDiffGradient,
    mut trajectory: Option<&mut Trajectory>,
) -> OptResult<GDOutcome>
where
    C: CostFunction + ?Sized,
{
    let mut params = theta0.clone();
    if let Some(path) = trajectory.as_deref_mut() {
        path.push(params.clone());
    }
    let evals = evals_per_gradient(params.len());
    let mut cost_evals = 0usize;
    let mut last_grad = Grad::zeros(params.len());

    for iter in 0..opts.max_iter {
        let gradient = fd.gradient(cost_fn, &params)?;
        cost_evals += evals;

        let change = &gradient * opts.step_size;
        let new_params = &params - &change;
        if let Some(path) = trajectory.as_deref_mut() {
            path.push(new_params.clone());
        }
        params = new_params;
        last_grad = gradient;

        let converged = has_converged(&change, opts.tol);
        if opts.verbose {
            trace!(
                "gd iter {iter}: max |step| = {:.3e}, theta = {params}",
                max_abs(&change)
            );
        }
        if converged {
            return Ok(finish(params, iter, Termination::Converged, cost_evals, &last_grad));
        }
    }

    let last_index = opts.max_iter.saturating_sub(1);
    Ok(finish(params, last_index, Termination::Exhausted, cost_evals, &last_grad))
}

// ---- Helper Methods ----

/// Every component of the scaled step strictly below `tol`.
///
/// Vacuously true for an empty step. `NaN` compares false and never
/// converges.
fn has_converged(change: &Grad, tol: f64) -> bool {
    change.iter().all(|c| c.abs() < tol)
}

fn max_abs(v: &Grad) -> f64 {
    v.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
}

fn finish(
    theta_hat: Theta, iterations: usize, termination: Termination, cost_evals: usize,
    last_grad: &Grad,
) -> GDOutcome {
    let outcome = GDOutcome::new(theta_hat, iterations, termination, cost_evals, last_grad);
    debug!(
        "gradient descent {} at iteration {}: theta = {}, ||grad|| = {:.6e}, cost evals = {}",
        outcome.termination, outcome.iterations, outcome.theta_hat, outcome.grad_norm,
        outcome.cost_evals
    );
    outcome
}
