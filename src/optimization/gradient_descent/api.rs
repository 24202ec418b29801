//! High-level entry points for minimizing a user-provided `CostFunction`.
//!
//! [`GradientDescent`] owns a validated [`GDOptions`] and the matching
//! [`FiniteDiffGradient`], and delegates the iteration to
//! the crate-internal `run_gradient_descent` loop.
use crate::optimization::{
    errors::OptResult,
    gradient_descent::{
        Theta, Trajectory,
        finite_diff::FiniteDiffGradient,
        run::run_gradient_descent,
        traits::{CostFunction, GDOptions, GDOutcome, TracedOutcome},
    },
};

/// Fixed-step gradient descent with forward-difference gradients.
///
/// The optimizer holds no per-run state, so one instance can serve any
/// number of calls, and calls are reentrant as long as the cost function
/// is.
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use numopt::optimization::errors::OptResult;
/// use numopt::optimization::gradient_descent::{GDOptions, GradientDescent, Termination, Theta};
///
/// let opts = GDOptions::new(0.1, 500, 1e-8, 1e-6, false)?;
/// let gd = GradientDescent::new(opts)?;
/// let bowl = |theta: &Theta| -> OptResult<f64> { Ok((theta[0] - 5.0).powi(2)) };
///
/// let out = gd.optimize(&bowl, &array![0.0])?;
/// assert_eq!(out.termination, Termination::Converged);
/// assert!((out.theta_hat[0] - 5.0).abs() < 1e-3);
/// # Ok::<(), numopt::optimization::errors::OptError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    opts: GDOptions,
    fd: FiniteDiffGradient,
}

impl GradientDescent {
    /// Build an optimizer from options.
    ///
    /// The options are re-validated so hand-assembled `GDOptions` literals
    /// cannot bypass the checks in [`GDOptions::new`].
    ///
    /// # Errors
    /// Any configuration error from [`GDOptions::new`].
    pub fn new(opts: GDOptions) -> OptResult<Self> {
        let opts =
            GDOptions::new(opts.step_size, opts.max_iter, opts.tol, opts.delta, opts.verbose)?;
        let fd = FiniteDiffGradient::new(opts.delta)?;
        Ok(Self { opts, fd })
    }

    pub fn options(&self) -> &GDOptions {
        &self.opts
    }

    /// The gradient estimator this optimizer uses, sharing its `delta`.
    pub fn gradient_estimator(&self) -> &FiniteDiffGradient {
        &self.fd
    }

    /// Minimize `cost_fn` starting from `theta0`.
    ///
    /// `theta0` is borrowed and never modified. The returned
    /// [`GDOutcome::iterations`] is the 0-based index of the stopping
    /// iteration.
    ///
    /// # Errors
    /// Propagates any error raised by `cost_fn`, unchanged.
    pub fn optimize<C>(&self, cost_fn: &C, theta0: &Theta) -> OptResult<GDOutcome>
    where
        C: CostFunction + ?Sized,
    {
        run_gradient_descent(cost_fn, theta0, &self.opts, &self.fd, None)
    }

    /// Same as [`optimize`](Self::optimize), additionally recording every
    /// visited point.
    ///
    /// The trajectory starts with a copy of `theta0` and gains one entry per
    /// iteration, so `trajectory.len() == outcome.iterations + 2`.
    ///
    /// # Errors
    /// Propagates any error raised by `cost_fn`, unchanged; the partial
    /// trajectory is discarded.
    pub fn optimize_with_trajectory<C>(
        &self, cost_fn: &C, theta0: &Theta,
    ) -> OptResult<TracedOutcome>
    where
        C: CostFunction + ?Sized,
    {
        let mut trajectory = Trajectory::with_capacity(self.opts.max_iter.min(1024) + 1);
        let outcome =
            run_gradient_descent(cost_fn, theta0, &self.opts, &self.fd, Some(&mut trajectory))?;
        Ok(TracedOutcome { outcome, trajectory })
    }
}
