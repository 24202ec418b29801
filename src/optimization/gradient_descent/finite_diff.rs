//! gradient_descent::finite_diff: forward-difference gradient estimator.
//!
//! Purpose
//! -------
//! Estimate the gradient of a scalar [`CostFunction`] at a point by probing
//! each coordinate independently with a fixed perturbation `delta`:
//!
//! ```text
//! g_i = (c(θ + δ·e_i) − c(θ)) / δ
//! ```
//!
//! Key behaviors
//! -------------
//! - One baseline evaluation `c(θ)` per call, reused by all `N` probes, so a
//!   gradient costs exactly `N + 1` evaluations ([`evals_per_gradient`]).
//! - Probes run on an isolated working copy of `θ`: component `i` is bumped,
//!   evaluated, and restored before moving on. The caller's vector is never
//!   observed in a perturbed state.
//! - Errors raised by the cost function propagate unchanged on the first
//!   failing evaluation; there is no retry and no substitution.
//!
//! Invariants & assumptions
//! ------------------------
//! - `delta` is finite and non-zero (checked at construction). Whether it is
//!   small relative to the scale of `θ` is the caller's concern.
//! - The returned gradient has the same length as `θ`, including the
//!   scalar case `N = 1` and the degenerate case `N = 0`.
//! - Non-finite cost values are not rejected here; they produce non-finite
//!   gradient entries which the optimizer passes through.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the quadratic and linear reference cases, the
//!   non-mutation guarantee, evaluation counts, and error propagation.
//! - Agreement with the `finitediff` crate's forward difference is checked
//!   at its own step size.
use crate::optimization::{
    errors::OptResult,
    gradient_descent::{
        Grad, Theta,
        traits::CostFunction,
        validation::verify_delta,
    },
};

/// Number of cost evaluations one gradient estimate performs in `dim`
/// dimensions.
pub const fn evals_per_gradient(dim: usize) -> usize {
    dim + 1
}

/// Forward-difference gradient estimator with a fixed perturbation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDiffGradient {
    delta: f64,
}

impl FiniteDiffGradient {
    /// Construct an estimator probing with `delta`.
    ///
    /// # Errors
    /// [`OptError::InvalidDelta`](crate::optimization::errors::OptError::InvalidDelta)
    /// if `delta` is zero or non-finite.
    pub fn new(delta: f64) -> OptResult<Self> {
        verify_delta(delta)?;
        Ok(Self { delta })
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// gradient: forward-difference estimate of `∇c(θ)`.
    ///
    /// Parameters
    /// ----------
    /// - `cost_fn`: `&C`
    ///   Cost function to differentiate.
    /// - `theta`: `&Theta`
    ///   Point at which to differentiate. Borrowed immutably; probing
    ///   happens on a private copy.
    ///
    /// Returns
    /// -------
    /// `OptResult<Grad>`
    ///   A vector of length `theta.len()` whose entry `i` is the forward
    ///   difference quotient along coordinate `i`.
    ///
    /// Errors
    /// ------
    /// - Any error returned by `cost_fn.cost`, unchanged.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use numopt::optimization::errors::OptResult;
    /// # use numopt::optimization::gradient_descent::{FiniteDiffGradient, Theta};
    /// let fd = FiniteDiffGradient::new(1e-3).unwrap();
    /// let sum = |theta: &Theta| -> OptResult<f64> { Ok(theta.sum()) };
    ///
    /// let grad = fd.gradient(&sum, &array![1.0, -2.0]).unwrap();
    /// assert!((grad[0] - 1.0).abs() < 1e-9);
    /// assert!((grad[1] - 1.0).abs() < 1e-9);
    /// ```
    pub fn gradient<C>(&self, cost_fn: &C, theta: &Theta) -> OptResult<Grad>
    where
        C: CostFunction + ?Sized,
    {
        let dim = theta.len();
        let baseline = cost_fn.cost(theta)?;
        let mut probe = theta.clone();
        let mut grad = Grad::zeros(dim);
        for i in 0..dim {
            let original = probe[i];
            probe[i] = original + self.delta;
            let bumped = cost_fn.cost(&probe);
            probe[i] = original;
            grad[i] = (bumped? - baseline) / self.delta;
        }
        Ok(grad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{errors::OptError, gradient_descent::Cost};
    use approx::assert_abs_diff_eq;
    use finitediff::FiniteDiff;
    use ndarray::{Array1, array};
    use std::cell::Cell;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Accuracy on quadratic (O(delta) error) and linear (exact) costs.
    // - Shape of the gradient for N = 0, 1, 3.
    // - Non-mutation of the input and repeatability.
    // - Number of cost evaluations per estimate.
    // - Propagation of cost-function errors.
    //
    // They intentionally DO NOT cover:
    // - The optimizer loop that consumes these gradients.
    // -------------------------------------------------------------------------

    /// Wraps a cost closure and counts evaluations.
    struct Counting<F> {
        f: F,
        calls: Cell<usize>,
    }

    impl<F: Fn(&Theta) -> f64> CostFunction for Counting<F> {
        fn cost(&self, theta: &Theta) -> OptResult<Cost> {
            self.calls.set(self.calls.get() + 1);
            Ok((self.f)(theta))
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the scalar quadratic case approximates the true derivative with
    // the expected forward-difference bias.
    //
    // Given
    // -----
    // - f(p) = p0², p0 = 3, delta = 1e-3.
    //
    // Expect
    // ------
    // - g0 = 6 + delta up to rounding, i.e. within O(delta) of 6.
    fn gradient_of_square_at_three_is_close_to_six() {
        // Arrange
        let fd = FiniteDiffGradient::new(1e-3).unwrap();
        let f = |theta: &Theta| -> OptResult<Cost> { Ok(theta[0] * theta[0]) };

        // Act
        let grad = fd.gradient(&f, &array![3.0]).unwrap();

        // Assert
        assert_eq!(grad.len(), 1);
        assert_abs_diff_eq!(grad[0], 6.0, epsilon = 2e-3);
        assert_abs_diff_eq!(grad[0], 6.001, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // A cost linear along every axis has no truncation error, so the estimate
    // is exact up to floating-point rounding regardless of delta or point.
    //
    // Given
    // -----
    // - f(p) = Σ p_i, N = 3, two different points and deltas.
    //
    // Expect
    // ------
    // - Every component equals 1 within rounding.
    fn gradient_of_sum_is_all_ones() {
        let f = |theta: &Theta| -> OptResult<Cost> { Ok(theta.sum()) };
        for (delta, point) in [(1e-3, array![0.5, -2.0, 10.0]), (0.25, array![1.0, 1.0, 1.0])] {
            let fd = FiniteDiffGradient::new(delta).unwrap();

            let grad = fd.gradient(&f, &point).unwrap();

            assert_eq!(grad.len(), 3);
            for g in grad.iter() {
                assert_abs_diff_eq!(*g, 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the caller's vector is untouched and two calls agree exactly.
    fn gradient_does_not_mutate_input_and_is_repeatable() {
        // Arrange
        let fd = FiniteDiffGradient::new(1e-4).unwrap();
        let f = |theta: &Theta| -> OptResult<Cost> {
            Ok(theta[0] * theta[1] + theta[2].sin() + theta[1].powi(3))
        };
        let theta = array![1.5, -0.5, 0.25];
        let snapshot = theta.clone();

        // Act
        let first = fd.gradient(&f, &theta).unwrap();
        let second = fd.gradient(&f, &theta).unwrap();

        // Assert
        assert_eq!(theta, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    // Purpose
    // -------
    // Each probe must see only its own coordinate perturbed; the working copy
    // is restored between probes.
    //
    // Given
    // -----
    // - A cost that records how many coordinates differ from the base point.
    //
    // Expect
    // ------
    // - Every evaluation differs from the base point in at most one place.
    fn each_probe_perturbs_exactly_one_coordinate() {
        let base = array![1.0, 2.0, 3.0, 4.0];
        let max_diff = Cell::new(0usize);
        let f = |theta: &Theta| -> OptResult<Cost> {
            let n = theta.iter().zip(base.iter()).filter(|(a, b)| a != b).count();
            max_diff.set(max_diff.get().max(n));
            Ok(theta.sum())
        };
        let fd = FiniteDiffGradient::new(0.5).unwrap();

        fd.gradient(&f, &base).unwrap();

        assert_eq!(max_diff.get(), 1);
    }

    #[test]
    // Purpose
    // -------
    // The baseline is evaluated once and reused: N + 1 evaluations per call.
    fn gradient_uses_n_plus_one_evaluations() {
        for dim in [0usize, 1, 3] {
            let counting = Counting { f: |t: &Theta| t.sum(), calls: Cell::new(0) };
            let fd = FiniteDiffGradient::new(1e-6).unwrap();

            let grad = fd.gradient(&counting, &Array1::zeros(dim)).unwrap();

            assert_eq!(grad.len(), dim);
            assert_eq!(counting.calls.get(), evals_per_gradient(dim));
        }
    }

    #[test]
    // Purpose
    // -------
    // A failing cost evaluation surfaces as the caller's own error.
    //
    // Given
    // -----
    // - A cost that fails as soon as the second coordinate is perturbed.
    //
    // Expect
    // ------
    // - `gradient` returns exactly that error.
    fn cost_error_propagates_unchanged() {
        let f = |theta: &Theta| -> OptResult<Cost> {
            if theta[1] > 0.0 {
                Err(OptError::InvalidSigma { value: theta[1] })
            } else {
                Ok(theta.sum())
            }
        };
        let fd = FiniteDiffGradient::new(1e-3).unwrap();

        let err = fd.gradient(&f, &array![0.0, 0.0]).unwrap_err();

        assert_eq!(err, OptError::InvalidSigma { value: 1e-3 });
    }

    #[test]
    // Purpose
    // -------
    // Cross-check against `finitediff`'s forward difference, which uses a
    // fixed step of sqrt(machine epsilon).
    fn gradient_matches_finitediff_forward_diff() {
        let step = f64::EPSILON.sqrt();
        let raw = |x: &Array1<f64>| x[0].exp() + 3.0 * x[1] * x[1] - x[0] * x[1];
        let f = |theta: &Theta| -> OptResult<Cost> { Ok(raw(theta)) };
        let theta = array![0.3, -1.2];
        let fd = FiniteDiffGradient::new(step).unwrap();

        let ours = fd.gradient(&f, &theta).unwrap();
        let reference = theta.forward_diff(&raw);

        for (a, b) in ours.iter().zip(reference.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
        }
    }

    #[test]
    fn new_rejects_zero_delta() {
        assert!(matches!(FiniteDiffGradient::new(0.0), Err(OptError::InvalidDelta { .. })));
    }
}
