//! Adapter that exposes a user `CostFunction` as an `argmin` problem.
//!
//! The cost is passed through as-is (we minimize in both worlds). The
//! gradient argmin asks for is the same forward-difference estimate the
//! built-in gradient descent uses, so a cost function written once can be
//! driven by either our optimizer or any argmin solver.
use crate::optimization::{
    errors::OptResult,
    gradient_descent::{
        finite_diff::FiniteDiffGradient,
        traits::CostFunction,
        types::{Cost, Grad, Theta},
    },
};
use argmin::core::{CostFunction as ArgminCostFunction, Error, Gradient};

/// Bridges a user `CostFunction` to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns `c(θ)`.
/// - `Gradient::gradient` returns the forward-difference estimate of
///   `∇c(θ)` with the adapter's `delta`.
///
/// Errors raised by the wrapped cost function cross into argmin as boxed
/// [`OptError`](crate::optimization::errors::OptError)s and convert back
/// to the identical variant via `OptError::from`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, C: ?Sized> {
    pub f: &'a C,
    pub fd: FiniteDiffGradient,
}

impl<'a, C: CostFunction + ?Sized> ArgMinAdapter<'a, C> {
    /// Construct a new adapter over a cost function.
    ///
    /// # Errors
    /// `OptError::InvalidDelta` if `delta` is zero or non-finite.
    pub fn new(f: &'a C, delta: f64) -> OptResult<Self> {
        Ok(Self { f, fd: FiniteDiffGradient::new(delta)? })
    }
}

impl<'a, C: CostFunction + ?Sized> ArgminCostFunction for ArgMinAdapter<'a, C> {
    type Param = Theta;
    type Output = Cost;

    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.f.cost(theta)?)
    }
}

impl<'a, C: CostFunction + ?Sized> Gradient for ArgMinAdapter<'a, C> {
    type Param = Theta;
    type Gradient = Grad;

    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        Ok(self.fd.gradient(self.f, theta)?)
    }
}
