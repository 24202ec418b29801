//! numopt: finite-difference gradients and gradient-descent parameter fitting.
//!
//! Purpose
//! -------
//! Serve as the crate root for a small numerical-optimization toolkit:
//! estimate gradients of scalar cost functions by forward differences and
//! use them to fit parameters by fixed-step gradient descent.
//!
//! Key behaviors
//! -------------
//! - Re-export the optimization layer (`optimization`): the
//!   [`CostFunction`](optimization::gradient_descent::CostFunction) contract,
//!   the [`FiniteDiffGradient`](optimization::gradient_descent::FiniteDiffGradient)
//!   estimator, the [`GradientDescent`](optimization::gradient_descent::GradientDescent)
//!   driver, and the unified [`OptError`](optimization::errors::OptError).
//! - Provide reference cost functions (`cost_functions`) for linear
//!   regression and Gaussian curve fitting.
//!
//! Invariants & assumptions
//! ------------------------
//! - All computation is single-threaded and synchronous; the only bound on
//!   runtime is the configured iteration cap.
//! - Cost functions are assumed pure. Any error they raise is returned to
//!   the caller unchanged.
//!
//! Conventions
//! -----------
//! - Vectors are `ndarray::Array1<f64>` throughout.
//! - The crate never prints. Diagnostics are emitted through the `log`
//!   facade and stay silent until the application installs a logger.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules.
//! - `tests/integration_gradient_descent.rs` fits the reference cost
//!   functions end-to-end.

pub mod cost_functions;
pub mod optimization;

pub mod prelude {
    pub use crate::cost_functions::prelude::*;
    pub use crate::optimization::prelude::*;
}
