//! optimization: gradient-descent stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for parameter fitting: a
//! forward-difference gradient estimator, a fixed-step gradient-descent
//! driver built on it, and a single error/result surface. Callers implement
//! a cost function, choose a step size and tolerances, and obtain fitted
//! parameters and diagnostics.
//!
//! Key behaviors
//! -------------
//! - Expose the **gradient-descent** API (`gradient_descent`), including
//!   configuration of step size, perturbation and stopping criteria, and an
//!   adapter into the argmin ecosystem.
//! - Normalize configuration issues, cost-function failures, and argmin
//!   backend errors into a single enum (`errors::OptError`) with a common
//!   result alias (`OptResult<T>`).
//!
//! Conventions
//! -----------
//! - Parameters and gradients are `ndarray` vectors (`Theta`, `Grad`).
//! - Public entry points that can fail return `OptResult<T>`; callers never
//!   see raw argmin errors.
//!
//! Downstream usage
//! ----------------
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`, which forwards the submodule prelude and
//!   the core error types.

pub mod errors;
pub mod gradient_descent;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use numopt::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::gradient_descent::prelude::*;
}
