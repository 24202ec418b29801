//! Validation helpers for gradient-descent configuration.
//!
//! This module centralizes the consistency checks used by
//! [`GDOptions::new`](super::traits::GDOptions::new) and
//! [`FiniteDiffGradient::new`](super::finite_diff::FiniteDiffGradient::new):
//! [`verify_step_size`], [`verify_max_iter`], [`verify_tol`] and
//! [`verify_delta`] reject values the iteration cannot work with.
use crate::optimization::errors::{OptError, OptResult};

/// Validate the learning rate.
///
/// # Errors
/// Returns [`OptError::InvalidStepSize`] if the value is non-finite or ≤ 0.0.
pub fn verify_step_size(step_size: f64) -> OptResult<()> {
    if !step_size.is_finite() {
        return Err(OptError::InvalidStepSize {
            value: step_size,
            reason: "Step size must be finite.",
        });
    }
    if step_size <= 0.0 {
        return Err(OptError::InvalidStepSize {
            value: step_size,
            reason: "Step size must be positive.",
        });
    }
    Ok(())
}

/// Validate the iteration cap.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] if `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate the convergence tolerance.
///
/// Zero is accepted; it makes the strict `< tol` test unsatisfiable and
/// forces every run to exhaust `max_iter`.
///
/// # Errors
/// Returns [`OptError::InvalidTol`] if the value is non-finite or < 0.0.
pub fn verify_tol(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTol { tol, reason: "Tolerance must be finite." });
    }
    if tol < 0.0 {
        return Err(OptError::InvalidTol { tol, reason: "Tolerance must be non-negative." });
    }
    Ok(())
}

/// Validate the finite-difference perturbation.
///
/// Negative values are allowed (they give a backward difference); only zero
/// and non-finite values are rejected. Whether `delta` is small relative to
/// the parameter scale is left to the caller.
///
/// # Errors
/// Returns [`OptError::InvalidDelta`] if the value is non-finite or exactly 0.0.
pub fn verify_delta(delta: f64) -> OptResult<()> {
    if !delta.is_finite() {
        return Err(OptError::InvalidDelta { delta, reason: "Perturbation must be finite." });
    }
    if delta == 0.0 {
        return Err(OptError::InvalidDelta { delta, reason: "Perturbation must be non-zero." });
    }
    Ok(())
}
