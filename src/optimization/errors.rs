//! Errors for the optimization layer (configuration checks, cost-function
//! failures, and argmin backend failures).
//!
//! This module defines the single error type of the crate, [`OptError`],
//! together with the [`OptResult`] alias. Domain errors raised by the
//! reference cost functions ([`CostFnError`]) and by the argmin backend
//! ([`argmin::core::Error`]) fold into it via `From`, so every public
//! entry point can return `OptResult<T>` and use `?` throughout.
//!
//! ## Conventions
//! - **Indices are 0-based.**
//! - Errors raised by a caller's cost function are passed through
//!   untouched; the optimizer never rewraps them.
//! - Non-convergence is **not** an error. See
//!   [`Termination`](crate::optimization::gradient_descent::Termination).
use argmin::core::{ArgminError, Error};

use crate::cost_functions::errors::CostFnError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- GDOptions ----
    /// Step size must be finite and strictly positive.
    InvalidStepSize { value: f64, reason: &'static str },

    /// Maximum iterations needs to be positive.
    InvalidMaxIter { max_iter: usize, reason: &'static str },

    /// Convergence tolerance must be finite and non-negative.
    InvalidTol { tol: f64, reason: &'static str },

    /// Perturbation must be finite and non-zero (it is divided by).
    InvalidDelta { delta: f64, reason: &'static str },

    // ---- Cost functions ----
    /// Predictions and targets have different lengths.
    ShapeMismatch { expected: usize, found: usize },

    /// Parameter vector has the wrong length for the model.
    ParamLengthMismatch { expected: usize, found: usize },

    /// Feature matrix rows do not match the number of targets.
    FeatureRowMismatch { rows: usize, targets: usize },

    /// Gaussian location must be finite.
    InvalidMean { value: f64 },

    /// Gaussian scale must be finite and > 0.
    InvalidSigma { value: f64 },

    /// No observations to average over.
    EmptyData,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter { text: String },
    /// Wrapper for argmin::NotImplemented
    NotImplemented { text: String },
    /// Wrapper for argmin::NotInitialized
    NotInitialized { text: String },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated { text: String },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound { text: String },
    /// Wrapper for argmin::PotentialBug
    PotentialBug { text: String },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError { text: String },
    /// Wrapper for other argmin::Error types
    BackendError { text: String },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- GDOptions ----
            OptError::InvalidStepSize { value, reason } => {
                write!(f, "Invalid step size {value}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::InvalidTol { tol, reason } => {
                write!(f, "Invalid convergence tolerance {tol}: {reason}")
            }
            OptError::InvalidDelta { delta, reason } => {
                write!(f, "Invalid finite-difference perturbation {delta}: {reason}")
            }

            // ---- Cost functions ----
            OptError::ShapeMismatch { expected, found } => {
                write!(f, "Prediction length mismatch: expected {expected}, found {found}")
            }
            OptError::ParamLengthMismatch { expected, found } => {
                write!(f, "Parameter length mismatch: expected {expected}, found {found}")
            }
            OptError::FeatureRowMismatch { rows, targets } => {
                write!(f, "Feature matrix has {rows} rows but {targets} targets were given")
            }
            OptError::InvalidMean { value } => {
                write!(f, "Invalid mean {value}, must be finite")
            }
            OptError::InvalidSigma { value } => {
                write!(f, "Invalid sigma {value}, must be finite and > 0")
            }
            OptError::EmptyData => {
                write!(f, "No observations provided")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        // An OptError that crossed the argmin boundary comes back as itself.
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<CostFnError> for OptError {
    fn from(err: CostFnError) -> Self {
        match err {
            CostFnError::ShapeMismatch { expected, found } => {
                OptError::ShapeMismatch { expected, found }
            }
            CostFnError::ParamLengthMismatch { expected, found } => {
                OptError::ParamLengthMismatch { expected, found }
            }
            CostFnError::FeatureRowMismatch { rows, targets } => {
                OptError::FeatureRowMismatch { rows, targets }
            }
            CostFnError::InvalidMean { value } => OptError::InvalidMean { value },
            CostFnError::InvalidSigma { value } => OptError::InvalidSigma { value },
            CostFnError::EmptyData => OptError::EmptyData,
        }
    }
}
