//! Errors raised by the reference cost functions (shape checks on data,
//! parameter-length checks, and model-domain checks).
//!
//! [`CostFnError`] is a small, model-side error type. It converts into
//! [`OptError`](crate::optimization::errors::OptError) so the cost functions
//! can report failures through the `CostFunction` contract with `?`.
//!
//! ## Conventions
//! - Lengths are reported as `expected` (what the model needs) vs `found`
//!   (what the caller supplied).
//! - Domain violations (e.g. a non-positive Gaussian scale) are recoverable
//!   errors, never panics.

/// Result alias for cost-function construction and evaluation paths.
pub type CostFnResult<T> = Result<T, CostFnError>;

#[derive(Debug, Clone, PartialEq)]
pub enum CostFnError {
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
}

impl std::error::Error for CostFnError {}

impl std::fmt::Display for CostFnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostFnError::ShapeMismatch { expected, found } => {
                write!(f, "Prediction length mismatch: expected {expected}, found {found}")
            }
            CostFnError::ParamLengthMismatch { expected, found } => {
                write!(f, "Parameter length mismatch: expected {expected}, found {found}")
            }
            CostFnError::FeatureRowMismatch { rows, targets } => {
                write!(f, "Feature matrix has {rows} rows but {targets} targets were given")
            }
            CostFnError::InvalidMean { value } => {
                write!(f, "Invalid mean {value}, must be finite")
            }
            CostFnError::InvalidSigma { value } => {
                write!(f, "Invalid sigma {value}, must be finite and > 0")
            }
            CostFnError::EmptyData => write!(f, "No observations provided"),
        }
    }
}
