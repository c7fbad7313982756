//! Error types for grid construction and numerical integration.

use crate::interpolate::InterpolateError;
use std::fmt;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during grid construction or integration.
#[derive(Debug, Clone)]
pub enum IntegrateError {
    /// Invalid interval provided (e.g., a >= b).
    InvalidInterval { a: f64, b: f64, context: String },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },

    /// Invalid input array size or dimensions.
    InvalidInput { context: String },

    /// The grid carries no function samples (`y` was never supplied).
    MissingSamples { context: String },

    /// Error from the underlying interpolation operation.
    InterpolateError(String),
}

impl fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "Invalid interval [{}, {}] in {}: bounds must satisfy a < b",
                    a, b, context
                )
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::InvalidInput { context } => {
                write!(f, "Invalid input: {}", context)
            }
            Self::MissingSamples { context } => {
                write!(f, "{}: grid has no function samples", context)
            }
            Self::InterpolateError(msg) => {
                write!(f, "interpolation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for IntegrateError {}

impl From<InterpolateError> for IntegrateError {
    fn from(err: InterpolateError) -> Self {
        Self::InterpolateError(err.to_string())
    }
}
