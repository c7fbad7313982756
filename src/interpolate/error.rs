//! Error types for interpolation operations.

use std::fmt;

/// Result type for interpolation operations.
pub type InterpolateResult<T> = Result<T, InterpolateError>;

/// Errors that can occur during interpolation.
#[derive(Debug, Clone)]
pub enum InterpolateError {
    /// Input arrays have mismatched lengths.
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Input array is too small for the requested operation.
    InsufficientData {
        required: usize,
        actual: usize,
        context: String,
    },

    /// Numerical computation failed (e.g., duplicate abscissae).
    NumericalError { message: String },
}

impl fmt::Display for InterpolateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Shape mismatch in {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Self::InsufficientData {
                required,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Insufficient data for {}: need at least {}, got {}",
                    context, required, actual
                )
            }
            Self::NumericalError { message } => {
                write!(f, "Numerical error: {}", message)
            }
        }
    }
}

impl std::error::Error for InterpolateError {}
