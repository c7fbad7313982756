//! Error types for root-finding operations.

use std::fmt;

/// Result type for root-finding operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Errors that can occur during root finding.
#[derive(Debug, Clone)]
pub enum OptimizeError {
    /// The solver did not converge within the maximum iterations.
    DidNotConverge {
        iterations: usize,
        tolerance: f64,
        context: String,
    },

    /// Numerical computation failed (e.g., division by zero).
    NumericalError { message: String },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DidNotConverge {
                iterations,
                tolerance,
                context,
            } => {
                write!(
                    f,
                    "{}: did not converge after {} iterations (tolerance: {:.2e})",
                    context, iterations, tolerance
                )
            }
            Self::NumericalError { message } => {
                write!(f, "Numerical error: {}", message)
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
        }
    }
}

impl std::error::Error for OptimizeError {}
