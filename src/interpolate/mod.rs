//! Polynomial interpolation for calcnum.
//!
//! This module provides the Newton-form polynomial interpolant used by the
//! integration grids to estimate higher-order derivatives from samples.
//!
//! # Example
//!
//! ```
//! use calcnum::interpolate::PolynomialInterpolant;
//!
//! let x = [0.0, 1.0, 2.0];
//! let y = [0.0, 1.0, 4.0]; // y = x^2
//! let p = PolynomialInterpolant::new(&x, &y)?;
//!
//! // The second derivative of the fitted parabola is constant.
//! assert!((p.derivative(0.5, 2)? - 2.0).abs() < 1e-10);
//! # Ok::<(), calcnum::interpolate::InterpolateError>(())
//! ```

mod error;
mod polynomial;

pub use error::{InterpolateError, InterpolateResult};
pub use polynomial::PolynomialInterpolant;
