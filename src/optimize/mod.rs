//! Root finding for calcnum.
//!
//! This module provides the local scalar solvers used as black boxes by
//! the root-marking plotter.
//!
//! # Modules
//!
//! - [`scalar`] - Univariate root finding (Newton-Raphson, secant)
//!
//! # Example
//!
//! ```
//! use calcnum::optimize::scalar::{secant, ScalarOptions};
//!
//! let result = secant(|x| x * x - 4.0, 1.0, 3.0, &ScalarOptions::default())?;
//! assert!((result.root - 2.0).abs() < 1e-6);
//! # Ok::<(), calcnum::optimize::OptimizeError>(())
//! ```

pub mod error;
pub mod scalar;

pub use error::{OptimizeError, OptimizeResult};
pub use scalar::{newton, secant, RootResult, ScalarOptions};
