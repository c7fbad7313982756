//! calcnum - Numerical-analysis coursework utilities
//!
//! calcnum provides the building blocks used in an introductory
//! numerical-analysis course: uniform sample grids for composite
//! integration rules, the rules themselves (trapezoidal and Simpson)
//! with their textbook error bounds, a polynomial interpolant for
//! estimating higher-order derivatives from samples, scalar root
//! finding, and a plotter that renders a function with its interval
//! endpoints or its numerically located roots marked.
//!
//! # Modules
//!
//! - [`integrate`] - Sample grids, the [`integrate::IntegrationRule`]
//!   trait, and the trapezoidal/Simpson composite rules
//! - [`interpolate`] - Newton-form polynomial interpolation with
//!   exact derivative evaluation of any order
//! - [`optimize`] - Scalar root finding (Newton-Raphson, secant)
//! - [`plot`] - Function and root plotting via [plotly](https://docs.rs/plotly)
//!
//! # Example
//!
//! ```
//! use calcnum::integrate::{IntegrationRule, SampleGrid, Trapezoid};
//!
//! // Integrate x^2 over [0, 2] with step 0.01.
//! let grid = SampleGrid::from_range(0.0, 2.0, 0.01, Some(&|x| x * x))?;
//! let rule = Trapezoid::new(grid);
//! let area = rule.integral()?;
//! assert!((area - 8.0 / 3.0).abs() < 1e-3);
//! # Ok::<(), calcnum::integrate::IntegrateError>(())
//! ```

pub mod integrate;
pub mod interpolate;
pub mod optimize;
pub mod plot;
