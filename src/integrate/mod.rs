//! Sample grids and composite numerical-integration rules.
//!
//! The central type is [`SampleGrid`]: an immutable, equally spaced grid of
//! sample points over an interval, built either from explicit samples or
//! from range parameters, optionally carrying function values and a
//! derivative-estimating interpolant. Integration rules implement
//! [`IntegrationRule`] and own the grid they integrate over.
//!
//! # Available Rules
//!
//! | Rule | Accuracy | Error bound derivative |
//! |------|----------|------------------------|
//! | [`Trapezoid`] | O(h²) | f″ |
//! | [`Simpson`] | O(h⁴) | f⁗ |
//!
//! # Example
//!
//! ```
//! use calcnum::integrate::{IntegrationRule, SampleGrid, Simpson};
//!
//! let grid = SampleGrid::from_range(0.0, 2.0, 0.25, Some(&|x| x.powi(3)))?;
//! let rule = Simpson::new(grid);
//!
//! // Simpson's rule is exact for cubics.
//! assert!((rule.integral()? - 4.0).abs() < 1e-10);
//! # Ok::<(), calcnum::integrate::IntegrateError>(())
//! ```

mod error;
mod grid;
mod simpson;
mod trapezoid;
mod traits;

pub use error::{IntegrateError, IntegrateResult};
pub use grid::{larger_magnitude, SampleGrid};
pub use simpson::Simpson;
pub use trapezoid::Trapezoid;
pub use traits::IntegrationRule;
