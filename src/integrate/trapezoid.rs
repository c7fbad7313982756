//! Composite trapezoidal rule.
//!
//! The trapezoidal rule approximates the integral by summing trapezoid
//! areas. It has O(h²) accuracy for smooth functions.

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::grid::SampleGrid;
use crate::integrate::traits::{dominant_derivative, IntegrationRule};

/// Composite trapezoidal rule over a sample grid.
///
/// # Example
///
/// ```
/// use calcnum::integrate::{IntegrationRule, SampleGrid, Trapezoid};
///
/// // Integrate y = x^2 from 0 to 1 using 101 points.
/// let grid = SampleGrid::from_range(0.0, 1.0, 0.01, Some(&|x| x * x))?;
/// let rule = Trapezoid::new(grid);
///
/// let result = rule.integral()?;
/// // Exact value is 1/3
/// assert!((result - 1.0 / 3.0).abs() < 1e-3);
/// # Ok::<(), calcnum::integrate::IntegrateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Trapezoid {
    grid: SampleGrid,
}

impl Trapezoid {
    /// Build the rule over `grid`.
    pub fn new(grid: SampleGrid) -> Self {
        Self { grid }
    }
}

impl IntegrationRule for Trapezoid {
    fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// Approximate the integral with the composite trapezoidal rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid carries no function samples.
    fn integral(&self) -> IntegrateResult<f64> {
        let y = self.grid.y().ok_or_else(|| IntegrateError::MissingSamples {
            context: "trapezoid integral".to_string(),
        })?;
        let x = self.grid.x();

        let mut integral = 0.0;
        for i in 0..y.len() - 1 {
            let dx = x[i + 1] - x[i];
            integral += 0.5 * dx * (y[i] + y[i + 1]);
        }

        Ok(integral)
    }

    /// Error bound for one trapezoid panel: `-(h^3 / 12) * f''(ξ)`, with
    /// `f''(ξ)` taken as the larger-magnitude second-derivative estimate
    /// at the two interval endpoints.
    fn local_error(&self) -> IntegrateResult<f64> {
        let h = self.grid.step();
        let d2 = dominant_derivative(&self.grid, 2)?;
        Ok(-(h.powi(3) / 12.0) * d2)
    }

    /// Compounded error bound over the whole grid:
    /// `-(h^2 / 12) * (upper - lower) * f''(ξ)`.
    fn global_error(&self) -> IntegrateResult<f64> {
        let h = self.grid.step();
        let width = self.grid.upper() - self.grid.lower();
        let d2 = dominant_derivative(&self.grid, 2)?;
        Ok(-(h.powi(2) / 12.0) * width * d2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trapezoid_quadratic() {
        // Integrate y = x^2 from 0 to 1; exact value is 1/3.
        let grid = SampleGrid::from_range(0.0, 1.0, 0.01, Some(&|x| x * x)).expect("grid failed");
        let result = Trapezoid::new(grid).integral().expect("integral failed");
        assert!((result - 1.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_trapezoid_exact_on_linear() {
        // The rule is exact for straight lines.
        let grid =
            SampleGrid::from_range(0.0, 4.0, 0.5, Some(&|x| 3.0 * x + 1.0)).expect("grid failed");
        let result = Trapezoid::new(grid).integral().expect("integral failed");
        assert!((result - 28.0).abs() < 1e-10);
    }

    #[test]
    fn test_trapezoid_explicit_samples() {
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let y = vec![0.0, 1.0, 4.0, 9.0];
        let grid = SampleGrid::from_samples(x, Some(y)).expect("grid failed");
        let result = Trapezoid::new(grid).integral().expect("integral failed");
        // Trapezoid over x^2 samples: 0.5 + 2.5 + 6.5
        assert!((result - 9.5).abs() < 1e-10);
    }

    #[test]
    fn test_trapezoid_missing_samples() {
        let grid = SampleGrid::from_range(0.0, 1.0, 0.1, None).expect("grid failed");
        let result = Trapezoid::new(grid).integral();
        assert!(matches!(result, Err(IntegrateError::MissingSamples { .. })));
    }

    #[test]
    fn test_global_error_exact_for_constant_second_derivative() {
        // For f = x^2 the second derivative is the constant 2, so the
        // compounded bound equals the actual error: approx + bound = exact.
        let grid = SampleGrid::from_range(0.0, 2.0, 0.25, Some(&|x| x * x)).expect("grid failed");
        let rule = Trapezoid::new(grid);
        let approx = rule.integral().expect("integral failed");
        let bound = rule.global_error().expect("global_error failed");
        assert!((approx + bound - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_local_error_value() {
        let grid = SampleGrid::from_range(0.0, 2.0, 0.25, Some(&|x| x * x)).expect("grid failed");
        let local = Trapezoid::new(grid).local_error().expect("local_error failed");
        // -(h^3 / 12) * 2 with h = 0.25
        assert!((local - (-(0.25f64.powi(3) / 12.0) * 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_global_error_bounds_actual_error() {
        // f = x^3 on [0, 2]: f'' ranges over [0, 12]; the bound uses the
        // dominant endpoint estimate and must cover the actual error.
        let grid = SampleGrid::from_range(0.0, 2.0, 0.25, Some(&|x| x.powi(3))).expect("grid failed");
        let rule = Trapezoid::new(grid);
        let approx = rule.integral().expect("integral failed");
        let bound = rule.global_error().expect("global_error failed");
        let actual = 4.0 - approx;
        assert!(actual.abs() <= bound.abs() + 1e-9);
    }
}
