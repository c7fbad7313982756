//! Uniform sample grids for composite integration rules.
//!
//! A [`SampleGrid`] holds equally spaced abscissas over an interval together
//! with the function values at those abscissas. Grids are built once, through
//! one of two factories, and are immutable afterwards:
//!
//! - [`SampleGrid::from_samples`] - derive the interval and step from an
//!   explicit list of sample points
//! - [`SampleGrid::from_range`] - generate the points from interval bounds
//!   and a step, optionally evaluating a function at each point
//!
//! When function values are available the grid also owns a
//! [`PolynomialInterpolant`] through the samples, used by the integration
//! rules to estimate the higher-order derivatives in their error bounds.

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::interpolate::PolynomialInterpolant;

/// Decimal places kept when generating abscissas by repeated addition.
///
/// Accumulating `step` drifts after a few hundred additions; rounding each
/// partial sum to a fixed precision keeps the inclusive upper-bound
/// comparison stable.
const ACCUMULATION_DECIMALS: i32 = 10;

/// Fraction of a step added to the range width before counting intervals,
/// so that an upper bound sitting a rounding error below `lower + n*step`
/// still yields the final point.
const GRID_EPSILON: f64 = 1e-6;

/// An immutable grid of equally spaced sample points over `[lower, upper]`.
///
/// Invariants (for well-formed inputs): `x` is strictly increasing and
/// uniformly spaced by `step`; `x[0] == lower`; `x[last] == upper` within
/// floating-point tolerance; `point_count == x.len() - 1`; and
/// `step == (upper - lower) / point_count`.
///
/// A step that does not evenly divide `upper - lower` produces a grid whose
/// last point falls short of `upper`; this is not validated.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    lower: f64,
    upper: f64,
    step: f64,
    point_count: usize,
    x: Vec<f64>,
    y: Option<Vec<f64>>,
    interpolant: Option<PolynomialInterpolant>,
}

impl SampleGrid {
    /// Build a grid from an explicit list of sample points.
    ///
    /// The interval bounds, interval count, and step are derived from `x`:
    /// `lower = x[0]`, `upper = x[last]`, `point_count = x.len() - 1`, and
    /// `step = (upper - lower) / point_count`. `x` must be strictly
    /// increasing for the grid invariants to hold; this is not checked.
    ///
    /// # Arguments
    ///
    /// * `x` - Sample abscissas (at least 2)
    /// * `y` - Optional function values, one per abscissa
    ///
    /// # Errors
    ///
    /// Returns an error if `x` has fewer than 2 points (the step would be
    /// a division by zero) or if `y` is present with a different length.
    ///
    /// # Example
    ///
    /// ```
    /// use calcnum::integrate::SampleGrid;
    ///
    /// let grid = SampleGrid::from_samples(vec![0.0, 2.0, 4.0, 6.0], None)?;
    /// assert_eq!(grid.point_count(), 3);
    /// assert_eq!(grid.step(), 2.0);
    /// # Ok::<(), calcnum::integrate::IntegrateError>(())
    /// ```
    pub fn from_samples(x: Vec<f64>, y: Option<Vec<f64>>) -> IntegrateResult<Self> {
        if x.len() < 2 {
            return Err(IntegrateError::InvalidInput {
                context: format!(
                    "from_samples: need at least 2 points to derive a step (got {})",
                    x.len()
                ),
            });
        }

        if let Some(ref y) = y {
            if y.len() != x.len() {
                return Err(IntegrateError::InvalidInput {
                    context: format!(
                        "from_samples: x and y must have same length (got {} and {})",
                        x.len(),
                        y.len()
                    ),
                });
            }
        }

        let lower = x[0];
        let upper = x[x.len() - 1];
        let point_count = x.len() - 1;
        let step = (upper - lower) / point_count as f64;

        let interpolant = match y {
            Some(ref y) => Some(PolynomialInterpolant::new(&x, y)?),
            None => None,
        };

        Ok(Self {
            lower,
            upper,
            step,
            point_count,
            x,
            y,
            interpolant,
        })
    }

    /// Build a grid from interval bounds and a step.
    ///
    /// Generates `x[i] = lower + i * step` up to and including `upper`
    /// (index-based generation, which does not accumulate floating-point
    /// drift). When a function is supplied, `y[i] = f(x[i])` is filled in
    /// pointwise and the derivative-estimating interpolant is built.
    ///
    /// # Arguments
    ///
    /// * `lower` - Left endpoint of the interval
    /// * `upper` - Right endpoint of the interval
    /// * `step` - Spacing between consecutive points (must be positive)
    /// * `f` - Optional function to sample at each point
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is not finite, if `step` is not a
    /// positive finite number, or if `lower >= upper`.
    ///
    /// # Example
    ///
    /// ```
    /// use calcnum::integrate::SampleGrid;
    ///
    /// let grid = SampleGrid::from_range(0.0, 10.0, 1.0, None)?;
    /// assert_eq!(grid.x().len(), 11);
    /// assert_eq!(grid.x()[10], 10.0);
    /// # Ok::<(), calcnum::integrate::IntegrateError>(())
    /// ```
    pub fn from_range(
        lower: f64,
        upper: f64,
        step: f64,
        f: Option<&dyn Fn(f64) -> f64>,
    ) -> IntegrateResult<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(IntegrateError::InvalidParameter {
                parameter: "lower/upper".to_string(),
                message: "interval bounds must be finite".to_string(),
            });
        }

        if !step.is_finite() || step <= 0.0 {
            return Err(IntegrateError::InvalidParameter {
                parameter: "step".to_string(),
                message: format!("step must be a positive finite number (got {})", step),
            });
        }

        if lower >= upper {
            return Err(IntegrateError::InvalidInterval {
                a: lower,
                b: upper,
                context: "from_range".to_string(),
            });
        }

        let x = indexed_abscissas(lower, upper, step);
        let point_count = x.len() - 1;
        let y: Option<Vec<f64>> = f.map(|f| x.iter().map(|&xi| f(xi)).collect());

        let interpolant = match y {
            Some(ref y) => Some(PolynomialInterpolant::new(&x, y)?),
            None => None,
        };

        Ok(Self {
            lower,
            upper,
            step,
            point_count,
            x,
            y,
            interpolant,
        })
    }

    /// Left endpoint of the interval.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Right endpoint of the interval.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Spacing between consecutive sample points.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of intervals (one less than the number of points).
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Sample abscissas.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Function values at the abscissas, if a function or explicit `y`
    /// was supplied at construction.
    pub fn y(&self) -> Option<&[f64]> {
        self.y.as_deref()
    }

    /// Estimate the `order`-th derivative of the sampled function at `point`.
    ///
    /// Delegates to the interpolating polynomial through the grid samples.
    /// Estimating an `order`-th derivative needs at least `order + 1`
    /// sample points (a degree-`order` polynomial).
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no function samples, or if the grid
    /// has too few points for the requested order.
    pub fn derivative(&self, point: f64, order: usize) -> IntegrateResult<f64> {
        let interpolant =
            self.interpolant
                .as_ref()
                .ok_or_else(|| IntegrateError::MissingSamples {
                    context: "derivative".to_string(),
                })?;
        Ok(interpolant.derivative(point, order)?)
    }

    /// Estimate the fourth derivative of the sampled function at `point`.
    ///
    /// Convenience for [`derivative`](Self::derivative) with `order = 4`,
    /// the derivative appearing in Simpson-rule error bounds. Needs at
    /// least 5 sample points.
    pub fn fourth_derivative(&self, point: f64) -> IntegrateResult<f64> {
        self.derivative(point, 4)
    }
}

/// Return whichever argument is larger in absolute value.
///
/// Used by the integration rules to pick the dominant derivative estimate
/// between the two interval endpoints. If one argument is `None` the other
/// is returned; if both are `None` the result is `None`. When the
/// magnitudes are equal, `b` is returned.
///
/// # Example
///
/// ```
/// use calcnum::integrate::larger_magnitude;
///
/// assert_eq!(larger_magnitude(Some(3.0), Some(-5.0)), Some(-5.0));
/// assert_eq!(larger_magnitude(Some(3.0), Some(-3.0)), Some(-3.0));
/// assert_eq!(larger_magnitude(None, Some(7.0)), Some(7.0));
/// ```
pub fn larger_magnitude(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => {
            if a.abs() > b.abs() {
                Some(a)
            } else {
                Some(b)
            }
        }
    }
}

/// Generate abscissas as `lower + i * step` for `i = 0..=n`.
///
/// `n` is the number of whole steps fitting in the interval, with a small
/// step-fraction tolerance so the final point is included when `step`
/// divides the width up to rounding error.
fn indexed_abscissas(lower: f64, upper: f64, step: f64) -> Vec<f64> {
    let count = ((upper - lower) / step + GRID_EPSILON).floor() as usize;
    (0..=count).map(|i| lower + i as f64 * step).collect()
}

/// Generate abscissas by repeated addition of `step`, rounding each partial
/// sum to [`ACCUMULATION_DECIMALS`] places, stopping once the rounded value
/// passes the rounded upper bound.
///
/// Kept alongside [`indexed_abscissas`] for compatibility; both strategies
/// produce numerically equivalent grids for well-formed inputs.
fn accumulated_abscissas(lower: f64, upper: f64, step: f64) -> Vec<f64> {
    let mut x = Vec::new();
    let mut i = lower;
    while round_to(i, ACCUMULATION_DECIMALS) <= round_to(upper, ACCUMULATION_DECIMALS) {
        x.push(round_to(i, ACCUMULATION_DECIMALS));
        i += step;
    }
    x
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
