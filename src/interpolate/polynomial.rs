//! Newton-form polynomial interpolation with exact derivative evaluation.
//!
//! [`PolynomialInterpolant`] fits the unique polynomial of degree `n - 1`
//! through `n` sample points, stored in Newton (divided-difference) form:
//!
//! ```text
//! p(x) = a0 + a1*(x - x0) + a2*(x - x0)(x - x1) + ...
//! ```
//!
//! Evaluation uses nested (Horner) multiplication; derivatives of any order
//! come from the extended Horner recurrence, so no symbolic differentiation
//! or finite differencing is involved. The integration rules use this to
//! estimate the second and fourth derivatives appearing in their error
//! bounds.

use crate::interpolate::error::{InterpolateError, InterpolateResult};

const DUPLICATE_THRESHOLD: f64 = 1e-300;

/// Polynomial interpolant through a set of sample points.
#[derive(Debug, Clone)]
pub struct PolynomialInterpolant {
    /// Sample abscissas, doubling as the Newton-form centers.
    centers: Vec<f64>,
    /// Divided-difference coefficients, `coefficients[k] = f[x0, ..., xk]`.
    coefficients: Vec<f64>,
}

impl PolynomialInterpolant {
    /// Fit the interpolating polynomial through `(x[i], y[i])`.
    ///
    /// # Arguments
    ///
    /// * `x` - Sample abscissas (pairwise distinct)
    /// * `y` - Function values, one per abscissa
    ///
    /// # Errors
    ///
    /// Returns an error if the arrays have different lengths, if there are
    /// fewer than 2 points, or if two abscissas coincide (the divided
    /// differences divide by their separation).
    ///
    /// # Example
    ///
    /// ```
    /// use calcnum::interpolate::PolynomialInterpolant;
    ///
    /// let x = [0.0, 1.0, 2.0];
    /// let y = [1.0, 2.0, 5.0]; // y = x^2 + 1
    /// let p = PolynomialInterpolant::new(&x, &y)?;
    /// assert!((p.evaluate(1.5) - 3.25).abs() < 1e-12);
    /// # Ok::<(), calcnum::interpolate::InterpolateError>(())
    /// ```
    pub fn new(x: &[f64], y: &[f64]) -> InterpolateResult<Self> {
        if x.len() != y.len() {
            return Err(InterpolateError::ShapeMismatch {
                expected: x.len(),
                actual: y.len(),
                context: "PolynomialInterpolant::new".to_string(),
            });
        }

        if x.len() < 2 {
            return Err(InterpolateError::InsufficientData {
                required: 2,
                actual: x.len(),
                context: "PolynomialInterpolant::new".to_string(),
            });
        }

        let n = x.len();
        let mut coefficients = y.to_vec();

        // Build the divided-difference table in place, column by column.
        for j in 1..n {
            for i in (j..n).rev() {
                let denom = x[i] - x[i - j];
                if denom.abs() < DUPLICATE_THRESHOLD {
                    return Err(InterpolateError::NumericalError {
                        message: format!(
                            "duplicate abscissa near x = {} in PolynomialInterpolant::new",
                            x[i]
                        ),
                    });
                }
                coefficients[i] = (coefficients[i] - coefficients[i - 1]) / denom;
            }
        }

        Ok(Self {
            centers: x.to_vec(),
            coefficients,
        })
    }

    /// Degree of the interpolating polynomial (`point count - 1`).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate the polynomial at `point`.
    pub fn evaluate(&self, point: f64) -> f64 {
        let n = self.coefficients.len();
        let mut value = self.coefficients[n - 1];
        for i in (0..n - 1).rev() {
            value = value * (point - self.centers[i]) + self.coefficients[i];
        }
        value
    }

    /// Evaluate the `order`-th derivative of the polynomial at `point`.
    ///
    /// Order 0 is the polynomial value itself. The derivative is exact for
    /// the interpolating polynomial; how well it approximates the sampled
    /// function's derivative depends on the sample density.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` exceeds the polynomial degree, i.e. the
    /// fit has fewer than `order + 1` points.
    pub fn derivative(&self, point: f64, order: usize) -> InterpolateResult<f64> {
        if order > self.degree() {
            return Err(InterpolateError::InsufficientData {
                required: order + 1,
                actual: self.coefficients.len(),
                context: format!("derivative of order {}", order),
            });
        }

        if order == 0 {
            return Ok(self.evaluate(point));
        }

        let n = self.coefficients.len();

        // Extended Horner: alongside the value, carry the first `order`
        // derivatives through each nesting level. d[j] holds the j-th
        // derivative of the partial polynomial, un-scaled (true derivative,
        // not divided by j!).
        let mut d = vec![0.0; order + 1];
        d[0] = self.coefficients[n - 1];

        for i in (0..n - 1).rev() {
            let dx = point - self.centers[i];
            for j in (1..=order).rev() {
                d[j] = d[j] * dx + j as f64 * d[j - 1];
            }
            d[0] = d[0] * dx + self.coefficients[i];
        }

        Ok(d[order])
    }
}
