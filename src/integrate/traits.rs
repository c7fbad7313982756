//! The capability trait implemented by every composite integration rule.

use crate::integrate::error::IntegrateResult;
use crate::integrate::grid::{larger_magnitude, SampleGrid};

/// A composite numerical-integration rule over a [`SampleGrid`].
///
/// Each rule owns the grid it integrates over; the grid (and its
/// derivative-estimating interpolant) is ready before any of these
/// operations run. `local_error` bounds the error of a single panel of
/// width [`SampleGrid::step`]; `global_error` bounds the compounded error
/// over the whole interval.
pub trait IntegrationRule {
    /// The grid this rule integrates over.
    fn grid(&self) -> &SampleGrid;

    /// Approximate the integral of the sampled function over the grid.
    fn integral(&self) -> IntegrateResult<f64>;

    /// Textbook error bound for a single panel of the rule.
    fn local_error(&self) -> IntegrateResult<f64>;

    /// Textbook error bound compounded over the whole grid.
    fn global_error(&self) -> IntegrateResult<f64>;
}

/// Estimate the `order`-th derivative at both interval endpoints and keep
/// the one larger in magnitude, the conventional choice of `f^(k)(ξ)` when
/// evaluating an error-bound formula from samples.
pub(crate) fn dominant_derivative(grid: &SampleGrid, order: usize) -> IntegrateResult<f64> {
    let at_lower = grid.derivative(grid.lower(), order)?;
    let at_upper = grid.derivative(grid.upper(), order)?;
    Ok(larger_magnitude(Some(at_lower), Some(at_upper)).unwrap_or(0.0))
}
