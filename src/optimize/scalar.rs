//! Scalar (1D) root finding.
//!
//! This module provides local root-finding methods for univariate
//! functions `f: (f64) -> f64`, starting from one or two initial guesses.
//! Neither method brackets the root: convergence is best-effort and
//! depends on the seed, which is exactly the contract the root-marking
//! plotter relies on (it tries many seeds and skips the failures).

use crate::optimize::error::{OptimizeError, OptimizeResult};

/// Denominators below this are treated as effectively zero.
const SINGULAR_THRESHOLD: f64 = 1e-14;

/// Options for scalar root finding.
#[derive(Debug, Clone)]
pub struct ScalarOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Absolute tolerance for convergence (step size)
    pub tol: f64,
    /// Relative tolerance for convergence
    pub rtol: f64,
}

impl Default for ScalarOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tol: 1e-12,
            rtol: 1e-12,
        }
    }
}

/// Result from a root-finding method.
#[derive(Debug, Clone)]
pub struct RootResult {
    /// The root found
    pub root: f64,
    /// Function value at root
    pub function_value: f64,
    /// Number of iterations used
    pub iterations: usize,
    /// Magnitude of the final step
    pub last_step: f64,
}

/// Newton-Raphson root finding.
///
/// Iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)` from the seed `x0`.
///
/// # Arguments
/// * `f` - Function to find a root of
/// * `df` - Derivative of `f`
/// * `x0` - Initial guess
/// * `options` - Solver options
///
/// # Errors
/// * `DidNotConverge` if iterations exceed `max_iter`
/// * `NumericalError` if the derivative becomes too small
///
/// # Note
/// Quadratic convergence near a simple root, but no global guarantee;
/// a poor seed can diverge or land on a distant root.
pub fn newton<F, DF>(f: F, df: DF, x0: f64, options: &ScalarOptions) -> OptimizeResult<RootResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = x0;

    for iter in 0..options.max_iter {
        let fx = f(x);
        let dfx = df(x);

        if dfx.abs() < SINGULAR_THRESHOLD {
            return Err(OptimizeError::NumericalError {
                message: "Derivative too close to zero in Newton method".to_string(),
            });
        }

        let x_next = x - fx / dfx;
        let dx = (x_next - x).abs();

        if dx < options.tol || dx / x.abs().max(1.0) < options.rtol {
            return Ok(RootResult {
                root: x_next,
                function_value: f(x_next),
                iterations: iter + 1,
                last_step: dx,
            });
        }

        x = x_next;
    }

    Err(OptimizeError::DidNotConverge {
        iterations: options.max_iter,
        tolerance: options.tol,
        context: "newton".to_string(),
    })
}

/// Secant method root finding.
///
/// Replaces the derivative in Newton's method with the finite-difference
/// slope through the two most recent iterates.
///
/// # Arguments
/// * `f` - Function to find a root of
/// * `x0` - First initial guess
/// * `x1` - Second initial guess
/// * `options` - Solver options
///
/// # Errors
/// * `DidNotConverge` if iterations exceed `max_iter`
/// * `NumericalError` if the secant denominator becomes too small
///
/// # Note
/// Superlinear convergence (~1.618) without requiring a derivative.
pub fn secant<F>(f: F, x0: f64, x1: f64, options: &ScalarOptions) -> OptimizeResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);

    for iter in 0..options.max_iter {
        let denom = f_curr - f_prev;

        if denom.abs() < SINGULAR_THRESHOLD {
            return Err(OptimizeError::NumericalError {
                message: "Denominator too close to zero in secant method".to_string(),
            });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        let dx = (x_next - x_curr).abs();

        if dx < options.tol || dx / x_curr.abs().max(1.0) < options.rtol {
            return Ok(RootResult {
                root: x_next,
                function_value: f(x_next),
                iterations: iter + 1,
                last_step: dx,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr);
    }

    Err(OptimizeError::DidNotConverge {
        iterations: options.max_iter,
        tolerance: options.tol,
        context: "secant".to_string(),
    })
}
