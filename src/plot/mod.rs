//! Function and root plotting.
//!
//! Small helpers converting numerical data into a [`plotly::Plot`]: sample
//! a function on a padded interval and render the curve together with
//! either the interval endpoints or the numerically located roots marked.
//!
//! The sampling and root-search steps are plain functions over `f64` data
//! ([`sample_curve`], [`find_roots`]) so they can be tested without any
//! rendering; the plot builders wrap them and hand the result to plotly.
//!
//! # Example
//!
//! ```no_run
//! use calcnum::plot::plot_roots;
//!
//! // Mark the roots of x^2 - 4 over [-5, 5] and render to HTML.
//! let plot = plot_roots(|x| x * x - 4.0, Some(-5.0), Some(5.0));
//! plot.write_html("roots.html");
//! ```

use crate::optimize::scalar::{secant, ScalarOptions};
use plotly::color::NamedColor;
use plotly::common::{Marker, Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

/// Interval used when no bounds are supplied.
pub const DEFAULT_INTERVAL: (f64, f64) = (-5.0, 5.0);

/// Number of curve sample points.
pub const CURVE_POINTS: usize = 400;

/// Fixed y display range; the chart is clipped to this regardless of the
/// actual function range (display policy, not a data transformation).
pub const Y_DISPLAY_RANGE: (f64, f64) = (-5.0, 5.0);

/// Padding added on each side of `[a, b]` when sampling and when accepting
/// root candidates.
const INTERVAL_PADDING: f64 = 1.0;

/// Number of evenly spaced root-search seeds in `[a, b]`.
const ROOT_SEEDS: usize = 10;

/// A candidate is accepted as a root only if `|f(candidate)|` is within
/// this absolute tolerance of zero.
const ROOT_TOLERANCE: f64 = 1e-3;

/// Accepted roots are rounded to this many decimals before deduplication.
const ROOT_DEDUP_DECIMALS: i32 = 3;

/// Offset between the two secant starting points derived from one seed.
const SECANT_SPREAD: f64 = 1e-3;

/// Sample `f` at `point_count` evenly spaced points spanning the padded
/// interval `[a - 1, b + 1]`.
///
/// Pure function of its inputs: identical arguments produce identical
/// arrays. A panic inside `f` propagates to the caller.
pub fn sample_curve<F>(f: F, a: f64, b: f64, point_count: usize) -> (Vec<f64>, Vec<f64>)
where
    F: Fn(f64) -> f64,
{
    let lo = a - INTERVAL_PADDING;
    let hi = b + INTERVAL_PADDING;
    let n = point_count.max(2);

    let x: Vec<f64> = (0..n)
        .map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64)
        .collect();
    let y: Vec<f64> = x.iter().map(|&xi| f(xi)).collect();

    (x, y)
}

/// Locate the distinct roots of `f` in the padded interval `[a - 1, b + 1]`.
///
/// Seeds [`ROOT_SEEDS`] evenly spaced starting guesses in `[a, b]` and runs
/// a secant solve from each. A per-seed solver failure is silently skipped;
/// it only shrinks the candidate set. A converged candidate is accepted
/// when it lies inside the padded interval and `|f(candidate)|` is within
/// [`ROOT_TOLERANCE`] of zero. Accepted roots are rounded to
/// [`ROOT_DEDUP_DECIMALS`] decimals, deduplicated, and returned sorted
/// ascending.
///
/// # Example
///
/// ```
/// use calcnum::plot::find_roots;
///
/// let roots = find_roots(|x| x * x - 4.0, -5.0, 5.0);
/// assert_eq!(roots, vec![-2.0, 2.0]);
/// ```
pub fn find_roots<F>(f: F, a: f64, b: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let options = ScalarOptions::default();
    let lo = a - INTERVAL_PADDING;
    let hi = b + INTERVAL_PADDING;

    let mut roots: Vec<f64> = Vec::new();
    for i in 0..ROOT_SEEDS {
        let seed = a + (b - a) * i as f64 / (ROOT_SEEDS - 1) as f64;

        let candidate = match secant(&f, seed, seed + SECANT_SPREAD, &options) {
            Ok(result) => result.root,
            Err(_) => continue,
        };

        if candidate < lo || candidate > hi {
            continue;
        }
        if f(candidate).abs() > ROOT_TOLERANCE {
            continue;
        }

        let rounded = round_to(candidate, ROOT_DEDUP_DECIMALS);
        if !roots.contains(&rounded) {
            roots.push(rounded);
        }
    }

    roots.sort_by(|x, y| x.total_cmp(y));
    roots
}

/// Plot `f` over `[a, b]` with the interval endpoints marked.
///
/// Bounds left as `None` default to [`DEFAULT_INTERVAL`]. The returned
/// [`Plot`] can be rendered with `write_html` or `show`.
pub fn plot_function<F>(f: F, a: Option<f64>, b: Option<f64>) -> Plot
where
    F: Fn(f64) -> f64,
{
    let (a, b) = resolve_interval(a, b);
    let (x, y) = sample_curve(&f, a, b, CURVE_POINTS);
    let markers = vec![(a, f(a)), (b, f(b))];
    build_plot(x, y, markers, "interval [a, b]")
}

/// Plot `f` over `[a, b]` with every numerically located root marked.
///
/// Bounds left as `None` default to [`DEFAULT_INTERVAL`]. Root candidates
/// come from [`find_roots`].
pub fn plot_roots<F>(f: F, a: Option<f64>, b: Option<f64>) -> Plot
where
    F: Fn(f64) -> f64,
{
    let (a, b) = resolve_interval(a, b);
    let (x, y) = sample_curve(&f, a, b, CURVE_POINTS);
    let markers: Vec<(f64, f64)> = find_roots(&f, a, b).into_iter().map(|r| (r, f(r))).collect();
    build_plot(x, y, markers, "roots")
}

fn resolve_interval(a: Option<f64>, b: Option<f64>) -> (f64, f64) {
    (
        a.unwrap_or(DEFAULT_INTERVAL.0),
        b.unwrap_or(DEFAULT_INTERVAL.1),
    )
}

/// Assemble the curve trace, marker trace, and layout into a `Plot`.
fn build_plot(x: Vec<f64>, y: Vec<f64>, markers: Vec<(f64, f64)>, marker_label: &str) -> Plot {
    let x_lo = x[0];
    let x_hi = x[x.len() - 1];

    let curve = Scatter::new(x, y).mode(Mode::Lines).name("f(x)");

    let (marker_x, marker_y): (Vec<f64>, Vec<f64>) = markers.into_iter().unzip();
    let points = Scatter::new(marker_x, marker_y)
        .mode(Mode::Markers)
        .name(marker_label)
        .marker(Marker::new().color(NamedColor::Red).size(8));

    let layout = Layout::new()
        .title(Title::with_text("f(x)"))
        .show_legend(true)
        .x_axis(
            Axis::new()
                .title(Title::with_text("x"))
                .zero_line(true)
                .show_grid(true)
                .range(vec![x_lo, x_hi]),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text("f(x)"))
                .zero_line(true)
                .show_grid(true)
                .range(vec![Y_DISPLAY_RANGE.0, Y_DISPLAY_RANGE.1]),
        );

    let mut plot = Plot::new();
    plot.add_trace(curve);
    plot.add_trace(points);
    plot.set_layout(layout);
    plot
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_curve_spans_padded_interval() {
        let (x, y) = sample_curve(|x| x * x, -5.0, 5.0, 400);
        assert_eq!(x.len(), 400);
        assert_eq!(y.len(), 400);
        assert!((x[0] - (-6.0)).abs() < 1e-12);
        assert!((x[399] - 6.0).abs() < 1e-12);
        assert!((y[0] - 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_curve_idempotent() {
        let (x1, y1) = sample_curve(|x: f64| x.sin(), -5.0, 5.0, 400);
        let (x2, y2) = sample_curve(|x: f64| x.sin(), -5.0, 5.0, 400);
        assert_eq!(x1, x2);
        assert_eq!(y1, y2);
    }

    #[test]
    fn test_find_roots_parabola() {
        // Repeated seeds converging to the same root must collapse to one
        // entry per distinct root.
        let roots = find_roots(|x| x * x - 4.0, -5.0, 5.0);
        assert_eq!(roots, vec![-2.0, 2.0]);
    }

    #[test]
    fn test_find_roots_no_roots() {
        let roots = find_roots(|x| x * x + 1.0, -5.0, 5.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_find_roots_sine() {
        // Roots of sin inside the padded interval [-6, 6]: -pi, 0, pi.
        let roots = find_roots(|x: f64| x.sin(), -5.0, 5.0);
        assert_eq!(roots, vec![-3.142, 0.0, 3.142]);
    }

    #[test]
    fn test_find_roots_linear() {
        let roots = find_roots(|x| 2.0 * x - 1.0, -5.0, 5.0);
        assert_eq!(roots, vec![0.5]);
    }

    #[test]
    fn test_resolve_interval_defaults() {
        assert_eq!(resolve_interval(None, None), DEFAULT_INTERVAL);
        assert_eq!(resolve_interval(Some(-1.0), None), (-1.0, 5.0));
        assert_eq!(resolve_interval(Some(-1.0), Some(2.0)), (-1.0, 2.0));
    }

    #[test]
    fn test_plot_builders_smoke() {
        let _ = plot_function(|x| x * x - 4.0, None, None);
        let _ = plot_roots(|x| x * x - 4.0, Some(-5.0), Some(5.0));
    }
}
