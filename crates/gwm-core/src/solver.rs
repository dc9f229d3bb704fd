//! Scalar solvers used by the models.
//!
//! - [`bisect`]: bracketed root finding
//! - [`relax_to_fixed_point`]: repeated application of a step until the
//!   change between iterations drops below a tolerance
//! - [`parabolic_extremum`]: vertex of the parabola through three samples

use crate::errors::{GwmError, GwmResult};
use tracing::debug;

/// Settings shared by the iterative solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    /// Iteration stops once the change is at or below this value.
    pub tolerance: f64,
    /// Upper bound on the number of iterations before giving up.
    pub max_iterations: usize,
}

impl Convergence {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

impl Default for Convergence {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 200,
        }
    }
}

/// Find `x` in `[lower, upper]` with `f(x) == 0` by bisection.
///
/// The interval must bracket a sign change. Iteration stops when the
/// bracket is narrower than `convergence.tolerance`, when `f` evaluates to
/// exactly zero, or when the bracket cannot be split any further.
///
/// `f` is fallible so that it can wrap a whole model run.
///
/// # Example
/// ```
/// use gwm_core::solver::{bisect, Convergence};
///
/// let root = bisect(|x| Ok(x * x - 2.0), 0.0, 2.0, Convergence::default()).unwrap();
/// assert!((root - 2.0_f64.sqrt()).abs() < 1e-10);
/// ```
pub fn bisect<F>(mut f: F, lower: f64, upper: f64, convergence: Convergence) -> GwmResult<f64>
where
    F: FnMut(f64) -> GwmResult<f64>,
{
    if upper < lower {
        return Err(GwmError::InvalidInput(format!(
            "bisection interval is reversed: [{lower}, {upper}]"
        )));
    }

    let mut lo = lower;
    let mut hi = upper;
    let mut f_lo = f(lo)?;
    let f_hi = f(hi)?;

    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(GwmError::RootNotBracketed {
            lower,
            upper,
            f_lower: f_lo,
            f_upper: f_hi,
        });
    }

    for iteration in 0..convergence.max_iterations {
        let mid = 0.5 * (lo + hi);
        if hi - lo <= convergence.tolerance || mid <= lo || mid >= hi {
            debug!(iteration, root = mid, "bisection converged");
            return Ok(mid);
        }

        let f_mid = f(mid)?;
        if f_mid == 0.0 {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Err(GwmError::NotConverged {
        iterations: convergence.max_iterations,
        last_change: hi - lo,
        tolerance: convergence.tolerance,
    })
}

/// Outcome of [`relax_to_fixed_point`].
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPoint<S> {
    pub state: S,
    pub iterations: usize,
}

/// Apply `step` repeatedly until the change it reports is within tolerance.
///
/// `step` receives the current state and returns the next state together
/// with a non-negative measure of how far it moved. At least one step is
/// always taken.
pub fn relax_to_fixed_point<S, F>(
    initial: S,
    mut step: F,
    convergence: Convergence,
) -> GwmResult<FixedPoint<S>>
where
    F: FnMut(&S) -> (S, f64),
{
    let mut state = initial;
    let mut last_change = f64::INFINITY;

    for iteration in 1..=convergence.max_iterations {
        let (next, change) = step(&state);
        state = next;
        last_change = change;
        if change <= convergence.tolerance {
            return Ok(FixedPoint {
                state,
                iterations: iteration,
            });
        }
    }

    Err(GwmError::NotConverged {
        iterations: convergence.max_iterations,
        last_change,
        tolerance: convergence.tolerance,
    })
}

/// Abscissa of the vertex of the parabola through three points.
///
/// Returns `None` when the points are collinear (or two abscissae coincide)
/// and no unique vertex exists.
pub fn parabolic_extremum(x: [f64; 3], y: [f64; 3]) -> Option<f64> {
    let [x0, x1, x2] = x;
    let [y0, y1, y2] = y;

    let denominator = (x0 - x1) * (x0 - x2) * (x1 - x2);
    if denominator == 0.0 {
        return None;
    }

    let a = (x2 * (y1 - y0) + x1 * (y0 - y2) + x0 * (y2 - y1)) / denominator;
    let b = (x2 * x2 * (y0 - y1) + x1 * x1 * (y2 - y0) + x0 * x0 * (y1 - y2)) / denominator;

    if a.abs() < f64::EPSILON {
        return None;
    }
    Some(-b / (2.0 * a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bisect_increasing() {
        let root = bisect(|x| Ok(3.0 * x - 1.5), 0.0, 10.0, Convergence::default()).unwrap();
        assert_relative_eq!(root, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_bisect_decreasing() {
        let root = bisect(|x| Ok(4.0 - x), 0.0, 10.0, Convergence::default()).unwrap();
        assert_relative_eq!(root, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_bisect_root_at_endpoint() {
        let root = bisect(|x| Ok(x), 0.0, 1.0, Convergence::default()).unwrap();
        assert_eq!(root, 0.0);
    }

    #[test]
    fn test_bisect_not_bracketed() {
        let result = bisect(|x| Ok(x * x + 1.0), -1.0, 1.0, Convergence::default());
        assert!(matches!(result, Err(GwmError::RootNotBracketed { .. })));
    }

    #[test]
    fn test_bisect_reversed_interval() {
        let result = bisect(|x| Ok(x), 1.0, -1.0, Convergence::default());
        assert!(matches!(result, Err(GwmError::InvalidInput(_))));
    }

    #[test]
    fn test_bisect_propagates_errors() {
        let result = bisect(
            |_| Err(GwmError::Error("model failed".to_string())),
            0.0,
            1.0,
            Convergence::default(),
        );
        assert!(matches!(result, Err(GwmError::Error(_))));
    }

    #[test]
    fn test_bisect_iteration_cap() {
        let result = bisect(|x| Ok(x - 0.3), 0.0, 1.0, Convergence::new(0.0, 3));
        assert!(matches!(
            result,
            Err(GwmError::NotConverged { iterations: 3, .. })
        ));
    }

    #[test]
    fn test_relax_to_fixed_point_sqrt() {
        // Babylonian iteration for sqrt(2)
        let result = relax_to_fixed_point(
            1.0_f64,
            |x| {
                let next = 0.5 * (x + 2.0 / x);
                (next, (next - x).abs())
            },
            Convergence::new(1e-14, 100),
        )
        .unwrap();
        assert_relative_eq!(result.state, 2.0_f64.sqrt(), epsilon = 1e-14);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_relax_always_takes_one_step() {
        let result =
            relax_to_fixed_point(5, |x| (*x + 1, 0.0), Convergence::new(1.0, 10)).unwrap();
        assert_eq!(result.state, 6);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_relax_not_converged() {
        let result = relax_to_fixed_point(0.0, |x| (x + 1.0, 1.0), Convergence::new(0.5, 25));
        match result {
            Err(GwmError::NotConverged {
                iterations,
                last_change,
                ..
            }) => {
                assert_eq!(iterations, 25);
                assert_eq!(last_change, 1.0);
            }
            other => panic!("Expected NotConverged, got {:?}", other),
        }
    }

    #[test]
    fn test_parabolic_extremum() {
        // y = (x - 2.5)^2 + 1
        let f = |x: f64| (x - 2.5) * (x - 2.5) + 1.0;
        let x = [1.0, 2.0, 4.0];
        let vertex = parabolic_extremum(x, [f(x[0]), f(x[1]), f(x[2])]).unwrap();
        assert_relative_eq!(vertex, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_parabolic_extremum_collinear() {
        assert!(parabolic_extremum([0.0, 1.0, 2.0], [0.0, 1.0, 2.0]).is_none());
        assert!(parabolic_extremum([1.0, 1.0, 2.0], [0.0, 1.0, 2.0]).is_none());
    }
}
