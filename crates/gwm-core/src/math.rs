//! Small numeric helpers.

use num::Float;

/// Restrict a value to lie within `[low, high]`.
///
/// ```
/// use gwm_core::math::clip;
///
/// assert_eq!(clip(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clip(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clip(1.5, 0.0, 1.0), 1.0);
/// ```
pub fn clip<T: Float>(x: T, low: T, high: T) -> T {
    if x < low {
        low
    } else if x > high {
        high
    } else {
        x
    }
}

/// Number of values in `start, start + step, ...` that are strictly below `end`.
///
/// Mirrors a half-open `range(start, end, step)` for positive steps.
pub fn count_steps(start: f64, end: f64, step: f64) -> usize {
    if step <= 0.0 || end <= start {
        return 0;
    }
    ((end - start) / step).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_f32() {
        assert_eq!(clip(270.0_f32, 215.0, 265.0), 265.0);
        assert_eq!(clip(200.0_f32, 215.0, 265.0), 215.0);
    }

    #[test]
    fn test_count_steps() {
        assert_eq!(count_steps(0.0, 50100.0, 100.0), 501);
        assert_eq!(count_steps(0.0, 150.0, 100.0), 2);
        assert_eq!(count_steps(0.0, 0.0, 100.0), 0);
        assert_eq!(count_steps(0.0, 10.0, 0.0), 0);
    }
}
