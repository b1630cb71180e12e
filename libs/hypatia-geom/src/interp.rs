//! Scalar interpolation.

/// Linearly interpolates between `a` and `b` by `t`.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate along the same
/// line, which the orbit layout relies on for rings past the sampled range.
///
/// # Examples
/// ```
/// use hypatia_geom::lerp;
/// assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
/// assert_eq!(lerp(0.0, 45.0, 2.0), 90.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        for (a, b) in [(0.0, 1.0), (-3.5, 7.25), (10.0, -10.0), (2.0, 2.0)] {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }

    #[test]
    fn test_lerp_midpoint() {
        assert_eq!(lerp(-1.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn test_lerp_monotonic_increasing() {
        let mut previous = lerp(1.0, 5.0, 0.0);
        for i in 1..=20 {
            let value = lerp(1.0, 5.0, i as f64 / 20.0);
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn test_lerp_monotonic_decreasing() {
        let mut previous = lerp(5.0, 1.0, 0.0);
        for i in 1..=20 {
            let value = lerp(5.0, 1.0, i as f64 / 20.0);
            assert!(value < previous);
            previous = value;
        }
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }
}
