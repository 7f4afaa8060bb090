//! Monotone piecewise-linear interpolation with boundary clamping.

use num_traits::Float;

/// Interpolate `fp` against increasing knots `xp` at the query `t`.
///
/// Queries outside the knot range clamp to the nearest boundary value
/// rather than extrapolating, which is exactly the behaviour the inverse
/// table lookup needs: a target integral value nudged past the table range
/// by round-off must land on the nearest endpoint angle, never on a NaN or
/// an out-of-domain angle.
///
/// `xp` must be non-decreasing with at least one knot and `fp` the same
/// length; the generators uphold this with their fixed-resolution tables.
///
/// # Examples
/// ```
/// use lds_sphere::interp;
///
/// let xp = [0.0, 1.0, 2.0];
/// let fp = [0.0, 10.0, 20.0];
/// assert_eq!(interp(&xp, &fp, 0.5), 5.0);
/// assert_eq!(interp(&xp, &fp, -1.0), 0.0); // clamped
/// assert_eq!(interp(&xp, &fp, 9.0), 20.0); // clamped
/// ```
pub fn interp<T: Float>(xp: &[T], fp: &[T], t: T) -> T {
    // first index with xp[pos] > t
    let pos = xp.partition_point(|&x| x <= t);
    if pos == 0 {
        return fp[0];
    }
    if pos == xp.len() {
        return fp[xp.len() - 1];
    }
    let fraction = (t - xp[pos - 1]) / (xp[pos] - xp[pos - 1]);
    fp[pos - 1] + fraction * (fp[pos] - fp[pos - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_knot_points_exact() {
        let xp = [0.0, 1.0, 2.0, 3.0];
        let fp = [0.0, 2.0, 4.0, 6.0];
        for (&x, &f) in xp.iter().zip(fp.iter()) {
            assert_abs_diff_eq!(interp(&xp, &fp, x), f);
        }
    }

    #[test]
    fn test_midpoints() {
        let xp = [0.0, 1.0, 2.0];
        let fp = [0.0, 1.0, 4.0];
        assert_abs_diff_eq!(interp(&xp, &fp, 0.25), 0.25);
        assert_abs_diff_eq!(interp(&xp, &fp, 1.5), 2.5);
    }

    #[test]
    fn test_clamps_below_and_above() {
        let xp = [1.0, 2.0];
        let fp = [10.0, 20.0];
        assert_abs_diff_eq!(interp(&xp, &fp, 0.0), 10.0);
        assert_abs_diff_eq!(interp(&xp, &fp, 5.0), 20.0);
    }

    #[test]
    fn test_non_uniform_spacing() {
        let xp = [0.0, 0.1, 1.0];
        let fp = [0.0, 1.0, 2.0];
        assert_abs_diff_eq!(interp(&xp, &fp, 0.05), 0.5);
        assert_abs_diff_eq!(interp(&xp, &fp, 0.55), 1.5);
    }

    #[test]
    fn test_f32() {
        let xp: [f32; 2] = [0.0, 1.0];
        let fp: [f32; 2] = [0.0, 2.0];
        assert!((interp(&xp, &fp, 0.5_f32) - 1.0).abs() < 1e-6);
    }
}
