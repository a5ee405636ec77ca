//! Scalar helpers shared by the lookup and filter code.

/// Linear interpolation that is exact at both ends and monotonic in `t`.
///
/// `a + t * (b - a)` can overshoot `b` by an ulp for `t` just below 1; the
/// clamp keeps interpolated tables non-decreasing across segment joins.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t == 1.0 {
        return b;
    }
    let x = a + t * (b - a);
    if (t > 1.0) == (b > a) {
        if b < x {
            x
        } else {
            b
        }
    } else if x < b {
        x
    } else {
        b
    }
}

/// Inner product in coefficient order, accumulated from zero.
#[inline]
pub fn dot(coeffs: &[f64], window: &[f64]) -> f64 {
    coeffs
        .iter()
        .zip(window)
        .fold(0.0, |acc, (c, x)| acc + c * x)
}
