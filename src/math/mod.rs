pub mod gauss;
pub mod transform_2d;

use crate::error::NonRealError;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 transformation matrix.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// 3x3 transformation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Values closer to zero than this are snapped to exact zero at
/// construction time, before any derived classification is computed.
pub const ZERO_EPSILON: f64 = 1e-9;

/// Looser tolerance used when comparing two computed values for equality.
pub const EQUAL_EPSILON: f64 = 1e-5;

/// Tests if a value is within [`ZERO_EPSILON`] of zero.
#[must_use]
pub fn is_zero(v: f64) -> bool {
    -ZERO_EPSILON < v && v < ZERO_EPSILON
}

/// Tests if two values are equal within [`EQUAL_EPSILON`].
///
/// The comparison is relative for ordinary values and falls back to a
/// squared-epsilon absolute test when either side is zero or the difference
/// is subnormal.
#[must_use]
pub fn is_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if a == 0.0 || b == 0.0 || diff < f64::MIN_POSITIVE {
        return diff < EQUAL_EPSILON * EQUAL_EPSILON;
    }
    diff / (a.abs() + b.abs()) < EQUAL_EPSILON
}

/// Tests if the (negative) sign bit is set on a value.
#[must_use]
pub fn signbit(v: f64) -> bool {
    v.is_sign_negative()
}

/// Returns the smallest value from a set. NaN values are discarded.
#[must_use]
pub fn minimum(vals: &[f64]) -> f64 {
    let mut ret = match vals.first() {
        Some(&v) => v,
        None => return 0.0,
    };
    for &v in vals {
        if v < ret || ret.is_nan() {
            ret = v;
        }
    }
    ret
}

/// Returns the largest value from a set. NaN values are discarded.
#[must_use]
pub fn maximum(vals: &[f64]) -> f64 {
    let mut ret = match vals.first() {
        Some(&v) => v,
        None => return 0.0,
    };
    for &v in vals {
        if v > ret || ret.is_nan() {
            ret = v;
        }
    }
    ret
}

/// Formats a value with the given precision, trimming trailing zeros and a
/// dangling decimal point. Negative zero renders as `0`.
#[must_use]
pub fn human_format(precision: usize, v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    let s = format!("{v:.precision$}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Formats a point in the `Point({x, y})` fixture notation.
#[must_use]
pub fn fmt_point(p: &Point2) -> String {
    format!(
        "Point({{{}, {}}})",
        human_format(9, p.x),
        human_format(9, p.y)
    )
}

/// Formats a vector in the `Vector(Point({i, j}))` fixture notation.
#[must_use]
pub fn fmt_vector(v: &Vector2) -> String {
    format!(
        "Vector(Point({{{}, {}}}))",
        human_format(9, v.x),
        human_format(9, v.y)
    )
}

/// Checks both coordinates of a point, prioritizing NaN over infinities.
///
/// # Errors
///
/// Returns the offending classification if either coordinate is non-real.
pub fn point_or_err(p: &Point2) -> Result<Point2, NonRealError> {
    pair_or_err(p.x, p.y).map(|()| *p)
}

/// Checks both components of a vector, prioritizing NaN over infinities.
///
/// # Errors
///
/// Returns the offending classification if either component is non-real.
pub fn vector_or_err(v: &Vector2) -> Result<Vector2, NonRealError> {
    pair_or_err(v.x, v.y).map(|()| *v)
}

fn pair_or_err(a: f64, b: f64) -> Result<(), NonRealError> {
    let ae = NonRealError::of(a);
    let be = NonRealError::of(b);
    match (ae, be) {
        (Some(e), _) if e.is_nan() => Err(e),
        (_, Some(e)) if e.is_nan() => Err(e),
        (Some(e), _) | (_, Some(e)) => Err(e),
        (None, None) => Ok(()),
    }
}
