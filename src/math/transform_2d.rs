use std::f64::consts::PI;

use nalgebra::Rotation2;

use super::{is_equal, is_zero, Matrix2, Point2, Vector2};

/// Translates `pts` by `v`.
#[must_use]
pub fn translate_pts(v: Vector2, pts: &[Point2]) -> Vec<Point2> {
    pts.iter().map(|p| p + v).collect()
}

/// Rotates `pts` by `theta` radians anti-clockwise around `origin`.
#[must_use]
pub fn rotate_pts(theta: f64, origin: Point2, pts: &[Point2]) -> Vec<Point2> {
    let rot = Rotation2::new(theta);
    pts.iter().map(|p| origin + rot * (p - origin)).collect()
}

/// Scales the coordinates of `pts` component-wise by `v`.
#[must_use]
pub fn scale_pts(v: Vector2, pts: &[Point2]) -> Vec<Point2> {
    let m = Matrix2::new(v.x, 0.0, 0.0, v.y);
    pts.iter().map(|p| Point2::from(m * p.coords)).collect()
}

/// Shears `pts` by `v`: `x' = x + v.x * y`, `y' = y + v.y * x`.
#[must_use]
pub fn shear_pts(v: Vector2, pts: &[Point2]) -> Vec<Point2> {
    let m = Matrix2::new(1.0, v.x, v.y, 1.0);
    pts.iter().map(|p| Point2::from(m * p.coords)).collect()
}

/// Returns the min-x, max-x, min-y, max-y of `pts`, in that order.
/// NaN coordinates are discarded.
#[must_use]
pub fn limits_pts(pts: &[Point2]) -> (f64, f64, f64, f64) {
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    (
        super::minimum(&xs),
        super::maximum(&xs),
        super::minimum(&ys),
        super::maximum(&ys),
    )
}

/// Sorts `pts` by x coordinate, breaking ties by y.
#[must_use]
pub fn sort_pts(mut pts: Vec<Point2>) -> Vec<Point2> {
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts
}

/// Compares two points for equality within [`super::EQUAL_EPSILON`].
#[must_use]
pub fn is_equal_pt(a: &Point2, b: &Point2) -> bool {
    is_equal(a.x, b.x) && is_equal(a.y, b.y)
}

/// Compares two vectors for equality within [`super::EQUAL_EPSILON`].
#[must_use]
pub fn is_equal_vec(a: &Vector2, b: &Vector2) -> bool {
    is_equal(a.x, b.x) && is_equal(a.y, b.y)
}

/// Tests if both coordinates of a point are within [`super::ZERO_EPSILON`]
/// of zero.
#[must_use]
pub fn is_zero_pt(p: &Point2) -> bool {
    is_zero(p.x) && is_zero(p.y)
}

/// Returns the angle of a vector in `[0, 2π)`, measured anti-clockwise from
/// the positive X axis. Components within [`super::ZERO_EPSILON`] of zero
/// are treated as zero, so the axis directions never divide by zero. The
/// zero vector yields NaN.
#[must_use]
pub fn vector_angle(v: &Vector2) -> f64 {
    let i = if is_zero(v.x) { 0.0 } else { v.x };
    let j = if is_zero(v.y) { 0.0 } else { v.y };

    if i > 0.0 && j == 0.0 {
        return 0.0;
    }
    if i == 0.0 && j > 0.0 {
        return PI * 0.5;
    }
    if i < 0.0 && j == 0.0 {
        return PI;
    }
    if i == 0.0 && j < 0.0 {
        return PI * 1.5;
    }

    // Quadrant cases; i == j == 0 falls through to NaN here.
    let rads = (i / j).atan();
    if j > 0.0 {
        PI * 0.5 - rads
    } else if j < 0.0 {
        PI * 1.5 - rads
    } else {
        f64::NAN
    }
}

/// Returns the unit vector pointed in the direction of `theta`.
#[must_use]
pub fn vector_from_theta(theta: f64) -> Vector2 {
    Vector2::new(theta.cos(), theta.sin())
}

/// Rotates a vector by `theta` radians anti-clockwise.
#[must_use]
pub fn rotate_vec(v: &Vector2, theta: f64) -> Vector2 {
    Rotation2::new(theta) * v
}

/// Normalizes a vector to unit length. A vector of zero magnitude yields
/// the NaN sentinel vector rather than panicking.
#[must_use]
pub fn normalize_or_nan(v: &Vector2) -> Vector2 {
    let m = v.norm();
    if is_zero(m) {
        Vector2::new(f64::NAN, f64::NAN)
    } else {
        v / m
    }
}
