use std::fmt;

use crate::error::NonRealError;
use crate::math::transform_2d::{
    is_equal_pt, is_equal_vec, normalize_or_nan, vector_angle,
};
use crate::math::{fmt_point, fmt_vector, Point2, Vector2};

use super::Line;

/// A geometric ray: a starting point and a direction.
///
/// The direction is normalized at construction. A zero direction produces
/// the NaN sentinel vector, surfaced later through [`Ray::or_err`] rather
/// than a construction failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    begin: Point2,
    dir: Vector2,
}

impl Ray {
    /// Creates a ray from an origin and a direction vector.
    #[must_use]
    pub fn new(begin: Point2, direction: Vector2) -> Self {
        Self {
            begin,
            dir: normalize_or_nan(&direction),
        }
    }

    /// Returns the origin of the ray.
    #[must_use]
    pub fn begin(&self) -> Point2 {
        self.begin
    }

    /// Returns the unit direction vector of the ray.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.dir
    }

    /// Returns the angle of the ray's direction.
    #[must_use]
    pub fn angle(&self) -> f64 {
        vector_angle(&self.dir)
    }

    /// Returns the ray pointing the opposite way from the same origin.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self::new(self.begin, -self.dir)
    }

    /// Returns the unbounded line this ray lies on.
    #[must_use]
    pub fn line(&self) -> Line {
        Line::from_point_vector(self.begin, self.dir)
    }

    /// Checks origin and direction for NaN or infinity. NaN anywhere takes
    /// priority over infinities.
    ///
    /// # Errors
    ///
    /// Returns the offending classification for a non-real constituent.
    pub fn or_err(&self) -> Result<Self, NonRealError> {
        let scalars = [self.begin.x, self.begin.y, self.dir.x, self.dir.y];
        let mut inf: Option<NonRealError> = None;
        for v in scalars {
            match NonRealError::of(v) {
                Some(e) if e.is_nan() => return Err(e),
                Some(e) if inf.is_none() => inf = Some(e),
                _ => {}
            }
        }
        match inf {
            Some(e) => Err(e),
            None => Ok(*self),
        }
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray({}, {})", fmt_point(&self.begin), fmt_vector(&self.dir))
    }
}

/// Filters `pts` down to the points lying on the closed half-line of `ray`:
/// the origin itself, or points whose direction from the origin matches the
/// ray's direction.
#[must_use]
pub fn filter_ray_pts(ray: &Ray, pts: &[Point2]) -> Vec<Point2> {
    pts.iter()
        .copied()
        .filter(|p| {
            if is_equal_pt(p, &ray.begin()) {
                return true;
            }
            let v = normalize_or_nan(&(p - ray.begin()));
            is_equal_vec(&v, &ray.vector())
        })
        .collect()
}
