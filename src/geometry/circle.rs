use std::fmt;

use crate::error::NonRealError;
use crate::math::transform_2d::vector_from_theta;
use crate::math::{human_format, point_or_err, Point2, Vector2};

use super::Rect;

/// A circle defined by a center point and a radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a circle at a center point. A negative radius is folded to
    /// its absolute value.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the axis-aligned bounding box of the circle.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let v = Vector2::new(self.radius, self.radius);
        Rect::new(self.center + v, self.center - v)
    }

    /// Returns the point on the circle at the provided angle.
    #[must_use]
    pub fn pt_at_theta(&self, theta: f64) -> Point2 {
        self.center + vector_from_theta(theta) * self.radius
    }

    /// Checks center then radius for NaN or infinity, NaN prioritized.
    ///
    /// # Errors
    ///
    /// Returns the offending classification for a non-real constituent.
    pub fn or_err(&self) -> Result<Self, NonRealError> {
        let cerr = point_or_err(&self.center).err();
        let rerr = NonRealError::of(self.radius);
        match (cerr, rerr) {
            (Some(e), _) if e.is_nan() => Err(e),
            (_, Some(e)) if e.is_nan() => Err(e),
            (Some(e), _) | (_, Some(e)) => Err(e),
            (None, None) => Ok(*self),
        }
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mut x, mut y) = (self.center.x, self.center.y);
        let (mut xop, mut yop) = ('-', '-');
        if x < 0.0 {
            xop = '+';
            x = -x;
        }
        if y < 0.0 {
            yop = '+';
            y = -y;
        }
        write!(
            f,
            "(x{}{})^2+(y{}{})^2={}^2",
            xop,
            human_format(9, x),
            yop,
            human_format(9, y),
            human_format(9, self.radius)
        )
    }
}
