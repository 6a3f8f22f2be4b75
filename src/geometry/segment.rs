use std::fmt;

use crate::error::NonRealError;
use crate::math::transform_2d::vector_angle;
use crate::math::{fmt_point, Point2, Vector2};

use super::{OrderedPts, Rect};

/// A line segment: the portion of a line between two ordered points.
///
/// No normalization happens at construction; `begin` and `end` keep their
/// insertion order and [`Segment::reverse`] returns a swapped copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    begin: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a segment between two points.
    #[must_use]
    pub fn new(begin: Point2, end: Point2) -> Self {
        Self { begin, end }
    }

    /// Creates a segment from an origin and an offset vector.
    #[must_use]
    pub fn from_point_vector(begin: Point2, v: Vector2) -> Self {
        Self::new(begin, begin + v)
    }

    /// Returns the starting point.
    #[must_use]
    pub fn begin(&self) -> Point2 {
        self.begin
    }

    /// Returns the ending point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.begin).norm()
    }

    /// Returns the angle from begin to end.
    #[must_use]
    pub fn angle(&self) -> f64 {
        vector_angle(&(self.end - self.begin))
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.begin + (self.end - self.begin) * 0.5
    }

    /// Returns the axis-aligned bounding box of the two endpoints.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.begin, self.end)
    }

    /// Returns the segment with begin and end swapped, without mutating.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::new(self.end, self.begin)
    }

    /// Checks both endpoints for NaN or infinity. NaN anywhere takes
    /// priority; otherwise the first offending endpoint in order reports.
    ///
    /// # Errors
    ///
    /// Returns the offending classification for a non-real endpoint.
    pub fn or_err(&self) -> Result<Self, NonRealError> {
        let scalars = [self.begin.x, self.begin.y, self.end.x, self.end.y];
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

impl OrderedPts for Segment {
    fn points(&self) -> Vec<Point2> {
        vec![self.begin, self.end]
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment({}, {})",
            fmt_point(&self.begin),
            fmt_point(&self.end)
        )
    }
}
