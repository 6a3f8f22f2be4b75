use std::fmt;

use crate::error::NonRealError;
use crate::math::{fmt_point, point_or_err, Point2};

use super::OrderedPts;

/// An axis-aligned rectangle.
///
/// The two corners are stored as `(min, max)` after sorting, so
/// `min_pt().x <= max_pt().x` and `min_pt().y <= max_pt().y` hold for every
/// construction regardless of input corner order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pts: [Point2; 2],
}

impl Rect {
    /// Creates a rectangle spanning two corner points, in any order.
    /// NaN coordinates are carried through so [`Rect::or_err`] can report
    /// them, rather than being silently dropped by the min/max extraction.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        let (lx, mx) = ordered(p1.x, p2.x);
        let (ly, my) = ordered(p1.y, p2.y);
        Self {
            pts: [Point2::new(lx, ly), Point2::new(mx, my)],
        }
    }

    /// Returns the corner with the smallest coordinates.
    #[must_use]
    pub fn min_pt(&self) -> Point2 {
        self.pts[0]
    }

    /// Returns the corner with the largest coordinates.
    #[must_use]
    pub fn max_pt(&self) -> Point2 {
        self.pts[1]
    }

    /// Returns the width and height.
    #[must_use]
    pub fn dims(&self) -> (f64, f64) {
        let v = self.pts[1] - self.pts[0];
        (v.x, v.y)
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.dims().0
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.dims().1
    }

    /// Checks both corners for NaN or infinity, least point first, with
    /// NaN prioritized over infinities.
    ///
    /// # Errors
    ///
    /// Returns the offending classification for a non-real corner.
    pub fn or_err(&self) -> Result<Self, NonRealError> {
        let min = point_or_err(&self.pts[0]);
        let max = point_or_err(&self.pts[1]);
        match (min, max) {
            (Err(e), _) if e.is_nan() => Err(e),
            (_, Err(e)) if e.is_nan() => Err(e),
            (Err(e), _) | (_, Err(e)) => Err(e),
            (Ok(_), Ok(_)) => Ok(*self),
        }
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

impl OrderedPts for Rect {
    fn points(&self) -> Vec<Point2> {
        self.pts.to_vec()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = (self.pts[0], self.pts[1]);
        let minmax = Point2::new(min.x, max.y);
        let maxmin = Point2::new(max.x, min.y);
        write!(
            f,
            "Rectangle[ Polygon({}, {}, {}, {}) ]",
            fmt_point(&min),
            fmt_point(&minmax),
            fmt_point(&max),
            fmt_point(&maxmin)
        )
    }
}
