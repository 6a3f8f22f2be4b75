use std::fmt;

use crate::equations::Coefficients;
use crate::error::{GeometryError, NonRealError, PlanarError};
use crate::math::transform_2d::{
    normalize_or_nan, rotate_pts, translate_pts, vector_angle,
};
use crate::math::{human_format, is_zero, signbit, Point2, Vector2};

/// The direction class of a line's slope, derived from the snapped
/// coefficients at construction and never mutated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeType {
    /// Both `a` and `b` are zero: not a real line. Every accessor that
    /// needs a direction treats this as an error condition.
    Unknown,
    /// `a` is zero: no rise.
    Horizontal,
    /// `b` is zero: no run.
    Vertical,
    /// Oblique with `a` and `b` of opposite sign (positive slope).
    Rising,
    /// Oblique with `a` and `b` of the same sign (negative slope).
    Falling,
}

/// A line in implicit form: `a·x + b·y = c`.
///
/// The implicit form handles vertical lines without special-casing an
/// infinite slope. Coefficients within [`crate::math::ZERO_EPSILON`] of zero
/// are snapped to exact zero at construction and the [`SlopeType`] tag is
/// computed from the snapped values, keeping the two always consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    abc: [f64; 3],
    slope: SlopeType,
}

impl Line {
    /// Creates a line from the coefficients of `a·x + b·y = c`.
    #[must_use]
    pub fn from_abc(a: f64, b: f64, c: f64) -> Self {
        let c = if is_zero(c) { 0.0 } else { c };

        let (a, b, slope) = match (is_zero(a), is_zero(b)) {
            (true, true) => (0.0, 0.0, SlopeType::Unknown),
            (true, false) => (0.0, b, SlopeType::Horizontal),
            (false, true) => (a, 0.0, SlopeType::Vertical),
            (false, false) if signbit(a) != signbit(b) => (a, b, SlopeType::Rising),
            (false, false) => (a, b, SlopeType::Falling),
        };
        Self {
            abc: [a, b, c],
            slope,
        }
    }

    /// Creates a line through `p` with direction `v`. The vector provides
    /// the slope, the point the intercept.
    #[must_use]
    pub fn from_point_vector(p: Point2, v: Vector2) -> Self {
        let (i, j) = (v.x, v.y);
        let c = p.x * j - p.y * i;
        Self::from_abc(j, -i, c)
    }

    /// Creates the unbounded line through two points. See [`super::Segment`]
    /// for a line that only exists between two points.
    #[must_use]
    pub fn from_points(p1: Point2, p2: Point2) -> Self {
        Self::from_point_vector(p1, p2 - p1)
    }

    /// The X axis: `y = 0`.
    #[must_use]
    pub fn x_axis() -> Self {
        Self::from_abc(0.0, 1.0, 0.0)
    }

    /// The Y axis: `x = 0`.
    #[must_use]
    pub fn y_axis() -> Self {
        Self::from_abc(1.0, 0.0, 0.0)
    }

    /// Returns the coefficients of the implicit equation.
    #[must_use]
    pub fn abc(&self) -> (f64, f64, f64) {
        (self.abc[0], self.abc[1], self.abc[2])
    }

    /// Returns the slope classification tag.
    #[must_use]
    pub fn slope_type(&self) -> SlopeType {
        self.slope
    }

    /// Returns true if the line is horizontal (no rise).
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.slope == SlopeType::Horizontal
    }

    /// Returns true if the line is vertical (no run).
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.slope == SlopeType::Vertical
    }

    /// Returns true if the line has no direction at all (degenerate).
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.slope == SlopeType::Unknown
    }

    /// Returns the unit vector along the line, in the direction of `a`.
    /// A degenerate line yields the NaN sentinel vector.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        normalize_or_nan(&Vector2::new(-self.abc[1], self.abc[0]))
    }

    /// Returns the angle of the line, with the positive X axis as zero.
    #[must_use]
    pub fn angle(&self) -> f64 {
        vector_angle(&self.direction())
    }

    /// Rescales the coefficients so `a` is 1, keeping the same line.
    /// A horizontal line degenerates to non-real coefficients.
    #[must_use]
    pub fn normalize_x(&self) -> Self {
        let (a, b, c) = self.abc();
        Self::from_abc(1.0, b / a, c / a)
    }

    /// Rescales the coefficients so `b` is 1, keeping the same line.
    /// A vertical line degenerates to non-real coefficients.
    #[must_use]
    pub fn normalize_y(&self) -> Self {
        let (a, b, c) = self.abc();
        Self::from_abc(a / b, 1.0, c / b)
    }

    /// Rescales the coefficients so `(a, b)` has unit length, keeping the
    /// same line. Idempotent within tolerance.
    #[must_use]
    pub fn normalize_unit(&self) -> Self {
        let (a, b, c) = self.abc();
        let d = a.hypot(b);
        Self::from_abc(a / d, b / d, c / d)
    }

    /// Returns the X value for a given Y. NaN when the line is horizontal
    /// or degenerate, matching IEEE semantics rather than panicking.
    #[must_use]
    pub fn x_for_y(&self, y: f64) -> f64 {
        let (a, b, c) = self.abc();
        match self.slope {
            SlopeType::Vertical => c / a,
            SlopeType::Horizontal | SlopeType::Unknown => f64::NAN,
            SlopeType::Rising | SlopeType::Falling => -b * y / a + c / a,
        }
    }

    /// Returns the Y value for a given X. NaN when the line is vertical or
    /// degenerate.
    #[must_use]
    pub fn y_for_x(&self, x: f64) -> f64 {
        let (a, b, c) = self.abc();
        match self.slope {
            SlopeType::Horizontal => c / b,
            SlopeType::Vertical | SlopeType::Unknown => f64::NAN,
            SlopeType::Rising | SlopeType::Falling => -a * x / b + c / b,
        }
    }

    /// Checks the line for degeneracy and non-real coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] for the Unknown slope
    /// state, or the NaN/infinity classification of the first offending
    /// coefficient (NaN prioritized).
    pub fn or_err(&self) -> Result<Self, PlanarError> {
        if self.slope == SlopeType::Unknown {
            return Err(GeometryError::DegenerateLine.into());
        }
        let mut inf: Option<NonRealError> = None;
        for &v in &self.abc {
            match NonRealError::of(v) {
                Some(e) if e.is_nan() => return Err(e.into()),
                Some(e) if inf.is_none() => inf = Some(e),
                _ => {}
            }
        }
        match inf {
            Some(e) => Err(e.into()),
            None => Ok(*self),
        }
    }
}

impl Coefficients for Line {
    fn coefficients(&self) -> &[f64] {
        &self.abc
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, c) = self.abc();
        match self.slope {
            SlopeType::Unknown => {
                write!(f, "0x+0y={}", human_format(9, c))
            }
            SlopeType::Horizontal => {
                write!(f, "{}y={}", human_format(9, b), human_format(9, c))
            }
            SlopeType::Vertical => {
                write!(f, "{}x={}", human_format(9, a), human_format(9, c))
            }
            SlopeType::Rising | SlopeType::Falling => {
                let (sign, b) = if signbit(b) { ('-', -b) } else { ('+', b) };
                write!(
                    f,
                    "{}x{}{}y={}",
                    human_format(9, a),
                    sign,
                    human_format(9, b),
                    human_format(9, c)
                )
            }
        }
    }
}

/// Transforms `pts` so that the given line becomes the X axis: a pure
/// translation for horizontal lines, otherwise a rotation around the line's
/// X intercept. Useful for intersection finding between lines and curves.
#[must_use]
pub fn rotate_or_translate_to_x_axis(line: &Line, pts: &[Point2]) -> Vec<Point2> {
    match line.slope_type() {
        SlopeType::Unknown => pts.to_vec(),
        SlopeType::Horizontal => {
            let y = line.y_for_x(0.0);
            if is_zero(y) {
                pts.to_vec()
            } else {
                translate_pts(Vector2::new(0.0, -y), pts)
            }
        }
        _ => {
            let x = line.x_for_y(0.0);
            let origin = Point2::new(x, 0.0);
            rotate_pts(-line.angle(), origin, pts)
        }
    }
}
