use std::f64::consts::PI;
use std::fmt;

use crate::error::NonRealError;
use crate::math::transform_2d::{limits_pts, vector_angle};
use crate::math::{fmt_point, Point2};

use super::{OrderedPts, Rect, Segment};

/// An ordered, open sequence of points. The last point implicitly connects
/// back to the first when iterating sides.
///
/// Insertion order is the winding order and is semantically significant:
/// interior angles are measured on the winding side.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pts: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices in winding order.
    #[must_use]
    pub fn new(pts: Vec<Point2>) -> Self {
        Self { pts }
    }

    /// Returns the sides of the polygon, each vertex connected to the next
    /// and the last back to the first.
    #[must_use]
    pub fn sides(&self) -> Vec<Segment> {
        let n = self.pts.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|h| Segment::new(self.pts[h], self.pts[(h + 1) % n]))
            .collect()
    }

    /// Returns the axis-aligned bounding box of all vertices.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let (lx, mx, ly, my) = limits_pts(&self.pts);
        Rect::new(Point2::new(lx, ly), Point2::new(mx, my))
    }

    /// Returns the signed area (shoelace formula): positive for
    /// counter-clockwise winding, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.pts.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for h in 0..n {
            let (p, q) = (self.pts[h], self.pts[(h + 1) % n]);
            sum += p.x * q.y - q.x * p.y;
        }
        sum * 0.5
    }

    /// Returns true if the winding order is clockwise.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Returns the interior angle at each vertex, measured on the winding
    /// side, in `[0, 2π)`. Reflex vertices yield angles above π.
    #[must_use]
    pub fn interior_angles(&self) -> Vec<f64> {
        let n = self.pts.len();
        if n < 3 {
            return Vec::new();
        }
        let clockwise = self.is_clockwise();
        (0..n)
            .map(|h| {
                let cur = self.pts[h];
                let prev = self.pts[(h + n - 1) % n];
                let next = self.pts[(h + 1) % n];
                let to_prev = vector_angle(&(prev - cur));
                let to_next = vector_angle(&(next - cur));
                let diff = if clockwise {
                    to_next - to_prev
                } else {
                    to_prev - to_next
                };
                diff.rem_euclid(2.0 * PI)
            })
            .collect()
    }

    /// Checks every vertex in insertion order. NaN anywhere takes priority
    /// over infinities.
    ///
    /// # Errors
    ///
    /// Returns the offending classification for a non-real vertex.
    pub fn or_err(&self) -> Result<Self, NonRealError> {
        let mut inf: Option<NonRealError> = None;
        for p in &self.pts {
            for v in [p.x, p.y] {
                match NonRealError::of(v) {
                    Some(e) if e.is_nan() => return Err(e),
                    Some(e) if inf.is_none() => inf = Some(e),
                    _ => {}
                }
            }
        }
        match inf {
            Some(e) => Err(e),
            None => Ok(self.clone()),
        }
    }
}

impl OrderedPts for Polygon {
    fn points(&self) -> Vec<Point2> {
        self.pts.clone()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon(")?;
        for (h, p) in self.pts.iter().enumerate() {
            if h > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", fmt_point(p))?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_equal;

    fn unit_square_ccw() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn sides_close_the_ring() {
        let p = unit_square_ccw();
        let sides = p.sides();
        assert_eq!(sides.len(), 4);
        assert_eq!(sides[3].begin(), Point2::new(0.0, 1.0));
        assert_eq!(sides[3].end(), Point2::new(0.0, 0.0));
    }

    #[test]
    fn signed_area_tracks_winding() {
        assert!(is_equal(unit_square_ccw().signed_area(), 1.0));
        assert!(!unit_square_ccw().is_clockwise());

        let cw = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ]);
        assert!(is_equal(cw.signed_area(), -1.0));
        assert!(cw.is_clockwise());
    }

    #[test]
    fn interior_angles_of_a_square_are_right() {
        for poly in [
            unit_square_ccw(),
            Polygon::new(vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(1.0, 1.0),
                Point2::new(1.0, 0.0),
            ]),
        ] {
            for angle in poly.interior_angles() {
                assert!(is_equal(angle, PI * 0.5), "{angle}");
            }
        }
    }

    #[test]
    fn reflex_vertex_angle_exceeds_pi() {
        // An arrowhead: the notch vertex is reflex.
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 3.0),
        ]);
        let angles = poly.interior_angles();
        assert!(angles[1] > PI, "{angles:?}");
        // Angle sum of a simple quadrilateral is 2π.
        let sum: f64 = angles.iter().sum();
        assert!(is_equal(sum, 2.0 * PI), "{sum}");
    }

    #[test]
    fn display_format() {
        let p = Polygon::new(vec![Point2::new(1.0, 2.0), Point2::new(-3.5, 0.0)]);
        assert_eq!(p.to_string(), "Polygon(Point({1, 2}), Point({-3.5, 0}))");
    }

    #[test]
    fn bounding_box_covers_vertices() {
        let b = unit_square_ccw().bounding_box();
        assert_eq!(b.min_pt(), Point2::new(0.0, 0.0));
        assert_eq!(b.max_pt(), Point2::new(1.0, 1.0));
    }

    #[test]
    fn fallibility_scans_in_insertion_order() {
        let p = Polygon::new(vec![
            Point2::new(0.0, f64::INFINITY),
            Point2::new(f64::NAN, 0.0),
        ]);
        assert_eq!(p.or_err(), Err(NonRealError::NaN));
        assert!(unit_square_ccw().or_err().is_ok());
    }
}
