mod bezier;
mod circle;
mod curve;
mod line;
mod polygon;
mod ray;
mod rect;
mod segment;

pub use bezier::{Alignment, Bezier, CurveKind};
pub use circle::Circle;
pub use curve::ParamCurve;
pub use line::{rotate_or_translate_to_x_axis, Line, SlopeType};
pub use polygon::Polygon;
pub use ray::{filter_ray_pts, Ray};
pub use rect::Rect;
pub use segment::Segment;

use crate::math::{transform_2d::is_equal_pt, Point2};

/// Ordered access to the defining points of a figure. Lets generic
/// point-sequence equality work across unrelated concrete types.
pub trait OrderedPts {
    fn points(&self) -> Vec<Point2>;
}

/// Compares the point sequences of two figures element-wise within the
/// comparison tolerance.
#[must_use]
pub fn is_equal_points<T: OrderedPts>(a: &T, b: &T) -> bool {
    let (ap, bp) = (a.points(), b.points());
    ap.len() == bp.len() && ap.iter().zip(&bp).all(|(x, y)| is_equal_pt(x, y))
}
