pub mod equations;
pub mod error;
pub mod geometry;
pub mod intersect;
pub mod math;

pub use equations::{
    Coefficients, Constant, Cubic, Derivable, Linear, Polynomial, Quadratic, Quartic,
};
pub use error::{GeometryError, NonRealError, PlanarError, Result};
pub use geometry::{
    Bezier, Circle, CurveKind, Line, ParamCurve, Polygon, Ray, Rect, Segment, SlopeType,
};
pub use math::{Point2, Vector2, EQUAL_EPSILON, ZERO_EPSILON};
