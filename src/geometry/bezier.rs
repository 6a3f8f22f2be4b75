use std::fmt;

use nalgebra::Vector4;

use crate::equations::{Cubic, Derivable, Polynomial, Quadratic};
use crate::error::NonRealError;
use crate::math::transform_2d::{
    limits_pts, rotate_pts, scale_pts, translate_pts, vector_angle,
};
use crate::math::{is_equal, is_zero, Matrix4, Point2, Vector2};

use super::curve::{cubic_from_points, ParamCurve};
use super::{OrderedPts, Polygon, Rect};

/// Shape classification of a cubic Bézier on the canonical plane.
///
/// Boundary points classify as the named boundary case (`LoopBegin`,
/// `LoopEnd`, `Cusp`), not as the adjacent region: the equality tests run
/// before the region inequalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Plain,
    Loop,
    Cusp,
    LoopBegin,
    LoopEnd,
    SingleInflection,
    DoubleInflection,
}

/// The frame returned by [`Bezier::align_on_x`]: the transform taking the
/// curve to canonical position, plus the transformed curve.
#[derive(Debug, Clone, Copy)]
pub struct Alignment {
    /// Translation taking the first control point to the origin.
    pub translate: Vector2,
    /// Rotation placing the last control point on the positive X axis.
    pub theta: f64,
    /// The X coordinate of the last point after rotation; the curve is
    /// scaled by its reciprocal unless it is zero.
    pub scale: f64,
    /// The aligned curve.
    pub curve: Bezier,
}

/// A cubic Bézier curve.
///
/// Owns its four control points together with the cached coordinate
/// polynomials derived from them at construction. The two always
/// correspond: every transform (split, align) builds a brand new `Bezier`
/// rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bezier {
    pts: [Point2; 4],
    x: Cubic,
    y: Cubic,
}

impl Bezier {
    /// Creates a cubic Bézier from its four control points.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2, p3: Point2, p4: Point2) -> Self {
        let (x, y) = cubic_from_points(p1, p2, p3, p4);
        Self {
            pts: [p1, p2, p3, p4],
            x,
            y,
        }
    }

    /// Creates a Bézier from a slice of exactly four points.
    fn from_slice(pts: &[Point2]) -> Self {
        Self::new(pts[0], pts[1], pts[2], pts[3])
    }

    /// Returns the first control point (the curve start).
    #[must_use]
    pub fn begin(&self) -> Point2 {
        self.pts[0]
    }

    /// Returns the last control point (the curve end).
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.pts[3]
    }

    /// Returns the cached x(t) polynomial.
    #[must_use]
    pub fn x_polynomial(&self) -> &Cubic {
        &self.x
    }

    /// Returns the cached y(t) polynomial.
    #[must_use]
    pub fn y_polynomial(&self) -> &Cubic {
        &self.y
    }

    /// Views the curve as a generic parametric curve over `[0, 1]`.
    fn as_param_curve(&self) -> ParamCurve<Cubic> {
        ParamCurve {
            x: self.x,
            y: self.y,
            min: 0.0,
            max: 1.0,
        }
    }

    /// Evaluates the curve at `t`. Unlike [`ParamCurve::pt_at_t`] the value
    /// is not clamped; the polynomials extrapolate outside `[0, 1]`.
    #[must_use]
    pub fn pt_at_t(&self, t: f64) -> Point2 {
        Point2::new(self.x.at_t(t), self.y.at_t(t))
    }

    /// Returns the (unnormalized) tangent and left normal at `t`.
    #[must_use]
    pub fn tangent_at_t(&self, t: f64) -> (Vector2, Vector2) {
        let i = self.x.derivative().at_t(t);
        let j = self.y.derivative().at_t(t);
        (Vector2::new(i, j), Vector2::new(-j, i))
    }

    /// Returns the component roots restricted to `[0, 1]`, with values
    /// within the zero tolerance of an endpoint snapped to it.
    #[must_use]
    pub fn roots(&self) -> (Vec<f64>, Vec<f64>) {
        self.as_param_curve().roots()
    }

    /// Returns the axis-aligned bounding box of the curve itself,
    /// evaluated at the endpoints and the derivative roots.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        self.as_param_curve().bounding_box()
    }

    /// Returns the bounding box of the four control points. Cheaper and
    /// looser than [`Bezier::bounding_box`]; the recursive curve-curve
    /// intersection uses it for pruning.
    #[must_use]
    pub fn fast_box(&self) -> Rect {
        let (lx, mx, ly, my) = limits_pts(&self.pts);
        Rect::new(Point2::new(lx, ly), Point2::new(mx, my))
    }

    /// Arc length via 64-point Gauss-Legendre quadrature.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.as_param_curve().length()
    }

    /// Chord-sum approximation of the arc length over `steps` segments.
    /// Always an under-estimate; cheap, not a substitute for
    /// [`Bezier::length`].
    #[must_use]
    pub fn approx_length(&self, steps: usize) -> f64 {
        self.as_param_curve().approx_length(steps)
    }

    /// Splits the curve at `t` into two curves with the same trace.
    ///
    /// Uses the closed-form de Casteljau matrices parameterized by `t` and
    /// `z = t - 1` to produce both halves' control points in one pass.
    #[must_use]
    pub fn split_at_t(&self, t: f64) -> (Self, Self) {
        let px = Vector4::new(self.pts[0].x, self.pts[1].x, self.pts[2].x, self.pts[3].x);
        let py = Vector4::new(self.pts[0].y, self.pts[1].y, self.pts[2].y, self.pts[3].y);

        let z = t - 1.0;
        let qa = Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            -z, t, 0.0, 0.0, //
            z * z, -2.0 * z * t, t * t, 0.0, //
            -(z * z * z), 3.0 * z * z * t, -3.0 * z * t * t, t * t * t,
        );
        let qb = Matrix4::new(
            -(z * z * z), 3.0 * z * z * t, -3.0 * z * t * t, t * t * t, //
            0.0, z * z, -2.0 * z * t, t * t, //
            0.0, 0.0, -z, t, //
            0.0, 0.0, 0.0, 1.0,
        );

        let (ax, ay) = (qa * px, qa * py);
        let (bx, by) = (qb * px, qb * py);
        (
            Self::new(
                Point2::new(ax[0], ay[0]),
                Point2::new(ax[1], ay[1]),
                Point2::new(ax[2], ay[2]),
                Point2::new(ax[3], ay[3]),
            ),
            Self::new(
                Point2::new(bx[0], by[0]),
                Point2::new(bx[1], by[1]),
                Point2::new(bx[2], by[2]),
                Point2::new(bx[3], by[3]),
            ),
        )
    }

    /// Canonicalizes the curve: translates point 0 to the origin, rotates
    /// point 3 onto the positive X axis, then scales point 3 to X=1 unless
    /// its rotated X coordinate is zero.
    #[must_use]
    pub fn align_on_x(&self) -> Alignment {
        let translate = Point2::origin() - self.pts[0];
        let pts = translate_pts(translate, &self.pts);
        let theta = -vector_angle(&(pts[3] - Point2::origin()));
        let mut pts = rotate_pts(theta, Point2::origin(), &pts);
        let scale = pts[3].x;
        if !is_zero(scale) {
            pts = scale_pts(Vector2::new(1.0 / scale, 1.0 / scale), &pts);
        }

        Alignment {
            translate,
            theta,
            scale,
            curve: Self::from_slice(&pts),
        }
    }

    /// Returns the minimum-area bounding polygon aligned to the curve's own
    /// frame: the bounding box computed in the [`Bezier::align_on_x`] frame,
    /// inverse-transformed back to world coordinates.
    #[must_use]
    pub fn tight_box(&self) -> Polygon {
        let aligned = self.align_on_x();
        let b = aligned.curve.bounding_box();
        let (min, max) = (b.min_pt(), b.max_pt());
        let corners = [
            min,
            Point2::new(max.x, min.y),
            max,
            Point2::new(min.x, max.y),
        ];

        let mut corners = if is_zero(aligned.scale) {
            corners.to_vec()
        } else {
            scale_pts(Vector2::new(aligned.scale, aligned.scale), &corners)
        };
        corners = rotate_pts(-aligned.theta, Point2::origin(), &corners);
        corners = translate_pts(-aligned.translate, &corners);
        Polygon::new(corners)
    }

    /// Classifies the curve shape on the canonical plane.
    ///
    /// The canonical `(x, y)` pair is computed from the translated (not
    /// fully aligned) control points, then bucketed against the documented
    /// boundary curves, testing boundary equality before the region
    /// inequalities.
    #[must_use]
    pub fn curve_kind(&self) -> CurveKind {
        let translate = Point2::origin() - self.pts[0];
        let pts = translate_pts(translate, &self.pts);

        let (x2, y2) = (pts[1].x, pts[1].y);
        let (x3, y3) = (pts[2].x, pts[2].y);
        let (x4, y4) = (pts[3].x, pts[3].y);

        let y42 = y4 / y2;
        let y32 = y3 / y2;
        let x43 = (x4 - x2 * y42) / (x3 - x2 * y32);
        let x = x43;
        let y = y42 + x43 * (1.0 - y32);

        if y > 1.0 {
            return CurveKind::SingleInflection;
        }

        if y <= 1.0 && x <= 1.0 {
            let c = (-x * x + 2.0 * x + 3.0) / 4.0;

            if x <= 0.0 {
                let t0_loop = (-x * x + 3.0 * x) / 3.0;
                if is_equal(y, t0_loop) {
                    return CurveKind::LoopBegin;
                }
                if t0_loop < y && y < c {
                    return CurveKind::Loop;
                }
            }

            if (0.0..=1.0).contains(&x) {
                let t1_loop = (3.0_f64.sqrt() * (4.0 * x - x * x).sqrt() - x) / 2.0;
                if is_equal(y, t1_loop) {
                    return CurveKind::LoopEnd;
                }
                if t1_loop < y && y < c {
                    return CurveKind::Loop;
                }
            }

            if is_equal(y, c) {
                return CurveKind::Cusp;
            }
            if y > c {
                return CurveKind::DoubleInflection;
            }
        }
        CurveKind::Plain
    }

    /// Returns the parameters in `[0, 1]` where the curvature switches
    /// direction, from the quadratic in the aligned control-point cross
    /// terms.
    #[must_use]
    pub fn inflection_pts(&self) -> Vec<f64> {
        let aligned = self.align_on_x();
        let pts = aligned.curve.pts;

        let a = pts[2].x * pts[1].y;
        let b = pts[3].x * pts[1].y;
        let c = pts[1].x * pts[2].y;
        let d = pts[3].x * pts[2].y;

        let x = -3.0 * a + 2.0 * b + 3.0 * c - d;
        let y = 3.0 * a - b - 3.0 * c;
        let z = c - a;

        Quadratic::new(x, y, z)
            .roots()
            .into_iter()
            .filter(|r| (0.0..=1.0).contains(r))
            .collect()
    }

    /// Checks all four control points in order. NaN anywhere takes
    /// priority over infinities.
    ///
    /// # Errors
    ///
    /// Returns the offending classification for a non-real control point.
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
            None => Ok(*self),
        }
    }
}

impl OrderedPts for Bezier {
    fn points(&self) -> Vec<Point2> {
        self.pts.to_vec()
    }
}

impl fmt::Display for Bezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bezier[ Curve({}, {}, t, 0, 1) ]",
            self.x.text('t', false),
            self.y.text('t', false)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::is_equal_points;
    use crate::math::transform_2d::{is_equal_pt, is_equal_vec};

    fn pt(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn sample() -> Bezier {
        Bezier::new(pt(10.0, 10.0), pt(10.0, 40.0), pt(50.0, 45.0), pt(45.0, -10.0))
    }

    #[test]
    fn identity_and_display() {
        let a = sample();
        assert_eq!(
            a.to_string(),
            "Bezier[ Curve(-85t^3+120t^2+0t+10, -35t^3-75t^2+90t+10, t, 0, 1) ]"
        );
        assert!(is_equal_pt(&a.pt_at_t(0.0), &pt(10.0, 10.0)));
        assert!(is_equal_pt(&a.begin(), &pt(10.0, 10.0)));
        assert!(is_equal_pt(&a.pt_at_t(0.33), &pt(20.013_355, 30.274_705)));
        assert!(is_equal_pt(&a.pt_at_t(0.5), &pt(29.375, 31.875)));
        assert!(is_equal_pt(&a.pt_at_t(0.67), &pt(38.303_145, 26.105_795)));
        assert!(is_equal_pt(&a.pt_at_t(1.0), &pt(45.0, -10.0)));
        assert!(is_equal_pt(&a.end(), &pt(45.0, -10.0)));
    }

    #[test]
    fn split_matches_closed_form_fixture() {
        let a = sample();
        let (left, right) = a.split_at_t(0.33);
        let want_left = Bezier::new(
            pt(10.0, 10.0),
            pt(10.0, 19.9),
            pt(14.356, 27.0775),
            pt(20.013_355, 30.274_705),
        );
        let want_right = Bezier::new(
            pt(20.013_355, 30.274_705),
            pt(31.4995, 36.766),
            pt(48.35, 26.85),
            pt(45.0, -10.0),
        );
        assert!(is_equal_points(&left, &want_left));
        assert!(is_equal_points(&right, &want_right));
    }

    #[test]
    fn split_preserves_endpoints_and_continuity() {
        for t in [0.25, 0.33, 0.5, 0.67, 0.75] {
            let a = sample();
            let (left, right) = a.split_at_t(t);
            assert!(is_equal_pt(&left.begin(), &a.begin()));
            assert!(is_equal_pt(&right.end(), &a.end()));
            // Both halves meet at the split point, which is the original
            // curve's point at t.
            let meet = a.pt_at_t(t);
            assert!(is_equal_pt(&left.end(), &meet));
            assert!(is_equal_pt(&right.begin(), &meet));
            assert!(is_equal_pt(&left.pt_at_t(1.0), &meet));
            assert!(is_equal_pt(&right.pt_at_t(0.0), &meet));
        }
    }

    #[test]
    fn tangents_and_normals() {
        let a = sample();
        let (tangent, normal) = a.tangent_at_t(0.33);
        assert!(is_equal_vec(&tangent, &Vector2::new(51.4305, 29.0655)));
        assert!(is_equal_vec(&normal, &Vector2::new(-29.0655, 51.4305)));
        let (tangent, normal) = a.tangent_at_t(0.67);
        assert!(is_equal_vec(&tangent, &Vector2::new(46.3305, -57.6345)));
        assert!(is_equal_vec(&normal, &Vector2::new(57.6345, 46.3305)));
    }

    #[test]
    fn bounding_boxes() {
        let cases = [
            (sample(), (10.0, -10.0), (45.432_526, 32.126_252)),
            (
                Bezier::new(pt(51.0, 113.0), pt(37.0, 245.0), pt(138.0, 245.0), pt(152.0, 150.0)),
                (49.672_082, 113.0),
                (152.0, 217.192_92),
            ),
            (
                Bezier::new(pt(285.0, 39.0), pt(129.0, 126.0), pt(248.0, 201.0), pt(127.0, 32.0)),
                (127.0, 32.0),
                (285.0, 133.130_906),
            ),
        ];
        for (curve, min, max) in cases {
            let b = curve.bounding_box();
            assert!(is_equal_pt(&b.min_pt(), &pt(min.0, min.1)), "{}", b.min_pt());
            assert!(is_equal_pt(&b.max_pt(), &pt(max.0, max.1)), "{}", b.max_pt());
        }
    }

    #[test]
    fn fast_box_is_control_point_extent() {
        let a = sample();
        let b = a.fast_box();
        assert_eq!(b.min_pt(), pt(10.0, -10.0));
        assert_eq!(b.max_pt(), pt(50.0, 45.0));
    }

    #[test]
    fn arc_lengths() {
        let cases = [
            (sample(), 81.788_937_763_119_1),
            (
                Bezier::new(
                    pt(-10.0, -10.0),
                    pt(100.0, 400.0),
                    pt(500.0, 450.0),
                    pt(450.0, -100.0),
                ),
                944.927_455_012_432,
            ),
            (
                Bezier::new(pt(70.0, 250.0), pt(120.0, 15.0), pt(20.0, 95.0), pt(225.0, 80.0)),
                306.213_792_489_965_2,
            ),
        ];
        for (curve, want) in cases {
            assert!(is_equal(curve.length(), want), "{}", curve.length());
            let approx = curve.approx_length(32);
            assert!(approx < curve.length());
            assert!(curve.length() - approx < 0.5);
        }
    }

    #[test]
    fn alignment_frame() {
        let a = sample();
        let aligned = a.align_on_x();
        assert!(is_equal_vec(&aligned.translate, &Vector2::new(-10.0, -10.0)));
        assert!(is_equal(aligned.theta, -5.764_037_121_173_873));
        assert!(is_equal(aligned.scale, 40.311_288_741));
        let want = Bezier::new(
            pt(0.0, 0.0),
            pt(-0.369_230_769, 0.646_153_846),
            pt(0.430_769_231, 1.246_153_846),
            pt(1.0, 0.0),
        );
        assert!(is_equal_points(&aligned.curve, &want));
    }

    #[test]
    fn aligned_roots() {
        let a = sample();
        let aligned = a.align_on_x();
        let (xroots, yroots) = aligned.curve.roots();
        assert_eq!(xroots.len(), 2, "{xroots:?}");
        assert!(is_equal(xroots[0], 0.370_609_571_929_4));
        assert!(is_equal(xroots[1], 0.0));
        assert_eq!(yroots.len(), 2, "{yroots:?}");
        assert!(is_equal(yroots[0], 1.0));
        assert!(is_equal(yroots[1], 0.0));
    }

    #[test]
    fn tight_box_fixture() {
        let a = sample();
        let want = Polygon::new(vec![
            pt(6.712_347_988, 11.878_658_293),
            pt(45.0, -10.0),
            pt(59.532_851_496, 15.432_490_118),
            pt(21.245_199_484, 37.311_148_411),
        ]);
        assert!(is_equal_points(&a.tight_box(), &want), "{}", a.tight_box());
    }

    #[test]
    fn inflection_points() {
        assert!(sample().inflection_pts().is_empty());

        let b = Bezier::new(pt(285.0, 39.0), pt(129.0, 126.0), pt(248.0, 201.0), pt(127.0, 32.0));
        let inflections = b.inflection_pts();
        assert_eq!(inflections.len(), 2, "{inflections:?}");
        assert!(is_equal(inflections[0], 0.438_079_085_841_890_87));
        assert!(is_equal(inflections[1], 0.719_351_608_642_247_6));

        let c = Bezier::new(pt(70.0, 250.0), pt(120.0, 15.0), pt(20.0, 95.0), pt(225.0, 80.0));
        let inflections = c.inflection_pts();
        assert_eq!(inflections.len(), 2, "{inflections:?}");
        assert!(is_equal(inflections[0], 0.326_650_590_137_759_93));
        assert!(is_equal(inflections[1], 0.729_566_947_289_676_6));
    }

    #[test]
    fn curve_kinds() {
        let cases = [
            (sample(), CurveKind::Plain),
            (
                Bezier::new(
                    pt(-10.0, -10.0),
                    pt(100.0, 400.0),
                    pt(500.0, 450.0),
                    pt(450.0, -100.0),
                ),
                CurveKind::Plain,
            ),
            (
                Bezier::new(pt(396.0, 34.0), pt(89.0, 120.0), pt(199.0, 295.0), pt(260.0, 80.0)),
                CurveKind::Loop,
            ),
            (
                Bezier::new(pt(285.0, 39.0), pt(129.0, 126.0), pt(248.0, 201.0), pt(127.0, 32.0)),
                CurveKind::DoubleInflection,
            ),
            (
                Bezier::new(pt(70.0, 250.0), pt(120.0, 15.0), pt(20.0, 95.0), pt(225.0, 80.0)),
                CurveKind::DoubleInflection,
            ),
        ];
        for (curve, want) in cases {
            assert_eq!(curve.curve_kind(), want, "{curve}");
        }
    }

    #[test]
    fn fallibility() {
        assert!(sample().or_err().is_ok());
        let b = Bezier::new(
            pt(f64::INFINITY, 0.0),
            pt(0.0, f64::NAN),
            pt(0.0, 0.0),
            pt(1.0, 1.0),
        );
        assert_eq!(b.or_err(), Err(NonRealError::NaN));
    }
}
