use std::fmt;

use nalgebra::{SMatrix, SVector, Vector3, Vector4};

use crate::equations::{Cubic, Derivable, Linear, Polynomial, Quadratic, Quartic};
use crate::math::gauss::{ABSCISSAE, WEIGHTS};
use crate::math::transform_2d::limits_pts;
use crate::math::{human_format, is_zero, Matrix3, Matrix4, Point2, Vector2};

use super::Rect;

/// Builds the cached cubic coordinate polynomials for four control points
/// by applying the fixed cubic Bernstein basis matrix to the reversed
/// control-coordinate vector.
pub(crate) fn cubic_from_points(
    p1: Point2,
    p2: Point2,
    p3: Point2,
    p4: Point2,
) -> (Cubic, Cubic) {
    let m = Matrix4::new(
        1.0, -3.0, 3.0, -1.0, //
        0.0, 3.0, -6.0, 3.0, //
        0.0, 0.0, 3.0, -3.0, //
        0.0, 0.0, 0.0, 1.0,
    );
    let xs = m * Vector4::new(p4.x, p3.x, p2.x, p1.x);
    let ys = m * Vector4::new(p4.y, p3.y, p2.y, p1.y);
    (Cubic::from_vector(xs), Cubic::from_vector(ys))
}

/// A curve defined by a pair of parametric polynomials over a `[min, max]`
/// domain.
///
/// The curve does not keep the points that created it, only the component
/// polynomials; the domain bounds provide range checking, and evaluation
/// clamps into the domain rather than extrapolating. Both components share
/// one concrete polynomial degree, which keeps the derivative chain
/// statically typed for the bounding-box and arc-length machinery.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamCurve<P> {
    pub x: P,
    pub y: P,
    pub min: f64,
    pub max: f64,
}

impl ParamCurve<Linear> {
    /// The straight segment from `p1` to `p2` as a degree-1 curve.
    #[must_use]
    pub fn linear(p1: Point2, p2: Point2) -> Self {
        Self {
            x: Linear::new(p2.x - p1.x, p1.x),
            y: Linear::new(p2.y - p1.y, p1.y),
            min: 0.0,
            max: 1.0,
        }
    }
}

impl ParamCurve<Quadratic> {
    /// The quadratic Bézier curve through the given control points.
    #[must_use]
    pub fn quadratic(p1: Point2, p2: Point2, p3: Point2) -> Self {
        let m = Matrix3::new(
            1.0, -2.0, 1.0, //
            0.0, 2.0, -2.0, //
            0.0, 0.0, 1.0,
        );
        let xs = m * Vector3::new(p3.x, p2.x, p1.x);
        let ys = m * Vector3::new(p3.y, p2.y, p1.y);
        Self {
            x: Quadratic::from_vector(xs),
            y: Quadratic::from_vector(ys),
            min: 0.0,
            max: 1.0,
        }
    }
}

impl ParamCurve<Cubic> {
    /// The cubic Bézier curve for the given control points. If more cubic
    /// Bézier features are needed, use [`super::Bezier`] instead.
    #[must_use]
    pub fn cubic(p1: Point2, p2: Point2, p3: Point2, p4: Point2) -> Self {
        let (x, y) = cubic_from_points(p1, p2, p3, p4);
        Self {
            x,
            y,
            min: 0.0,
            max: 1.0,
        }
    }
}

impl ParamCurve<Quartic> {
    /// The degree-4 Bézier curve for the given control points.
    #[must_use]
    pub fn quartic(p1: Point2, p2: Point2, p3: Point2, p4: Point2, p5: Point2) -> Self {
        let m = SMatrix::<f64, 5, 5>::new(
            1.0, -4.0, 6.0, -4.0, 1.0, //
            0.0, 4.0, -12.0, 12.0, -4.0, //
            0.0, 0.0, 6.0, -12.0, 6.0, //
            0.0, 0.0, 0.0, 4.0, -4.0, //
            0.0, 0.0, 0.0, 0.0, 1.0,
        );
        let xs = m * SVector::<f64, 5>::new(p5.x, p4.x, p3.x, p2.x, p1.x);
        let ys = m * SVector::<f64, 5>::new(p5.y, p4.y, p3.y, p2.y, p1.y);
        Self {
            x: Quartic::new(xs[0], xs[1], xs[2], xs[3], xs[4]),
            y: Quartic::new(ys[0], ys[1], ys[2], ys[3], ys[4]),
            min: 0.0,
            max: 1.0,
        }
    }
}

impl<P: Derivable + Clone> ParamCurve<P> {
    /// Evaluates the curve at `t`, clamped into the parameter domain.
    #[must_use]
    pub fn pt_at_t(&self, t: f64) -> Point2 {
        let t = t.clamp(self.min, self.max);
        Point2::new(self.x.at_t(t), self.y.at_t(t))
    }

    /// Returns the tangent and the 90°-rotated normal at `t`, clamped into
    /// the parameter domain. Neither vector is normalized.
    #[must_use]
    pub fn tangent_at_t(&self, t: f64) -> (Vector2, Vector2) {
        let t = t.clamp(self.min, self.max);
        let i = self.x.derivative().at_t(t);
        let j = self.y.derivative().at_t(t);
        (Vector2::new(i, j), Vector2::new(-j, i))
    }

    /// Returns the component roots restricted to the parameter domain.
    /// Values within the zero tolerance of a domain endpoint snap to the
    /// exact endpoint, avoiding boundary flicker.
    #[must_use]
    pub fn roots(&self) -> (Vec<f64>, Vec<f64>) {
        (
            self.filter_roots(self.x.roots()),
            self.filter_roots(self.y.roots()),
        )
    }

    fn filter_roots(&self, roots: Vec<f64>) -> Vec<f64> {
        roots
            .into_iter()
            .filter_map(|mut r| {
                if is_zero(r - self.min) {
                    r = self.min;
                } else if is_zero(self.max - r) {
                    r = self.max;
                }
                (self.min <= r && r <= self.max).then_some(r)
            })
            .collect()
    }

    /// Returns the axis-aligned bounding box: the coordinate-wise extent of
    /// the curve at the domain endpoints and at every in-domain root of the
    /// component derivatives (the candidate local extrema).
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let mut ts = vec![self.min, self.max];
        ts.extend(self.x.derivative().roots());
        ts.extend(self.y.derivative().roots());

        let pts: Vec<Point2> = ts
            .into_iter()
            .filter(|&t| self.min <= t && t <= self.max)
            .map(|t| self.pt_at_t(t))
            .collect();
        let (lx, mx, ly, my) = limits_pts(&pts);
        Rect::new(Point2::new(lx, ly), Point2::new(mx, my))
    }

    /// Arc length via fixed 64-point Gauss-Legendre quadrature of the
    /// derivative magnitude, rescaled to the parameter domain.
    #[must_use]
    pub fn length(&self) -> f64 {
        let dx = self.x.derivative();
        let dy = self.y.derivative();
        let half = (self.max - self.min) / 2.0;
        let mid = (self.max + self.min) / 2.0;

        let mut sum = 0.0;
        for (w, t) in WEIGHTS.iter().zip(&ABSCISSAE) {
            let u = half * t + mid;
            sum += w * dx.at_t(u).hypot(dy.at_t(u));
        }
        sum * half
    }

    /// Treats the curve as `steps` line segments and sums their lengths.
    /// Always an under-estimate of [`ParamCurve::length`]; a cheap
    /// approximation, not a substitute for correctness-sensitive use.
    #[must_use]
    pub fn approx_length(&self, steps: usize) -> f64 {
        let mut prev = self.pt_at_t(self.min);
        let mut sum = 0.0;
        for h in 1..=steps {
            #[allow(clippy::cast_precision_loss)]
            let frac = h as f64 / steps as f64;
            let curr = self.pt_at_t(self.min + (self.max - self.min) * frac);
            sum += (curr - prev).norm();
            prev = curr;
        }
        sum
    }

    /// Splits the curve at parameter `t` into two curves sharing the same
    /// polynomials with narrowed domains. No coefficients are recomputed:
    /// the domain narrows, the definition does not change.
    #[must_use]
    pub fn split_at_t(&self, t: f64) -> (Self, Self) {
        let t = t.clamp(self.min, self.max);
        (
            Self {
                x: self.x.clone(),
                y: self.y.clone(),
                min: self.min,
                max: t,
            },
            Self {
                x: self.x.clone(),
                y: self.y.clone(),
                min: t,
                max: self.max,
            },
        )
    }

    /// Splits the curve so the first part has approximately the target arc
    /// length.
    ///
    /// This is a derivative-free damped search: the split fraction is
    /// seeded by the fraction of total length, then corrected
    /// proportionally to the measured error, with the correction clamped
    /// to a window that shrinks by 0.75 each iteration until it falls
    /// below 0.01. It converges to within tolerance only; callers must not
    /// assume a bit-exact length match.
    #[must_use]
    pub fn split_at_length(&self, target: f64) -> (Self, Self) {
        let total = self.length();
        if is_zero(total) {
            return self.split_at_t(self.min);
        }

        let mut frac = (target / total).clamp(0.0, 1.0);
        let mut window = 1.0;
        let mut iterations = 0_u32;
        while window > 0.01 {
            let t = self.min + (self.max - self.min) * frac;
            let (head, _) = self.split_at_t(t);
            let diff = (target - head.length()) / total;
            frac = (frac + diff.clamp(-window, window)).clamp(0.0, 1.0);
            window *= 0.75;
            iterations += 1;
        }
        tracing::trace!(iterations, frac, "split_at_length converged");

        self.split_at_t(self.min + (self.max - self.min) * frac)
    }
}

impl<P: Derivable> fmt::Display for ParamCurve<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Curve({}, {}, t, {}, {})",
            self.x.text('t', false),
            self.y.text('t', false),
            human_format(9, self.min),
            human_format(9, self.max)
        )
    }
}
