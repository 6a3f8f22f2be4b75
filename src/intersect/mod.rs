//! Pairwise intersection algebra over the geometric value types.
//!
//! Every operation returns zero or more points (an empty vector means no
//! intersection); rectangle-rectangle returns zero or one rectangle. Two
//! coincident lines are treated as non-intersecting: parallel input is a
//! documented empty-result policy, not an error.

mod clip;

pub use clip::clip_segment;

use crate::equations::Polynomial;
use crate::geometry::{
    filter_ray_pts, rotate_or_translate_to_x_axis, Bezier, Line, OrderedPts, Polygon, Ray, Rect,
    Segment,
};
use crate::math::transform_2d::{is_equal_pt, limits_pts, sort_pts};
use crate::math::{is_equal, is_zero, Point2};

// --- Line dominant intersections ---

/// Returns the intersection point of two lines, or empty if the lines are
/// parallel, coincident, or degenerate.
///
/// Axis-aligned lines dispatch to direct coordinate reads to avoid
/// division instability; only two oblique lines reach the general
/// normalized-Y-form solve.
#[must_use]
pub fn line_line(a: &Line, b: &Line) -> Vec<Point2> {
    if is_equal(a.angle(), b.angle()) {
        // Parallel lines cannot meet in this geometry. Also catches the
        // same line passed twice.
        return Vec::new();
    }
    if a.is_unknown() || b.is_unknown() {
        return Vec::new();
    }

    let p = if a.is_vertical() || b.is_vertical() {
        let (other, vertical) = if a.is_vertical() { (b, a) } else { (a, b) };
        let x = vertical.x_for_y(0.0);
        Point2::new(x, other.y_for_x(x))
    } else if a.is_horizontal() || b.is_horizontal() {
        let (other, horizontal) = if a.is_horizontal() { (b, a) } else { (a, b) };
        let y = horizontal.y_for_x(0.0);
        Point2::new(other.x_for_y(y), y)
    } else {
        let (na, nb) = (a.normalize_y(), b.normalize_y());
        let (ma, _, ba) = na.abc();
        let (mb, _, bb) = nb.abc();

        let x = (bb - ba) / (mb - ma);
        Point2::new(x, b.y_for_x(x))
    };

    vec![p]
}

/// Returns the intersection points of a line and a ray.
#[must_use]
pub fn line_ray(a: &Line, b: &Ray) -> Vec<Point2> {
    filter_ray_pts(b, &line_line(a, &b.line()))
}

/// Returns the intersection points of a line and a segment.
///
/// The unbounded intersection is computed first, then rejected if it falls
/// outside the segment's coordinate bounding box (inclusive bounds).
#[must_use]
pub fn line_segment(a: &Line, b: &Segment) -> Vec<Point2> {
    let b_line = Line::from_points(b.begin(), b.end());
    let candidates = line_line(a, &b_line);
    if candidates.is_empty() {
        return Vec::new();
    }

    let (lx, mx, ly, my) = limits_pts(&b.points());
    for p in candidates {
        if lx <= p.x && p.x <= mx && ly <= p.y && p.y <= my {
            return vec![p];
        }
    }
    Vec::new()
}

/// Returns the intersection points of a line and a cubic Bézier.
///
/// After a cheap bounding-box rejection the control points are rotated so
/// the line becomes the X axis; the transformed curve's Y-polynomial roots
/// in `[0, 1]` are then mapped back through the original curve.
#[must_use]
pub fn line_bezier(a: &Line, b: &Bezier) -> Vec<Point2> {
    let bb = b.bounding_box();
    if rect_line(&bb, a).is_empty() {
        return Vec::new();
    }

    let pts = rotate_or_translate_to_x_axis(a, &b.points());
    let flat = Bezier::new(pts[0], pts[1], pts[2], pts[3]);

    flat.y_polynomial()
        .roots()
        .into_iter()
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| b.pt_at_t(t))
        .collect()
}

// --- Ray dominant intersections ---

/// Returns the intersection points of two rays.
#[must_use]
pub fn ray_ray(a: &Ray, b: &Ray) -> Vec<Point2> {
    filter_ray_pts(a, &filter_ray_pts(b, &line_line(&a.line(), &b.line())))
}

/// Returns the intersection points of a ray and a segment.
#[must_use]
pub fn ray_segment(a: &Ray, b: &Segment) -> Vec<Point2> {
    filter_ray_pts(a, &line_segment(&a.line(), b))
}

// --- Segment dominant intersections ---

/// Returns the intersection point of two segments, or empty.
///
/// The unbounded solve uses the determinant form; the point is kept only
/// inside the overlap of both segments' coordinate bounding boxes, with
/// points exactly on a bounding edge included.
#[must_use]
pub fn segment_segment(a: &Segment, b: &Segment) -> Vec<Point2> {
    let a1 = a.end().y - a.begin().y;
    let b1 = a.begin().x - a.end().x;
    let c1 = a1 * a.begin().x + b1 * a.begin().y;

    let a2 = b.end().y - b.begin().y;
    let b2 = b.begin().x - b.end().x;
    let c2 = a2 * b.begin().x + b2 * b.begin().y;

    let det = a1 * b2 - a2 * b1;
    if is_zero(det) {
        return Vec::new();
    }
    let x = (b2 * c1 - b1 * c2) / det;
    let y = (a1 * c2 - a2 * c1) / det;

    let (alx, amx, aly, amy) = limits_pts(&a.points());
    let (blx, bmx, bly, bmy) = limits_pts(&b.points());

    let (lx, mx) = (alx.max(blx), amx.min(bmx));
    let (ly, my) = (aly.max(bly), amy.min(bmy));

    if lx <= x && x <= mx && ly <= y && y <= my {
        return vec![Point2::new(x, y)];
    }
    Vec::new()
}

/// Returns the intersection points of a segment and a cubic Bézier.
#[must_use]
pub fn segment_bezier(a: &Segment, b: &Bezier) -> Vec<Point2> {
    let a_line = Line::from_points(a.begin(), a.end());
    let candidates = line_bezier(&a_line, b);
    if candidates.is_empty() {
        return Vec::new();
    }

    let (lx, mx, ly, my) = limits_pts(&a.points());
    candidates
        .into_iter()
        .filter(|p| lx <= p.x && p.x <= mx && ly <= p.y && p.y <= my)
        .collect()
}

// --- Rectangle dominant intersections ---

/// Returns the points where a line crosses a rectangle's boundary, by
/// clipping a spanning segment of the line against the rectangle.
#[must_use]
pub fn rect_line(a: &Rect, b: &Line) -> Vec<Point2> {
    let (min, max) = (a.min_pt(), a.max_pt());

    let seg = if b.is_vertical() {
        let x = b.x_for_y(0.0);
        Segment::new(Point2::new(x, min.y), Point2::new(x, max.y))
    } else if b.is_horizontal() {
        let y = b.y_for_x(0.0);
        Segment::new(Point2::new(min.x, y), Point2::new(max.x, y))
    } else {
        let ly = b.y_for_x(min.x);
        let my = b.y_for_x(max.x);
        if ly.is_finite() && my.is_finite() {
            Segment::new(Point2::new(min.x, ly), Point2::new(max.x, my))
        } else {
            // No fallback beyond this; let the segment carry the error.
            let lx = b.x_for_y(min.y);
            let mx = b.x_for_y(max.y);
            Segment::new(Point2::new(lx, min.y), Point2::new(mx, max.y))
        }
    };

    match clip_segment(a, &seg) {
        Some(clipped) => clipped.points(),
        None => Vec::new(),
    }
}

/// Returns the points where a segment crosses a rectangle's boundary:
/// the clipped endpoints that actually lie on the boundary.
#[must_use]
pub fn rect_segment(a: &Rect, b: &Segment) -> Vec<Point2> {
    let (min, max) = (a.min_pt(), a.max_pt());

    let Some(clipped) = clip_segment(a, b) else {
        return Vec::new();
    };

    let mut pts = Vec::with_capacity(2);
    for p in clipped.points() {
        let on_x = is_equal(p.x, min.x) || is_equal(p.x, max.x);
        let on_y = is_equal(p.y, min.y) || is_equal(p.y, max.y);
        if on_x || on_y {
            pts.push(p);
        }
    }
    pts
}

/// Returns the overlap of two rectangles, or `None` when they are
/// disjoint. Touching rectangles produce a degenerate zero-area overlap.
#[must_use]
pub fn rect_rect(a: &Rect, b: &Rect) -> Option<Rect> {
    let x = interval_overlap(
        a.min_pt().x,
        a.max_pt().x,
        b.min_pt().x,
        b.max_pt().x,
    )?;
    let y = interval_overlap(
        a.min_pt().y,
        a.max_pt().y,
        b.min_pt().y,
        b.max_pt().y,
    )?;
    Some(Rect::new(Point2::new(x.0, y.0), Point2::new(x.1, y.1)))
}

fn interval_overlap(amin: f64, amax: f64, bmin: f64, bmax: f64) -> Option<(f64, f64)> {
    if is_equal(amin, bmin) {
        return Some((amin, amax.min(bmax)));
    }
    let (amin, amax, bmin, bmax) = if bmin < amin {
        (bmin, bmax, amin, amax)
    } else {
        (amin, amax, bmin, bmax)
    };
    if bmin > amax {
        return None;
    }
    Some((bmin, amax.min(bmax)))
}

// --- Polygon dominant intersections ---

/// Returns the points where a segment crosses a polygon's sides, sorted
/// and deduplicated.
#[must_use]
pub fn polygon_segment(a: &Polygon, b: &Segment) -> Vec<Point2> {
    let mut found = Vec::new();
    for side in a.sides() {
        found.extend(segment_segment(&side, b));
    }
    if found.is_empty() {
        return Vec::new();
    }

    let found = sort_pts(found);
    let mut pts: Vec<Point2> = vec![found[0]];
    for p in &found[1..] {
        if let Some(&last) = pts.last() {
            if !is_equal_pt(&last, p) {
                pts.push(*p);
            }
        }
    }
    pts
}

// --- Bézier dominant intersections ---

/// Spatial tolerance below which a subdivided curve box counts as a point.
const BEZIER_LEAF_TOLERANCE: f64 = 0.005;
/// Distance within which neighboring leaf estimates merge into one point.
const BEZIER_CLUSTER_TOLERANCE: f64 = 0.05;
/// Hard cap on subdivision depth; near-tangential curves otherwise recurse
/// past any useful precision before the spatial tolerance triggers.
const BEZIER_MAX_DEPTH: usize = 48;

/// Returns the approximate intersection points of two cubic Béziers via
/// recursive bounding-box subdivision.
///
/// Control-point boxes prune non-overlapping branches; when both boxes
/// shrink under a fixed spatial tolerance the midpoint pair becomes an
/// intersection estimate. Estimates are then clustered, keeping the pair
/// with the smallest inter-curve distance in each cluster. The method is
/// numerical, not exact: tangential contacts tighter than the leaf
/// tolerance can be missed.
#[must_use]
pub fn bezier_bezier(a: &Bezier, b: &Bezier) -> Vec<Point2> {
    let mut buffer: Vec<(Point2, Point2)> = Vec::new();
    subdivide(a, b, 0, &mut buffer);

    if buffer.is_empty() {
        return Vec::new();
    }

    let (first_a, first_b) = buffer[0];
    let mut last = first_a;
    let mut dist = (first_b - first_a).norm();
    let mut ret = vec![first_a];
    for &(ap, bp) in &buffer[1..] {
        if (ap.x - last.x).abs() < BEZIER_CLUSTER_TOLERANCE
            && (ap.y - last.y).abs() < BEZIER_CLUSTER_TOLERANCE
        {
            let new_dist = (bp - ap).norm();
            if new_dist < dist {
                last = ap;
                dist = new_dist;
                if let Some(kept) = ret.last_mut() {
                    *kept = ap;
                }
            }
        } else {
            last = ap;
            dist = (bp - ap).norm();
            ret.push(ap);
        }
    }
    sort_pts(ret)
}

fn subdivide(a: &Bezier, b: &Bezier, depth: usize, out: &mut Vec<(Point2, Point2)>) {
    let (abox, bbox) = (a.fast_box(), b.fast_box());
    if rect_rect(&abox, &bbox).is_none() {
        return;
    }

    let (aw, ah) = abox.dims();
    let (bw, bh) = bbox.dims();
    let converged = aw < BEZIER_LEAF_TOLERANCE
        && ah < BEZIER_LEAF_TOLERANCE
        && bw < BEZIER_LEAF_TOLERANCE
        && bh < BEZIER_LEAF_TOLERANCE;
    if converged || depth >= BEZIER_MAX_DEPTH {
        if !converged {
            tracing::warn!(
                depth,
                "bezier intersection depth cap hit before spatial tolerance"
            );
        }
        out.push((a.pt_at_t(0.5), b.pt_at_t(0.5)));
        return;
    }

    let (a1, a2) = a.split_at_t(0.5);
    let (b1, b2) = b.split_at_t(0.5);
    subdivide(&a1, &b1, depth + 1, out);
    subdivide(&a1, &b2, depth + 1, out);
    subdivide(&a2, &b1, depth + 1, out);
    subdivide(&a2, &b2, depth + 1, out);
}
