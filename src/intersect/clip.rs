use crate::geometry::{Rect, Segment};
use crate::math::{is_zero, Point2};

/// Clips a segment against an axis-aligned rectangle via Liang-Barsky.
///
/// Each rectangle edge contributes a directed distance from the segment
/// start; edges the segment travels toward tighten the entering parametric
/// bound, edges it travels away from tighten the exiting bound. When the
/// entering bound exceeds the exiting bound the segment misses the
/// rectangle entirely.
#[must_use]
pub fn clip_segment(rect: &Rect, seg: &Segment) -> Option<Segment> {
    let begin = seg.begin();
    let d = seg.end() - begin;
    let (min, max) = (rect.min_pt(), rect.max_pt());

    let p = [-d.x, d.x, -d.y, d.y];
    let q = [
        begin.x - min.x,
        max.x - begin.x,
        begin.y - min.y,
        max.y - begin.y,
    ];

    let mut enter = 0.0_f64;
    let mut exit = 1.0_f64;
    for (&pi, &qi) in p.iter().zip(&q) {
        if is_zero(pi) {
            // Parallel to this boundary: outside the half-plane means the
            // whole segment misses.
            if qi < 0.0 {
                return None;
            }
            continue;
        }
        let r = qi / pi;
        if pi < 0.0 {
            enter = enter.max(r);
        } else {
            exit = exit.min(r);
        }
    }

    if enter > exit {
        return None;
    }
    Some(Segment::new(
        Point2::new(begin.x + d.x * enter, begin.y + d.y * enter),
        Point2::new(begin.x + d.x * exit, begin.y + d.y * exit),
    ))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::math::transform_2d::is_equal_pt;

    fn rect() -> Rect {
        Rect::new(Point2::new(1.0, 1.0), Point2::new(5.0, 5.0))
    }

    #[test]
    fn clips_a_diagonal_to_the_corners() {
        let seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(6.0, 6.0));
        let clipped = clip_segment(&rect(), &seg).expect("crossing segment");
        assert!(is_equal_pt(&clipped.begin(), &Point2::new(1.0, 1.0)));
        assert!(is_equal_pt(&clipped.end(), &Point2::new(5.0, 5.0)));
    }

    #[test]
    fn keeps_an_interior_segment_whole() {
        let seg = Segment::new(Point2::new(2.0, 2.0), Point2::new(3.0, 4.0));
        let clipped = clip_segment(&rect(), &seg).expect("interior segment");
        assert!(is_equal_pt(&clipped.begin(), &seg.begin()));
        assert!(is_equal_pt(&clipped.end(), &seg.end()));
    }

    #[test]
    fn rejects_a_miss() {
        let seg = Segment::new(Point2::new(6.0, 0.0), Point2::new(8.0, 8.0));
        assert!(clip_segment(&rect(), &seg).is_none());
        let seg = Segment::new(Point2::new(0.0, 6.0), Point2::new(3.0, 6.0));
        assert!(clip_segment(&rect(), &seg).is_none());
    }

    #[test]
    fn entering_bound_beats_exiting_bound_on_a_corner_miss() {
        // Passes below-right of the box: enters in x after exiting in y.
        let seg = Segment::new(Point2::new(4.0, -2.0), Point2::new(8.0, 2.0));
        assert!(clip_segment(&rect(), &seg).is_none());
    }
}
