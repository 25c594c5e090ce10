//! Exact segment-segment intersection.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Computes the intersection point of two line segments, if any.
///
/// Solves `a.start + t * a.direction() = b.start + u * b.direction()` for the
/// parameters `t` and `u` and returns the point only when both lie in
/// `[0, 1]`, endpoints inclusive.
///
/// Returns `None` when the denominator (the cross product of the two
/// direction vectors) is exactly zero, which covers parallel and collinear
/// configurations alike: collinear-overlapping segments are never reported
/// as intersecting. Comparisons are exact, with no tolerance; the exact
/// branches live here so a tolerant kernel could replace this function
/// without touching the clipper or the engine.
pub fn segment_intersection<F: Float>(a: Segment2<F>, b: Segment2<F>) -> Option<Point2<F>> {
    let da = a.direction();
    let db = b.direction();

    let denom = da.cross(db);
    if denom == F::zero() {
        return None;
    }

    let w = b.start - a.start;
    let t = w.cross(db) / denom;
    let u = w.cross(da) / denom;

    if t >= F::zero() && t <= F::one() && u >= F::zero() && u <= F::one() {
        Some(a.point_at(t))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crossing_diagonals() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
        let b = Segment2::from_coords(0.0, 2.0, 2.0, 0.0);

        let p = segment_intersection(a, b).unwrap();
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_returns_none() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Segment2::from_coords(0.0, 1.0, 1.0, 1.0);
        assert_eq!(segment_intersection(a, b), None);
    }

    #[test]
    fn test_collinear_overlap_returns_none() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 0.0);
        let b = Segment2::from_coords(1.0, 0.0, 3.0, 0.0);
        assert_eq!(segment_intersection(a, b), None);
    }

    #[test]
    fn test_lines_cross_outside_segments() {
        // The infinite lines meet at (3, 3), beyond both segments.
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 1.0);
        let b = Segment2::from_coords(2.0, 4.0, 4.0, 2.0);
        assert_eq!(segment_intersection(a, b), None);
    }

    #[test]
    fn test_endpoint_touch_is_inclusive() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 0.0);
        let b = Segment2::from_coords(2.0, -1.0, 2.0, 1.0);

        let p = segment_intersection(a, b).unwrap();
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric_in_arguments() {
        let a: Segment2<f64> = Segment2::from_coords(1.0, 0.0, 1.0, 4.0);
        let b = Segment2::from_coords(-1.0, 2.0, 3.0, 2.0);

        let p1 = segment_intersection(a, b).unwrap();
        let p2 = segment_intersection(b, a).unwrap();
        assert_relative_eq!(p1.x, p2.x, epsilon = 1e-12);
        assert_relative_eq!(p1.y, p2.y, epsilon = 1e-12);
    }
}
