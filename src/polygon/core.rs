//! Core polygon type and even-odd containment.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed: edge `i` connects vertex `i` to vertex
/// `(i + 1) % n`. Vertices are read-only during visibility processing; the
/// engine never mutates a scene polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon in winding order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    ///
    /// A geometrically meaningful polygon needs at least three vertices;
    /// the visibility engine rejects anything smaller.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from coordinate pairs.
    #[inline]
    pub fn from_coords(coords: &[(F, F)]) -> Self {
        Self {
            vertices: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    /// Returns the number of vertices (equal to the number of edges).
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the boundary edges in winding order.
    ///
    /// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`, including the
    /// closing edge back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Tests if a point is inside the polygon (even-odd rule).
    ///
    /// See [`polygon_contains`] for the exact boundary semantics.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }
}

/// Tests if a point is inside a polygon using even-odd ray casting.
///
/// A ray is cast from the point toward +x and crossings with the boundary
/// are counted under a half-open rule: an edge counts when `point.y` is
/// strictly greater than the edge's lower y and at most its upper y. This
/// keeps a crossing through a shared vertex from being counted twice.
/// Horizontal edges never satisfy the y test and are skipped.
///
/// Comparisons are exact, with no tolerance. Points exactly on the boundary
/// may classify either way; callers must not rely on boundary behavior.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut p1 = vertices[n - 1];
    for i in 0..n {
        let p2 = vertices[i];

        if point.y > p1.y.min(p2.y)
            && point.y <= p1.y.max(p2.y)
            && point.x <= p1.x.max(p2.x)
            && p1.y != p2.y
        {
            // x where the edge crosses the horizontal line through the point
            let x_cross = (point.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
            if p1.x == p2.x || point.x <= x_cross {
                inside = !inside;
            }
        }

        p1 = p2;
    }

    inside
}

/// Tests if a point is inside at least one polygon of the given collection.
pub fn point_in_any_polygon<F: Float>(point: Point2<F>, polygons: &[Polygon<F>]) -> bool {
    polygons.iter().any(|poly| poly.contains(point))
}
