//! Edge clipping against occluding polygons.

use super::intersect::segment_intersection;
use crate::polygon::{point_in_any_polygon, Polygon};
use crate::primitives::Segment2;
use num_traits::Float;

/// Partitions one boundary edge into visible and occluded sub-segments.
///
/// The edge is split at every intersection with an edge of any polygon in
/// `occluders`, and each resulting piece is classified by its midpoint:
/// outside every occluder means visible, inside at least one means occluded.
/// Returns `(visible, occluded)`.
///
/// The pieces of both collections together partition the edge exactly: in
/// sorted order they chain end-to-start with no gaps or overlaps. Split
/// points are sorted lexicographically by (x, y), which matches position
/// along the edge for any edge that is not perfectly vertical; coincident
/// intersection points produce zero-length pieces, which are kept.
pub fn clip_edge<F: Float>(
    edge: Segment2<F>,
    occluders: &[Polygon<F>],
) -> (Vec<Segment2<F>>, Vec<Segment2<F>>) {
    let mut cuts = vec![edge.start, edge.end];

    for poly in occluders {
        for other in poly.edges() {
            if let Some(p) = segment_intersection(edge, other) {
                cuts.push(p);
            }
        }
    }

    cuts.sort_by(|a, b| a.lexicographic_cmp(b));

    let mut visible = Vec::new();
    let mut occluded = Vec::new();

    for pair in cuts.windows(2) {
        let piece = Segment2::new(pair[0], pair[1]);
        if point_in_any_polygon(piece.midpoint(), occluders) {
            occluded.push(piece);
        } else {
            visible.push(piece);
        }
    }

    (visible, occluded)
}
