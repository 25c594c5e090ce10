//! hiddenline - Hidden-line removal for 2D polygon scenes
//!
//! Given a set of simple polygons in the plane, this crate determines which
//! portions of each polygon's boundary edges are visible and which are hidden
//! behind the interior of another polygon. The output is two collections of
//! line segments — visible and occluded — ready for a renderer to draw as,
//! say, solid and dashed strokes.
//!
//! # Example
//!
//! ```
//! use hiddenline::{compute_visibility, Polygon};
//!
//! // Two overlapping triangles
//! let scene = vec![
//!     Polygon::from_coords(&[(3.0, 3.0), (7.0, 3.0), (5.0, 7.0)]),
//!     Polygon::from_coords(&[(1.0, 5.0), (5.0, 5.0), (3.0, 9.0)]),
//! ];
//!
//! let result = compute_visibility(&scene).unwrap();
//! assert!(!result.visible.is_empty());
//! assert!(!result.occluded.is_empty());
//! ```

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod visibility;

pub use error::HiddenLineError;
pub use polygon::{point_in_any_polygon, polygon_contains, Polygon};
pub use primitives::{Point2, Segment2, Vec2};
pub use visibility::{
    clip_edge, compute_visibility, segment_intersection, Visibility, VisibilityEngine,
};
