//! Hidden-line visibility computation.
//!
//! Three layers, leaf first: [`segment_intersection`] is the numeric kernel,
//! [`clip_edge`] partitions one boundary edge into visible and occluded
//! pieces, and [`VisibilityEngine`] runs the clipper over every edge of
//! every polygon in a scene.
//!
//! # Example
//!
//! ```
//! use hiddenline::{Polygon, VisibilityEngine};
//!
//! let scene = vec![
//!     Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
//!     Polygon::from_coords(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]),
//! ];
//!
//! let result = VisibilityEngine::new().compute(&scene).unwrap();
//! // The inner square is hidden inside the outer one.
//! assert!(!result.occluded.is_empty());
//! ```

mod clip;
mod engine;
mod intersect;

pub use clip::clip_edge;
pub use engine::{compute_visibility, Visibility, VisibilityEngine};
pub use intersect::segment_intersection;
