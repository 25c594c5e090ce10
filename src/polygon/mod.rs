//! Polygon type and containment tests.
//!
//! # Example
//!
//! ```
//! use hiddenline::polygon::Polygon;
//! use hiddenline::Point2;
//!
//! let square = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//!
//! assert!(square.contains(Point2::new(0.5, 0.5)));
//! assert!(!square.contains(Point2::new(2.0, 2.0)));
//! ```

mod core;

pub use core::{point_in_any_polygon, polygon_contains, Polygon};
