//! Floating-point geometric value types.

mod point2;
mod segment2;
mod vec2;

pub use point2::Point2;
pub use segment2::Segment2;
pub use vec2::Vec2;
