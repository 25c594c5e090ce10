//! Error types for hidden-line computations.

use thiserror::Error;

/// Errors that can occur while computing visibility for a polygon scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HiddenLineError {
    /// A polygon in the scene has fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {vertices}")]
    DegeneratePolygon {
        /// Number of vertices the offending polygon has.
        vertices: usize,
    },

    /// The scene holds more polygons than the engine accepts.
    ///
    /// Only produced by engines configured with
    /// [`rejecting_oversize`](crate::VisibilityEngine::rejecting_oversize);
    /// the default engine truncates instead.
    #[error("scene has {supplied} polygons, engine accepts at most {max}")]
    SceneTooLarge {
        /// Number of polygons supplied.
        supplied: usize,
        /// Maximum the engine is configured to accept.
        max: usize,
    },
}
