//! Scene-level visibility computation.

use super::clip::clip_edge;
use crate::error::HiddenLineError;
use crate::polygon::Polygon;
use crate::primitives::Segment2;
use num_traits::Float;

/// Default polygon cap per scene.
const DEFAULT_MAX_POLYGONS: usize = 8;

/// The classified boundary segments of one scene.
///
/// Both collections are ordered by the scene traversal: polygons in input
/// order, edges in winding order, pieces in split order along each edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility<F> {
    /// Edge pieces not covered by any other polygon.
    pub visible: Vec<Segment2<F>>,
    /// Edge pieces hidden inside at least one other polygon.
    pub occluded: Vec<Segment2<F>>,
}

/// Computes which parts of each polygon's boundary are hidden by the others.
///
/// The engine is a stateless batch computation: one [`compute`] call turns
/// one scene into one [`Visibility`], with nothing retained between calls.
/// The only configuration is the polygon cap and what to do when a scene
/// exceeds it.
///
/// [`compute`]: VisibilityEngine::compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEngine {
    max_polygons: usize,
    reject_oversize: bool,
}

impl VisibilityEngine {
    /// Creates an engine with the default cap of 8 polygons.
    ///
    /// Oversize scenes are truncated to the first `max_polygons` entries;
    /// use [`rejecting_oversize`](Self::rejecting_oversize) to get an error
    /// instead.
    #[inline]
    pub fn new() -> Self {
        Self {
            max_polygons: DEFAULT_MAX_POLYGONS,
            reject_oversize: false,
        }
    }

    /// Sets the maximum number of polygons processed per scene.
    #[inline]
    pub fn with_max_polygons(mut self, max: usize) -> Self {
        self.max_polygons = max;
        self
    }

    /// Makes oversize scenes an error rather than silently truncating.
    #[inline]
    pub fn rejecting_oversize(mut self) -> Self {
        self.reject_oversize = true;
        self
    }

    /// Returns the configured polygon cap.
    #[inline]
    pub fn max_polygons(&self) -> usize {
        self.max_polygons
    }

    /// Classifies every boundary edge of every polygon in the scene.
    ///
    /// Each edge is clipped against all *other* polygons of the (capped)
    /// scene, regardless of distance. Input polygons are never mutated, and
    /// repeated calls over the same scene return identical results.
    ///
    /// # Errors
    ///
    /// - [`HiddenLineError::DegeneratePolygon`] if a retained polygon has
    ///   fewer than three vertices.
    /// - [`HiddenLineError::SceneTooLarge`] if the scene exceeds the cap and
    ///   the engine was configured with
    ///   [`rejecting_oversize`](Self::rejecting_oversize).
    pub fn compute<F: Float>(
        &self,
        scene: &[Polygon<F>],
    ) -> Result<Visibility<F>, HiddenLineError> {
        if self.reject_oversize && scene.len() > self.max_polygons {
            return Err(HiddenLineError::SceneTooLarge {
                supplied: scene.len(),
                max: self.max_polygons,
            });
        }

        let scene = &scene[..scene.len().min(self.max_polygons)];

        for poly in scene {
            if poly.len() < 3 {
                return Err(HiddenLineError::DegeneratePolygon {
                    vertices: poly.len(),
                });
            }
        }

        let mut visible = Vec::new();
        let mut occluded = Vec::new();

        for (i, poly) in scene.iter().enumerate() {
            let occluders: Vec<Polygon<F>> = scene
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, p)| p.clone())
                .collect();

            for edge in poly.edges() {
                let (vis, occ) = clip_edge(edge, &occluders);
                visible.extend(vis);
                occluded.extend(occ);
            }
        }

        Ok(Visibility { visible, occluded })
    }
}

impl Default for VisibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes scene visibility with a default engine.
///
/// Convenience front for `VisibilityEngine::new().compute(scene)`.
pub fn compute_visibility<F: Float>(
    scene: &[Polygon<F>],
) -> Result<Visibility<F>, HiddenLineError> {
    VisibilityEngine::new().compute(scene)
}
