use crate::alpha::{normalize_anticlockwise, triangulate, AlphaFilter, ReconstructPerimeter};
use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::collapse_coincident;
use crate::math::Point2;

/// Extracts the alpha-shape outline of a point cloud as an ordered,
/// anticlockwise-wound polygon.
///
/// The pipeline runs Delaunay triangulation, the circumradius filter, the
/// boundary-edge walk, and winding normalization, in that order. Each stage
/// hands its output to the next by value. The result is a closed polygon
/// stored without a duplicated endpoint, ready for offsetting or extrusion.
#[derive(Debug)]
pub struct ExtractOutline {
    alpha: f64,
}

impl ExtractOutline {
    /// Creates a new outline extraction for the given alpha.
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Executes the pipeline over `points`.
    ///
    /// # Errors
    ///
    /// - `ConfigError` for negative, zero, or non-finite alpha (checked
    ///   before any computation)
    /// - `GeometryError::TooFewPoints` for fewer than 3 points
    /// - `GeometryError::NoBoundary` when the filter retains no triangles
    ///   (alpha too tight, or a fully collinear cloud)
    /// - `BoundaryError` when the boundary edge set does not form a single
    ///   simple cycle
    pub fn execute(&self, points: &[Point2]) -> Result<Vec<Point2>> {
        crate::alpha::validate_alpha(self.alpha)?;
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints(points.len()).into());
        }

        let triangles = triangulate(points)?;
        let counts = AlphaFilter::new(self.alpha).execute(&triangles, points)?;
        let boundary = counts.boundary_edges();
        if boundary.is_empty() {
            return Err(GeometryError::NoBoundary { alpha: self.alpha }.into());
        }

        let cycle = ReconstructPerimeter::new(self.alpha).execute(&boundary)?;
        let path: Vec<Point2> = cycle.into_iter().map(|i| points[i]).collect();

        // Coincident input points collapse to one triangulation vertex, but
        // the walk itself must never emit a zero-length step either way.
        let path = collapse_coincident(&path);

        Ok(normalize_anticlockwise(path))
    }
}
