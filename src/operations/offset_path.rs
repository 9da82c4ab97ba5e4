use crate::error::{ConfigError, GeometryError, Result};
use crate::math::polygon_2d::{left_normal, normalize_or_zero};
use crate::math::{Point2, Vector2};

/// Offsets a closed polygon by a distance using local per-vertex miter
/// geometry.
///
/// With the anticlockwise winding produced by
/// [`ExtractOutline`](super::ExtractOutline), the interior lies to the left
/// of each edge, so a positive distance moves the outline inward (inset) and
/// a negative distance moves it outward (outset). Output vertices appear in
/// input order (orientation-preserving).
///
/// Two kinds of vertex are dropped rather than offset: a vertex coincident
/// with a neighbour (zero-length edge, no normal exists) and a vertex whose
/// adjacent edges are exactly parallel (its offset point merges into the
/// next segment). Because of those drops, offsetting is not reversible in
/// general: `offset(offset(p, d), -d)` need not reproduce `p`.
///
/// No self-intersection check is performed; for distances large relative to
/// the local curvature the result may be non-simple, and validating or
/// clipping it is the caller's responsibility.
#[derive(Debug)]
pub struct OffsetPath {
    distance: f64,
}

impl OffsetPath {
    /// Creates a new offset operation for the given distance.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }

    /// Executes the offset over a closed polygon (first and last points
    /// adjacent, not duplicated).
    ///
    /// # Errors
    ///
    /// - `ConfigError::NonFinite` for a NaN or infinite distance
    /// - `GeometryError::TooFewPoints` for fewer than 3 points
    pub fn execute(&self, polygon: &[Point2]) -> Result<Vec<Point2>> {
        if !self.distance.is_finite() {
            return Err(ConfigError::NonFinite {
                parameter: "offset distance",
                value: self.distance,
            }
            .into());
        }
        let n = polygon.len();
        if n < 3 {
            return Err(GeometryError::TooFewPoints(n).into());
        }

        let mut result = Vec::with_capacity(n);
        for i in 0..n {
            let last = polygon[(i + n - 1) % n];
            let this = polygon[i];
            let next = polygon[(i + 1) % n];

            // vectors pointing to and from the current vertex
            let v0: Vector2 = this - last;
            let v1: Vector2 = next - this;

            // interior unit normals of the incoming and outgoing edges
            let u0 = normalize_or_zero(left_normal(v0));
            let u1 = normalize_or_zero(left_normal(v1));

            // coincident neighbour: no normal, nothing to offset
            if u0 == Vector2::zeros() || u1 == Vector2::zeros() {
                continue;
            }
            // parallel edges: the vertex is redundant in the offset outline
            if u0 == u1 {
                continue;
            }

            let d = v1.dot(&u0);
            let new_point = if d == 0.0 {
                // antiparallel edges (spike): shift along the outgoing normal
                this + u1 * self.distance
            } else {
                // miter: s places the point on the intersection of the two
                // offset edge lines
                let s = self.distance * (1.0 - u0.dot(&u1)) / d;
                this + u1 * self.distance + v1 * s
            };
            result.push(new_point);
        }

        Ok(result)
    }
}
