use std::collections::BTreeSet;

use crate::error::{ConfigError, Result};
use crate::math::triangle_2d::squared_circumradius;
use crate::math::Point2;

use super::{EdgeCounts, Triangle};

/// Retains the triangles whose circumscribed circle has radius below
/// `1/alpha` and accumulates the edge-multiplicity table over the retained
/// set.
///
/// Larger alpha values admit only smaller triangles and so produce a
/// tighter-fitting, more concave boundary; as alpha approaches zero from
/// above the retained set approaches the full triangulation and the boundary
/// approaches the convex hull.
#[derive(Debug)]
pub struct AlphaFilter {
    alpha: f64,
}

impl AlphaFilter {
    /// Creates a new filter for the given alpha.
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Executes the filter, returning the edge-multiplicity table.
    ///
    /// A triangle listed more than once by the triangulator contributes its
    /// edges exactly once; a correct Delaunay triangulation never repeats a
    /// triangle, but the edge table must not double-count if one slips
    /// through.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for negative, zero, or non-finite alpha.
    /// Alpha 0 selects the half-plane criterion, which only
    /// [`BruteForceBoundary`](super::BruteForceBoundary) implements.
    pub fn execute(&self, triangles: &[Triangle], points: &[Point2]) -> Result<EdgeCounts> {
        validate_alpha(self.alpha)?;

        let radius_limit_sq = (1.0 / self.alpha).powi(2);
        let mut seen: BTreeSet<Triangle> = BTreeSet::new();
        let mut counts = EdgeCounts::default();

        for &tri in triangles {
            if !seen.insert(tri) {
                continue;
            }
            let [ia, ib, ic] = tri.vertices();
            let r_sq = squared_circumradius(&points[ia], &points[ib], &points[ic]);
            if r_sq < radius_limit_sq {
                for edge in tri.edges() {
                    counts.record(edge);
                }
            }
        }

        Ok(counts)
    }
}

/// Rejects alpha values the disk criterion has no meaning for on the
/// triangulated path.
pub(crate) fn validate_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() {
        return Err(ConfigError::NonFinite {
            parameter: "alpha",
            value: alpha,
        }
        .into());
    }
    if alpha < 0.0 {
        return Err(ConfigError::NegativeAlpha(alpha).into());
    }
    if alpha == 0.0 {
        return Err(ConfigError::HalfPlaneUnsupported.into());
    }
    Ok(())
}
