use crate::error::{ConfigError, Result};
use crate::math::polygon_2d::{left_normal, normalize_or_zero};
use crate::math::{Point2, Vector2};

use super::Edge;

/// Interior slack for the spanning-disk test: a point exactly on a candidate
/// disk's rim does not disqualify it. Counterpart of the circumradius
/// stabilizer on the triangulated path.
const DISK_EPSILON: f64 = 1e-5;

/// Computes the alpha-shape boundary edges directly from pairwise
/// containment tests, without a triangulation.
///
/// A pair of points is a boundary edge iff some disk of radius `1/alpha`
/// (or, for alpha 0, some half-plane) passes through both points and
/// contains no other point of the cloud. O(n²) over point pairs with an
/// O(n) scan per candidate, so this is a reference implementation for
/// cross-checking the filtered-triangulation pipeline, not a production
/// path.
#[derive(Debug)]
pub struct BruteForceBoundary {
    alpha: f64,
}

impl BruteForceBoundary {
    /// Creates a new brute-force boundary computation.
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Executes the pairwise scan, returning the boundary edges in canonical
    /// order.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for negative or non-finite alpha. Alpha 0 is
    /// accepted here: it selects the half-plane criterion, which yields the
    /// convex hull.
    pub fn execute(&self, points: &[Point2]) -> Result<Vec<Edge>> {
        if !self.alpha.is_finite() {
            return Err(ConfigError::NonFinite {
                parameter: "alpha",
                value: self.alpha,
            }
            .into());
        }
        if self.alpha < 0.0 {
            return Err(ConfigError::NegativeAlpha(self.alpha).into());
        }

        let mut edges = Vec::new();
        for i in 0..points.len() {
            for j in 0..i {
                let spanning = if self.alpha == 0.0 {
                    spans_half_plane(i, j, points)
                } else {
                    spans_disk(self.alpha, i, j, points)
                };
                if spanning {
                    edges.push(Edge::new(i, j));
                }
            }
        }
        edges.sort_unstable();
        Ok(edges)
    }
}

/// Tests whether all other points lie in one of the two half-planes bounded
/// by the line through `v0` and `v1`.
///
/// A vertical line cannot be written as y = mx + c, so that case compares
/// x-coordinates directly. Points exactly on the line never disqualify a
/// half-plane.
fn spans_half_plane(v0: usize, v1: usize, points: &[Point2]) -> bool {
    let p0 = points[v0];
    let p1 = points[v1];

    let others = || {
        points
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != v0 && i != v1)
    };

    if p1.x == p0.x {
        let left = others().all(|(_, p)| p.x <= p0.x);
        let right = others().all(|(_, p)| p.x >= p0.x);
        return left || right;
    }

    let m = (p1.y - p0.y) / (p1.x - p0.x);
    let c = p0.y - m * p0.x;
    let above = others().all(|(_, p)| p.y >= m * p.x + c);
    let below = others().all(|(_, p)| p.y <= m * p.x + c);
    above || below
}

/// Tests whether one of the two disks of radius `1/alpha` through `v0` and
/// `v1` contains no other point in its interior.
///
/// The candidate centers sit on the chord's perpendicular bisector at
/// ±sqrt((1/alpha)² − (|chord|/2)²) from the midpoint; when the radicand is
/// negative no disk of that radius reaches both endpoints and the pair is
/// rejected outright.
fn spans_disk(alpha: f64, v0: usize, v1: usize, points: &[Point2]) -> bool {
    let p0 = points[v0];
    let p1 = points[v1];
    let radius_sq = (1.0 / alpha).powi(2);

    let chord: Vector2 = p1 - p0;
    let half_chord_sq = (chord.norm() / 2.0).powi(2);
    if radius_sq < half_chord_sq {
        return false;
    }

    let midpoint = Point2::from((p0.coords + p1.coords) * 0.5);
    let rise = (radius_sq - half_chord_sq).sqrt();
    let perp = normalize_or_zero(left_normal(chord)) * rise;

    [midpoint + perp, midpoint - perp].iter().any(|center| {
        points.iter().enumerate().all(|(i, p)| {
            i == v0 || i == v1 || (p - center).norm_squared() >= radius_sq - DISK_EPSILON
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square_edges() -> Vec<Edge> {
        vec![
            Edge::new(0, 1),
            Edge::new(0, 3),
            Edge::new(1, 2),
            Edge::new(2, 3),
        ]
    }

    #[test]
    fn half_plane_gives_convex_hull_of_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let edges = BruteForceBoundary::new(0.0).execute(&pts).unwrap();
        assert_eq!(edges, square_edges());
    }

    #[test]
    fn half_plane_excludes_interior_point() {
        let pts = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(0.5, 0.5),
        ];
        let edges = BruteForceBoundary::new(0.0).execute(&pts).unwrap();
        assert_eq!(edges, square_edges());
    }

    #[test]
    fn half_plane_vertical_line_case() {
        // The pair (0,0)-(0,1) spans the left half-plane of a square cloud.
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0), p(1.0, 1.0)];
        let edges = BruteForceBoundary::new(0.0).execute(&pts).unwrap();
        assert!(edges.contains(&Edge::new(0, 1)));
        assert!(edges.contains(&Edge::new(2, 3)));
    }

    #[test]
    fn disk_criterion_on_square() {
        // Radius 1 disks span each unit side; both diagonals' disks always
        // swallow a remaining corner.
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let edges = BruteForceBoundary::new(1.0).execute(&pts).unwrap();
        assert_eq!(edges, square_edges());
    }

    #[test]
    fn pair_wider_than_disk_diameter_rejected() {
        // 1/alpha = 0.4, so no disk of that radius passes through two points
        // a full unit apart.
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.5, 0.4)];
        let edges = BruteForceBoundary::new(2.5).execute(&pts).unwrap();
        assert!(!edges.contains(&Edge::new(0, 1)));
    }

    #[test]
    fn negative_alpha_rejected() {
        let err = BruteForceBoundary::new(-1.0)
            .execute(&[p(0.0, 0.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            crate::SilhouetteError::Config(ConfigError::NegativeAlpha(_))
        ));
    }

    #[test]
    fn non_finite_alpha_rejected() {
        assert!(BruteForceBoundary::new(f64::NAN).execute(&[]).is_err());
    }

    #[test]
    fn matches_triangulated_pipeline_on_square_with_center() {
        let pts = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(0.5, 0.5),
        ];
        assert_cross_validates(&pts, 1.5);
    }

    #[test]
    fn matches_triangulated_pipeline_on_grid() {
        let mut pts = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                pts.push(p(f64::from(x), f64::from(y)));
            }
        }
        assert_cross_validates(&pts, 1.0);
    }

    /// Cross-validation property: for the same alpha, the boundary edge set
    /// of the filtered triangulation equals the brute-force edge set.
    fn assert_cross_validates(points: &[Point2], alpha: f64) {
        use crate::alpha::{triangulate, AlphaFilter};

        let brute = BruteForceBoundary::new(alpha).execute(points).unwrap();

        let triangles = triangulate(points).unwrap();
        let counts = AlphaFilter::new(alpha).execute(&triangles, points).unwrap();
        let pipeline = counts.boundary_edges();

        assert_eq!(pipeline, brute, "alpha = {alpha}");
    }
}
