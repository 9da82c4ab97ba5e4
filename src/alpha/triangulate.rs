use spade::{DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::Triangle;

/// Delaunay-triangulates a point cloud, returning canonical index triples
/// into `points`.
///
/// Spade merges exactly-coincident inserts, so its vertex indices stop
/// matching input positions once the cloud contains duplicates; an explicit
/// map carries each spade vertex back to the first input index with that
/// coordinate. Collinear-only clouds produce no inner faces and therefore an
/// empty triangle list.
///
/// # Errors
///
/// Returns `GeometryError::TooFewPoints` for fewer than 3 points and
/// `GeometryError::Triangulation` if spade rejects a coordinate (NaN or
/// infinite).
pub fn triangulate(points: &[Point2]) -> Result<Vec<Triangle>> {
    if points.len() < 3 {
        return Err(GeometryError::TooFewPoints(points.len()).into());
    }

    let mut dt: DelaunayTriangulation<SpadePoint2<f64>> = DelaunayTriangulation::new();
    let mut original_index: Vec<usize> = Vec::with_capacity(points.len());

    for (i, p) in points.iter().enumerate() {
        let handle = dt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| {
                GeometryError::Triangulation(format!("insert point {i}: {e}"))
            })?;
        // A fresh vertex always gets the next sequential index; anything
        // below that is a duplicate resolving to an earlier insert.
        if handle.index() == original_index.len() {
            original_index.push(i);
        }
    }

    let mut triangles = Vec::with_capacity(dt.num_inner_faces());
    for face in dt.inner_faces() {
        let [a, b, c] = face.vertices();
        triangles.push(Triangle::new(
            original_index[a.fix().index()],
            original_index[b.fix().index()],
            original_index[c.fix().index()],
        ));
    }

    Ok(triangles)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::alpha::Edge;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn square_produces_two_triangles() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let tris = triangulate(&pts).unwrap();
        assert_eq!(tris.len(), 2);
        // Whichever diagonal spade picks, the four outer edges appear once each.
        let mut counts = crate::alpha::EdgeCounts::default();
        for tri in &tris {
            for edge in tri.edges() {
                counts.record(edge);
            }
        }
        for edge in [
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(0, 3),
        ] {
            assert_eq!(counts.count(edge), 1, "outer edge {edge:?}");
        }
    }

    #[test]
    fn too_few_points_rejected() {
        assert!(triangulate(&[p(0.0, 0.0), p(1.0, 0.0)]).is_err());
    }

    #[test]
    fn collinear_cloud_yields_no_triangles() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)];
        let tris = triangulate(&pts).unwrap();
        assert!(tris.is_empty());
    }

    #[test]
    fn duplicate_points_map_to_first_index() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0)];
        let tris = triangulate(&pts).unwrap();
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].vertices(), [0, 1, 3]);
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(f64::NAN, 1.0)];
        assert!(triangulate(&pts).is_err());
    }
}
