use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for anticlockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Orientation indicator for a closed polygon: Σ (xᵢ − xᵢ₋₁)·(yᵢ + yᵢ₋₁)
/// over consecutive points, wrapping around.
///
/// Negative for anticlockwise traversal, positive for clockwise. The sign is
/// what matters; the magnitude is twice the unsigned area.
#[must_use]
pub fn winding_sum(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        sum += (points[i].x - prev.x) * (points[i].y + prev.y);
    }
    sum
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
            best = i;
        }
    }
    if best == 0 {
        return points.to_vec();
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Returns the left-pointing normal of a vector: perp(x, y) = (−y, x).
///
/// For an anticlockwise polygon this points toward the interior.
#[must_use]
pub fn left_normal(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Normalizes a vector, returning the zero vector for zero-length input.
///
/// The zero result is exact, so callers can detect coincident points with a
/// plain equality check.
#[must_use]
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    let norm = v.norm();
    if norm == 0.0 {
        Vector2::zeros()
    } else {
        v / norm
    }
}

/// Drops consecutive coincident points from a closed path (exact coordinate
/// equality), including a trailing point that repeats the first.
#[must_use]
pub fn collapse_coincident(points: &[Point2]) -> Vec<Point2> {
    let mut result: Vec<Point2> = Vec::with_capacity(points.len());
    for &p in points {
        if result.last() != Some(&p) {
            result.push(p);
        }
    }
    while result.len() > 1 && result.first() == result.last() {
        result.pop();
    }
    result
}

/// Returns the closed edge segments of a polygon as consecutive point pairs,
/// the last pair connecting back to the first point.
#[must_use]
pub fn edge_segments(points: &[Point2]) -> Vec<(Point2, Point2)> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n).map(|i| (points[i], points[(i + 1) % n])).collect()
}
