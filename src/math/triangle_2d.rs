use super::Point2;

/// Stabilizer added to the `16·area²` denominator of the circumradius
/// quotient. Degenerate (collinear) triangles therefore get a large but
/// finite squared radius instead of a division by zero; they are classified
/// by the caller's radius threshold, never excluded up front.
pub const CIRCUMRADIUS_EPSILON: f64 = 1e-6;

/// Computes the squared circumradius of the triangle `a`, `b`, `c`.
///
/// Works from the squared edge lengths alone: `16·area²` follows from
/// Heron's formula as `4·(a²b² + a²c² + b²c²) − (a² + b² + c²)²`, which is
/// ≤ 0 only for degenerate triangles, and the squared circumradius is
/// `a²·b²·c² / (16·area²)`.
#[must_use]
pub fn squared_circumradius(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let a_2 = (b.x - c.x).powi(2) + (b.y - c.y).powi(2);
    let b_2 = (c.x - a.x).powi(2) + (c.y - a.y).powi(2);
    let c_2 = (a.x - b.x).powi(2) + (a.y - b.y).powi(2);

    let sixteen_area_sq = 4.0 * (a_2 * b_2 + a_2 * c_2 + b_2 * c_2) - (a_2 + b_2 + c_2).powi(2);

    a_2 * b_2 * c_2 / (sixteen_area_sq + CIRCUMRADIUS_EPSILON)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn right_isoceles_circumradius() {
        // Circumcenter of a right triangle is the hypotenuse midpoint,
        // so r = |hypotenuse| / 2 and r² = 0.5 here.
        let r_sq = squared_circumradius(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0));
        assert!((r_sq - 0.5).abs() < 1e-6, "got {r_sq}");
    }

    #[test]
    fn equilateral_circumradius() {
        let h = 3.0_f64.sqrt() / 2.0;
        let r_sq = squared_circumradius(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.5, h));
        // r = side / sqrt(3) for an equilateral triangle.
        assert!((r_sq - 1.0 / 3.0).abs() < 1e-6, "got {r_sq}");
    }

    #[test]
    fn collinear_points_get_enormous_radius() {
        let r_sq = squared_circumradius(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0));
        assert!(r_sq.is_finite());
        assert!(r_sq > 1e6, "got {r_sq}");
    }

    #[test]
    fn coincident_points_stay_finite() {
        let r_sq = squared_circumradius(&p(1.0, 1.0), &p(1.0, 1.0), &p(1.0, 1.0));
        assert!(r_sq.is_finite());
    }
}
