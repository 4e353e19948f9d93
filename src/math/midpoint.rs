use crate::types::Point2D;

/// Component-wise mean of two points
pub fn midpoint(p: Point2D, q: Point2D) -> Point2D {
    Point2D::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_origin() {
        let m = midpoint(Point2D::new(-1.0, -1.0), Point2D::new(1.0, 1.0));
        assert_eq!(m, Point2D::ZERO);
    }

    #[test]
    fn test_midpoint_symmetric() {
        let a = Point2D::new(0.3, -0.7);
        let b = Point2D::new(-0.45, 0.125);
        assert_eq!(midpoint(a, b), midpoint(b, a));
    }

    #[test]
    fn test_midpoint_outside_ndc() {
        let m = midpoint(Point2D::new(2.0, 4.0), Point2D::new(6.0, -8.0));
        assert_eq!(m, Point2D::new(4.0, -2.0));
    }
}
