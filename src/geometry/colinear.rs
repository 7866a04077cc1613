//! Pass-through point detection
//!
//! A stroke vertex that sits strictly inside another straight segment is
//! already covered by that segment's quad, so it needs no joint circle.

use kurbo::Point;

/// Tolerance, in grid units, for colinearity and betweenness tests
pub const COLINEAR_EPSILON: f64 = 1e-6;

/// Whether `p` lies on segment `ab`, strictly between its endpoints
pub fn lies_strictly_inside(p: Point, a: Point, b: Point) -> bool {
    let ab = b - a;
    let length = ab.hypot();
    if length <= COLINEAR_EPSILON {
        return false;
    }

    let ap = p - a;
    let distance_from_line = ab.cross(ap).abs() / length;
    if distance_from_line > COLINEAR_EPSILON {
        return false;
    }

    let along = ab.dot(ap) / length;
    along > COLINEAR_EPSILON && along < length - COLINEAR_EPSILON
}

/// Whether `p` is covered by the interior of any segment of `strokes`.
///
/// Quadratic in the number of points, which stays small per character.
pub fn is_covered<'a>(p: Point, strokes: impl IntoIterator<Item = &'a [Point]>) -> bool {
    strokes.into_iter().any(|stroke| {
        stroke
            .windows(2)
            .any(|pair| lies_strictly_inside(p, pair[0], pair[1]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn horizontal_vertical_and_diagonal_runs() {
        assert!(lies_strictly_inside(pt(1.0, 0.0), pt(0.0, 0.0), pt(2.0, 0.0)));
        assert!(lies_strictly_inside(pt(1.0, 2.0), pt(1.0, 4.0), pt(1.0, 0.0)));
        assert!(lies_strictly_inside(pt(1.0, 2.0), pt(0.0, 4.0), pt(2.0, 0.0)));
        assert!(lies_strictly_inside(pt(0.5, 1.0), pt(0.0, 0.0), pt(1.5, 3.0)));
    }

    #[test]
    fn endpoints_are_not_strictly_inside() {
        assert!(!lies_strictly_inside(pt(0.0, 0.0), pt(0.0, 0.0), pt(2.0, 0.0)));
        assert!(!lies_strictly_inside(pt(2.0, 0.0), pt(0.0, 0.0), pt(2.0, 0.0)));
    }

    #[test]
    fn points_beyond_or_beside_the_segment_are_rejected() {
        assert!(!lies_strictly_inside(pt(3.0, 0.0), pt(0.0, 0.0), pt(2.0, 0.0)));
        assert!(!lies_strictly_inside(pt(1.0, 0.5), pt(0.0, 0.0), pt(2.0, 0.0)));
    }

    #[test]
    fn tolerates_rounding_noise() {
        let third = 1.0 / 3.0;
        let p = pt(third * 3.0 * 0.5, 0.1 * 3.0);
        // 0.1 * 3.0 is not exactly 0.3 in binary floating point
        assert!(lies_strictly_inside(p, pt(0.0, 0.0), pt(1.0, 0.6)));
    }

    #[test]
    fn degenerate_segments_cover_nothing() {
        assert!(!lies_strictly_inside(pt(1.0, 1.0), pt(1.0, 1.0), pt(1.0, 1.0)));
    }

    #[test]
    fn scans_all_strokes() {
        let bar = [pt(0.0, 0.0), pt(2.0, 0.0)];
        let stem = [pt(1.0, 0.0), pt(1.0, 4.0)];
        let strokes: [&[Point]; 2] = [&bar, &stem];
        assert!(is_covered(pt(1.0, 0.0), strokes));
        assert!(!is_covered(pt(1.0, 4.0), strokes));
    }
}
