//! Stroke outlining
//!
//! Every segment of a polyline becomes a rectangle of width `2 * half_weight`
//! centred on the segment, with flat ends. Rounded joins come from the
//! joint circles added separately.

use super::polygon::Contour;
use crate::sketch::GRID_EPSILON;
use kurbo::{Point, Vec2};

/// The rectangle covering one segment, or `None` for a zero-length segment
pub fn segment_quad(p1: Point, p2: Point, half_weight: f64) -> Option<Contour> {
    let direction = p2 - p1;
    let length = direction.hypot();
    if length <= GRID_EPSILON {
        return None;
    }

    // Direction turned a quarter turn clockwise, scaled to the half weight
    let offset = Vec2::new(direction.y, -direction.x) * (half_weight / length);

    Some(Contour::new(vec![
        p1 - offset,
        p1 + offset,
        p2 + offset,
        p2 - offset,
    ]))
}

/// One quad per consecutive point pair of a polyline
pub fn outline_stroke(points: &[Point], half_weight: f64) -> Vec<Contour> {
    points
        .windows(2)
        .filter_map(|pair| segment_quad(pair[0], pair[1], half_weight))
        .collect()
}
