//! Joint caps and dot markers
//!
//! Stroke vertices get a circle of the stroke half weight so consecutive
//! quads join without notches and stroke ends come out rounded. Dot layers
//! get a larger circle.

use super::colinear::is_covered;
use super::polygon::Contour;
use crate::sketch::{same_point, CharacterDefinition};
use kurbo::Point;

/// Vertex count of every circle approximation
pub const CIRCLE_SEGMENTS: usize = 16;

/// Dot radius relative to the stroke half weight
pub const DOT_RADIUS_FACTOR: f64 = 1.5;

/// Push `point` unless an equal point is already present; keeps first-seen order
fn push_unique(points: &mut Vec<Point>, point: Point) {
    if !points.iter().any(|&p| same_point(p, point)) {
        points.push(point);
    }
}

/// Distinct stroke vertices that need a round joint.
///
/// Vertices lying strictly inside a straight segment of any stroke of the
/// same character are skipped.
pub fn joint_points(definition: &CharacterDefinition) -> Vec<Point> {
    let strokes: Vec<&[Point]> = definition.strokes().collect();
    let mut joints = Vec::new();
    for &point in strokes.iter().flat_map(|stroke| stroke.iter()) {
        if !is_covered(point, strokes.iter().copied()) {
            push_unique(&mut joints, point);
        }
    }
    joints
}

/// Distinct dot marker positions
pub fn dot_points(definition: &CharacterDefinition) -> Vec<Point> {
    let mut dots = Vec::new();
    for point in definition.dots() {
        push_unique(&mut dots, point);
    }
    dots
}

/// All joint and dot circles of a character, joints first
pub fn fill_joints(definition: &CharacterDefinition, half_weight: f64) -> Vec<Contour> {
    let joints = joint_points(definition)
        .into_iter()
        .map(|p| Contour::regular_polygon(p, half_weight, CIRCLE_SEGMENTS));
    let dots = dot_points(definition).into_iter().map(|p| {
        Contour::regular_polygon(p, half_weight * DOT_RADIUS_FACTOR, CIRCLE_SEGMENTS)
    });
    joints.chain(dots).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::Layer;

    fn character(layers: &[&[[f64; 2]]]) -> CharacterDefinition {
        let raw: Vec<Vec<[f64; 2]>> = layers.iter().map(|l| l.to_vec()).collect();
        CharacterDefinition::from_raw_layers('x', &raw)
    }

    fn radius(contour: &Contour, center: Point) -> f64 {
        (contour.points()[0] - center).hypot()
    }

    #[test]
    fn dot_layer_gives_one_large_circle() {
        let def = character(&[&[[1.0, 0.0]]]);
        let circles = fill_joints(&def, 0.25);
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].len(), CIRCLE_SEGMENTS);
        assert!((radius(&circles[0], Point::new(1.0, 0.0)) - 0.375).abs() < 1e-12);
    }

    #[test]
    fn every_stroke_vertex_gets_a_joint() {
        let def = character(&[&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]);
        let circles = fill_joints(&def, 0.25);
        assert_eq!(circles.len(), 3);
        for c in &circles {
            assert!((c.signed_area().abs() - circles[0].signed_area().abs()).abs() < 1e-12);
        }
    }

    #[test]
    fn shared_vertices_are_emitted_once() {
        let def = character(&[&[[0.0, 0.0], [1.0, 1.0]], &[[1.0, 1.0], [2.0, 0.0]]]);
        assert_eq!(joint_points(&def).len(), 3);
    }

    #[test]
    fn pass_through_vertices_are_skipped() {
        // The stem of a T starts in the middle of the bar
        let def = character(&[&[[0.0, 0.0], [2.0, 0.0]], &[[1.0, 0.0], [1.0, 4.0]]]);
        let joints = joint_points(&def);
        assert_eq!(
            joints,
            vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 4.0)]
        );
    }

    #[test]
    fn straight_polyline_interior_vertex_is_covered_by_its_own_run() {
        let def = character(&[&[[0.0, 0.0], [1.0, 0.0]], &[[0.0, 0.0], [2.0, 0.0]]]);
        let joints = joint_points(&def);
        assert!(!joints.contains(&Point::new(1.0, 0.0)));
    }

    #[test]
    fn dot_and_joint_at_same_place_are_both_kept() {
        let def = CharacterDefinition::new(
            'x',
            vec![
                Layer::Dot(Point::new(1.0, 1.0)),
                Layer::Stroke(vec![Point::new(1.0, 1.0), Point::new(1.0, 3.0)]),
            ],
        );
        assert_eq!(fill_joints(&def, 0.15).len(), 3);
    }
}
