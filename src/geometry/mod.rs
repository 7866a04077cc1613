//! Outline geometry
//!
//! Turns grid sketches into fill regions: stroke quads, joint circles,
//! and the union that merges them.

pub mod colinear;
pub mod joints;
pub mod polygon;
pub mod stroke;
pub mod union;

// Re-export commonly used items
pub use joints::{fill_joints, CIRCLE_SEGMENTS};
pub use polygon::{bounding_box_of, Contour, OutlinePolygon};
pub use stroke::outline_stroke;
pub use union::{GeoUnion, PolygonUnion};

use crate::sketch::CharacterDefinition;

/// Every raw fill region of a character in grid space, before merging.
///
/// Stroke quads come first in layer order, then joint circles, then dots.
pub fn raw_regions(definition: &CharacterDefinition, half_weight: f64) -> Vec<Contour> {
    let quads = definition
        .strokes()
        .flat_map(|stroke| outline_stroke(stroke, half_weight));
    quads.chain(fill_joints(definition, half_weight)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l_shape_has_two_quads_and_three_joints() {
        let def = CharacterDefinition::from_raw_layers('L', &[vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]);
        let regions = raw_regions(&def, 0.25);
        assert_eq!(regions.len(), 5);
        assert_eq!(regions.iter().filter(|r| r.len() == 4).count(), 2);
    }

    #[test]
    fn dot_layer_never_produces_a_quad() {
        let def = CharacterDefinition::from_raw_layers('.', &[vec![[1.0, 4.0]]]);
        let regions = raw_regions(&def, 0.25);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), CIRCLE_SEGMENTS);
    }
}
