//! Grid sketch model
//!
//! A character is drawn on a small fixed grid cell as a list of layers.
//! Each layer is either an open polyline (a stroke) or a single point (a
//! dot marker). Everything downstream reads these definitions and never
//! mutates them.

pub mod definition;
pub mod layer;

pub use definition::{CharacterDefinition, FontDefinition};
pub use layer::Layer;

/// Width of the drawing cell in grid units
pub const GRID_WIDTH: f64 = 2.0;

/// Height of the drawing cell in grid units
pub const GRID_HEIGHT: f64 = 4.0;

/// Distance under which two grid coordinates are considered the same point
pub const GRID_EPSILON: f64 = 1e-6;

/// Tolerance-aware point equality in grid space
pub fn same_point(a: kurbo::Point, b: kurbo::Point) -> bool {
    (a - b).hypot() <= GRID_EPSILON
}
