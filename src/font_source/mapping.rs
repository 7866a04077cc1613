//! Grid space to design space
//!
//! Grid y grows downward and the cell is a few units wide; font design
//! space has y growing upward and is measured in font units. The mapping
//! is a per-coordinate affine transform followed by rounding to whole
//! units.

use super::metrics::{StyleMetrics, KERNING};
use super::style::FontStyleConfig;
use crate::geometry::Contour;
use crate::sketch::{GRID_HEIGHT, GRID_WIDTH};
use kurbo::Point;

/// Maps grid points of one style into design units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    half_weight: f64,
    scale_x: f64,
    scale_y: f64,
}

impl CoordinateMapper {
    pub fn new(metrics: &StyleMetrics) -> Self {
        Self {
            half_weight: metrics.half_weight,
            scale_x: metrics.scale_x,
            scale_y: metrics.scale_y,
        }
    }

    pub fn for_style(style: &FontStyleConfig) -> Self {
        Self::new(&StyleMetrics::from_style(style))
    }

    /// Map one grid point.
    ///
    /// The half weight is used as an inward margin so strokes on the cell
    /// edge stay inside the glyph box, and half the kerning pads the left.
    pub fn map(&self, point: Point) -> Point {
        let w = self.half_weight;
        let x = ((point.x + w) / GRID_WIDTH * self.scale_x).round() + KERNING / 2.0;
        let y = ((GRID_HEIGHT - point.y - w + 0.5) / GRID_HEIGHT * self.scale_y).round();
        Point::new(x, y)
    }

    pub fn map_contour(&self, contour: &Contour) -> Contour {
        contour.map_points(|p| self.map(p))
    }
}

/// Map a single grid point under `style`
pub fn map_point(point: Point, style: &FontStyleConfig) -> Point {
    CoordinateMapper::for_style(style).map(point)
}
