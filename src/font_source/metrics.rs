//! Font metrics and spacing
//!
//! All weight- and spacing-dependent numbers live here: the design cell
//! scale, vertical font metrics, and the advance width policy.

use super::style::FontStyleConfig;
use crate::sketch::GRID_WIDTH;
use kurbo::Rect;

/// Design units per em
pub const UNITS_PER_EM: f64 = 2048.0;

/// Horizontal size of the drawing cell in design units
pub const SCALE_X: f64 = 640.0;

/// Horizontal padding around every glyph, split evenly on both sides.
/// Derived as `round(SCALE_X * 0.4 / 2) * 2`.
pub const KERNING: f64 = 256.0;

/// Space width relative to the monospace advance in proportional fonts
pub const SPACE_ADVANCE_RATIO: f64 = 0.8;

/// Font-wide vertical metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
    pub line_height: f64,
}

impl FontMetrics {
    pub fn from_style(style: &FontStyleConfig) -> Self {
        let scale_y = vertical_scale(style);
        let ascender = (scale_y * 5.0 / 4.0).round();
        let descender = -(scale_y / 4.0).round();
        Self {
            units_per_em: UNITS_PER_EM,
            ascender,
            descender,
            line_height: ascender - descender,
        }
    }
}

/// Vertical size of the drawing cell in design units
pub fn vertical_scale(style: &FontStyleConfig) -> f64 {
    SCALE_X * style.cell_aspect
}

/// Per-style spacing numbers shared by every glyph of a build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMetrics {
    pub half_weight: f64,
    pub monospace: bool,
    pub scale_x: f64,
    pub scale_y: f64,
    pub monospace_advance: f64,
}

impl StyleMetrics {
    pub fn from_style(style: &FontStyleConfig) -> Self {
        let half_weight = style.weight.half_weight();
        // Heavier strokes reach further past the cell edge and need more room
        let weight_allowance = half_weight / GRID_WIDTH / 2.0 * UNITS_PER_EM;
        let monospace_advance = (UNITS_PER_EM - SCALE_X - KERNING + weight_allowance).round();

        Self {
            half_weight,
            monospace: style.monospace,
            scale_x: SCALE_X,
            scale_y: vertical_scale(style),
            monospace_advance,
        }
    }

    /// Width of the space glyph in proportional fonts
    pub fn space_advance(&self) -> f64 {
        (SPACE_ADVANCE_RATIO * self.monospace_advance).round()
    }

    /// Advance width of the reserved fallback glyph
    pub fn fallback_advance(&self) -> f64 {
        self.monospace_advance
    }

    /// Advance width of `character` given its merged outline bounds
    pub fn advance_width(&self, character: char, outline_bounds: Option<Rect>) -> f64 {
        if self.monospace {
            return self.monospace_advance;
        }
        if character == ' ' {
            return self.space_advance();
        }
        let ink_width = outline_bounds.map_or(0.0, |bounds| bounds.width());
        (ink_width + KERNING).round()
    }

    /// Horizontal shift applied to a proportional glyph so its ink starts
    /// half the kerning in from the origin. Monospace glyphs stay put.
    pub fn left_bearing_shift(&self, outline_bounds: Option<Rect>) -> f64 {
        match outline_bounds {
            Some(bounds) if !self.monospace => KERNING / 2.0 - bounds.x0,
            _ => 0.0,
        }
    }
}
