//! UFO format conversion
//!
//! Converts finished font records into norad's UFO model. Every ring of a
//! glyph outline becomes one closed contour of line points.

use crate::font_source::{FontRecord, Glyph};
use crate::geometry::Contour;
use norad::{ContourPoint, Font, PointType};

impl Glyph {
    /// Convert to a norad glyph
    pub fn to_norad_glyph(&self) -> norad::Glyph {
        let mut glyph = norad::Glyph::new(&self.name);
        glyph.width = self.advance_width;

        if let Some(character) = self.character {
            glyph.codepoints.insert(character);
        }

        glyph.contours = self
            .outlines
            .iter()
            .flat_map(|polygon| polygon.contours())
            .map(Contour::to_norad_contour)
            .collect();

        glyph
    }
}

impl Contour {
    /// A closed contour: no move point, every point a line point
    pub fn to_norad_contour(&self) -> norad::Contour {
        let points = self
            .points()
            .iter()
            .map(|p| ContourPoint::new(p.x, p.y, PointType::Line, false, None, None))
            .collect();
        norad::Contour::new(points, None)
    }
}

impl FontRecord {
    /// Font info carrying names and vertical metrics
    pub fn to_norad_font_info(&self) -> norad::FontInfo {
        let mut info = norad::FontInfo::default();

        if !self.family_name.is_empty() {
            info.family_name = Some(self.family_name.clone());
        }
        if !self.style_name.is_empty() {
            info.style_name = Some(self.style_name.clone());
        }
        if let Some(units_per_em) = norad::fontinfo::NonNegativeIntegerOrFloat::new(self.units_per_em) {
            info.units_per_em = Some(units_per_em);
        }
        info.ascender = Some(self.ascender);
        info.descender = Some(self.descender);
        info
    }

    /// Convert to a complete norad font
    pub fn to_norad_font(&self) -> Font {
        let mut font = Font::new();
        font.font_info = self.to_norad_font_info();

        let layer = font.default_layer_mut();
        for glyph in &self.glyphs {
            layer.insert_glyph(glyph.to_norad_glyph());
        }

        font
    }
}
