//! Glyph and font records handed to serializers

use crate::core::errors::BuildError;
use crate::geometry::{bounding_box_of, OutlinePolygon};
use kurbo::Rect;

/// Name of the reserved fallback glyph
pub const FALLBACK_GLYPH_NAME: &str = ".notdef";

/// A finished glyph in design units
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub name: String,
    /// `None` only for the fallback glyph
    pub character: Option<char>,
    pub codepoint: u32,
    pub advance_width: f64,
    pub outlines: Vec<OutlinePolygon>,
}

impl Glyph {
    /// The glyph shown for unmapped codepoints
    pub fn fallback(advance_width: f64) -> Self {
        Self {
            name: FALLBACK_GLYPH_NAME.to_string(),
            character: None,
            codepoint: 0,
            advance_width,
            outlines: Vec::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.character.is_none() && self.codepoint == 0
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        bounding_box_of(&self.outlines)
    }

    pub fn contour_count(&self) -> usize {
        self.outlines.iter().map(|p| p.contours().count()).sum()
    }
}

/// Production glyph name for a character.
///
/// ASCII letters and digits name themselves; everything else uses the
/// `uniXXXX` form, or `uXXXXX` beyond the Basic Multilingual Plane.
pub fn glyph_name_for(character: char) -> String {
    let codepoint = character as u32;
    if character.is_ascii_alphanumeric() {
        character.to_string()
    } else if codepoint <= 0xFFFF {
        format!("uni{codepoint:04X}")
    } else {
        format!("u{codepoint:05X}")
    }
}

/// A complete font, fallback glyph first
#[derive(Debug, Clone, PartialEq)]
pub struct FontRecord {
    pub family_name: String,
    pub style_name: String,
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
    pub glyphs: Vec<Glyph>,
}

impl FontRecord {
    /// Check the structural invariants a serializer relies on
    pub fn validate(&self) -> Result<(), BuildError> {
        match self.glyphs.first() {
            Some(glyph) if glyph.is_fallback() => {}
            _ => return Err(BuildError::MissingFallback),
        }
        if self.glyphs.len() < 2 {
            return Err(BuildError::EmptyCharacterSet);
        }
        Ok(())
    }

    pub fn fallback(&self) -> Option<&Glyph> {
        self.glyphs.first().filter(|g| g.is_fallback())
    }

    /// Glyphs for real characters, in build order
    pub fn character_glyphs(&self) -> &[Glyph] {
        match self.glyphs.split_first() {
            Some((first, rest)) if first.is_fallback() => rest,
            _ => &self.glyphs,
        }
    }

    pub fn glyph_for(&self, character: char) -> Option<&Glyph> {
        self.glyphs.iter().find(|g| g.character == Some(character))
    }
}
