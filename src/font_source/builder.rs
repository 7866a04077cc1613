//! Glyph and font assembly
//!
//! Runs the outline pipeline per character (outline, map, merge, space)
//! and wraps the results into a [`FontRecord`]. Characters are independent,
//! so glyphs are built in parallel and collected back in input order.

use super::glyph::{glyph_name_for, FontRecord, Glyph};
use super::mapping::CoordinateMapper;
use super::metrics::{FontMetrics, StyleMetrics};
use super::style::FontStyleConfig;
use crate::core::errors::BuildError;
use crate::geometry::{bounding_box_of, raw_regions, GeoUnion, OutlinePolygon, PolygonUnion};
use crate::sketch::{CharacterDefinition, FontDefinition};
use kurbo::Vec2;
use rayon::prelude::*;
use tracing::{debug, info};

/// Builds glyphs for one style with one union backend
pub struct GlyphBuilder<'a> {
    metrics: StyleMetrics,
    mapper: CoordinateMapper,
    merger: &'a dyn PolygonUnion,
}

impl<'a> GlyphBuilder<'a> {
    pub fn new(style: &FontStyleConfig, merger: &'a dyn PolygonUnion) -> Self {
        let metrics = StyleMetrics::from_style(style);
        Self {
            metrics,
            mapper: CoordinateMapper::new(&metrics),
            merger,
        }
    }

    pub fn metrics(&self) -> &StyleMetrics {
        &self.metrics
    }

    /// Merged outlines in design units, before any spacing shift
    pub fn merged_outlines(
        &self,
        definition: &CharacterDefinition,
    ) -> Result<Vec<OutlinePolygon>, BuildError> {
        let regions: Vec<OutlinePolygon> = raw_regions(definition, self.metrics.half_weight)
            .iter()
            .map(|contour| OutlinePolygon::simple(self.mapper.map_contour(contour)))
            .collect();

        if regions.is_empty() {
            return Ok(Vec::new());
        }

        self.merger
            .union(&regions)
            .map_err(|source| BuildError::Merge {
                character: definition.character,
                source,
            })
    }

    /// Build the finished glyph for one character
    pub fn build(&self, definition: &CharacterDefinition) -> Result<Glyph, BuildError> {
        let merged = self.merged_outlines(definition)?;
        let bounds = bounding_box_of(&merged);

        let shift = self.metrics.left_bearing_shift(bounds);
        let outlines = if shift == 0.0 {
            merged
        } else {
            let offset = Vec2::new(shift, 0.0);
            merged.iter().map(|polygon| polygon.translate(offset)).collect()
        };

        let advance_width = self.metrics.advance_width(definition.character, bounds);

        debug!(
            "Built glyph {:?}: {} layers -> {} polygons, advance {}",
            definition.character,
            definition.layers.len(),
            outlines.len(),
            advance_width
        );

        Ok(Glyph {
            name: glyph_name_for(definition.character),
            character: Some(definition.character),
            codepoint: definition.character as u32,
            advance_width,
            outlines,
        })
    }
}

/// Build one glyph with the given union backend
pub fn build_glyph(
    definition: &CharacterDefinition,
    style: &FontStyleConfig,
    merger: &dyn PolygonUnion,
) -> Result<Glyph, BuildError> {
    GlyphBuilder::new(style, merger).build(definition)
}

/// Whether a character gets a glyph. Undrawn characters are skipped,
/// except whitespace, which is meant to be blank.
fn should_build(definition: &CharacterDefinition) -> bool {
    !definition.is_empty() || definition.character.is_whitespace()
}

/// Build a font record using the default union backend
pub fn build_font(
    definition: &FontDefinition,
    style: &FontStyleConfig,
) -> Result<FontRecord, BuildError> {
    build_font_with(definition, style, &GeoUnion)
}

/// Build a font record.
///
/// Fails without a partial result if there is nothing to build, if any
/// character fails to merge, or if the assembled record is malformed.
pub fn build_font_with(
    definition: &FontDefinition,
    style: &FontStyleConfig,
    merger: &dyn PolygonUnion,
) -> Result<FontRecord, BuildError> {
    let buildable: Vec<&CharacterDefinition> = definition
        .characters()
        .iter()
        .filter(|c| {
            let keep = should_build(c);
            if !keep {
                debug!("Skipping {:?}: nothing drawn", c.character);
            }
            keep
        })
        .collect();

    if buildable.is_empty() {
        return Err(BuildError::EmptyCharacterSet);
    }

    let builder = GlyphBuilder::new(style, merger);
    let character_glyphs = buildable
        .par_iter()
        .map(|def| builder.build(def))
        .collect::<Result<Vec<Glyph>, BuildError>>()?;

    let mut glyphs = Vec::with_capacity(character_glyphs.len() + 1);
    glyphs.push(Glyph::fallback(builder.metrics().fallback_advance()));
    glyphs.extend(character_glyphs);

    let vertical = FontMetrics::from_style(style);
    let record = FontRecord {
        family_name: style.family_display_name(),
        style_name: style.style_name(),
        units_per_em: vertical.units_per_em,
        ascender: vertical.ascender,
        descender: vertical.descender,
        glyphs,
    };
    record.validate()?;

    info!(
        "Built font '{} {}' with {} glyphs",
        record.family_name,
        record.style_name,
        record.glyphs.len()
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::MergeError;
    use crate::font_source::style::Weight;

    fn def(character: char, layers: &[&[[f64; 2]]]) -> CharacterDefinition {
        let raw: Vec<Vec<[f64; 2]>> = layers.iter().map(|l| l.to_vec()).collect();
        CharacterDefinition::from_raw_layers(character, &raw)
    }

    struct FailingUnion;

    impl PolygonUnion for FailingUnion {
        fn union(&self, _: &[OutlinePolygon]) -> Result<Vec<OutlinePolygon>, MergeError> {
            Err(MergeError::NonFiniteOutput)
        }
    }

    #[test]
    fn empty_definition_is_rejected() {
        let result = build_font(&FontDefinition::default(), &FontStyleConfig::default());
        assert_eq!(result, Err(BuildError::EmptyCharacterSet));
    }

    #[test]
    fn only_undrawn_letters_is_rejected() {
        let definition = FontDefinition::new(vec![def('a', &[])]);
        let result = build_font(&definition, &FontStyleConfig::default());
        assert_eq!(result, Err(BuildError::EmptyCharacterSet));
    }

    #[test]
    fn merge_failure_aborts_the_build() {
        let definition = FontDefinition::new(vec![def('l', &[&[[1.0, 0.0], [1.0, 4.0]]])]);
        let result = build_font_with(&definition, &FontStyleConfig::default(), &FailingUnion);
        assert_eq!(
            result,
            Err(BuildError::Merge {
                character: 'l',
                source: MergeError::NonFiniteOutput
            })
        );
    }

    #[test]
    fn fallback_first_then_caller_order() {
        let definition = FontDefinition::new(vec![
            def('b', &[&[[0.0, 0.0], [0.0, 4.0]]]),
            def('a', &[&[[1.0, 2.0]]]),
            def(' ', &[]),
            def('q', &[]),
        ]);
        let font = build_font(&definition, &FontStyleConfig::default()).unwrap();
        let names: Vec<&str> = font.glyphs.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec![".notdef", "b", "a", "uni0020"]);
        assert!(font.glyphs[0].outlines.is_empty());
        assert_eq!(font.glyphs[0].codepoint, 0);
        assert_eq!(font.glyphs[0].advance_width, 1280.0);
    }

    #[test]
    fn proportional_glyph_starts_half_kerning_from_origin() {
        let style = FontStyleConfig {
            monospace: false,
            ..FontStyleConfig::default()
        };
        let glyph = build_glyph(&def('l', &[&[[1.5, 0.0], [1.5, 4.0]]]), &style, &GeoUnion).unwrap();
        let bounds = glyph.bounding_box().unwrap();
        assert!((bounds.x0 - 128.0).abs() < 1e-9);
        assert_eq!(glyph.advance_width, (bounds.width() + 256.0).round());
    }

    #[test]
    fn record_carries_style_names_and_metrics() {
        let style = FontStyleConfig {
            family_name: "Grid".to_string(),
            weight: Weight::Bold,
            monospace: false,
            ..FontStyleConfig::default()
        };
        let definition = FontDefinition::new(vec![def('-', &[&[[0.0, 2.0], [2.0, 2.0]]])]);
        let font = build_font(&definition, &style).unwrap();
        assert_eq!(font.family_name, "Grid");
        assert_eq!(font.style_name, "700");
        assert_eq!(font.units_per_em, 2048.0);
        assert_eq!(font.ascender, 1510.0);
        assert_eq!(font.descender, -302.0);
        assert_eq!(font.glyphs[0].advance_width, 1306.0);
    }
}
