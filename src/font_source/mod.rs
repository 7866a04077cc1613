//! Font style, metrics and assembly
//!
//! This module turns grid sketches into a font record: it owns the style
//! configuration, the mapping into design units, the spacing rules, and
//! the glyph/font records handed to serializers.

pub mod builder;
pub mod glyph;
pub mod mapping;
pub mod metrics;
pub mod style;

// Explicit re-exports for public API
pub use builder::{build_font, build_font_with, build_glyph, GlyphBuilder};
pub use glyph::{glyph_name_for, FontRecord, Glyph, FALLBACK_GLYPH_NAME};
pub use mapping::{map_point, CoordinateMapper};
pub use metrics::{FontMetrics, StyleMetrics, KERNING, SCALE_X, UNITS_PER_EM};
pub use style::{FontStyleConfig, Weight};
