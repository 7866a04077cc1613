//! strokefont
//!
//! Turns per-character stroke sketches drawn on a small grid into the
//! merged glyph outlines and metrics of a vector font.
//!
//! The pipeline, leaves first:
//! - [`sketch`]: grid cell, stroke and dot layers, character definitions
//! - [`geometry`]: stroke quads, joint circles, pass-through filtering,
//!   polygon union
//! - [`font_source`]: style, coordinate mapping, metrics, glyph and font
//!   assembly
//! - [`data`]: definition file import/export and UFO output
pub mod core;
pub mod data;
pub mod font_source;
pub mod geometry;
pub mod logging;
pub mod sketch;

pub use crate::core::errors::{BuildError, DefinitionError, MergeError};
pub use font_source::{build_font, FontRecord, FontStyleConfig, Glyph, Weight};
pub use sketch::{CharacterDefinition, FontDefinition, Layer};
