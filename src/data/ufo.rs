//! UFO file I/O operations

use crate::font_source::FontRecord;
use anyhow::{Context, Result};
use norad::Font;
use std::path::Path;
use tracing::info;

/// Write a font record to disk as a UFO source
pub fn save_ufo(record: &FontRecord, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    record
        .to_norad_font()
        .save(path)
        .with_context(|| format!("Failed to write UFO to {}", path.display()))?;
    info!("Saved {} glyphs to {}", record.glyphs.len(), path.display());
    Ok(())
}

/// Load a UFO font file from disk
pub fn load_ufo_from_path(path: impl AsRef<Path>) -> Result<Font> {
    let path = path.as_ref();
    let font = Font::load(path).with_context(|| format!("Failed to load UFO from {}", path.display()))?;
    Ok(font)
}
