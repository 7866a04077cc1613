//! Error types for font builds and definition import
//!
//! Library code returns these typed errors. The command line layer wraps
//! them in `anyhow` with extra context.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the polygon union step
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MergeError {
    #[error("polygon {index} is not a simple closed ring: {reason}")]
    InvalidInput { index: usize, reason: String },

    #[error("union produced a non-finite coordinate")]
    NonFiniteOutput,
}

/// Failure of a whole font build
///
/// Any of these aborts the build; no partial font record is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("no characters to build")]
    EmptyCharacterSet,

    #[error("could not merge outlines for {character:?}: {source}")]
    Merge {
        character: char,
        #[source]
        source: MergeError,
    },

    #[error("font record has no fallback glyph in first position")]
    MissingFallback,
}

/// Problems found while importing a definition file
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("failed to read definition file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("definition is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("definition root must be a JSON object")]
    NotAnObject,

    #[error("no characters found in definition")]
    NoCharacters,

    #[error("invalid character key {key:?}: keys must be exactly one character")]
    InvalidCharacterKey { key: String },

    #[error("invalid definition for {character:?}: {reason}")]
    InvalidCoordinate { character: char, reason: String },
}
