//! Definition files and font serialization handoff
//!
//! Reading sketch definitions from JSON and writing finished fonts as UFO
//! sources are the only I/O this crate does.

pub mod conversions;
pub mod definition_file;
pub mod ufo;

pub use definition_file::{DefinitionConfig, DefinitionFile};
pub use ufo::{load_ufo_from_path, save_ufo};
