//! Core application functionality
//!
//! This module contains the application layer around the font pipeline:
//! - CLI parsing and style resolution
//! - User settings file
//! - Error types
//! - Platform error reporting and the build runner

pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use errors::{BuildError, DefinitionError, MergeError};
pub use runner::{run_app, run_build, BuildOutcome};
