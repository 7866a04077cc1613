//! Build runner
//!
//! Glues the command line to the library: load settings and the
//! definition, resolve the style, build, and write the UFO.

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::data::{save_ufo, DefinitionFile};
use crate::font_source::{build_font, FontRecord};
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// What a finished build produced
#[derive(Debug)]
pub struct BuildOutcome {
    pub record: FontRecord,
    pub ufo_path: PathBuf,
}

/// Run the application for the given arguments
pub fn run_app(cli_args: CliArgs) -> Result<Option<BuildOutcome>> {
    if cli_args.new_config {
        ConfigFile::initialize_config_directory()?;
        if cli_args.definition.is_none() {
            return Ok(None);
        }
    }
    let settings = ConfigFile::load();
    run_build(&cli_args, settings.as_ref()).map(Some)
}

/// Build the font described by `cli_args` with the given user settings
pub fn run_build(cli_args: &CliArgs, settings: Option<&ConfigFile>) -> Result<BuildOutcome> {
    let definition_path = cli_args
        .definition
        .as_ref()
        .ok_or_else(|| anyhow!("No definition file given"))?;

    let file = DefinitionFile::load(definition_path)
        .with_context(|| format!("Invalid definition file {}", definition_path.display()))?;
    let style = cli_args.resolve_style(&file.config, settings);

    if let Some(clean_path) = &cli_args.export_clean {
        let json = DefinitionFile::to_clean_json(&file.definition, &style)?;
        fs::write(clean_path, json)
            .with_context(|| format!("Failed to write {}", clean_path.display()))?;
        info!("Wrote cleaned definition to {}", clean_path.display());
    }

    let record = build_font(&file.definition, &style)
        .with_context(|| format!("Failed to build font from {}", definition_path.display()))?;

    let ufo_path = cli_args.output_path(&style, settings);
    save_ufo(&record, &ufo_path)?;

    Ok(BuildOutcome { record, ufo_path })
}
