//! Command line interface for strokefont
//!
//! Handles parsing command line arguments and resolving them against the
//! definition file and user settings into one style configuration.

use crate::core::config_file::ConfigFile;
use crate::data::DefinitionConfig;
use crate::font_source::{FontStyleConfig, Weight};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// strokefont CLI arguments
///
/// Examples:
///   strokefont font.json                       # Build with the file's own config
///   strokefont font.json -o MyFont.ufo         # Choose the output path
///   strokefont font.json --weight 700          # Bold build
///   strokefont font.json --proportional        # Proportional spacing
///   strokefont font.json --export-clean o.json # Also write a cleaned definition
///   strokefont --new-config                    # Create ~/.config/strokefont
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "strokefont",
    version,
    about = "Build font outlines from grid stroke sketches",
    long_about = "strokefont reads a JSON definition of characters drawn as strokes and dots on a small grid, turns every character into merged filled outlines, and writes the result as a UFO font source."
)]
pub struct CliArgs {
    /// Path to a definition file (JSON)
    #[clap(
        value_name = "DEFINITION",
        required_unless_present = "new_config",
        help = "Definition file to build"
    )]
    pub definition: Option<PathBuf>,

    /// Output UFO directory
    #[clap(
        long = "output",
        short = 'o',
        help = "UFO directory to write",
        long_help = "UFO directory to write. Defaults to '<Family>-<Weight>.ufo' in the output directory from settings.json, or the current directory."
    )]
    pub output: Option<PathBuf>,

    /// Family name override
    #[clap(long = "name", help = "Font family name")]
    pub family_name: Option<String>,

    /// Weight override
    #[clap(
        long = "weight",
        value_parser = parse_weight,
        help = "Stroke weight: 300, 400 or 700"
    )]
    pub weight: Option<Weight>,

    /// Force monospace spacing
    #[clap(long = "monospace", conflicts_with = "proportional", help = "Give every glyph the same advance width")]
    pub monospace: bool,

    /// Force proportional spacing
    #[clap(long = "proportional", help = "Fit advance widths to each glyph")]
    pub proportional: bool,

    /// Write a cleaned copy of the definition
    #[clap(
        long = "export-clean",
        value_name = "PATH",
        help = "Also write the definition with empty layers removed and characters sorted"
    )]
    pub export_clean: Option<PathBuf>,

    /// Also log to a daily file under the config directory
    #[clap(long = "log-file", help = "Write logs to ~/.config/strokefont/logs")]
    pub log_file: bool,

    /// Initialize user configuration directory
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings",
        long_help = "Initialize the ~/.config/strokefont directory with a settings.json file holding default family name, weight and spacing."
    )]
    pub new_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_weight(value: &str) -> Result<Weight, String> {
    let number: u16 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    Weight::try_from(number)
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.definition {
            if !path.is_file() {
                return Err(format!(
                    "Definition file does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
        }
        if let Some(name) = &self.family_name {
            if name.trim().is_empty() {
                return Err("Family name must not be empty".to_string());
            }
        }
        Ok(())
    }

    /// Spacing mode forced on the command line, if any
    pub fn monospace_override(&self) -> Option<bool> {
        match (self.monospace, self.proportional) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }

    /// Resolve the build style.
    ///
    /// Priority order:
    /// 1. CLI arguments
    /// 2. Definition file config
    /// 3. Settings file (~/.config/strokefont/settings.json)
    /// 4. Built-in defaults
    pub fn resolve_style(&self, file: &DefinitionConfig, settings: Option<&ConfigFile>) -> FontStyleConfig {
        let defaults = FontStyleConfig::default();

        let family_name = self
            .family_name
            .clone()
            .or_else(|| file.family_name.clone())
            .or_else(|| settings.and_then(|s| s.default_family_name.clone()))
            .unwrap_or(defaults.family_name);
        let weight = self
            .weight
            .or(file.weight)
            .or_else(|| settings.and_then(|s| s.default_weight))
            .unwrap_or(defaults.weight);
        let monospace = self
            .monospace_override()
            .or(file.monospace)
            .or_else(|| settings.and_then(|s| s.default_monospace))
            .unwrap_or(defaults.monospace);
        let cell_aspect = file.cell_aspect.unwrap_or(defaults.cell_aspect);

        let style = FontStyleConfig {
            family_name,
            weight,
            monospace,
            cell_aspect,
        };
        debug!("Resolved style: {:?}", style);
        style
    }

    /// Where to write the UFO for `style`
    pub fn output_path(&self, style: &FontStyleConfig, settings: Option<&ConfigFile>) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let file_name = format!(
            "{}-{}.ufo",
            style.family_display_name().replace(' ', ""),
            style.style_name()
        );
        settings
            .and_then(|s| s.output_directory.clone())
            .unwrap_or_default()
            .join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("strokefont").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_style_flags() {
        let args = parse(&["font.json", "--weight", "700", "--proportional", "--name", "Grid", "-vv"]);
        assert_eq!(args.definition, Some(PathBuf::from("font.json")));
        assert_eq!(args.weight, Some(Weight::Bold));
        assert_eq!(args.monospace_override(), Some(false));
        assert_eq!(args.family_name.as_deref(), Some("Grid"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_bad_input() {
        let bin = "strokefont";
        assert!(CliArgs::try_parse_from([bin, "font.json", "--weight", "500"]).is_err());
        assert!(CliArgs::try_parse_from([bin, "font.json", "--monospace", "--proportional"]).is_err());
        assert!(CliArgs::try_parse_from([bin]).is_err());
        assert!(CliArgs::try_parse_from([bin, "--new-config"]).is_ok());
    }

    #[test]
    fn cli_beats_file_beats_settings() {
        let file = DefinitionConfig {
            family_name: Some("From File".to_string()),
            weight: Some(Weight::Light),
            cell_aspect: Some(2.0),
            monospace: None,
        };
        let settings = ConfigFile {
            default_family_name: Some("From Settings".to_string()),
            default_weight: Some(Weight::Regular),
            default_monospace: Some(false),
            output_directory: None,
        };

        let style = parse(&["font.json"]).resolve_style(&file, Some(&settings));
        assert_eq!(style.family_name, "From File");
        assert_eq!(style.weight, Weight::Light);
        assert!(!style.monospace);
        assert_eq!(style.cell_aspect, 2.0);

        let style = parse(&["font.json", "--weight", "700", "--monospace"]).resolve_style(&file, Some(&settings));
        assert_eq!(style.weight, Weight::Bold);
        assert!(style.monospace);
    }

    #[test]
    fn falls_back_to_defaults() {
        let style = parse(&["font.json"]).resolve_style(&DefinitionConfig::default(), None);
        assert_eq!(style, FontStyleConfig::default());
    }

    #[test]
    fn default_output_name_uses_family_and_weight() {
        let args = parse(&["font.json"]);
        let style = FontStyleConfig::default();
        assert_eq!(args.output_path(&style, None), PathBuf::from("StrokefontCustomMono-400.ufo"));

        let settings = ConfigFile {
            output_directory: Some(PathBuf::from("out")),
            ..ConfigFile::default()
        };
        assert_eq!(
            args.output_path(&style, Some(&settings)),
            PathBuf::from("out").join("StrokefontCustomMono-400.ufo")
        );

        let explicit = parse(&["font.json", "-o", "x.ufo"]);
        assert_eq!(explicit.output_path(&style, Some(&settings)), PathBuf::from("x.ufo"));
    }
}
