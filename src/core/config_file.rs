//! User configuration file handling
//!
//! Manages settings from ~/.config/strokefont/settings.json

use crate::font_source::Weight;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/strokefont/settings.json
///
/// These settings override built-in defaults but are overridden by the
/// definition file and by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    /// Family name used when neither the CLI nor the definition sets one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_family_name: Option<String>,
    /// Default weight, one of 300, 400, 700
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_weight: Option<Weight>,
    /// Default spacing mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_monospace: Option<bool>,
    /// Directory for UFO output when no output path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<PathBuf>,
}

impl ConfigFile {
    /// Get the path to the strokefont config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("strokefont")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Get the path to the logs directory
    pub fn logs_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file; missing or broken files
    /// yield `None`
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initialize the user configuration directory
    ///
    /// Creates the config directory, its logs/ subdirectory and a
    /// settings.json with default values. Existing settings are kept.
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = Self::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::example().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View build logs in: {:?}", logs_dir);

        Ok(())
    }

    /// Settings written by `--new-config`
    pub fn example() -> Self {
        Self {
            default_family_name: Some(crate::font_source::style::DEFAULT_FAMILY_NAME.to_string()),
            default_weight: Some(Weight::Regular),
            default_monospace: Some(true),
            output_directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let config = ConfigFile {
            default_weight: Some(Weight::Bold),
            output_directory: Some(PathBuf::from("/tmp/fonts")),
            ..ConfigFile::example()
        };
        config.save_to(&path).unwrap();

        assert_eq!(ConfigFile::load_from(&path), Some(config));
    }

    #[test]
    fn missing_and_broken_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(ConfigFile::load_from(&path), None);

        fs::write(&path, "{ \"default_weight\": 123 }").unwrap();
        assert_eq!(ConfigFile::load_from(&path), None);
    }

    #[test]
    fn unknown_fields_are_tolerated_and_absent_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ \"default_monospace\": false, \"theme\": \"dark\" }").unwrap();

        let config = ConfigFile::load_from(&path).unwrap();
        assert_eq!(config.default_monospace, Some(false));
        assert_eq!(config.default_weight, None);
    }
}
