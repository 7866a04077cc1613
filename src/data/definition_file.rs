//! Definition file import and export
//!
//! A definition file is JSON with a `config` block and a `chars` object
//! mapping each character to its layers of `[x, y]` pairs. Older files are
//! just the `chars` object. Import validates the shape of every entry so
//! the build pipeline can assume well-formed input.

use crate::core::errors::DefinitionError;
use crate::font_source::{FontStyleConfig, Weight};
use crate::sketch::{CharacterDefinition, FontDefinition};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Style values stored in a definition file. Every field is optional so
/// callers can layer them over other sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionConfig {
    pub family_name: Option<String>,
    pub weight: Option<Weight>,
    pub cell_aspect: Option<f64>,
    pub monospace: Option<bool>,
}

/// Raw `config` block as it appears on disk
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    monospace: Option<bool>,
}

/// A parsed and validated definition file
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionFile {
    pub config: DefinitionConfig,
    pub definition: FontDefinition,
}

impl DefinitionFile {
    /// Read and validate a definition file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_json_str(&contents)?;
        debug!(
            "Loaded {} characters from {}",
            file.definition.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(mut root) = root else {
            return Err(DefinitionError::NotAnObject);
        };

        // Files without a config block are a bare character map
        let (config, chars) = if root.contains_key("config") {
            let raw: RawConfig = match root.remove("config") {
                Some(Value::Null) | None => RawConfig::default(),
                Some(value) => serde_json::from_value(value)?,
            };
            let chars = match root.remove("chars") {
                Some(Value::Object(chars)) => chars,
                Some(_) => return Err(DefinitionError::NotAnObject),
                None => Map::new(),
            };
            (parse_config(raw), chars)
        } else {
            (DefinitionConfig::default(), root)
        };

        let definition = parse_characters(&chars)?;
        Ok(Self { config, definition })
    }

    /// Serialize in the current layout with empty layers removed and
    /// characters ordered by codepoint
    pub fn to_clean_json(definition: &FontDefinition, style: &FontStyleConfig) -> Result<String, DefinitionError> {
        let config = RawConfig {
            name: Some(style.family_name.clone()),
            weight: Some(Value::from(style.weight.value())),
            height: Some(style.cell_aspect),
            monospace: Some(style.monospace),
        };

        let mut chars = Map::new();
        for character in definition.sorted_by_codepoint().characters() {
            let layers: Vec<Vec<[f64; 2]>> = character.layers.iter().map(|l| l.to_pairs()).collect();
            chars.insert(character.character.to_string(), serde_json::to_value(layers)?);
        }

        let mut root = Map::new();
        root.insert("config".to_string(), serde_json::to_value(config)?);
        root.insert("chars".to_string(), Value::Object(chars));
        Ok(serde_json::to_string_pretty(&Value::Object(root))?)
    }
}

fn parse_config(raw: RawConfig) -> DefinitionConfig {
    // Weights may be stored as numbers or numeric strings
    let weight_number = raw.weight.as_ref().and_then(|value| match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    });
    let weight = weight_number.and_then(|n| u16::try_from(n).ok()).and_then(Weight::from_value);
    if raw.weight.is_some() && weight.is_none() {
        warn!("Ignoring unsupported weight {:?} in definition file", raw.weight);
    }

    let cell_aspect = raw.height.filter(|h| h.is_finite() && *h > 0.0);

    DefinitionConfig {
        family_name: raw.name,
        weight,
        cell_aspect,
        monospace: raw.monospace,
    }
}

fn parse_characters(chars: &Map<String, Value>) -> Result<FontDefinition, DefinitionError> {
    if chars.is_empty() {
        return Err(DefinitionError::NoCharacters);
    }

    let mut characters = Vec::with_capacity(chars.len());
    for (key, value) in chars {
        let mut key_chars = key.chars();
        let character = match (key_chars.next(), key_chars.next()) {
            (Some(c), None) => c,
            _ => return Err(DefinitionError::InvalidCharacterKey { key: key.clone() }),
        };
        let raw_layers = parse_layers(character, value)?;
        characters.push(CharacterDefinition::from_raw_layers(character, &raw_layers));
    }
    Ok(FontDefinition::new(characters))
}

fn parse_layers(character: char, value: &Value) -> Result<Vec<Vec<[f64; 2]>>, DefinitionError> {
    let invalid = |reason: String| DefinitionError::InvalidCoordinate { character, reason };

    let layers = value
        .as_array()
        .ok_or_else(|| invalid("layers must be an array".to_string()))?;

    layers
        .iter()
        .enumerate()
        .map(|(layer_index, layer)| -> Result<Vec<[f64; 2]>, DefinitionError> {
            let coords = layer
                .as_array()
                .ok_or_else(|| invalid(format!("layer {layer_index} is not an array")))?;
            coords
                .iter()
                .map(|coord| match coord.as_array().map(Vec::as_slice) {
                    Some([x, y]) => match (x.as_f64(), y.as_f64()) {
                        (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok([x, y]),
                        _ => Err(invalid(format!("non-numeric coordinate {coord} in layer {layer_index}"))),
                    },
                    _ => Err(invalid(format!("coordinate {coord} in layer {layer_index} is not an [x, y] pair"))),
                })
                .collect()
        })
        .collect()
}
