//! Font style configuration
//!
//! The style is the only knob set shared by all glyphs of a build: stroke
//! weight, spacing mode, family name and cell proportions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stroke weight of the whole font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Weight {
    Light,
    #[default]
    Regular,
    Bold,
}

impl Weight {
    pub const ALL: [Weight; 3] = [Weight::Light, Weight::Regular, Weight::Bold];

    /// Parse a CSS-style weight number; only 300, 400 and 700 exist
    pub fn from_value(value: u16) -> Option<Self> {
        match value {
            300 => Some(Weight::Light),
            400 => Some(Weight::Regular),
            700 => Some(Weight::Bold),
            _ => None,
        }
    }

    pub fn value(self) -> u16 {
        match self {
            Weight::Light => 300,
            Weight::Regular => 400,
            Weight::Bold => 700,
        }
    }

    /// Half the stroke thickness, in grid units
    pub fn half_weight(self) -> f64 {
        match self {
            Weight::Light => 0.15,
            Weight::Regular => 0.25,
            Weight::Bold => 0.3,
        }
    }
}

impl TryFrom<u16> for Weight {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Weight::from_value(value).ok_or_else(|| format!("unsupported weight {value}, expected 300, 400 or 700"))
    }
}

impl From<Weight> for u16 {
    fn from(weight: Weight) -> u16 {
        weight.value()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Default vertical scale of the drawing cell relative to the horizontal one
pub const DEFAULT_CELL_ASPECT: f64 = 1.888;

pub const DEFAULT_FAMILY_NAME: &str = "Strokefont Custom";

/// Style settings for one font build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStyleConfig {
    pub family_name: String,
    pub weight: Weight,
    pub monospace: bool,
    pub cell_aspect: f64,
}

impl Default for FontStyleConfig {
    fn default() -> Self {
        Self {
            family_name: DEFAULT_FAMILY_NAME.to_string(),
            weight: Weight::default(),
            monospace: true,
            cell_aspect: DEFAULT_CELL_ASPECT,
        }
    }
}

impl FontStyleConfig {
    /// Family name as written into the font, with a "Mono" suffix for
    /// monospaced builds
    pub fn family_display_name(&self) -> String {
        if self.monospace {
            format!("{} Mono", self.family_name)
        } else {
            self.family_name.clone()
        }
    }

    /// Style name, the numeric weight
    pub fn style_name(&self) -> String {
        self.weight.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_round_trip_through_numbers() {
        for weight in Weight::ALL {
            assert_eq!(Weight::from_value(weight.value()), Some(weight));
        }
        assert_eq!(Weight::from_value(500), None);
    }

    #[test]
    fn heavier_weights_are_thicker() {
        assert!(Weight::Light.half_weight() < Weight::Regular.half_weight());
        assert!(Weight::Regular.half_weight() < Weight::Bold.half_weight());
    }

    #[test]
    fn weight_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Weight::Bold).unwrap(), "700");
        let weight: Weight = serde_json::from_str("300").unwrap();
        assert_eq!(weight, Weight::Light);
        assert!(serde_json::from_str::<Weight>("450").is_err());
    }

    #[test]
    fn names_depend_on_spacing_mode() {
        let mut style = FontStyleConfig {
            family_name: "Brut".to_string(),
            ..FontStyleConfig::default()
        };
        assert_eq!(style.family_display_name(), "Brut Mono");
        assert_eq!(style.style_name(), "400");

        style.monospace = false;
        assert_eq!(style.family_display_name(), "Brut");
    }
}
