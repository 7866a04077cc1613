//! Character and font definitions
//!
//! A [`FontDefinition`] is an immutable snapshot of every drawn character.
//! Editing produces a new snapshot instead of changing one in place, so a
//! build always sees a consistent set of inputs.

use super::Layer;

/// The layers drawn for one character
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterDefinition {
    pub character: char,
    pub layers: Vec<Layer>,
}

impl CharacterDefinition {
    pub fn new(character: char, layers: Vec<Layer>) -> Self {
        Self { character, layers }
    }

    /// Build from raw point lists, dropping empty layers
    pub fn from_raw_layers(character: char, raw: &[Vec<[f64; 2]>]) -> Self {
        let layers = raw.iter().filter_map(|pairs| Layer::from_pairs(pairs)).collect();
        Self { character, layers }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn strokes(&self) -> impl Iterator<Item = &[kurbo::Point]> + '_ {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::Stroke(points) => Some(points.as_slice()),
            Layer::Dot(_) => None,
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = kurbo::Point> + '_ {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::Dot(point) => Some(*point),
            Layer::Stroke(_) => None,
        })
    }
}

/// All characters of a font, in caller order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontDefinition {
    characters: Vec<CharacterDefinition>,
}

impl FontDefinition {
    /// Create a snapshot. If a character appears twice the last one wins,
    /// keeping the position of the first.
    pub fn new(characters: Vec<CharacterDefinition>) -> Self {
        characters
            .into_iter()
            .fold(Self::default(), |definition, character| definition.with_character(character))
    }

    /// Return a new snapshot with `character` replaced, or appended if new
    pub fn with_character(&self, character: CharacterDefinition) -> Self {
        let mut characters = self.characters.clone();
        match characters.iter_mut().find(|c| c.character == character.character) {
            Some(existing) => *existing = character,
            None => characters.push(character),
        }
        Self { characters }
    }

    /// Return a new snapshot without `character`
    pub fn without_character(&self, character: char) -> Self {
        let characters = self
            .characters
            .iter()
            .filter(|c| c.character != character)
            .cloned()
            .collect();
        Self { characters }
    }

    pub fn get(&self, character: char) -> Option<&CharacterDefinition> {
        self.characters.iter().find(|c| c.character == character)
    }

    pub fn characters(&self) -> &[CharacterDefinition] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Copy ordered by codepoint, as used for exported definition files
    pub fn sorted_by_codepoint(&self) -> Self {
        let mut characters = self.characters.clone();
        characters.sort_by_key(|c| c.character as u32);
        Self { characters }
    }
}
