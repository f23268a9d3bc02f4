//! Palette value types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::metadata::PaletteMetadata;
use crate::color::Color;
use crate::harmony::HarmonyType;
use crate::ColorError;

/// How the colors of a palette are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    /// Independent uniform draws over the 24-bit RGB space
    #[default]
    Random,
    /// One hue, lightness evenly spaced
    Monochromatic,
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
}

impl PaletteType {
    /// Every palette type
    pub const ALL: [PaletteType; 7] = [
        PaletteType::Random,
        PaletteType::Monochromatic,
        PaletteType::Complementary,
        PaletteType::Analogous,
        PaletteType::Triadic,
        PaletteType::Tetradic,
        PaletteType::SplitComplementary,
    ];

    /// Kebab-case identifier
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteType::Random => "random",
            PaletteType::Monochromatic => "monochromatic",
            PaletteType::Complementary => "complementary",
            PaletteType::Analogous => "analogous",
            PaletteType::Triadic => "triadic",
            PaletteType::Tetradic => "tetradic",
            PaletteType::SplitComplementary => "split-complementary",
        }
    }

    /// Title-cased name used for default palette names
    pub fn display_name(self) -> &'static str {
        match self {
            PaletteType::Random => "Random",
            PaletteType::Monochromatic => "Monochromatic",
            PaletteType::Complementary => "Complementary",
            PaletteType::Analogous => "Analogous",
            PaletteType::Triadic => "Triadic",
            PaletteType::Tetradic => "Tetradic",
            PaletteType::SplitComplementary => "Split-Complementary",
        }
    }

    /// Hue-rotation harmony backing this palette type, if any
    ///
    /// Monochromatic palettes use their own lightness spacing rather than
    /// the five-step harmony ladder, so they map to `None` as well.
    pub fn rotation_harmony(self) -> Option<HarmonyType> {
        match self {
            PaletteType::Complementary => Some(HarmonyType::Complementary),
            PaletteType::Analogous => Some(HarmonyType::Analogous),
            PaletteType::Triadic => Some(HarmonyType::Triadic),
            PaletteType::Tetradic => Some(HarmonyType::Tetradic),
            PaletteType::SplitComplementary => Some(HarmonyType::SplitComplementary),
            PaletteType::Random | PaletteType::Monochromatic => None,
        }
    }
}

impl fmt::Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteType {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        PaletteType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ColorError::UnknownPaletteType { name: s.to_string() })
    }
}

/// A named, ordered set of colors with aggregate metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PaletteType,
    pub colors: Vec<Color>,
    pub metadata: PaletteMetadata,
}

impl Palette {
    /// Build a palette from existing colors, computing its metadata
    pub fn from_colors(name: impl Into<String>, kind: PaletteType, colors: Vec<Color>) -> Self {
        let metadata = PaletteMetadata::compute(&colors);
        Self {
            name: name.into(),
            kind,
            colors,
            metadata,
        }
    }

    /// Same palette under a different name
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Hex strings of the members, in order
    pub fn hexes(&self) -> Vec<&str> {
        self.colors.iter().map(|c| c.hex.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Default name for a generated palette
pub(crate) fn default_name(kind: PaletteType) -> String {
    format!("{} Palette", kind.display_name())
}
