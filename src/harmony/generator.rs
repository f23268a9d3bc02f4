//! Color harmony generation by hue rotation
//!
//! Each harmony keeps the base saturation and lightness and rotates the hue by
//! fixed offsets. The monochromatic harmony keeps the hue and walks a
//! lightness ladder instead, clamping rather than wrapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::{ColorConverter, Hsl};
use crate::config::HarmonyConfig;
use crate::constants::harmony as offsets;
use crate::ColorError;

/// The six supported color harmonies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyType {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
    Monochromatic,
}

impl HarmonyType {
    /// Every harmony, in presentation order
    pub const ALL: [HarmonyType; 6] = [
        HarmonyType::Complementary,
        HarmonyType::Analogous,
        HarmonyType::Triadic,
        HarmonyType::Tetradic,
        HarmonyType::SplitComplementary,
        HarmonyType::Monochromatic,
    ];

    /// Kebab-case identifier
    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyType::Complementary => "complementary",
            HarmonyType::Analogous => "analogous",
            HarmonyType::Triadic => "triadic",
            HarmonyType::Tetradic => "tetradic",
            HarmonyType::SplitComplementary => "split-complementary",
            HarmonyType::Monochromatic => "monochromatic",
        }
    }

    /// Hue offsets in degrees; monochromatic has a single zero offset
    pub fn hue_offsets(self) -> &'static [i32] {
        match self {
            HarmonyType::Complementary => &offsets::COMPLEMENTARY,
            HarmonyType::Analogous => &offsets::ANALOGOUS,
            HarmonyType::Triadic => &offsets::TRIADIC,
            HarmonyType::Tetradic => &offsets::TETRADIC,
            HarmonyType::SplitComplementary => &offsets::SPLIT_COMPLEMENTARY,
            HarmonyType::Monochromatic => &[0],
        }
    }

    /// Number of colors this harmony produces
    pub fn member_count(self) -> usize {
        match self {
            HarmonyType::Monochromatic => offsets::MONOCHROMATIC_LIGHTNESS.len(),
            other => other.hue_offsets().len(),
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyType {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        HarmonyType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ColorError::UnknownHarmonyType { name: s.to_string() })
    }
}

/// A harmony tag with its ordered hex colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorHarmony {
    pub kind: HarmonyType,
    pub colors: Vec<String>,
}

/// Generator deriving harmonies from a base color
#[derive(Debug, Clone)]
pub struct HarmonyGenerator {
    converter: ColorConverter,
    min_lightness: u8,
    max_lightness: u8,
}

impl Default for HarmonyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmonyGenerator {
    /// Create a generator with the default monochromatic clamp of [10, 90]
    pub fn new() -> Self {
        Self::from_config(&HarmonyConfig::default())
    }

    /// Create a generator from configuration
    pub fn from_config(config: &HarmonyConfig) -> Self {
        let (a, b) = (
            config.monochromatic_min_lightness.min(100),
            config.monochromatic_max_lightness.min(100),
        );
        Self {
            converter: ColorConverter::new(),
            min_lightness: a.min(b),
            max_lightness: a.max(b),
        }
    }

    /// HSL members of a harmony, in order
    pub fn harmony_hsl(&self, base: Hsl, kind: HarmonyType) -> Vec<Hsl> {
        let members: Vec<Hsl> = match kind {
            HarmonyType::Monochromatic => offsets::MONOCHROMATIC_LIGHTNESS
                .iter()
                .map(|offset| {
                    let l = (i32::from(base.l) + offset)
                        .clamp(i32::from(self.min_lightness), i32::from(self.max_lightness));
                    base.with_lightness(l as u8)
                })
                .collect(),
            rotation => rotation
                .hue_offsets()
                .iter()
                .map(|&offset| base.rotate(offset))
                .collect(),
        };
        trace!(%kind, base = %base, count = members.len(), "derived harmony");
        members
    }

    /// Harmony of an HSL base color
    pub fn generate_from_hsl(&self, base: Hsl, kind: HarmonyType) -> ColorHarmony {
        ColorHarmony {
            kind,
            colors: self
                .harmony_hsl(base, kind)
                .into_iter()
                .map(|hsl| self.converter.hsl_to_hex(hsl))
                .collect(),
        }
    }

    /// Harmony of a hex base color; malformed hex is treated as black
    pub fn generate(&self, base_hex: &str, kind: HarmonyType) -> ColorHarmony {
        self.generate_from_hsl(self.base_hsl(base_hex), kind)
    }

    /// All six harmonies of an HSL base color
    pub fn generate_all_from_hsl(&self, base: Hsl) -> Vec<ColorHarmony> {
        HarmonyType::ALL
            .into_iter()
            .map(|kind| self.generate_from_hsl(base, kind))
            .collect()
    }

    /// All six harmonies of a hex base color
    pub fn generate_all(&self, base_hex: &str) -> Vec<ColorHarmony> {
        self.generate_all_from_hsl(self.base_hsl(base_hex))
    }

    fn base_hsl(&self, hex: &str) -> Hsl {
        self.converter.rgb_to_hsl(self.converter.hex_to_rgb(hex))
    }
}
