//! Color value types
//!
//! Every representation is derived from an RGB triple and never mutated after
//! construction. Integer fields make the documented ranges hold by type where
//! possible; the remaining bounds (hue below 360, percentages up to 100) are
//! upheld by [`ColorConverter`](super::ColorConverter).

use std::fmt;

use palette::Lab;
use serde::{Deserialize, Serialize};

use super::analysis::{ColorAnalyzer, ColorMetadata};
use super::conversion::ColorConverter;

/// 8-bit sRGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Black, the fallback for malformed hex input
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as floats in [0, 255]
    pub(crate) fn channels(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue (degrees in [0, 360)), saturation and lightness (percent in [0, 100])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Build an HSL value, wrapping the hue and clamping the percentages
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Same saturation and lightness with the hue rotated by `degrees`
    #[must_use]
    pub fn rotate(self, degrees: i32) -> Self {
        Self {
            h: wrap_hue(i32::from(self.h) + degrees),
            ..self
        }
    }

    /// Same hue and saturation at a new lightness
    #[must_use]
    pub fn with_lightness(self, l: u8) -> Self {
        Self {
            l: l.min(100),
            ..self
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Hue (degrees in [0, 360)), saturation and value (percent in [0, 100])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

/// Subtractive cyan, magenta, yellow, key (percent in [0, 100])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

/// A fully described color
///
/// Holds the canonical hex string together with every derived representation
/// and the accessibility metadata. Regenerating a color always produces a new
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Upper-case `#RRGGBB`
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub cmyk: Cmyk,
    /// CIE L*a*b* under D65, for perceptual distance
    pub lab: Lab,
    pub metadata: ColorMetadata,
}

impl Color {
    /// Build a color from an RGB triple with the default analyzer
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_rgb_with(rgb, &ColorAnalyzer::default())
    }

    /// Build a color from an RGB triple, analyzing it with `analyzer`
    pub fn from_rgb_with(rgb: Rgb, analyzer: &ColorAnalyzer) -> Self {
        let converter = ColorConverter::new();
        Self {
            hex: converter.rgb_to_hex(rgb),
            rgb,
            hsl: converter.rgb_to_hsl(rgb),
            hsv: converter.rgb_to_hsv(rgb),
            cmyk: converter.rgb_to_cmyk(rgb),
            lab: converter.rgb_to_lab(rgb),
            metadata: analyzer.analyze(rgb),
        }
    }

    /// Build a color from a hex string; malformed input yields black
    pub fn from_hex(hex: &str) -> Self {
        Self::from_rgb(ColorConverter::new().hex_to_rgb(hex))
    }

    /// Build a color from HSL
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_rgb(ColorConverter::new().hsl_to_rgb(hsl))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Wrap any integer angle into [0, 360)
pub(crate) fn wrap_hue(degrees: i32) -> u16 {
    // rem_euclid keeps the result non-negative
    degrees.rem_euclid(360) as u16
}

fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}
