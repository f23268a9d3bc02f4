//! Color metadata and accessibility analysis
//!
//! Derives from an RGB triple:
//! - Relative luminance (sRGB linearization, Rec. 709 weights)
//! - Perceived brightness (ITU-R BT.601 weights)
//! - WCAG 2.x contrast ratios against white and black
//! - AA / AAA compliance flags
//! - A coarse colorblind-safety heuristic
//!
//! The colorblind flag only checks red-green and blue-yellow channel gaps.
//! It is not a color-vision-deficiency simulation.

use serde::{Deserialize, Serialize};

use super::model::Rgb;
use crate::config::AnalyzerConfig;
use crate::constants::{srgb, wcag, BRIGHTNESS_WEIGHTS};

/// Accessibility and perception metrics of a single color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorMetadata {
    /// Relative luminance in [0, 1]
    pub luminance: f64,
    /// Perceived brightness in [0, 255]
    pub brightness: f64,
    /// Contrast ratio against white, in [1, 21]
    pub contrast_white: f64,
    /// Contrast ratio against black, in [1, 21]
    pub contrast_black: f64,
    pub is_light: bool,
    pub is_dark: bool,
    /// Best contrast reaches the AA threshold
    pub wcag_aa: bool,
    /// Best contrast reaches the AAA threshold
    pub wcag_aaa: bool,
    /// Heuristic: channels differ enough for common color-vision deficiencies
    pub color_blind_safe: bool,
}

impl ColorMetadata {
    /// Higher of the two reference contrasts
    pub fn best_contrast(&self) -> f64 {
        self.contrast_white.max(self.contrast_black)
    }
}

/// Analyzer computing [`ColorMetadata`] with configurable thresholds
#[derive(Debug, Clone)]
pub struct ColorAnalyzer {
    aa_threshold: f64,
    aaa_threshold: f64,
    light_threshold: f64,
    color_blind_gap: f64,
}

impl Default for ColorAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAnalyzer {
    /// Create an analyzer with the WCAG 2.x thresholds
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }

    /// Create an analyzer from configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            aa_threshold: config.wcag_aa_threshold,
            aaa_threshold: config.wcag_aaa_threshold,
            light_threshold: config.light_luminance_threshold,
            color_blind_gap: config.color_blind_channel_gap,
        }
    }

    /// Relative luminance of an sRGB color, in [0, 1]
    pub fn relative_luminance(&self, rgb: Rgb) -> f64 {
        let linear = rgb.channels().map(|c| {
            let c = c / 255.0;
            if c <= srgb::LINEAR_THRESHOLD {
                c / srgb::LINEAR_DIVISOR
            } else {
                ((c + srgb::GAMMA_OFFSET) / (1.0 + srgb::GAMMA_OFFSET)).powf(srgb::GAMMA)
            }
        });

        linear
            .iter()
            .zip(srgb::LUMINANCE_WEIGHTS)
            .map(|(c, w)| c * w)
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }

    /// Perceived brightness, unnormalized in [0, 255]
    pub fn brightness(&self, rgb: Rgb) -> f64 {
        rgb.channels()
            .iter()
            .zip(BRIGHTNESS_WEIGHTS)
            .map(|(c, w)| c * w)
            .sum::<f64>()
            / 1000.0
    }

    /// WCAG contrast ratio between two colors
    ///
    /// Symmetric: the lighter luminance always goes in the numerator.
    pub fn contrast_ratio(&self, a: Rgb, b: Rgb) -> f64 {
        contrast_from_luminance(self.relative_luminance(a), self.relative_luminance(b))
    }

    /// Compute the full metadata for a color
    pub fn analyze(&self, rgb: Rgb) -> ColorMetadata {
        let luminance = self.relative_luminance(rgb);
        let contrast_white = contrast_from_luminance(luminance, 1.0);
        let contrast_black = contrast_from_luminance(luminance, 0.0);
        let best = contrast_white.max(contrast_black);
        let is_light = luminance > self.light_threshold;

        ColorMetadata {
            luminance,
            brightness: self.brightness(rgb),
            contrast_white,
            contrast_black,
            is_light,
            is_dark: !is_light,
            wcag_aa: best >= self.aa_threshold,
            wcag_aaa: best >= self.aaa_threshold,
            color_blind_safe: self.is_color_blind_safe(rgb),
        }
    }

    /// Coarse red-green / blue-yellow differentiation check
    pub fn is_color_blind_safe(&self, rgb: Rgb) -> bool {
        let [r, g, b] = rgb.channels();
        (r - g).abs() > self.color_blind_gap || (b - (r + g) / 2.0).abs() > self.color_blind_gap
    }
}

fn contrast_from_luminance(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + wcag::FLARE) / (darker + wcag::FLARE)
}
