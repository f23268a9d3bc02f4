//! Configuration structures for palette generation.
//!
//! This module defines the tunable parameters of the color pipeline,
//! grouped by the component that consumes them.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use color_harmony::GeneratorConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = GeneratorConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults
//! let config = GeneratorConfig::default();
//! # Ok::<(), color_harmony::ColorError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`AnalyzerConfig`]: WCAG thresholds and the colorblind heuristic
//! - [`HarmonyConfig`]: monochromatic ladder clamp
//! - [`LightnessRange`]: lightness span of generated monochromatic palettes

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assembler::PaletteType;
use crate::constants::{self, assembly, harmony, wcag};
use crate::{ColorError, Result};

/// Complete generator configuration.
///
/// Every field has a default, so partial JSON files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of colors when the caller does not ask for a count
    pub default_count: usize,

    /// Palette type when the caller does not name one
    pub default_palette_type: PaletteType,

    /// Metadata analysis thresholds
    pub analyzer: AnalyzerConfig,

    /// Harmony generation settings
    pub harmony: HarmonyConfig,

    /// Lightness span of generated monochromatic palettes
    pub monochromatic: LightnessRange,

    /// Seed for reproducible palettes; `None` uses the thread RNG
    pub seed: Option<u64>,
}

/// Accessibility analysis thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Minimum contrast ratio for AA compliance
    pub wcag_aa_threshold: f64,

    /// Minimum contrast ratio for AAA compliance
    pub wcag_aaa_threshold: f64,

    /// Luminance above which a color is light
    pub light_luminance_threshold: f64,

    /// Channel gap used by the colorblind heuristic
    pub color_blind_channel_gap: f64,
}

/// Harmony generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonyConfig {
    /// Lower clamp of the monochromatic lightness ladder
    pub monochromatic_min_lightness: u8,

    /// Upper clamp of the monochromatic lightness ladder
    pub monochromatic_max_lightness: u8,
}

/// Inclusive lightness range in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightnessRange {
    pub min: u8,
    pub max: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_count: assembly::DEFAULT_COUNT,
            default_palette_type: PaletteType::Random,
            analyzer: AnalyzerConfig::default(),
            harmony: HarmonyConfig::default(),
            monochromatic: LightnessRange::default(),
            seed: None,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            wcag_aa_threshold: wcag::AA_CONTRAST,
            wcag_aaa_threshold: wcag::AAA_CONTRAST,
            light_luminance_threshold: constants::LIGHT_LUMINANCE_THRESHOLD,
            color_blind_channel_gap: constants::COLOR_BLIND_CHANNEL_GAP,
        }
    }
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self {
            monochromatic_min_lightness: harmony::MONOCHROMATIC_MIN_LIGHTNESS,
            monochromatic_max_lightness: harmony::MONOCHROMATIC_MAX_LIGHTNESS,
        }
    }
}

impl Default for LightnessRange {
    fn default() -> Self {
        Self {
            min: assembly::MONOCHROMATIC_MIN_LIGHTNESS,
            max: assembly::MONOCHROMATIC_MAX_LIGHTNESS,
        }
    }
}

impl GeneratorConfig {
    /// Check ranges and thresholds
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameter`] naming the first bad field
    pub fn validate(&self) -> Result<()> {
        let a = &self.analyzer;
        if !(a.wcag_aa_threshold > 0.0) {
            return Err(ColorError::invalid_parameter(
                "analyzer.wcag_aa_threshold",
                a.wcag_aa_threshold,
            ));
        }
        if !(a.wcag_aaa_threshold >= a.wcag_aa_threshold) {
            return Err(ColorError::invalid_parameter(
                "analyzer.wcag_aaa_threshold",
                a.wcag_aaa_threshold,
            ));
        }
        if !(0.0..=1.0).contains(&a.light_luminance_threshold) {
            return Err(ColorError::invalid_parameter(
                "analyzer.light_luminance_threshold",
                a.light_luminance_threshold,
            ));
        }
        if !(a.color_blind_channel_gap >= 0.0) {
            return Err(ColorError::invalid_parameter(
                "analyzer.color_blind_channel_gap",
                a.color_blind_channel_gap,
            ));
        }

        let h = &self.harmony;
        check_lightness_range(
            "harmony.monochromatic",
            h.monochromatic_min_lightness,
            h.monochromatic_max_lightness,
        )?;
        check_lightness_range(
            "monochromatic",
            self.monochromatic.min,
            self.monochromatic.max,
        )?;

        Ok(())
    }

    /// Load configuration from JSON file and validate it
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ColorError::config_io(path.display().to_string(), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ColorError::serialization(format!("parsing {}", path.display()), e))?;
        config.validate()?;
        debug!(path = %path.display(), "loaded generator configuration");
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::serialization("encoding configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| ColorError::config_io(path.display().to_string(), e))?;
        Ok(())
    }
}

fn check_lightness_range(name: &str, min: u8, max: u8) -> Result<()> {
    if max > 100 {
        return Err(ColorError::invalid_parameter(format!("{name}.max"), max));
    }
    if min > max {
        return Err(ColorError::invalid_parameter(
            format!("{name}.min"),
            format!("{min} > {max}"),
        ));
    }
    Ok(())
}
