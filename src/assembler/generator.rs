//! Palette generation
//!
//! Turns a palette type, an optional base color and a requested size into a
//! [`Palette`]. Random choices go through a caller-supplied [`Rng`] so that
//! seeded generation is reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::model::{default_name, Palette, PaletteType};
use crate::color::{Color, ColorAnalyzer, ColorConverter, Hsl, Rgb};
use crate::config::{GeneratorConfig, LightnessRange};
use crate::constants::assembly::MAX_RGB24;
use crate::harmony::HarmonyGenerator;

/// Palette assembler combining conversion, analysis and harmony generation
#[derive(Debug, Clone)]
pub struct PaletteAssembler {
    converter: ColorConverter,
    analyzer: ColorAnalyzer,
    harmony: HarmonyGenerator,
    monochromatic: LightnessRange,
    seed: Option<u64>,
}

impl Default for PaletteAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteAssembler {
    /// Create an assembler with default configuration
    pub fn new() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }

    /// Create an assembler from configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let range = config.monochromatic;
        Self {
            converter: ColorConverter::new(),
            analyzer: ColorAnalyzer::from_config(&config.analyzer),
            harmony: HarmonyGenerator::from_config(&config.harmony),
            monochromatic: LightnessRange {
                min: range.min.min(range.max).min(100),
                max: range.max.max(range.min).min(100),
            },
            seed: config.seed,
        }
    }

    /// Generate a palette
    ///
    /// Uses a seeded RNG when the configuration carries a seed, otherwise the
    /// thread RNG.
    ///
    /// # Arguments
    ///
    /// * `kind` - How colors are chosen
    /// * `base` - Base hex color for monochromatic and harmony palettes;
    ///   ignored by random palettes, drawn at random when absent, black when
    ///   malformed
    /// * `count` - Requested number of colors; harmony palettes never exceed
    ///   their natural member count
    pub fn generate_palette(&self, kind: PaletteType, base: Option<&str>, count: usize) -> Palette {
        match self.seed {
            Some(seed) => {
                self.generate_palette_with_rng(kind, base, count, &mut StdRng::seed_from_u64(seed))
            }
            None => self.generate_palette_with_rng(kind, base, count, &mut rand::rng()),
        }
    }

    /// Generate a palette drawing randomness from `rng`
    pub fn generate_palette_with_rng<R: Rng>(
        &self,
        kind: PaletteType,
        base: Option<&str>,
        count: usize,
        rng: &mut R,
    ) -> Palette {
        let colors: Vec<Color> = if let Some(harmony) = kind.rotation_harmony() {
            let base = self.base_hsl(base, rng);
            self.harmony
                .harmony_hsl(base, harmony)
                .into_iter()
                .take(count)
                .map(|hsl| self.color(self.converter.hsl_to_rgb(hsl)))
                .collect()
        } else if kind == PaletteType::Monochromatic {
            let base = self.base_hsl(base, rng);
            self.lightness_steps(count)
                .into_iter()
                .map(|l| self.color(self.converter.hsl_to_rgb(base.with_lightness(l))))
                .collect()
        } else {
            (0..count).map(|_| self.random_color(rng)).collect()
        };

        let palette = Palette::from_colors(default_name(kind), kind, colors);
        debug!(
            %kind,
            requested = count,
            produced = palette.len(),
            harmony_score = palette.metadata.harmony_score,
            "generated palette"
        );
        palette
    }

    /// A single uniformly random color
    pub fn random_color<R: Rng>(&self, rng: &mut R) -> Color {
        self.color(random_rgb(rng))
    }

    /// Lightness values evenly spaced across the configured range, inclusive
    fn lightness_steps(&self, count: usize) -> Vec<u8> {
        let LightnessRange { min, max } = self.monochromatic;
        let (min, max) = (f64::from(min), f64::from(max));
        match count {
            0 => Vec::new(),
            1 => vec![((min + max) / 2.0).round() as u8],
            n => {
                let step = (max - min) / (n - 1) as f64;
                (0..n)
                    .map(|i| (min + step * i as f64).round() as u8)
                    .collect()
            }
        }
    }

    fn base_hsl<R: Rng>(&self, base: Option<&str>, rng: &mut R) -> Hsl {
        let rgb = match base {
            Some(hex) => self.converter.hex_to_rgb(hex),
            None => {
                let rgb = random_rgb(rng);
                trace!(base = %self.converter.rgb_to_hex(rgb), "drew random base color");
                rgb
            }
        };
        self.converter.rgb_to_hsl(rgb)
    }

    fn color(&self, rgb: Rgb) -> Color {
        Color::from_rgb_with(rgb, &self.analyzer)
    }
}

fn random_rgb<R: Rng>(rng: &mut R) -> Rgb {
    let value: u32 = rng.random_range(0..=MAX_RGB24);
    let [_, r, g, b] = value.to_be_bytes();
    Rgb::new(r, g, b)
}
