//! Aggregate palette metrics
//!
//! The dominant hue is a plain arithmetic mean of member hues. It is not a
//! circular mean, so palettes straddling 0/360 degrees report a hue on the
//! opposite side of the wheel.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorConverter};
use crate::constants::assembly::{HARMONY_PENALTY_PER_DEGREE, IDEAL_HUE_GAPS};

/// Aggregate metrics of a palette
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteMetadata {
    /// Arithmetic mean of member hues, in degrees
    pub dominant_hue: f64,
    /// Mean HSL saturation, in percent
    pub mean_saturation: f64,
    /// Mean HSL lightness, in percent
    pub mean_lightness: f64,
    /// Pairwise hue-gap score in [0, 100]
    pub harmony_score: f64,
    /// Percentage of members meeting WCAG AA
    pub accessibility_score: f64,
    /// Smallest CIE76 distance between two members
    pub min_delta_e: f32,
}

impl PaletteMetadata {
    /// Compute the metrics of a list of colors
    ///
    /// Values are left unrounded; callers format them for display.
    pub fn compute(colors: &[Color]) -> Self {
        if colors.is_empty() {
            return Self {
                dominant_hue: 0.0,
                mean_saturation: 0.0,
                mean_lightness: 0.0,
                harmony_score: 100.0,
                accessibility_score: 0.0,
                min_delta_e: 0.0,
            };
        }

        let n = colors.len() as f64;
        let mean = |f: fn(&Color) -> f64| colors.iter().map(f).sum::<f64>() / n;
        let aa_count = colors.iter().filter(|c| c.metadata.wcag_aa).count() as f64;

        Self {
            dominant_hue: mean(|c| f64::from(c.hsl.h)),
            mean_saturation: mean(|c| f64::from(c.hsl.s)),
            mean_lightness: mean(|c| f64::from(c.hsl.l)),
            harmony_score: harmony_score(colors),
            accessibility_score: aa_count / n * 100.0,
            min_delta_e: min_delta_e(colors),
        }
    }
}

/// Mean pairwise closeness of hue gaps to the ideal gaps
///
/// Each pair scores `100 - 2 * |gap - nearest ideal|`, floored at 0.
/// Palettes with fewer than two colors score 100.
pub fn harmony_score(colors: &[Color]) -> f64 {
    let hues: Vec<f64> = colors.iter().map(|c| f64::from(c.hsl.h)).collect();
    let scores: Vec<f64> = pairs(&hues).map(|(a, b)| pair_score(a, b)).collect();

    if scores.is_empty() {
        return 100.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn pair_score(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).abs();
    let gap = diff.min(360.0 - diff);
    let deviation = IDEAL_HUE_GAPS
        .iter()
        .map(|ideal| (gap - ideal).abs())
        .fold(f64::INFINITY, f64::min);
    (100.0 - HARMONY_PENALTY_PER_DEGREE * deviation).max(0.0)
}

fn min_delta_e(colors: &[Color]) -> f32 {
    let converter = ColorConverter::new();
    let labs: Vec<_> = colors.iter().map(|c| c.lab).collect();
    let closest = pairs(&labs)
        .map(|(a, b)| converter.delta_e(a, b))
        .fold(f32::INFINITY, f32::min);
    if closest.is_finite() {
        closest
    } else {
        0.0
    }
}

/// Every unordered pair of distinct positions
fn pairs<T: Copy>(items: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, &a)| items[i + 1..].iter().map(move |&b| (a, b)))
}
