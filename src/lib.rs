//! # Color Harmony
//!
//! A Rust crate for generating color palettes and describing colors.
//!
//! This library provides a small, total color pipeline:
//! - Converting hex colors to RGB, HSL, HSV, CMYK and CIE Lab, and back
//! - Analyzing luminance, brightness and WCAG contrast compliance
//! - Deriving color harmonies by fixed hue rotations
//! - Assembling palettes with harmony and accessibility scores
//! - Exporting colors and palettes as CSS, SCSS, JSON, ASE text and GIMP palettes
//!
//! Malformed hex input never fails: it is treated as black. Errors only arise
//! when parsing names, loading configuration or exporting JSON.
//!
//! ## Example
//!
//! ```rust
//! use color_harmony::{generate_palette, export_palette, ExportFormat, PaletteType};
//!
//! let palette = generate_palette(PaletteType::Triadic, Some("#FF0000"), 3);
//! assert_eq!(palette.hexes(), ["#FF0000", "#00FF00", "#0000FF"]);
//!
//! let css = export_palette(&palette, ExportFormat::Css)?;
//! println!("{css}");
//! # Ok::<(), color_harmony::ColorError>(())
//! ```

pub mod assembler;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod harmony;

pub use assembler::{Palette, PaletteAssembler, PaletteMetadata, PaletteType};
pub use color::{Cmyk, Color, ColorAnalyzer, ColorConverter, ColorMetadata, Hsl, Hsv, Rgb};
pub use config::GeneratorConfig;
pub use error::{ColorError, Result};
pub use export::{export_color, export_palette, ExportFormat};
pub use harmony::{ColorHarmony, HarmonyGenerator, HarmonyType};

/// Generate a palette with the default configuration and the thread RNG
///
/// # Arguments
///
/// * `kind` - Palette type
/// * `base` - Optional base hex color (ignored by random palettes)
/// * `count` - Requested number of colors
///
/// # Returns
///
/// A new [`Palette`]; harmony palettes hold at most their natural member count
pub fn generate_palette(kind: PaletteType, base: Option<&str>, count: usize) -> Palette {
    PaletteAssembler::new().generate_palette(kind, base, count)
}

/// Describe a single hex color; malformed input yields black
pub fn describe_color(hex: &str) -> Color {
    Color::from_hex(hex)
}
