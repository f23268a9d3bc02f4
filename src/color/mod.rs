//! Color models, conversion and analysis module
//!
//! This module holds the color value types, conversions between hex, RGB,
//! HSL, HSV, CMYK and Lab, and the accessibility metadata derived from them.

pub mod analysis;
pub mod conversion;
pub mod model;

pub use analysis::{ColorAnalyzer, ColorMetadata};
pub use conversion::ColorConverter;
pub use model::{Cmyk, Color, Hsl, Hsv, Rgb};
