//! Palette assembly module
//!
//! Combines generated colors (random, monochromatic or harmony-derived) into
//! named palettes carrying aggregate metadata: dominant hue, mean saturation
//! and lightness, a pairwise harmony score and an accessibility score.

pub mod generator;
pub mod metadata;
pub mod model;

pub use generator::PaletteAssembler;
pub use metadata::PaletteMetadata;
pub use model::{Palette, PaletteType};
