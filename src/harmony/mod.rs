//! Color harmony module
//!
//! Derives related hue sets (complementary, analogous, triadic, tetradic,
//! split-complementary) and monochromatic lightness ladders from a base color.

pub mod generator;

pub use generator::{ColorHarmony, HarmonyGenerator, HarmonyType};
