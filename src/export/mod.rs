//! Plain-text export of colors and palettes
//!
//! Supported formats:
//! - CSS custom properties
//! - SCSS variables
//! - JSON (every field of the value)
//! - A simplified, text-only Adobe swatch list
//! - GIMP `.gpl` palettes

pub mod formats;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assembler::Palette;
use crate::color::Color;
use crate::{ColorError, Result};

pub use formats::{format_strings, slug};

/// Text export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
    Json,
    Ase,
    Gpl,
}

impl ExportFormat {
    /// Every export format
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Json,
        ExportFormat::Ase,
        ExportFormat::Gpl,
    ];

    /// Lower-case identifier, also the conventional file extension
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Json => "json",
            ExportFormat::Ase => "ase",
            ExportFormat::Gpl => "gpl",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('.').to_ascii_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| ColorError::UnknownExportFormat { name: s.to_string() })
    }
}

/// Serialize a palette
///
/// # Errors
///
/// Only the JSON format can fail, with [`ColorError::Serialization`]
pub fn export_palette(palette: &Palette, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Css => formats::palette_css(palette),
        ExportFormat::Scss => formats::palette_scss(palette),
        ExportFormat::Json => formats::json(palette, "palette")?,
        ExportFormat::Ase => formats::palette_ase(palette),
        ExportFormat::Gpl => formats::palette_gpl(palette),
    })
}

/// Serialize a single color
///
/// # Errors
///
/// Only the JSON format can fail, with [`ColorError::Serialization`]
pub fn export_color(color: &Color, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Css => formats::color_css(color),
        ExportFormat::Scss => formats::color_scss(color),
        ExportFormat::Json => formats::json(color, "color")?,
        ExportFormat::Ase => formats::color_ase(color),
        ExportFormat::Gpl => formats::color_gpl(color),
    })
}
