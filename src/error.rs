//! Error types for the color_harmony library
//!
//! The conversion, analysis, harmony and palette pipeline is total and never
//! fails. Errors only surface at the edges: parsing user-supplied names and
//! hex strings, loading configuration, and serializing exports.

use thiserror::Error;

/// Result type alias for color_harmony operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for parsing, configuration and export operations
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex color string is not six hexadecimal digits
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// Palette type name not recognized
    #[error("Unknown palette type: {name}")]
    UnknownPaletteType { name: String },

    /// Harmony type name not recognized
    #[error("Unknown harmony type: {name}")]
    UnknownHarmonyType { name: String },

    /// Export format name not recognized
    #[error("Unknown export format: {name}")]
    UnknownExportFormat { name: String },

    /// Invalid configuration or input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration file error: {path}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ColorError {
    /// Create an invalid hex error
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration IO error with the offending path
    pub fn config_io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Check if this error came from user input rather than the environment
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidHex { .. }
                | ColorError::UnknownPaletteType { .. }
                | ColorError::UnknownHarmonyType { .. }
                | ColorError::UnknownExportFormat { .. }
                | ColorError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidHex { input, .. } => {
                format!("'{}' is not a color. Use six hex digits such as #3366CC.", input)
            }
            ColorError::UnknownPaletteType { name } => format!(
                "'{}' is not a palette type. Try random, monochromatic, complementary, \
                 analogous, triadic, tetradic or split-complementary.",
                name
            ),
            ColorError::UnknownHarmonyType { name } => {
                format!("'{}' is not a color harmony.", name)
            }
            ColorError::UnknownExportFormat { name } => format!(
                "'{}' is not an export format. Try css, scss, json, ase or gpl.",
                name
            ),
            ColorError::ConfigIo { path, .. } => {
                format!("Could not access the configuration file at {}.", path)
            }
            _ => "Palette operation failed. Please check your settings and try again.".to_string(),
        }
    }
}
