//! Text templates for each export format

use std::fmt::Write;

use crate::assembler::Palette;
use crate::color::Color;
use crate::{ColorError, Result};

/// Largest column count written to GIMP palettes
const GPL_MAX_COLUMNS: usize = 8;

/// Labelled CSS-style representations of a color, in display order
pub fn format_strings(color: &Color) -> [(&'static str, String); 5] {
    [
        ("hex", color.hex.clone()),
        ("rgb", color.rgb.to_string()),
        ("hsl", color.hsl.to_string()),
        ("hsv", color.hsv.to_string()),
        ("cmyk", color.cmyk.to_string()),
    ]
}

/// Lower-case name with runs of other characters collapsed to `-`
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("color");
    }
    out
}

pub(super) fn palette_css(palette: &Palette) -> String {
    let prefix = slug(&palette.name);
    let mut out = String::from(":root {\n");
    for (i, color) in palette.colors.iter().enumerate() {
        let _ = writeln!(out, "  --{}-{}: {};", prefix, i + 1, color.hex);
    }
    out.push_str("}\n");
    out
}

pub(super) fn palette_scss(palette: &Palette) -> String {
    let prefix = slug(&palette.name);
    let mut out = String::new();
    for (i, color) in palette.colors.iter().enumerate() {
        let _ = writeln!(out, "${}-{}: {};", prefix, i + 1, color.hex);
    }
    out
}

pub(super) fn palette_ase(palette: &Palette) -> String {
    ase_list(&palette.name, &palette.colors)
}

pub(super) fn palette_gpl(palette: &Palette) -> String {
    gpl_list(&palette.name, &palette.colors)
}

pub(super) fn color_css(color: &Color) -> String {
    let mut out = String::from(":root {\n");
    for (label, value) in format_strings(color) {
        let _ = writeln!(out, "  --color-{}: {};", label, value);
    }
    out.push_str("}\n");
    out
}

pub(super) fn color_scss(color: &Color) -> String {
    let mut out = String::new();
    for (label, value) in format_strings(color) {
        let _ = writeln!(out, "$color-{}: {};", label, value);
    }
    out
}

pub(super) fn color_ase(color: &Color) -> String {
    ase_list(&color.hex, std::slice::from_ref(color))
}

pub(super) fn color_gpl(color: &Color) -> String {
    gpl_list(&color.hex, std::slice::from_ref(color))
}

pub(super) fn json<T: serde::Serialize>(value: &T, what: &str) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ColorError::serialization(format!("exporting {what} as JSON"), e))
}

fn ase_list(name: &str, colors: &[Color]) -> String {
    let mut out = format!("ASE Palette: {}\n", name);
    for (i, color) in colors.iter().enumerate() {
        let _ = writeln!(out, "{}. {} {}", i + 1, color.hex, color.rgb);
    }
    out
}

fn gpl_list(name: &str, colors: &[Color]) -> String {
    let mut out = String::from("GIMP Palette\n");
    let _ = writeln!(out, "Name: {}", name);
    let _ = writeln!(out, "Columns: {}", colors.len().min(GPL_MAX_COLUMNS));
    out.push_str("#\n");
    for color in colors {
        let _ = writeln!(
            out,
            "{:>3} {:>3} {:>3}\t{}",
            color.rgb.r, color.rgb.g, color.rgb.b, color.hex
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Split-Complementary Palette"), "split-complementary-palette");
        assert_eq!(slug("  Ocean & Sky!! "), "ocean-sky");
        assert_eq!(slug("***"), "color");
        assert_eq!(slug("Café 2"), "caf-2");
    }

    #[test]
    fn test_format_strings() {
        let strings = format_strings(&Color::from_hex("#FF0000"));
        assert_eq!(strings[0], ("hex", "#FF0000".to_string()));
        assert_eq!(strings[1].1, "rgb(255, 0, 0)");
        assert_eq!(strings[2].1, "hsl(0, 100%, 50%)");
        assert_eq!(strings[3].1, "hsv(0, 100%, 100%)");
        assert_eq!(strings[4].1, "cmyk(0%, 100%, 100%, 0%)");
    }

    #[test]
    fn test_gpl_rows_are_aligned() {
        let out = gpl_list("Test", &[Color::from_hex("#0A6400")]);
        assert!(out.contains(" 10 100   0\t#0A6400"));
        assert!(out.contains("Columns: 1"));
    }
}
