//! Color model conversion utilities
//!
//! Provides conversions between the color models used across the crate:
//! - Hex strings to and from RGB
//! - RGB to HSL, HSV and CMYK with integer rounding
//! - HSL back to RGB and hex
//! - RGB to CIE Lab and CIE76 color difference
//!
//! Hex parsing degrades to black on malformed input so the pipeline stays
//! total; use [`ColorConverter::parse_hex`] when the caller wants the error.

use palette::{FromColor, Lab, Srgb};
use tracing::debug;

use super::model::{wrap_hue, Cmyk, Hsl, Hsv, Rgb};
use crate::{ColorError, Result};

/// Stateless converter between color models
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Parse a hex color string, falling back to black
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "#FF0000" or "ff0000")
    ///
    /// # Returns
    ///
    /// The parsed RGB triple, or black when `hex` is not six hex digits
    pub fn hex_to_rgb(&self, hex: &str) -> Rgb {
        self.parse_hex(hex).unwrap_or_else(|err| {
            debug!(%err, "falling back to black");
            Rgb::BLACK
        })
    }

    /// Parse a hex color string strictly
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the string is not six hex digits
    /// with an optional leading `#`
    pub fn parse_hex(&self, hex: &str) -> Result<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ColorError::invalid_hex(
                hex,
                format!("expected 6 hex digits, got {}", digits.len()),
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_hex(hex, "non-hex digit"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ColorError::invalid_hex(hex, e.to_string()))
        };

        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format an RGB triple as upper-case `#RRGGBB`
    pub fn rgb_to_hex(&self, rgb: Rgb) -> String {
        format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
    }

    /// Convert RGB to HSL
    ///
    /// Achromatic colors (all channels equal) get hue 0 and saturation 0.
    pub fn rgb_to_hsl(&self, rgb: Rgb) -> Hsl {
        let (max, min) = extremes(rgb);
        let (max_f, min_f) = (unit(max), unit(min));
        let l = (max_f + min_f) / 2.0;

        if max == min {
            return Hsl {
                h: 0,
                s: 0,
                l: percent(l),
            };
        }

        let d = max_f - min_f;
        let s = if l > 0.5 {
            d / (2.0 - max_f - min_f)
        } else {
            d / (max_f + min_f)
        };

        Hsl {
            h: hue(rgb, max, d),
            s: percent(s),
            l: percent(l),
        }
    }

    /// Convert RGB to HSV
    pub fn rgb_to_hsv(&self, rgb: Rgb) -> Hsv {
        let (max, min) = extremes(rgb);
        let (max_f, min_f) = (unit(max), unit(min));
        let d = max_f - min_f;

        let s = if max == 0 { 0.0 } else { d / max_f };
        let h = if max == min { 0 } else { hue(rgb, max, d) };

        Hsv {
            h,
            s: percent(s),
            v: percent(max_f),
        }
    }

    /// Convert RGB to CMYK
    ///
    /// Pure black maps to `cmyk(0%, 0%, 0%, 100%)`.
    pub fn rgb_to_cmyk(&self, rgb: Rgb) -> Cmyk {
        let (max, _) = extremes(rgb);
        if max == 0 {
            return Cmyk { c: 0, m: 0, y: 0, k: 100 };
        }

        let k = 1.0 - unit(max);
        let ink = |channel: u8| (1.0 - unit(channel) - k) / (1.0 - k);

        Cmyk {
            c: percent(ink(rgb.r)),
            m: percent(ink(rgb.g)),
            y: percent(ink(rgb.b)),
            k: percent(k),
        }
    }

    /// Convert HSL back to RGB
    pub fn hsl_to_rgb(&self, hsl: Hsl) -> Rgb {
        let h = f64::from(hsl.h % 360) / 360.0;
        let s = f64::from(hsl.s.min(100)) / 100.0;
        let l = f64::from(hsl.l.min(100)) / 100.0;

        if hsl.s == 0 {
            let v = byte(l);
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
            byte(hue_to_channel(p, q, h)),
            byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Convert HSL to an upper-case hex string
    pub fn hsl_to_hex(&self, hsl: Hsl) -> String {
        self.rgb_to_hex(self.hsl_to_rgb(hsl))
    }

    /// Convert RGB to CIE Lab (D65)
    pub fn rgb_to_lab(&self, rgb: Rgb) -> Lab {
        let srgb = Srgb::new(
            rgb.r as f32 / 255.0,
            rgb.g as f32 / 255.0,
            rgb.b as f32 / 255.0,
        );
        Lab::from_color(srgb)
    }

    /// Compute Delta E (CIE76) between two Lab colors
    pub fn delta_e(&self, lab1: Lab, lab2: Lab) -> f32 {
        let dl = lab1.l - lab2.l;
        let da = lab1.a - lab2.a;
        let db = lab1.b - lab2.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

fn extremes(rgb: Rgb) -> (u8, u8) {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    (max, min)
}

fn unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

fn byte(fraction: f64) -> u8 {
    (fraction * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Hue in whole degrees for a chromatic color, `d` being max - min in [0, 1]
fn hue(rgb: Rgb, max: u8, d: f64) -> u16 {
    let (r, g, b) = (unit(rgb.r), unit(rgb.g), unit(rgb.b));
    let sector = if max == rgb.r {
        (g - b) / d + if rgb.g < rgb.b { 6.0 } else { 0.0 }
    } else if max == rgb.g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    // 359.5 and above rounds to 360, which wraps to 0
    wrap_hue((sector * 60.0).round() as i32)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> ColorConverter {
        ColorConverter::new()
    }

    #[test]
    fn test_hex_to_rgb_with_and_without_hash() {
        assert_eq!(converter().hex_to_rgb("#FF8000"), Rgb::new(255, 128, 0));
        assert_eq!(converter().hex_to_rgb("ff8000"), Rgb::new(255, 128, 0));
        assert_eq!(converter().hex_to_rgb("#3366cc"), Rgb::new(51, 102, 204));
    }

    #[test]
    fn test_hex_to_rgb_malformed_is_black() {
        for input in ["", "#FFF", "#GGGGGG", "#FF00000", "##FF0000", "#ÿÿÿ", "12345"] {
            assert_eq!(converter().hex_to_rgb(input), Rgb::BLACK, "input {input:?}");
        }
    }

    #[test]
    fn test_parse_hex_reports_error() {
        assert!(matches!(
            converter().parse_hex("#12"),
            Err(ColorError::InvalidHex { .. })
        ));
        assert!(converter().parse_hex("#ZZ0000").is_err());
        assert!(converter().parse_hex("#00ff00").is_ok());
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(converter().rgb_to_hex(Rgb::new(255, 0, 0)), "#FF0000");
        assert_eq!(converter().rgb_to_hex(Rgb::new(0, 10, 171)), "#000AAB");
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let c = converter();
        assert_eq!(c.rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(c.rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl { h: 120, s: 100, l: 50 });
        assert_eq!(c.rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl { h: 240, s: 100, l: 50 });
        assert_eq!(c.rgb_to_hsl(Rgb::new(255, 0, 255)), Hsl { h: 300, s: 100, l: 50 });
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        let hsl = converter().rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(hsl.s, 0);
        assert_eq!(hsl.h, 0);
        assert_eq!(hsl.l, 50);

        assert_eq!(converter().rgb_to_hsl(Rgb::WHITE), Hsl { h: 0, s: 0, l: 100 });
        assert_eq!(converter().rgb_to_hsl(Rgb::BLACK), Hsl { h: 0, s: 0, l: 0 });
    }

    #[test]
    fn test_rgb_to_hsl_hue_rounding_wraps() {
        // True hue is about 359.8 degrees
        let hsl = converter().rgb_to_hsl(Rgb::new(255, 0, 1));
        assert_eq!(hsl.h, 0);
    }

    #[test]
    fn test_rgb_to_hsv() {
        let c = converter();
        assert_eq!(c.rgb_to_hsv(Rgb::new(255, 0, 0)), Hsv { h: 0, s: 100, v: 100 });
        assert_eq!(c.rgb_to_hsv(Rgb::BLACK), Hsv { h: 0, s: 0, v: 0 });
        assert_eq!(c.rgb_to_hsv(Rgb::new(128, 128, 128)), Hsv { h: 0, s: 0, v: 50 });
        assert_eq!(c.rgb_to_hsv(Rgb::new(0, 128, 255)).h, 210);
    }

    #[test]
    fn test_rgb_to_cmyk() {
        let c = converter();
        assert_eq!(c.rgb_to_cmyk(Rgb::BLACK), Cmyk { c: 0, m: 0, y: 0, k: 100 });
        assert_eq!(c.rgb_to_cmyk(Rgb::WHITE), Cmyk { c: 0, m: 0, y: 0, k: 0 });
        assert_eq!(c.rgb_to_cmyk(Rgb::new(255, 0, 0)), Cmyk { c: 0, m: 100, y: 100, k: 0 });
        assert_eq!(c.rgb_to_cmyk(Rgb::new(0, 0, 128)), Cmyk { c: 100, m: 100, y: 0, k: 50 });
    }

    #[test]
    fn test_hsl_to_hex() {
        let c = converter();
        assert_eq!(c.hsl_to_hex(Hsl { h: 0, s: 100, l: 50 }), "#FF0000");
        assert_eq!(c.hsl_to_hex(Hsl { h: 120, s: 100, l: 50 }), "#00FF00");
        assert_eq!(c.hsl_to_hex(Hsl { h: 240, s: 100, l: 50 }), "#0000FF");
        assert_eq!(c.hsl_to_hex(Hsl { h: 60, s: 100, l: 50 }), "#FFFF00");
        assert_eq!(c.hsl_to_hex(Hsl { h: 0, s: 0, l: 100 }), "#FFFFFF");
        assert_eq!(c.hsl_to_hex(Hsl { h: 200, s: 0, l: 0 }), "#000000");
    }

    #[test]
    fn test_hex_hsl_roundtrip_exact_for_primaries() {
        let c = converter();
        for hex in [
            "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF", "#000000", "#FFFFFF",
            "#808080",
        ] {
            let hsl = c.rgb_to_hsl(c.hex_to_rgb(hex));
            assert_eq!(c.hsl_to_hex(hsl), hex);
        }
    }

    #[test]
    fn test_delta_e_same_color() {
        let c = converter();
        let lab = c.rgb_to_lab(Rgb::new(51, 102, 204));
        assert!(c.delta_e(lab, lab) < 0.001);
    }

    #[test]
    fn test_rgb_to_lab_extremes() {
        let c = converter();
        assert!(c.rgb_to_lab(Rgb::BLACK).l < 1.0);
        let white = c.rgb_to_lab(Rgb::WHITE);
        assert!(white.l > 99.0);
        assert!(white.a.abs() < 1.0);
        assert!(white.b.abs() < 1.0);
        assert!(c.delta_e(c.rgb_to_lab(Rgb::BLACK), white) > 90.0);
    }
}
