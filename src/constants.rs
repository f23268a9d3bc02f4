//! Reference constants for color analysis and palette generation
//!
//! Values follow the W3C accessibility guidelines, the sRGB color space
//! definition and the ITU-R BT.601 luma weights.

/// WCAG 2.x contrast requirements
pub mod wcag {
    /// Minimum contrast ratio for AA compliance (normal text)
    pub const AA_CONTRAST: f64 = 4.5;

    /// Minimum contrast ratio for AAA compliance (normal text)
    pub const AAA_CONTRAST: f64 = 7.0;

    /// Flare term added to both luminances in the contrast formula
    pub const FLARE: f64 = 0.05;

    /// Maximum possible contrast ratio (black against white)
    pub const MAX_CONTRAST: f64 = 21.0;
}

/// sRGB relative luminance parameters
pub mod srgb {
    /// Normalized channel value at or below which the linear segment applies
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Divisor of the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset of the power-law segment
    pub const GAMMA_OFFSET: f64 = 0.055;

    /// Exponent of the power-law segment
    pub const GAMMA: f64 = 2.4;

    /// Rec. 709 luminance coefficients (R, G, B)
    pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];
}

/// Perceived brightness (ITU-R BT.601 weights, per mille)
pub const BRIGHTNESS_WEIGHTS: [f64; 3] = [299.0, 587.0, 114.0];

/// Luminance above which a color counts as light
pub const LIGHT_LUMINANCE_THRESHOLD: f64 = 0.5;

/// Channel gap above which the colorblind heuristic considers colors distinguishable
pub const COLOR_BLIND_CHANNEL_GAP: f64 = 50.0;

/// Hue offsets and lightness ladders for color harmonies
pub mod harmony {
    /// Complementary hue offsets in degrees
    pub const COMPLEMENTARY: [i32; 2] = [0, 180];

    /// Analogous hue offsets in degrees
    pub const ANALOGOUS: [i32; 3] = [-30, 0, 30];

    /// Triadic hue offsets in degrees
    pub const TRIADIC: [i32; 3] = [0, 120, 240];

    /// Tetradic hue offsets in degrees
    pub const TETRADIC: [i32; 4] = [0, 90, 180, 270];

    /// Split-complementary hue offsets in degrees
    pub const SPLIT_COMPLEMENTARY: [i32; 3] = [0, 150, 210];

    /// Monochromatic lightness offsets in percentage points
    pub const MONOCHROMATIC_LIGHTNESS: [i32; 5] = [-30, -15, 0, 15, 30];

    /// Lower clamp for monochromatic lightness
    pub const MONOCHROMATIC_MIN_LIGHTNESS: u8 = 10;

    /// Upper clamp for monochromatic lightness
    pub const MONOCHROMATIC_MAX_LIGHTNESS: u8 = 90;
}

/// Palette assembly parameters
pub mod assembly {
    /// Hue gaps considered harmonious when scoring a palette
    pub const IDEAL_HUE_GAPS: [f64; 7] = [0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0];

    /// Points lost per degree of deviation from the nearest ideal gap
    pub const HARMONY_PENALTY_PER_DEGREE: f64 = 2.0;

    /// Lightness range of a generated monochromatic palette
    pub const MONOCHROMATIC_MIN_LIGHTNESS: u8 = 20;
    pub const MONOCHROMATIC_MAX_LIGHTNESS: u8 = 80;

    /// Largest value of the 24-bit RGB space
    pub const MAX_RGB24: u32 = 0xFF_FFFF;

    /// Default number of colors per palette
    pub const DEFAULT_COUNT: usize = 5;
}
