//! Integration tests for the complete palette pipeline
//!
//! These tests validate the end-to-end workflow through the public API:
//! - Hex parsing and conversion to every color model
//! - Luminance, contrast and WCAG compliance metadata
//! - Harmony generation by hue rotation
//! - Palette assembly, scoring and export

use color_harmony::{
    export_palette, Color, ColorAnalyzer, ColorConverter, ExportFormat, GeneratorConfig, Hsl,
    HarmonyGenerator, HarmonyType, Palette, PaletteAssembler, PaletteType, Rgb,
};

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_hex_hsl_roundtrip_for_exact_colors() {
    let converter = ColorConverter::new();
    for hex in [
        "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF",
        "#808080",
    ] {
        let hsl = converter.rgb_to_hsl(converter.hex_to_rgb(hex));
        assert_eq!(converter.hsl_to_hex(hsl), hex, "roundtrip of {hex}");
    }
}

/// Integer HSL fields lose precision; no channel drifts by more than this
const HSL_ROUNDTRIP_TOLERANCE: u8 = 5;

#[test]
fn test_hex_hsl_roundtrip_tolerance_over_every_color() {
    let converter = ColorConverter::new();
    let mut worst = 0;
    for value in 0..=0xFF_FFFFu32 {
        let [_, r, g, b] = value.to_be_bytes();
        let rgb = Rgb::new(r, g, b);
        let back = converter.hsl_to_rgb(converter.rgb_to_hsl(rgb));
        let drift = rgb
            .r
            .abs_diff(back.r)
            .max(rgb.g.abs_diff(back.g))
            .max(rgb.b.abs_diff(back.b));
        assert!(
            drift <= HSL_ROUNDTRIP_TOLERANCE,
            "#{value:06X}: {rgb:?} vs {back:?}"
        );
        worst = worst.max(drift);
    }
    assert_eq!(worst, HSL_ROUNDTRIP_TOLERANCE);
}

#[test]
fn test_hex_hsl_roundtrip_worst_case() {
    let converter = ColorConverter::new();
    let hsl = converter.rgb_to_hsl(converter.hex_to_rgb("#02E4E6"));
    assert_eq!(hsl, Hsl { h: 181, s: 98, l: 45 });
    assert_eq!(converter.hsl_to_rgb(hsl), Rgb::new(2, 223, 227));
}

#[test]
fn test_representations_stay_in_range() {
    for value in (0..=0xFF_FFFFu32).step_by(0x01_0F0F) {
        let [_, r, g, b] = value.to_be_bytes();
        let color = Color::from_rgb(Rgb::new(r, g, b));
        assert!(color.hsl.h < 360 && color.hsl.s <= 100 && color.hsl.l <= 100);
        assert!(color.hsv.h < 360 && color.hsv.s <= 100 && color.hsv.v <= 100);
        assert!(color.cmyk.c <= 100 && color.cmyk.m <= 100);
        assert!(color.cmyk.y <= 100 && color.cmyk.k <= 100);
        assert!((0.0..=1.0).contains(&color.metadata.luminance));
    }
}

#[test]
fn test_grays_are_achromatic() {
    for hex in ["#000000", "#404040", "#808080", "#C0C0C0", "#FFFFFF"] {
        let color = Color::from_hex(hex);
        assert_eq!(color.hsl.h, 0, "{hex}");
        assert_eq!(color.hsl.s, 0, "{hex}");
        assert_eq!(color.hsv.s, 0, "{hex}");
    }
}

#[test]
fn test_malformed_hex_is_black() {
    for hex in ["", "#12345", "#GGGGGG", "red", "#FF00FF00"] {
        let color = Color::from_hex(hex);
        assert_eq!(color.hex, "#000000", "{hex:?}");
        assert_eq!(color.cmyk.k, 100);
    }
}

// ============================================================================
// Analysis
// ============================================================================

#[test]
fn test_contrast_extremes_and_symmetry() {
    let analyzer = ColorAnalyzer::new();
    assert_eq!(analyzer.relative_luminance(Rgb::BLACK), 0.0);
    assert!((analyzer.relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    assert!((analyzer.contrast_ratio(Rgb::BLACK, Rgb::WHITE) - 21.0).abs() < 1e-9);

    let navy = Rgb::new(0, 0, 128);
    let gold = Rgb::new(255, 215, 0);
    assert_eq!(
        analyzer.contrast_ratio(navy, gold),
        analyzer.contrast_ratio(gold, navy)
    );
}

#[test]
fn test_metadata_flags_are_consistent() {
    for hex in ["#000000", "#FFFFFF", "#777777", "#FF0000", "#0077BE", "#FFFF00"] {
        let meta = Color::from_hex(hex).metadata;
        assert_ne!(meta.is_light, meta.is_dark, "{hex}");
        assert!(!meta.wcag_aaa || meta.wcag_aa, "{hex}: AAA implies AA");
        assert!((1.0..=21.0).contains(&meta.best_contrast()), "{hex}");
    }
}

// ============================================================================
// Harmonies
// ============================================================================

#[test]
fn test_harmony_hues_from_base() {
    let generator = HarmonyGenerator::new();
    let base = Hsl::new(200, 60, 50);
    let expected: [(HarmonyType, &[u16]); 5] = [
        (HarmonyType::Complementary, &[200, 20]),
        (HarmonyType::Analogous, &[170, 200, 230]),
        (HarmonyType::Triadic, &[200, 320, 80]),
        (HarmonyType::Tetradic, &[200, 290, 20, 110]),
        (HarmonyType::SplitComplementary, &[200, 350, 50]),
    ];
    for (kind, hues) in expected {
        let members = generator.harmony_hsl(base, kind);
        let got: Vec<u16> = members.iter().map(|hsl| hsl.h).collect();
        assert_eq!(got, hues, "{kind}");
        assert!(members.iter().all(|hsl| hsl.s == 60 && hsl.l == 50));
    }
}

#[test]
fn test_monochromatic_harmony_is_clamped() {
    let generator = HarmonyGenerator::new();
    let members = generator.harmony_hsl(Hsl::new(120, 80, 5), HarmonyType::Monochromatic);
    assert_eq!(members.len(), 5);
    assert!(members.iter().all(|hsl| (10..=90).contains(&hsl.l)));
    assert!(members.iter().all(|hsl| hsl.h == 120 && hsl.s == 80));
}

#[test]
fn test_generate_all_harmonies_of_red() {
    let harmonies = HarmonyGenerator::new().generate_all("#FF0000");
    assert_eq!(harmonies.len(), 6);
    let triadic = harmonies
        .iter()
        .find(|h| h.kind == HarmonyType::Triadic)
        .expect("triadic present");
    assert_eq!(triadic.colors, ["#FF0000", "#00FF00", "#0000FF"]);
}

// ============================================================================
// Palettes
// ============================================================================

#[test]
fn test_palette_sizes() {
    let assembler = PaletteAssembler::new();
    assert_eq!(
        assembler.generate_palette(PaletteType::Random, None, 7).len(),
        7
    );
    assert_eq!(
        assembler
            .generate_palette(PaletteType::Complementary, Some("#FF8800"), 5)
            .len(),
        2
    );
    assert_eq!(
        assembler
            .generate_palette(PaletteType::Monochromatic, Some("#FF8800"), 6)
            .len(),
        6
    );
    assert!(assembler
        .generate_palette(PaletteType::Tetradic, Some("#FF8800"), 0)
        .is_empty());
}

#[test]
fn test_seeded_palettes_are_reproducible() {
    let config = GeneratorConfig {
        seed: Some(42),
        ..GeneratorConfig::default()
    };
    let assembler = PaletteAssembler::from_config(&config);
    let a = assembler.generate_palette(PaletteType::Random, None, 5);
    let b = assembler.generate_palette(PaletteType::Random, None, 5);
    assert_eq!(a.hexes(), b.hexes());
}

#[test]
fn test_black_and_white_palette_scores() {
    let palette = Palette::from_colors(
        "Ink",
        PaletteType::Random,
        vec![Color::from_hex("#000000"), Color::from_hex("#FFFFFF")],
    );
    assert_eq!(palette.metadata.accessibility_score, 100.0);
    assert_eq!(palette.name, "Ink");
}

#[test]
fn test_palette_scores_are_bounded() {
    let assembler = PaletteAssembler::new();
    for kind in PaletteType::ALL {
        let palette = assembler.generate_palette(kind, Some("#3366CC"), 5);
        let meta = palette.metadata;
        assert!((0.0..=100.0).contains(&meta.harmony_score), "{kind}");
        assert!((0.0..=100.0).contains(&meta.accessibility_score), "{kind}");
        assert!((0.0..360.0).contains(&meta.dominant_hue), "{kind}");
    }
}

#[test]
fn test_triadic_palette_exports() {
    let palette = PaletteAssembler::new().generate_palette(PaletteType::Triadic, Some("#FF0000"), 3);
    assert_eq!(palette.name, "Triadic Palette");

    let css = export_palette(&palette, ExportFormat::Css).unwrap();
    assert_eq!(
        css,
        ":root {\n  --triadic-palette-1: #FF0000;\n  --triadic-palette-2: #00FF00;\n  --triadic-palette-3: #0000FF;\n}\n"
    );

    let gpl = export_palette(&palette, ExportFormat::Gpl).unwrap();
    assert!(gpl.starts_with("GIMP Palette\nName: Triadic Palette\nColumns: 3\n#\n"));
    assert!(gpl.contains("255   0   0\t#FF0000"));
}
