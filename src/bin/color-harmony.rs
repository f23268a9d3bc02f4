//! Command-line interface for color_harmony
//!
//! Generates palettes, inspects colors and writes default configuration.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use color_harmony::{
    export::format_strings, export_color, export_palette, Color, ColorConverter, ColorError,
    ExportFormat, GeneratorConfig, HarmonyGenerator, Palette, PaletteAssembler, PaletteType,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "color-harmony")]
#[command(version, about = "Generate color palettes and inspect colors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a palette
    Generate {
        /// Palette type (random, monochromatic, complementary, analogous,
        /// triadic, tetradic, split-complementary)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        kind: Option<PaletteType>,

        /// Base color as six hex digits
        #[arg(long, short = 'b', value_name = "HEX", value_parser = parse_hex_arg)]
        base: Option<String>,

        /// Number of colors
        #[arg(long, short = 'n')]
        count: Option<usize>,

        /// Export format (css, scss, json, ase, gpl); prints a summary when absent
        #[arg(long, short = 'f', value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Palette name
        #[arg(long)]
        name: Option<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// JSON configuration file
        #[arg(long, short = 'c', value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Show every representation and the accessibility metadata of a color
    Inspect {
        #[arg(value_name = "HEX", value_parser = parse_hex_arg)]
        hex: String,

        /// Export format instead of the summary
        #[arg(long, short = 'f', value_name = "FORMAT")]
        format: Option<ExportFormat>,
    },

    /// List the six harmonies of a color
    Harmonies {
        #[arg(value_name = "HEX", value_parser = parse_hex_arg)]
        hex: String,
    },

    /// Write the default configuration to a JSON file
    InitConfig {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            kind,
            base,
            count,
            format,
            name,
            seed,
            config,
        } => {
            let mut config = match config {
                Some(path) => GeneratorConfig::from_json_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => GeneratorConfig::default(),
            };
            if seed.is_some() {
                config.seed = seed;
            }

            let kind = kind.unwrap_or(config.default_palette_type);
            let count = count.unwrap_or(config.default_count);
            let assembler = PaletteAssembler::from_config(&config);
            let mut palette = assembler.generate_palette(kind, base.as_deref(), count);
            if let Some(name) = name {
                palette = palette.with_name(name);
            }

            match format {
                Some(format) => print!("{}", export_palette(&palette, format)?),
                None => print_palette(&palette),
            }
        }
        Command::Inspect { hex, format } => {
            let color = Color::from_hex(&hex);
            match format {
                Some(format) => print!("{}", export_color(&color, format)?),
                None => print_color(&color),
            }
        }
        Command::Harmonies { hex } => {
            for harmony in HarmonyGenerator::new().generate_all(&hex) {
                println!("{:<20} {}", harmony.kind, harmony.colors.join(" "));
            }
        }
        Command::InitConfig { path } => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            GeneratorConfig::default().to_json_file(&path)?;
            info!(path = %path.display(), "wrote default configuration");
            println!("Configuration saved to {}", path.display());
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Strict hex parsing for arguments; normalizes to upper-case `#RRGGBB`
fn parse_hex_arg(value: &str) -> Result<String, ColorError> {
    let converter = ColorConverter::new();
    converter
        .parse_hex(value)
        .map(|rgb| converter.rgb_to_hex(rgb))
}

fn badges(color: &Color) -> String {
    let meta = &color.metadata;
    let mut badges = Vec::new();
    if meta.wcag_aaa {
        badges.push("AAA");
    } else if meta.wcag_aa {
        badges.push("AA");
    }
    if meta.color_blind_safe {
        badges.push("CB-safe");
    }
    badges.push(if meta.is_light { "light" } else { "dark" });
    badges.join(" ")
}

fn print_palette(palette: &Palette) {
    println!("{} ({})", palette.name, palette.kind);
    for (i, color) in palette.colors.iter().enumerate() {
        println!(
            "  {:>2}. {}  {:<20} {:<20} {}",
            i + 1,
            color.hex,
            color.rgb.to_string(),
            color.hsl.to_string(),
            badges(color)
        );
    }
    let meta = &palette.metadata;
    println!(
        "dominant hue: {:.1}  saturation: {:.1}%  lightness: {:.1}%",
        meta.dominant_hue, meta.mean_saturation, meta.mean_lightness
    );
    println!(
        "harmony score: {:.0}  accessibility score: {:.0}%  min delta E: {:.1}",
        meta.harmony_score, meta.accessibility_score, meta.min_delta_e
    );
}

fn print_color(color: &Color) {
    for (label, value) in format_strings(color) {
        println!("{:<12} {}", label, value);
    }
    let lab = color.lab;
    println!("{:<12} lab({:.1}, {:.1}, {:.1})", "lab", lab.l, lab.a, lab.b);

    let meta = &color.metadata;
    println!("{:<12} {:.4}", "luminance", meta.luminance);
    println!("{:<12} {:.1}", "brightness", meta.brightness);
    println!("{:<12} {:.2}:1", "vs white", meta.contrast_white);
    println!("{:<12} {:.2}:1", "vs black", meta.contrast_black);
    println!("{:<12} {}", "wcag AA", meta.wcag_aa);
    println!("{:<12} {}", "wcag AAA", meta.wcag_aaa);
    println!("{:<12} {}", "cb-safe", meta.color_blind_safe);
    println!("{:<12} {}", "tone", if meta.is_light { "light" } else { "dark" });
}
