#![deny(unsafe_code)]
//! CLI binary for the visage beauty analysis engine.
//!
//! Subcommands:
//! - `score --input <FILE>` — score a captured analysis record
//! - `palette <BASE>` — generate a palette and derived colors
//! - `contrast <COLOR1> <COLOR2>` — WCAG contrast check
//! - `list` — print the fixed enumerations

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use visage_core::{
    analogous_colors, color_palette, color_temperature, complementary_color, contrast_ratio, Rgb,
    Undertone, DEFAULT_PALETTE_SIZE,
};
use visage_scoring::{AnalysisReport, BeautyAnalysis, FaceShape, Season, SkinType, UserPreferences};

/// Minimum WCAG contrast for normal text at level AA.
const WCAG_AA: f64 = 4.5;
/// Minimum WCAG contrast for normal text at level AAA.
const WCAG_AAA: f64 = 7.0;

#[derive(Parser)]
#[command(name = "visage", about = "Beauty analysis scoring CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score an analysis record and print the full report.
    Score {
        /// Path to a JSON analysis record.
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Generate a lightness palette and derived colors for a base color.
    Palette {
        /// Base color as 6-digit hex (e.g. "#ff8040").
        base: String,

        /// Number of palette stops.
        #[arg(short, long, default_value_t = DEFAULT_PALETTE_SIZE)]
        count: usize,
    },
    /// Compute the WCAG contrast ratio between two colors.
    Contrast {
        /// First color as 6-digit hex.
        color1: String,

        /// Second color as 6-digit hex.
        color2: String,
    },
    /// List the fixed enumerations used in analysis records.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Score { input } => {
            let text = std::fs::read_to_string(&input)
                .map_err(|e| CliError::Io(format!("{}: {e}", input.display())))?;
            let analysis: BeautyAnalysis = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid analysis JSON: {e}")))?;
            analysis.validate()?;

            let report = AnalysisReport::from_analysis(&analysis, &UserPreferences::default());

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Beauty score: {}", report.beauty_score);
                println!("Skin health score: {}", report.skin_health_score);
                println!("Skin type: {}", report.skin_type.label());
                println!("Recommendations:");
                for line in &report.recommendations {
                    println!("  {line}");
                }
            }
        }
        Command::Palette { base, count } => {
            let canonical = Rgb::parse_hex(&base)?.to_hex();
            let palette = color_palette(&canonical, count);
            let temperature = color_temperature(&canonical);
            let complementary = complementary_color(&canonical);
            let analogous = analogous_colors(&canonical);

            if cli.json {
                let info = serde_json::json!({
                    "base": canonical,
                    "count": count,
                    "palette": palette,
                    "temperature": temperature,
                    "complementary": complementary,
                    "analogous": analogous,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palette:");
                println!("  {}", palette.join(", "));
                println!("Temperature: {}", temperature.label());
                println!("Complementary: {complementary}");
                println!("Analogous: {}", analogous.join(", "));
            }
        }
        Command::Contrast { color1, color2 } => {
            let c1 = Rgb::parse_hex(&color1)?.to_hex();
            let c2 = Rgb::parse_hex(&color2)?.to_hex();
            let ratio = contrast_ratio(&c1, &c2);

            if cli.json {
                let info = serde_json::json!({
                    "color1": c1,
                    "color2": c2,
                    "ratio": ratio,
                    "aa": ratio >= WCAG_AA,
                    "aaa": ratio >= WCAG_AAA,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Contrast ratio: {ratio:.2}");
                let aa = if ratio >= WCAG_AA { "pass" } else { "fail" };
                let aaa = if ratio >= WCAG_AAA { "pass" } else { "fail" };
                println!("AA ({WCAG_AA}): {aa}");
                println!("AAA ({WCAG_AAA}): {aaa}");
            }
        }
        Command::List => {
            let face_shapes: Vec<&str> = FaceShape::ALL.iter().map(|s| s.label()).collect();
            let skin_types: Vec<&str> = SkinType::ALL.iter().map(|s| s.label()).collect();
            let undertones: Vec<&str> = Undertone::ALL.iter().map(|u| u.label()).collect();
            let seasons: Vec<&str> = Season::ALL.iter().map(|s| s.label()).collect();

            if cli.json {
                let info = serde_json::json!({
                    "face_shapes": face_shapes,
                    "skin_types": skin_types,
                    "undertones": undertones,
                    "seasons": seasons,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Face shapes:");
                println!("  {}", face_shapes.join(", "));
                println!("Skin types:");
                println!("  {}", skin_types.join(", "));
                println!("Undertones:");
                println!("  {}", undertones.join(", "));
                println!("Seasons:");
                println!("  {}", seasons.join(", "));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
