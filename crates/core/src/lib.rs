#![deny(unsafe_code)]
//! Core color math for the visage beauty analysis engine.
//!
//! Provides the `Rgb`/`Hsl` color types with hex parsing in strict and
//! lossy flavors, pure RGB/HSL conversions, and the derived properties the
//! scoring layer builds on: color temperature, complementary and analogous
//! harmonies, WCAG contrast, perceptual brightness, and lightness palettes.

pub mod color;
pub mod error;
pub mod palette;

pub use color::{hsl_to_rgb, rgb_to_hsl, Hsl, Rgb};
pub use error::VisageError;
pub use palette::{
    analogous_colors, color_palette, color_temperature, complementary_color, contrast_ratio,
    is_light_color, Undertone, DEFAULT_PALETTE_SIZE,
};
