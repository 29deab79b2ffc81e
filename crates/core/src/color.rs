//! Color types and conversion functions for the visage core.
//!
//! Provides two color types (`Rgb`, `Hsl`) and pure conversion functions
//! between them. Hex parsing comes in two flavors: [`Rgb::parse_hex`] reports
//! malformed input as an error, while [`Rgb::from_hex_lossy`] mirrors the
//! upstream analysis pipeline and degrades malformed input to black.
//!
//! Conversion math uses `f64` throughout; quantization to 8-bit channels
//! happens only when producing an `Rgb`, with rounding.

use crate::error::VisageError;

/// 8-bit RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color with hue in degrees `[0, 360)` and saturation/lightness
/// as percentages `[0, 100]`.
///
/// Conversions from `Rgb` always produce values in those ranges. Callers
/// may construct out-of-range values by hand; `hsl_to_rgb` clamps the
/// resulting channels rather than panic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Black, the fallback for malformed color strings.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `VisageError::InvalidColor` if the input is not a valid
    /// 6-digit hex color.
    pub fn parse_hex(hex: &str) -> Result<Rgb, VisageError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(VisageError::InvalidColor(format!(
                "non-hex digit in '{hex}'"
            )));
        }
        if digits.len() != 6 {
            return Err(VisageError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                digits.len()
            )));
        }
        let r = u8::from_str_radix(&digits[0..2], 16)
            .map_err(|e| VisageError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .map_err(|e| VisageError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .map_err(|e| VisageError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Rgb { r, g, b })
    }

    /// Parses a hex color string, degrading malformed input to black.
    ///
    /// The analysis pipeline treats color strings as advisory, so a bad
    /// string must not abort a whole report. Strict callers use
    /// [`Rgb::parse_hex`] instead.
    pub fn from_hex_lossy(hex: &str) -> Rgb {
        Rgb::parse_hex(hex).unwrap_or(Rgb::BLACK)
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Converts RGB to HSL.
///
/// Equal channels (grays) are achromatic: saturation is 0 and hue is
/// reported as 0 degrees.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Exact compares are fine: max is a copy of one of r, g, b.
    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: h / 6.0 * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Converts HSL to RGB with channels rounded to 8-bit.
///
/// Out-of-range saturation or lightness can push intermediate channel
/// values outside [0, 1]; they are clamped before quantization.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let h = c.h / 360.0;
    let s = c.s / 100.0;
    let l = c.l / 100.0;

    if s == 0.0 {
        let v = (l.clamp(0.0, 1.0) * 255.0).round() as u8;
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);

    Rgb {
        r: (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        g: (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        b: (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    }
}

/// Evaluates one RGB channel from the piecewise-linear hue ramp.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
