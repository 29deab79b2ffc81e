//! Derived color properties: temperature, harmonies, contrast, palettes.
//!
//! Every operation takes a hex color string and parses it with
//! [`Rgb::from_hex_lossy`], so malformed input degrades to black instead of
//! failing the call. Classification and harmony math happen in HSL space;
//! results come back out as canonical lowercase hex.

use crate::color::{hsl_to_rgb, rgb_to_hsl, Hsl, Rgb};
use serde::{Deserialize, Serialize};

/// Palette size used when the caller does not ask for a specific count.
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Color temperature class, also used for skin undertones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    /// All undertones, in display order.
    pub const ALL: [Undertone; 3] = [Undertone::Warm, Undertone::Cool, Undertone::Neutral];

    /// Lowercase label matching the wire form.
    pub fn label(self) -> &'static str {
        match self {
            Undertone::Warm => "warm",
            Undertone::Cool => "cool",
            Undertone::Neutral => "neutral",
        }
    }
}

/// Classifies a color as warm, cool, or neutral by its hue.
///
/// Warm covers hues in [0, 60] and [300, 360], cool covers [120, 300],
/// neutral is everything between. The warm check runs first, so hues from
/// 300 up classify warm even though they also fall inside the cool band.
/// Achromatic colors report hue 0 and therefore classify warm.
pub fn color_temperature(hex: &str) -> Undertone {
    let hsl = rgb_to_hsl(Rgb::from_hex_lossy(hex));
    if (0.0..=60.0).contains(&hsl.h) || (300.0..=360.0).contains(&hsl.h) {
        Undertone::Warm
    } else if (120.0..=300.0).contains(&hsl.h) {
        Undertone::Cool
    } else {
        Undertone::Neutral
    }
}

/// Returns the complementary color: same saturation and lightness, hue
/// rotated by 180 degrees.
pub fn complementary_color(hex: &str) -> String {
    let hsl = rgb_to_hsl(Rgb::from_hex_lossy(hex));
    hsl_to_rgb(Hsl {
        h: normalize_hue(hsl.h + 180.0),
        s: hsl.s,
        l: hsl.l,
    })
    .to_hex()
}

/// Returns the two analogous colors at +30 and -30 degrees of hue,
/// in that order.
pub fn analogous_colors(hex: &str) -> [String; 2] {
    let hsl = rgb_to_hsl(Rgb::from_hex_lossy(hex));
    let plus = hsl_to_rgb(Hsl {
        h: normalize_hue(hsl.h + 30.0),
        s: hsl.s,
        l: hsl.l,
    });
    let minus = hsl_to_rgb(Hsl {
        h: normalize_hue(hsl.h - 30.0),
        s: hsl.s,
        l: hsl.l,
    });
    [plus.to_hex(), minus.to_hex()]
}

/// WCAG 2.x contrast ratio between two colors, in [1, 21].
///
/// Symmetric in its arguments: the brighter color always goes on top of
/// the ratio.
pub fn contrast_ratio(hex1: &str, hex2: &str) -> f64 {
    let l1 = relative_luminance(Rgb::from_hex_lossy(hex1));
    let l2 = relative_luminance(Rgb::from_hex_lossy(hex2));
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// Relative luminance per WCAG 2.x.
fn relative_luminance(c: Rgb) -> f64 {
    0.2126 * wcag_channel(c.r) + 0.7152 * wcag_channel(c.g) + 0.0722 * wcag_channel(c.b)
}

/// Gamma-expands one 8-bit channel.
///
/// The segment boundary is 0.03928 as published in WCAG 2.x, not the
/// 0.04045 of the sRGB standard.
fn wcag_channel(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Returns true if the color reads as light to the eye.
///
/// Uses the 299/587/114 perceptual brightness weights with a fixed
/// threshold of 128; a brightness of exactly 128 counts as dark.
pub fn is_light_color(hex: &str) -> bool {
    let c = Rgb::from_hex_lossy(hex);
    let brightness = (299.0 * c.r as f64 + 587.0 * c.g as f64 + 114.0 * c.b as f64) / 1000.0;
    brightness > 128.0
}

/// Generates a lightness sweep: `count` colors sharing the base hue and
/// saturation, with lightness evenly spaced from 0 to 100.
///
/// For `count >= 2` the sweep always starts at black and ends at white.
/// `count == 1` returns just the canonical form of the base color, and
/// `count == 0` returns an empty vector.
pub fn color_palette(base: &str, count: usize) -> Vec<String> {
    let rgb = Rgb::from_hex_lossy(base);
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![rgb.to_hex()];
    }
    let hsl = rgb_to_hsl(rgb);
    let step = 100.0 / (count - 1) as f64;
    (0..count)
        .map(|i| {
            hsl_to_rgb(Hsl {
                h: hsl.h,
                s: hsl.s,
                l: step * i as f64,
            })
            .to_hex()
        })
        .collect()
}

/// Normalizes a hue angle to [0, 360).
fn normalize_hue(h: f64) -> f64 {
    h.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Temperature tests --

    #[test]
    fn red_is_warm() {
        assert_eq!(color_temperature("#ff0000"), Undertone::Warm);
    }

    #[test]
    fn yellow_sits_on_the_warm_boundary() {
        // Hue 60 is still warm.
        assert_eq!(color_temperature("#ffff00"), Undertone::Warm);
    }

    #[test]
    fn green_sits_on_the_cool_boundary() {
        // Hue 120 opens the cool band.
        assert_eq!(color_temperature("#00ff00"), Undertone::Cool);
    }

    #[test]
    fn blue_is_cool() {
        assert_eq!(color_temperature("#0000ff"), Undertone::Cool);
    }

    #[test]
    fn violet_is_cool() {
        // #8000ff has hue ~270, inside [120, 300].
        assert_eq!(color_temperature("#8000ff"), Undertone::Cool);
    }

    #[test]
    fn chartreuse_is_neutral() {
        // #80ff00 has hue ~89.9, between the warm and cool bands.
        assert_eq!(color_temperature("#80ff00"), Undertone::Neutral);
    }

    #[test]
    fn magenta_is_warm_because_warm_wins_the_overlap() {
        // Hue 300 falls in both [300, 360] and [120, 300]; the warm
        // check runs first.
        assert_eq!(color_temperature("#ff00ff"), Undertone::Warm);
    }

    #[test]
    fn grays_classify_warm() {
        // Achromatic colors report hue 0, which lands in the warm band.
        assert_eq!(color_temperature("#000000"), Undertone::Warm);
        assert_eq!(color_temperature("#808080"), Undertone::Warm);
        assert_eq!(color_temperature("#ffffff"), Undertone::Warm);
    }

    #[test]
    fn malformed_input_classifies_as_black() {
        assert_eq!(color_temperature("not-a-color"), Undertone::Warm);
    }

    // -- Harmony tests --

    #[test]
    fn complementary_of_red_is_cyan() {
        assert_eq!(complementary_color("#ff0000"), "#00ffff");
    }

    #[test]
    fn complementary_of_cyan_is_red() {
        assert_eq!(complementary_color("#00ffff"), "#ff0000");
    }

    #[test]
    fn complementary_of_orange() {
        // Hue 30.1 rotates to 210.1.
        assert_eq!(complementary_color("#ff8000"), "#007fff");
    }

    #[test]
    fn complementary_of_gray_is_itself() {
        // Rotating an achromatic hue changes nothing.
        assert_eq!(complementary_color("#808080"), "#808080");
    }

    #[test]
    fn complementary_of_malformed_input_is_black() {
        assert_eq!(complementary_color("oops"), "#000000");
    }

    #[test]
    fn analogous_of_red_straddles_the_wrap() {
        let [plus, minus] = analogous_colors("#ff0000");
        assert_eq!(plus, "#ff8000", "+30 degrees from red");
        assert_eq!(minus, "#ff0080", "-30 degrees wraps to hue 330");
    }

    #[test]
    fn analogous_of_magenta() {
        let [plus, minus] = analogous_colors("#ff00ff");
        assert_eq!(plus, "#ff0080", "+30 degrees from hue 300");
        assert_eq!(minus, "#7f00ff", "-30 degrees from hue 300");
    }

    // -- Contrast tests --

    #[test]
    fn black_on_white_has_maximum_contrast() {
        let ratio = contrast_ratio("#000000", "#ffffff");
        assert!((ratio - 21.0).abs() < 1e-9, "expected 21, got {ratio}");
    }

    #[test]
    fn a_color_against_itself_has_unit_contrast() {
        let ratio = contrast_ratio("#3a7bd5", "#3a7bd5");
        assert!((ratio - 1.0).abs() < 1e-12, "expected 1, got {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#123456", "#fedcba");
        let ba = contrast_ratio("#fedcba", "#123456");
        assert!((ab - ba).abs() < 1e-12, "{ab} vs {ba}");
    }

    #[test]
    fn known_aa_gray_against_white() {
        // #767676 on white is the classic ~4.54:1 pair.
        let ratio = contrast_ratio("#767676", "#ffffff");
        assert!((ratio - 4.54).abs() < 0.01, "expected ~4.54, got {ratio}");
    }

    #[test]
    fn red_against_white() {
        let ratio = contrast_ratio("#ff0000", "#ffffff");
        assert!((ratio - 4.0).abs() < 0.01, "expected ~4.0, got {ratio}");
    }

    // -- Brightness tests --

    #[test]
    fn white_is_light_and_black_is_dark() {
        assert!(is_light_color("#ffffff"));
        assert!(!is_light_color("#000000"));
    }

    #[test]
    fn mid_gray_counts_as_dark() {
        // Brightness of #808080 is exactly 128, and the threshold is strict.
        assert!(!is_light_color("#808080"));
    }

    #[test]
    fn yellow_is_light_but_pure_red_is_not() {
        assert!(is_light_color("#ffff00"));
        assert!(!is_light_color("#ff0000"));
    }

    #[test]
    fn malformed_input_is_dark() {
        assert!(!is_light_color("nope"));
    }

    // -- Palette tests --

    #[test]
    fn palette_of_red_sweeps_lightness() {
        let palette = color_palette("#ff0000", 5);
        assert_eq!(
            palette,
            vec!["#000000", "#800000", "#ff0000", "#ff8080", "#ffffff"]
        );
    }

    #[test]
    fn palette_of_two_is_black_and_white() {
        assert_eq!(color_palette("#12c4ab", 2), vec!["#000000", "#ffffff"]);
    }

    #[test]
    fn palette_of_one_is_the_canonical_base() {
        assert_eq!(color_palette("FF8040", 1), vec!["#ff8040"]);
    }

    #[test]
    fn palette_of_zero_is_empty() {
        assert!(color_palette("#ff0000", 0).is_empty());
    }

    #[test]
    fn palette_of_malformed_base_sweeps_gray() {
        // Black base is achromatic, so the sweep is a gray ramp.
        let palette = color_palette("not-a-color", 3);
        assert_eq!(palette, vec!["#000000", "#808080", "#ffffff"]);
    }

    // -- Undertone wire form --

    #[test]
    fn undertone_serializes_as_snake_case() {
        let json = serde_json::to_string(&Undertone::Warm).unwrap();
        assert_eq!(json, "\"warm\"");
        let back: Undertone = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(back, Undertone::Neutral);
    }

    #[test]
    fn undertone_labels_match_wire_form() {
        for undertone in Undertone::ALL {
            let json = serde_json::to_string(&undertone).unwrap();
            assert_eq!(json, format!("\"{}\"", undertone.label()));
        }
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use crate::color::rgb_to_hsl;
        use proptest::prelude::*;

        fn any_rgb() -> impl Strategy<Value = Rgb> {
            (any::<u8>(), any::<u8>(), any::<u8>())
                .prop_map(|(r, g, b)| Rgb { r, g, b })
        }

        fn any_hex() -> impl Strategy<Value = String> {
            any_rgb().prop_map(|c| c.to_hex())
        }

        proptest! {
            #[test]
            fn temperature_agrees_with_hue_bands(color in any_rgb()) {
                let hex = color.to_hex();
                let h = rgb_to_hsl(color).h;
                let expected = if (0.0..=60.0).contains(&h) || h >= 300.0 {
                    Undertone::Warm
                } else if h >= 120.0 {
                    Undertone::Cool
                } else {
                    Undertone::Neutral
                };
                prop_assert_eq!(color_temperature(&hex), expected, "hue {}", h);
            }

            #[test]
            fn complementary_twice_lands_near_the_original(color in any_rgb()) {
                let once = complementary_color(&color.to_hex());
                let twice = Rgb::from_hex_lossy(&complementary_color(&once));
                // Two quantization passes can nudge each channel slightly.
                prop_assert!(
                    (twice.r as i32 - color.r as i32).abs() <= 2,
                    "r: {} vs {}", twice.r, color.r
                );
                prop_assert!(
                    (twice.g as i32 - color.g as i32).abs() <= 2,
                    "g: {} vs {}", twice.g, color.g
                );
                prop_assert!(
                    (twice.b as i32 - color.b as i32).abs() <= 2,
                    "b: {} vs {}", twice.b, color.b
                );
            }

            #[test]
            fn harmony_outputs_are_valid_hex(hex in any_hex()) {
                prop_assert!(Rgb::parse_hex(&complementary_color(&hex)).is_ok());
                let [plus, minus] = analogous_colors(&hex);
                prop_assert!(Rgb::parse_hex(&plus).is_ok());
                prop_assert!(Rgb::parse_hex(&minus).is_ok());
            }

            #[test]
            fn contrast_stays_in_wcag_range(a in any_hex(), b in any_hex()) {
                let ratio = contrast_ratio(&a, &b);
                prop_assert!(
                    (1.0..=21.0 + 1e-9).contains(&ratio),
                    "ratio {} out of [1, 21] for {a} vs {b}", ratio
                );
            }

            #[test]
            fn contrast_is_symmetric_for_all_pairs(a in any_hex(), b in any_hex()) {
                let ab = contrast_ratio(&a, &b);
                let ba = contrast_ratio(&b, &a);
                prop_assert!((ab - ba).abs() < 1e-12, "{} vs {}", ab, ba);
            }

            #[test]
            fn palette_has_requested_length_and_valid_entries(
                hex in any_hex(),
                count in 0_usize..=16,
            ) {
                let palette = color_palette(&hex, count);
                prop_assert_eq!(palette.len(), count);
                for entry in &palette {
                    prop_assert!(
                        Rgb::parse_hex(entry).is_ok(),
                        "invalid entry {entry} in palette of {hex}"
                    );
                }
                if count >= 2 {
                    prop_assert_eq!(&palette[0], "#000000", "sweep starts at black");
                    prop_assert_eq!(&palette[count - 1], "#ffffff", "sweep ends at white");
                }
            }
        }
    }
}
