//! Score formulas over analysis records.
//!
//! All scores are deterministic functions of their inputs and come back as
//! rounded integers. The formulas trust their callers: out-of-range inputs
//! produce out-of-range scores rather than errors, which is why they return
//! `i32` and not a clamped type. Callers that want hard range checks run
//! [`BeautyAnalysis::validate`](crate::types::BeautyAnalysis::validate) first.

use visage_core::{rgb_to_hsl, Hsl, Rgb, Undertone};

use crate::types::{FaceGeometry, FaceProportions, SkinMetrics, SkinTone, SkinType};

/// Weight of clarity in the skin health aggregate.
const CLARITY_WEIGHT: f64 = 0.25;
/// Weight of hydration in the skin health aggregate.
const HYDRATION_WEIGHT: f64 = 0.20;
/// Weight of evenness in the skin health aggregate.
const EVENNESS_WEIGHT: f64 = 0.20;
/// Weight of texture in the skin health aggregate.
const TEXTURE_WEIGHT: f64 = 0.15;
/// Weight of firmness in the skin health aggregate.
const FIRMNESS_WEIGHT: f64 = 0.10;
/// Weight of inverted oiliness in the skin health aggregate.
const OILINESS_WEIGHT: f64 = 0.05;
/// Weight of inverted sensitivity in the skin health aggregate.
const SENSITIVITY_WEIGHT: f64 = 0.05;

/// Weight of facial symmetry in the beauty score.
const SYMMETRY_WEIGHT: f64 = 0.4;
/// Weight of the proportion score in the beauty score.
const PROPORTION_WEIGHT: f64 = 0.6;

/// Ideal face length to width ratio.
const GOLDEN_RATIO: f64 = 1.618;
/// Ideal jaw to forehead width ratio.
const IDEAL_JAW_TO_FOREHEAD: f64 = 0.9;
/// Ideal cheekbone to jaw width ratio.
const IDEAL_CHEEKBONE_TO_JAW: f64 = 1.1;

/// Weighted skin health score.
///
/// Positive metrics (clarity, hydration, evenness, texture, firmness)
/// enter directly; oiliness and sensitivity enter inverted, so less of
/// either is better. The weights sum to 1, so in-range metrics always
/// produce a score in [0, 100].
pub fn skin_health_score(metrics: &SkinMetrics) -> i32 {
    let score = metrics.clarity * CLARITY_WEIGHT
        + metrics.hydration * HYDRATION_WEIGHT
        + metrics.evenness * EVENNESS_WEIGHT
        + metrics.texture * TEXTURE_WEIGHT
        + metrics.firmness * FIRMNESS_WEIGHT
        + (100.0 - metrics.oiliness) * OILINESS_WEIGHT
        + (100.0 - metrics.sensitivity) * SENSITIVITY_WEIGHT;
    score.round() as i32
}

/// Facial beauty score: 40% symmetry, 60% proportions.
pub fn beauty_score(geometry: &FaceGeometry) -> i32 {
    let proportion = proportion_score(&geometry.proportions);
    (geometry.symmetry_score * SYMMETRY_WEIGHT + proportion * PROPORTION_WEIGHT).round() as i32
}

/// Scores how close three facial ratios come to their ideals.
///
/// Each ratio starts at 100 and loses points linearly with distance from
/// its ideal; the face ratio is penalized at 50 per unit, the width ratios
/// at 100 per unit. Individual sub-scores may go negative; only the mean
/// is floored at 0.
fn proportion_score(p: &FaceProportions) -> f64 {
    let face_ratio = p.face_length / p.face_width;
    let jaw_to_forehead = p.jaw_width / p.forehead_width;
    let cheekbone_to_jaw = p.cheekbone_width / p.jaw_width;

    let face_ratio_score = 100.0 - (face_ratio - GOLDEN_RATIO).abs() * 50.0;
    let jaw_score = 100.0 - (jaw_to_forehead - IDEAL_JAW_TO_FOREHEAD).abs() * 100.0;
    let cheekbone_score = 100.0 - (cheekbone_to_jaw - IDEAL_CHEEKBONE_TO_JAW).abs() * 100.0;

    ((face_ratio_score + jaw_score + cheekbone_score) / 3.0).max(0.0)
}

/// Classifies skin type from the metrics.
///
/// The checks run in a fixed order and the first match wins: heavy oil
/// beats low hydration, which beats high sensitivity, and so on down to
/// the `Normal` default.
pub fn determine_skin_type(metrics: &SkinMetrics) -> SkinType {
    if metrics.oiliness > 70.0 {
        SkinType::Oily
    } else if metrics.hydration < 30.0 {
        SkinType::Dry
    } else if metrics.sensitivity > 60.0 {
        SkinType::Sensitive
    } else if metrics.oiliness > 40.0 && metrics.hydration < 50.0 {
        SkinType::Combination
    } else if metrics.age > 45 {
        SkinType::Mature
    } else {
        SkinType::Normal
    }
}

/// Scores how well a product color suits a skin tone, in [30, 95] for
/// in-range inputs.
///
/// The mean of two sub-scores: hue affinity for the undertone (90 inside
/// the undertone's flattering hue band, 60 outside, flat 75 for neutral)
/// and saturation affinity for the depth (ideal saturation is depth * 10,
/// falling off linearly).
pub fn color_compatibility(skin_tone: &SkinTone, product_hex: &str) -> i32 {
    let product = rgb_to_hsl(Rgb::from_hex_lossy(product_hex));
    let undertone = undertone_affinity(skin_tone.undertone, &product);
    let depth = depth_affinity(skin_tone.depth, &product);
    ((undertone + depth) / 2.0).round() as i32
}

fn undertone_affinity(undertone: Undertone, product: &Hsl) -> f64 {
    match undertone {
        Undertone::Warm => {
            if (30.0..=90.0).contains(&product.h) {
                90.0
            } else {
                60.0
            }
        }
        Undertone::Cool => {
            if (180.0..=270.0).contains(&product.h) {
                90.0
            } else {
                60.0
            }
        }
        Undertone::Neutral => 75.0,
    }
}

fn depth_affinity(depth: u8, product: &Hsl) -> f64 {
    let ideal_saturation = depth as f64 * 10.0;
    (100.0 - (product.s - ideal_saturation).abs()).max(0.0)
}
