//! Advice tables keyed by the closed enumerations, plus the aggregator
//! that assembles one recommendation list per analysis.
//!
//! The tables are fixed text, so lookups hand out `&'static str` slices;
//! only the aggregate allocates. Order is part of the contract: front ends
//! render the list as-is, and duplicates from repeated concerns are kept.

use crate::score::determine_skin_type;
use crate::types::{BeautyAnalysis, ColorAnalysis, ConcernKind, FaceShape, SkinType, UserPreferences};

/// Makeup techniques for a face shape. Always three entries.
pub fn recommended_techniques(shape: FaceShape) -> &'static [&'static str] {
    match shape {
        FaceShape::Oval => &[
            "Natural contouring along cheekbones",
            "Balanced eye makeup",
            "Subtle highlighting on forehead and chin",
        ],
        FaceShape::Round => &[
            "Contour sides of face to add definition",
            "Elongate eyes with winged eyeliner",
            "Highlight center of face vertically",
        ],
        FaceShape::Square => &[
            "Soften jaw with blush placement",
            "Round out features with curved lines",
            "Avoid harsh angles in makeup application",
        ],
        FaceShape::Heart => &[
            "Balance forehead with chin highlighting",
            "Soften pointed chin with rounded blush",
            "Emphasize eyes to draw attention upward",
        ],
        FaceShape::Diamond => &[
            "Widen forehead and chin with highlighting",
            "Soften cheekbones with strategic contouring",
            "Create horizontal lines to balance face",
        ],
        FaceShape::Oblong => &[
            "Add width with horizontal blush placement",
            "Avoid elongating techniques",
            "Focus on creating fuller, wider features",
        ],
    }
}

/// Product guidance for a skin type. Always three entries.
pub fn skin_type_recommendations(skin_type: SkinType) -> &'static [&'static str] {
    match skin_type {
        SkinType::Oily => &[
            "Use oil-free, mattifying foundation",
            "Apply powder to control shine",
            "Use blotting papers throughout the day",
        ],
        SkinType::Dry => &[
            "Use hydrating primer before foundation",
            "Choose dewy finish products",
            "Avoid powder-heavy makeup",
        ],
        SkinType::Combination => &[
            "Use different products for T-zone and cheeks",
            "Apply powder only to oily areas",
            "Use cream blush on dry areas",
        ],
        SkinType::Sensitive => &[
            "Choose hypoallergenic products",
            "Avoid fragranced cosmetics",
            "Test products on small area first",
        ],
        SkinType::Mature => &[
            "Use hydrating, anti-aging formulas",
            "Avoid heavy powder application",
            "Focus on luminous, youthful finishes",
        ],
        SkinType::Normal => &[
            "Most products will work well",
            "Focus on enhancing natural features",
            "Experiment with different textures",
        ],
    }
}

/// Coverage guidance for a skin concern. Always two entries.
pub fn concern_recommendations(kind: ConcernKind) -> &'static [&'static str] {
    match kind {
        ConcernKind::Acne => &[
            "Use non-comedogenic products",
            "Apply concealer after treating blemishes",
        ],
        ConcernKind::DarkSpots => &[
            "Use color-correcting concealer",
            "Consider highlighting to redirect attention",
        ],
        ConcernKind::FineLines => &[
            "Use primer to fill in lines",
            "Avoid settling into creases",
        ],
        ConcernKind::Wrinkles => &[
            "Use hydrating formulas",
            "Apply with patting motions",
        ],
        ConcernKind::Pores => &[
            "Use pore-minimizing primer",
            "Avoid thick, cakey products",
        ],
        ConcernKind::Redness => &[
            "Use green color corrector",
            "Choose neutral-toned products",
        ],
        ConcernKind::Dryness => &[
            "Use hydrating formulas",
            "Avoid matte finishes",
        ],
        ConcernKind::Oiliness => &[
            "Use oil-controlling products",
            "Set with powder",
        ],
    }
}

/// Four formatted lines summarizing a color analysis: the season/undertone
/// headline, up to three eyeshadow shades, up to three lip colors, and up
/// to two colors to avoid.
pub fn color_recommendations(analysis: &ColorAnalysis) -> Vec<String> {
    vec![
        format!(
            "Your {} color palette emphasizes {} tones",
            analysis.season.label(),
            analysis.undertone.label()
        ),
        format!(
            "Recommended eyeshadow shades: {}",
            join_first(&analysis.recommended_colors.eyeshadow, 3)
        ),
        format!(
            "Recommended lip colors: {}",
            join_first(&analysis.recommended_colors.lipstick, 3)
        ),
        format!(
            "Avoid these colors: {}",
            join_first(&analysis.colors_to_avoid, 2)
        ),
    ]
}

/// Assembles the full recommendation list for one analysis.
///
/// Fixed order: skin type guidance, face shape techniques, the four color
/// lines, then two lines per concern in input order. Nothing is deduplicated,
/// so a concern listed twice recommends twice.
///
/// Preferences are accepted for API compatibility with the capture
/// pipeline but do not affect the output yet.
pub fn personalized_recommendations(
    analysis: &BeautyAnalysis,
    _preferences: &UserPreferences,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let skin_type = determine_skin_type(&analysis.skin_metrics);
    recommendations.extend(
        skin_type_recommendations(skin_type)
            .iter()
            .copied()
            .map(String::from),
    );
    recommendations.extend(
        recommended_techniques(analysis.face_geometry.face_shape)
            .iter()
            .copied()
            .map(String::from),
    );
    recommendations.extend(color_recommendations(&analysis.color_analysis));
    for concern in &analysis.skin_concerns {
        recommendations.extend(
            concern_recommendations(concern.kind)
                .iter()
                .copied()
                .map(String::from),
        );
    }

    recommendations
}

fn join_first(items: &[String], n: usize) -> String {
    items[..items.len().min(n)].join(", ")
}
