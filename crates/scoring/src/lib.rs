#![deny(unsafe_code)]

//! Beauty and skin analysis scoring for the visage engine.
//!
//! Takes the analysis records produced by the upstream capture pipeline
//! ([`types`]) and turns them into deterministic integer scores ([`score`]),
//! fixed-table advice ([`recommend`]), and a single summary record
//! ([`report`]). Color math comes from `visage-core`.

pub mod recommend;
pub mod report;
pub mod score;
pub mod types;

pub use recommend::{
    color_recommendations, concern_recommendations, personalized_recommendations,
    recommended_techniques, skin_type_recommendations,
};
pub use report::AnalysisReport;
pub use score::{beauty_score, color_compatibility, determine_skin_type, skin_health_score};
pub use types::{
    BeautyAnalysis, ColorAnalysis, ConcernKind, ConcernLocation, FaceGeometry, FaceProportions,
    FaceShape, RecommendedColors, Season, SkinConcern, SkinMetrics, SkinTone, SkinType,
    UserPreferences,
};
