//! The summary record handed back to callers after scoring an analysis.

use serde::{Deserialize, Serialize};

use crate::recommend::personalized_recommendations;
use crate::score::{beauty_score, determine_skin_type, skin_health_score};
use crate::types::{BeautyAnalysis, SkinType, UserPreferences};

/// Everything the front end shows for one capture: the two scores, the
/// derived skin type, and the assembled recommendation list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub beauty_score: i32,
    pub skin_health_score: i32,
    pub skin_type: SkinType,
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// Runs the full scoring pass over one analysis.
    ///
    /// Inputs are taken as-is; callers that want range guarantees should
    /// run [`BeautyAnalysis::validate`] first.
    pub fn from_analysis(analysis: &BeautyAnalysis, preferences: &UserPreferences) -> Self {
        AnalysisReport {
            beauty_score: beauty_score(&analysis.face_geometry),
            skin_health_score: skin_health_score(&analysis.skin_metrics),
            skin_type: determine_skin_type(&analysis.skin_metrics),
            recommendations: personalized_recommendations(analysis, preferences),
        }
    }
}
