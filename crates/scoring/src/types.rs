//! Analysis records exchanged with the upstream capture pipeline.
//!
//! The pipeline emits JSON with camelCase keys; the serde attributes here
//! preserve that wire form. Parsing is deliberately forgiving where the
//! pipeline is known to be sloppy (face shape labels), and every record
//! that carries ranged fields offers an opt-in [`validate`](SkinMetrics::validate)
//! for callers that want hard errors instead of garbage-in, garbage-out
//! scores.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use visage_core::{Rgb, Undertone, VisageError};

/// Skin type as decided by [`determine_skin_type`](crate::score::determine_skin_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Sensitive,
    Mature,
    Normal,
}

impl SkinType {
    /// All skin types, in display order.
    pub const ALL: [SkinType; 6] = [
        SkinType::Oily,
        SkinType::Dry,
        SkinType::Combination,
        SkinType::Sensitive,
        SkinType::Mature,
        SkinType::Normal,
    ];

    /// Lowercase label matching the wire form.
    pub fn label(self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
            SkinType::Sensitive => "sensitive",
            SkinType::Mature => "mature",
            SkinType::Normal => "normal",
        }
    }
}

/// Detected face shape.
///
/// The detector upstream sometimes emits labels outside this set, so the
/// wire form is an open string: anything unrecognized maps to `Oval`
/// rather than failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
    Oblong,
}

impl FaceShape {
    /// All face shapes, in display order.
    pub const ALL: [FaceShape; 6] = [
        FaceShape::Oval,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Heart,
        FaceShape::Diamond,
        FaceShape::Oblong,
    ];

    /// Maps a detector label to a face shape.
    ///
    /// Matching is exact: unknown labels, including case variants like
    /// "Round", fall back to `Oval`.
    pub fn from_label(label: &str) -> FaceShape {
        match label {
            "oval" => FaceShape::Oval,
            "round" => FaceShape::Round,
            "square" => FaceShape::Square,
            "heart" => FaceShape::Heart,
            "diamond" => FaceShape::Diamond,
            "oblong" => FaceShape::Oblong,
            _ => FaceShape::Oval,
        }
    }

    /// Lowercase label matching the wire form.
    pub fn label(self) -> &'static str {
        match self {
            FaceShape::Oval => "oval",
            FaceShape::Round => "round",
            FaceShape::Square => "square",
            FaceShape::Heart => "heart",
            FaceShape::Diamond => "diamond",
            FaceShape::Oblong => "oblong",
        }
    }
}

impl Serialize for FaceShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for FaceShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FaceShape::from_label(&s))
    }
}

/// Seasonal color-analysis palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// All seasons, in display order.
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Lowercase label matching the wire form.
    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

/// Kind of skin concern flagged by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernKind {
    Acne,
    DarkSpots,
    FineLines,
    Wrinkles,
    Pores,
    Redness,
    Dryness,
    Oiliness,
}

impl ConcernKind {
    /// All concern kinds, in display order.
    pub const ALL: [ConcernKind; 8] = [
        ConcernKind::Acne,
        ConcernKind::DarkSpots,
        ConcernKind::FineLines,
        ConcernKind::Wrinkles,
        ConcernKind::Pores,
        ConcernKind::Redness,
        ConcernKind::Dryness,
        ConcernKind::Oiliness,
    ];

    /// Snake_case label matching the wire form.
    pub fn label(self) -> &'static str {
        match self {
            ConcernKind::Acne => "acne",
            ConcernKind::DarkSpots => "dark_spots",
            ConcernKind::FineLines => "fine_lines",
            ConcernKind::Wrinkles => "wrinkles",
            ConcernKind::Pores => "pores",
            ConcernKind::Redness => "redness",
            ConcernKind::Dryness => "dryness",
            ConcernKind::Oiliness => "oiliness",
        }
    }
}

/// A user's skin tone: hex color, undertone, and depth on a 1-10 scale
/// (1 = fairest, 10 = deepest).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkinTone {
    pub hex: String,
    pub undertone: Undertone,
    pub depth: u8,
    /// Optional seasonal palette assignment.
    #[serde(default)]
    pub season: Option<Season>,
}

impl SkinTone {
    /// Checks that depth is in [1, 10] and the hex color parses strictly.
    pub fn validate(&self) -> Result<(), VisageError> {
        if !(1..=10).contains(&self.depth) {
            return Err(VisageError::OutOfRange {
                name: "depth".into(),
                value: self.depth as f64,
                min: 1.0,
                max: 10.0,
            });
        }
        Rgb::parse_hex(&self.hex)?;
        Ok(())
    }
}

/// Raw facial measurements, in consistent units of the caller's choosing.
/// Only their ratios matter to the scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaceProportions {
    pub face_length: f64,
    pub face_width: f64,
    pub jaw_width: f64,
    pub forehead_width: f64,
    pub cheekbone_width: f64,
}

/// Detected face geometry: shape, symmetry, and raw proportions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaceGeometry {
    pub face_shape: FaceShape,
    /// Percentage in [0, 100].
    pub symmetry_score: f64,
    pub proportions: FaceProportions,
}

impl FaceGeometry {
    /// Checks that the symmetry score is a percentage and every raw
    /// proportion is strictly positive.
    pub fn validate(&self) -> Result<(), VisageError> {
        check_percentage("symmetryScore", self.symmetry_score)?;
        let p = &self.proportions;
        for (name, value) in [
            ("faceLength", p.face_length),
            ("faceWidth", p.face_width),
            ("jawWidth", p.jaw_width),
            ("foreheadWidth", p.forehead_width),
            ("cheekboneWidth", p.cheekbone_width),
        ] {
            if value <= 0.0 || value.is_nan() {
                return Err(VisageError::OutOfRange {
                    name: name.into(),
                    value,
                    min: 0.0,
                    max: f64::INFINITY,
                });
            }
        }
        Ok(())
    }
}

/// Measured skin metrics, each a percentage in [0, 100], plus age in years.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkinMetrics {
    pub oiliness: f64,
    pub hydration: f64,
    pub sensitivity: f64,
    pub clarity: f64,
    pub texture: f64,
    pub firmness: f64,
    pub evenness: f64,
    pub age: u32,
}

impl SkinMetrics {
    /// Checks that every metric is a percentage in [0, 100].
    pub fn validate(&self) -> Result<(), VisageError> {
        for (name, value) in [
            ("oiliness", self.oiliness),
            ("hydration", self.hydration),
            ("sensitivity", self.sensitivity),
            ("clarity", self.clarity),
            ("texture", self.texture),
            ("firmness", self.firmness),
            ("evenness", self.evenness),
        ] {
            check_percentage(name, value)?;
        }
        Ok(())
    }
}

/// Where on the face a concern was detected, in normalized image
/// coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConcernLocation {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// One detected skin concern with severity in [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SkinConcern {
    #[serde(rename = "type")]
    pub kind: ConcernKind,
    pub severity: f64,
    pub location: ConcernLocation,
}

/// Product color suggestions grouped by category, as hex strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendedColors {
    pub eyeshadow: Vec<String>,
    pub lipstick: Vec<String>,
    pub blush: Vec<String>,
    pub foundation: Vec<String>,
}

/// Seasonal color analysis for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorAnalysis {
    pub dominant_colors: Vec<String>,
    pub undertone: Undertone,
    pub season: Season,
    pub recommended_colors: RecommendedColors,
    pub colors_to_avoid: Vec<String>,
}

/// The complete analysis record for one face capture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeautyAnalysis {
    pub face_geometry: FaceGeometry,
    pub skin_metrics: SkinMetrics,
    pub skin_concerns: Vec<SkinConcern>,
    pub color_analysis: ColorAnalysis,
}

impl BeautyAnalysis {
    /// Checks every ranged field in the record.
    ///
    /// The score formulas themselves never call this; out-of-range inputs
    /// produce out-of-range scores instead of errors. Strict front ends
    /// run it before scoring.
    pub fn validate(&self) -> Result<(), VisageError> {
        self.face_geometry.validate()?;
        self.skin_metrics.validate()?;
        for concern in &self.skin_concerns {
            check_percentage("severity", concern.severity)?;
        }
        Ok(())
    }
}

/// Optional user preferences carried alongside an analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub brands: Vec<String>,
    pub makeup_style: Option<String>,
    pub skin_concerns: Vec<String>,
}

fn check_percentage(name: &str, value: f64) -> Result<(), VisageError> {
    // NaN fails the range check and is rejected.
    if !(0.0..=100.0).contains(&value) {
        return Err(VisageError::OutOfRange {
            name: name.into(),
            value,
            min: 0.0,
            max: 100.0,
        });
    }
    Ok(())
}
