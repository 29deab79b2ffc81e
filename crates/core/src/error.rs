//! Error types for the visage core.

use thiserror::Error;

/// Errors produced by strict parsing and validation.
#[derive(Debug, Error)]
pub enum VisageError {
    /// A color string could not be parsed as a six-digit hex color.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A record field sat outside its documented range.
    #[error("{name} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },
}
