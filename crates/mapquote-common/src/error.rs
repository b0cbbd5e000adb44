//! Error types for MapQuote
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using MapQuoteError
pub type Result<T> = std::result::Result<T, MapQuoteError>;

/// Unified error type for MapQuote operations
#[derive(Debug, Error)]
pub enum MapQuoteError {
    // Input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // Feature errors
    #[error("Feature error: {0}")]
    Feature(#[from] FeatureError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

}

/// Raw input errors (bounds and text parsing)
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Invalid bounds: min {min} must not exceed max {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Default {default} lies outside [{min}, {max}]")]
    DefaultOutOfRange { default: f64, min: f64, max: f64 },

    #[error("Malformed feature assignment '{0}', expected <path>=<quantity>")]
    MalformedAssignment(String),
}

/// Feature addressing and update errors
#[derive(Debug, Error, PartialEq)]
pub enum FeatureError {
    #[error("Unknown feature path: {0}")]
    UnknownPath(String),

    #[error("Invalid feature path: '{0}'")]
    InvalidPath(String),

    #[error("Duplicate feature entry: {0}")]
    Duplicate(String),

    #[error("Only one custom feature entry is allowed")]
    MultipleCustom,
}

impl From<serde_json::Error> for MapQuoteError {
    fn from(err: serde_json::Error) -> Self {
        MapQuoteError::Serialization(err.to_string())
    }
}
