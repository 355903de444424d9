//! Error types for radius resolution, configuration and serialization.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// An argument lies outside its domain (negative radius, latitude beyond
    /// ±90, longitude beyond ±180, non-finite values).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Encoding or decoding JSON, TOML or GeoJSON failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SearchError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SearchError::InvalidInput(_))
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
