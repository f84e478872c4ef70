//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading the municipality catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty name at entry {index}")]
    EmptyName { index: usize },

    #[error("invalid coordinate for {name}: ({lat}, {lng})")]
    InvalidCoordinate { name: String, lat: f64, lng: f64 },

    #[error("duplicate name {name} at entry {index}")]
    DuplicateName { name: String, index: usize },
}
