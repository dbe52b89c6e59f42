//! Store error types

use thiserror::Error;

/// Store result type
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised while loading rulebook catalogs
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}
