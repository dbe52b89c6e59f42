//! Search error types

use thiserror::Error;

/// Search result type
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised when building a searcher from invalid options
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Invalid threshold {0}: must be within 0.0..=1.0")]
    InvalidThreshold(f64),

    #[error("Invalid max pattern length {0}: must be within 1..=32")]
    InvalidPatternLength(usize),

    #[error("Invalid location {0}: must be at most 1000000")]
    InvalidLocation(usize),

    #[error("Invalid distance {0}: must be at most 1000000")]
    InvalidDistance(usize),

    #[error("No search keys configured")]
    NoKeys,

    #[error("Empty search key at position {0}")]
    EmptyKey(usize),
}
