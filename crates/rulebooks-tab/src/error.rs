//! Tab error types

use rulebooks_config::ConfigError;
use rulebooks_search::SearchError;
use thiserror::Error;

/// Tab result type
pub type Result<T> = std::result::Result<T, TabError>;

/// Errors raised while building a tab
#[derive(Debug, Error)]
pub enum TabError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}
