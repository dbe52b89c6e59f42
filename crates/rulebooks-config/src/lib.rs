//! Rulebooks Configuration Management
//!
//! Loads the search tuning, tab labels and logging level from an optional
//! TOML file overlaid by `RULEBOOKS_*` environment variables.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{ConfigManager as ConfigManagerTrait, LoggingConfig, RulebooksConfig, TabConfig};
