//! Core configuration types

use rulebooks_search::SearchOptions;
use serde::{Deserialize, Serialize};

/// Log levels accepted in `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RulebooksConfig {
    /// Fuzzy search tuning
    pub search: SearchOptions,
    /// Tab labels
    pub tab: TabConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Labels shown by the rulebooks tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TabConfig {
    /// Placeholder for the search input
    pub search_placeholder: String,
    /// Label of the "create new" affordance
    pub create_label: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            search_placeholder: "Search Rulebook by name, owner or description".to_string(),
            create_label: "Create a new Rulebook".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration
    fn load_config(&mut self) -> Result<RulebooksConfig, crate::error::ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &RulebooksConfig) -> Result<(), crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &RulebooksConfig) -> Result<(), crate::error::ConfigError>;
}
