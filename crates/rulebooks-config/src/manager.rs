//! Configuration manager implementation

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::{debug, warn};

use crate::{
    error::{ConfigError, Result},
    types::{ConfigManager as ConfigManagerTrait, RulebooksConfig, LOG_LEVELS},
};

const ENV_PREFIX: &str = "RULEBOOKS";

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rulebooks")
            .join("config.toml")
    }
}

impl ConfigManagerTrait for ConfigManager {
    fn load_config(&mut self) -> Result<RulebooksConfig> {
        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: RulebooksConfig = builder.build()?.try_deserialize()?;
        if let Err(err) = self.validate_config(&config) {
            warn!(path = %self.config_path.display(), error = %err, "Rejected configuration");
            return Err(err);
        }

        debug!(path = %self.config_path.display(), "Loaded configuration");
        Ok(config)
    }

    fn save_config(&self, config: &RulebooksConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.config_path, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &RulebooksConfig) -> Result<()> {
        config.search.validate()?;

        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level: {}",
                config.logging.level
            )));
        }
        if config.tab.create_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Create label must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
