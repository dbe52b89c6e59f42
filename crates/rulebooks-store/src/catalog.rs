//! Rulebook catalog files
//!
//! A catalog is a JSON or YAML array of rulebook records:
//!
//! ```yaml
//! - id: billing
//!   user: bob
//!   description: billing rules
//!   source: upload
//!   rules:
//!     - id: strip-nulls
//! ```

use std::fs;
use std::path::Path;

use rulebooks_domain::RulebookRecord;

use crate::error::{Result, StoreError};

/// Catalog serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(CatalogFormat::Json),
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            _ => Err(StoreError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse catalog text
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<Vec<RulebookRecord>> {
    let rulebooks = match format {
        CatalogFormat::Json => serde_json::from_str(contents)?,
        CatalogFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    Ok(rulebooks)
}

/// Read and parse a catalog file
pub fn load_catalog(path: &Path) -> Result<Vec<RulebookRecord>> {
    let format = CatalogFormat::from_path(path)?;
    let contents = fs::read_to_string(path)?;
    parse_catalog(&contents, format)
}
