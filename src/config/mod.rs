//! Configuration file handling for Splitter
//!
//! This module contains data structures for:
//! - `config.yaml` - Splitter settings (default split size, price source)
//! - `items.yaml` / `items.json` - Item catalog used to price named items

pub mod catalog;

pub use catalog::{CatalogItem, ItemCatalog};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_not_found, config_parse_failed, config_read_failed};
use crate::lookup::PriceSource;

/// Split size used when the command does not name one
pub const DEFAULT_SPLIT_SIZE: i64 = 2;

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "SPLITTER_CONFIG";

/// Splitter settings (config.yaml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SplitterConfig {
    /// The default number of people to split among
    pub default_split_size: i64,

    /// Value items at their wiki price instead of the Grand Exchange price
    pub use_wiki_prices: bool,

    /// Item catalog file; relative paths are resolved against the config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            default_split_size: DEFAULT_SPLIT_SIZE,
            use_wiki_prices: false,
            catalog: None,
        }
    }
}

impl SplitterConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a file
    ///
    /// A relative `catalog` entry is rewritten relative to the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;

        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))?;

        if let (Some(catalog), Some(dir)) = (config.catalog.as_ref(), path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(dir.join(catalog));
            }
        }

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolve configuration from an explicit path or the user config directory
    ///
    /// An explicit path must exist. Without one, `<config dir>/splitter/config.yaml`
    /// is used when present, and built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Configuration file [`SplitterConfig::resolve`] reads, if any
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|path| path.is_file()),
        }
    }

    pub fn price_source(&self) -> PriceSource {
        PriceSource::from_wiki_flag(self.use_wiki_prices)
    }

    /// Load the configured item catalog, or an empty one when none is configured
    pub fn load_catalog(&self) -> Result<ItemCatalog> {
        match &self.catalog {
            Some(path) => ItemCatalog::load(path),
            None => Ok(ItemCatalog::default()),
        }
    }
}

/// Default location of the configuration file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("splitter").join("config.yaml"))
}
