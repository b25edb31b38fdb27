//! Configuration module for drillbook
//!
//! Manages the optional user configuration: a dataset path override, the
//! listing page size, and the default quiet setting. Stored as TOML in the
//! user's config directory.

use crate::page::DEFAULT_PAGE_SIZE;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DrillbookConfig {
    /// Path to a scenarios JSON file to use instead of the bundled set
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Scenarios shown per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for DrillbookConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            quiet: false,
        }
    }
}

impl DrillbookConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("drillbook").join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults when absent
    ///
    /// # Errors
    /// Returns `ConfigError` if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path.clone()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to its config-directory path
    ///
    /// # Errors
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    ///
    /// # Errors
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, config_path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
