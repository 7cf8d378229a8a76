//! Configuration management for shaun-editor.
//!
//! This crate provides configuration loading in TOML format
//! following XDG directory conventions. The config file is optional: it is
//! read when present and never created implicitly.

pub mod constants;
mod settings;
mod xdg;

pub use settings::{Config, EditorSettings, GeneralSettings, LoggingSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const THEME: &str = "light";
    pub const FONT_FAMILY: &str = "Monospaced";
    pub const FONT_SIZE: i32 = 13;
    pub const TAB_SIZE: usize = 4;
    pub const HISTORY_LIMIT: usize = 1000;
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific file.
    ///
    /// Missing keys take default values.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::validate_content(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Get path to themes directory.
    pub fn get_themes_dir() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("themes"))
    }

    /// Resolve the log file path.
    ///
    /// Uses the configured override, then the cache directory, then the
    /// system temp directory.
    pub fn log_file_path(&self) -> PathBuf {
        if let Some(ref path) = self.logging.file_path {
            return PathBuf::from(path);
        }

        get_cache_dir()
            .map(|dir| dir.join(constants::LOG_FILE_NAME))
            .unwrap_or_else(|_| std::env::temp_dir().join(constants::LOG_FILE_NAME))
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}
