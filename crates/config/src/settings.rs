//! Configuration structures for shaun-editor settings.

use serde::Deserialize;

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneralSettings {
    /// Initial theme mode ("light" or "dark")
    #[serde(default = "default_theme")]
    pub theme: String,
}

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditorSettings {
    /// Initial font family
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Initial font size in points
    #[serde(default = "default_font_size")]
    pub font_size: i32,

    /// Display width of a tab character
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Maximum number of undo records
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Merge consecutive typed characters into one undo record
    #[serde(default)]
    pub group_typing: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_theme() -> String {
    defaults::THEME.to_string()
}

fn default_font_family() -> String {
    defaults::FONT_FAMILY.to_string()
}

fn default_font_size() -> i32 {
    defaults::FONT_SIZE
}

fn default_tab_size() -> usize {
    defaults::TAB_SIZE
}

fn default_history_limit() -> usize {
    defaults::HISTORY_LIMIT
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            tab_size: default_tab_size(),
            history_limit: default_history_limit(),
            group_typing: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
