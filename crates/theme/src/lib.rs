//! Theme system for shaun-editor.
//!
//! Two palettes are built in, one per [`ThemeMode`]. Either can be replaced
//! by a TOML file of the same name in the user's themes directory.

mod colors;
mod loader;

pub use colors::Theme;
pub use loader::{load_theme, load_theme_from_str};

use ratatui::style::Color;
use std::path::PathBuf;
use std::sync::OnceLock;

// Embed palette files at compile time
const THEME_LIGHT_TOML: &str = include_str!("../themes/light.toml");
const THEME_DARK_TOML: &str = include_str!("../themes/dark.toml");

static THEME_LIGHT: OnceLock<Theme> = OnceLock::new();
static THEME_DARK: OnceLock<Theme> = OnceLock::new();

// Themes directory path (set by app on startup)
static THEMES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Set the themes directory path (call this at app startup, before the
/// first palette lookup).
pub fn set_themes_dir(path: PathBuf) {
    let _ = THEMES_DIR.set(path);
}

/// Light or dark rendering of the text area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parse a config value ("light" or "dark", case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Config name of the mode
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Menu label describing what toggling will do
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Set to Dark",
            ThemeMode::Dark => "Set to Light",
        }
    }
}

/// Hardcoded fallback palettes in case of parse errors.
fn get_hardcoded_fallback_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme {
            name: "light",
            bg: Color::White,
            fg: Color::Black,
            accented_bg: Color::Gray,
            accented_fg: Color::Blue,
            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,
            disabled: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
        },
        ThemeMode::Dark => Theme {
            name: "dark",
            bg: Color::Black,
            fg: Color::White,
            accented_bg: Color::DarkGray,
            accented_fg: Color::Cyan,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            disabled: Color::Gray,
            success: Color::Green,
            error: Color::LightRed,
        },
    }
}

/// Load a palette, preferring the user's file over the embedded one.
fn load_palette(mode: ThemeMode, embedded: &str) -> Theme {
    let name = mode.name();

    if let Some(dir) = THEMES_DIR.get() {
        let path = dir.join(format!("{}.toml", name));
        if path.exists() {
            match load_theme(&path, name) {
                Ok(theme) => return theme,
                Err(e) => eprintln!("{:#}. Using built-in '{}' theme.", e, name),
            }
        }
    }

    match load_theme_from_str(embedded, name) {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!(
                "Failed to parse built-in theme '{}': {}. Using fallback theme.",
                name, e
            );
            get_hardcoded_fallback_theme(mode)
        }
    }
}

impl Theme {
    /// Light palette
    pub fn light() -> &'static Theme {
        THEME_LIGHT.get_or_init(|| load_palette(ThemeMode::Light, THEME_LIGHT_TOML))
    }

    /// Dark palette
    pub fn dark() -> &'static Theme {
        THEME_DARK.get_or_init(|| load_palette(ThemeMode::Dark, THEME_DARK_TOML))
    }

    /// Palette for a mode
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}
