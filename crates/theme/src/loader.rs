//! Palette loading from TOML files.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;

use crate::Theme;

/// Color representation in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    Named(String),
    Rgb { rgb: [u8; 3] },
}

impl TomlColor {
    fn to_color(&self) -> Result<Color> {
        let color = match self {
            TomlColor::Named(name) => match name.as_str() {
                "Black" => Color::Black,
                "Red" => Color::Red,
                "Green" => Color::Green,
                "Yellow" => Color::Yellow,
                "Blue" => Color::Blue,
                "Magenta" => Color::Magenta,
                "Cyan" => Color::Cyan,
                "Gray" => Color::Gray,
                "DarkGray" => Color::DarkGray,
                "LightRed" => Color::LightRed,
                "LightGreen" => Color::LightGreen,
                "LightYellow" => Color::LightYellow,
                "LightBlue" => Color::LightBlue,
                "LightMagenta" => Color::LightMagenta,
                "LightCyan" => Color::LightCyan,
                "White" => Color::White,
                other => anyhow::bail!("Unknown color name: {}", other),
            },
            TomlColor::Rgb { rgb } => Color::Rgb(rgb[0], rgb[1], rgb[2]),
        };
        Ok(color)
    }
}

/// TOML palette colors structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlColors {
    bg: TomlColor,
    fg: TomlColor,
    accented_bg: TomlColor,
    accented_fg: TomlColor,
    selected_bg: TomlColor,
    selected_fg: TomlColor,
    disabled: TomlColor,
    success: TomlColor,
    error: TomlColor,
}

/// TOML palette structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    #[allow(dead_code)]
    name: Option<String>,
    colors: TomlColors,
}

/// Load palette from a TOML file, naming it `name`.
pub fn load_theme(path: &Path, name: &'static str) -> Result<Theme> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme: {}", path.display()))?;
    load_theme_from_str(&content, name)
        .with_context(|| format!("Invalid theme: {}", path.display()))
}

/// Load palette from TOML string with a static name.
pub fn load_theme_from_str(content: &str, name: &'static str) -> Result<Theme> {
    let toml_theme: TomlTheme = toml::from_str(content)?;
    let colors = toml_theme.colors;

    Ok(Theme {
        name,
        bg: colors.bg.to_color()?,
        fg: colors.fg.to_color()?,
        accented_bg: colors.accented_bg.to_color()?,
        accented_fg: colors.accented_fg.to_color()?,
        selected_bg: colors.selected_bg.to_color()?,
        selected_fg: colors.selected_fg.to_color()?,
        disabled: colors.disabled.to_color()?,
        success: colors.success.to_color()?,
        error: colors.error.to_color()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
name = "sample"

[colors]
bg = "Black"
fg = { rgb = [250, 250, 250] }
accented_bg = "DarkGray"
accented_fg = "Cyan"
selected_bg = "Blue"
selected_fg = "White"
disabled = "Gray"
success = "Green"
error = "Red"
"#;

    #[test]
    fn test_parse_named_and_rgb() {
        let theme = load_theme_from_str(SAMPLE, "sample").unwrap();
        assert_eq!(theme.bg, Color::Black);
        assert_eq!(theme.fg, Color::Rgb(250, 250, 250));
        assert_eq!(theme.name, "sample");
    }

    #[test]
    fn test_unknown_color_name_is_error() {
        let content = SAMPLE.replace("\"Cyan\"", "\"Chartreuse\"");
        assert!(load_theme_from_str(&content, "bad").is_err());
    }

    #[test]
    fn test_missing_color_is_error() {
        let content = SAMPLE.replace("error = \"Red\"", "");
        assert!(load_theme_from_str(&content, "bad").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dark.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let theme = load_theme(&path, "dark").unwrap();
        assert_eq!(theme.name, "dark");
        assert_eq!(theme.selected_bg, Color::Blue);
    }
}
