//! Theme color definitions.

use ratatui::style::{Color, Style};

/// Editor palette with semantic color assignments.
///
/// - 2 base colors (bg, fg) for the text area
/// - 2 accented colors (accented_bg, accented_fg) for menu and status bar
/// - 2 selection colors (selected_bg, selected_fg)
/// - 1 disabled color
/// - 2 semantic colors (success, error)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Palette name
    pub name: &'static str,

    /// Text area background
    pub bg: Color,
    /// Text area foreground
    pub fg: Color,

    /// Menu bar, status bar and dropdown background
    pub accented_bg: Color,
    /// Active borders, mnemonic letters in the menu bar
    pub accented_fg: Color,

    /// Selected text and highlighted menu item background
    pub selected_bg: Color,
    /// Selected text and highlighted menu item foreground
    pub selected_fg: Color,

    /// Disabled menu items, shortcut hints, separators
    pub disabled: Color,

    /// Status messages after successful file operations
    pub success: Color,
    /// Error dialogs and failure messages
    pub error: Color,
}

impl Theme {
    /// Style of plain text in the text area
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Style of selected text and highlighted items
    pub fn selection_style(&self) -> Style {
        Style::default().fg(self.selected_fg).bg(self.selected_bg)
    }

    /// Style of menu bar, dropdowns and status bar
    pub fn chrome_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.accented_bg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        *Self::light()
    }
}
