//! Keyboard shortcut reference window.
//!
//! A fixed-size, non-modal window listing [`SHORTCUTS`]. The window does
//! not know who opened it: closing is reported as [`ShortcutsEvent::Close`]
//! and the owner drops the panel.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Row, Table, Widget},
};

use shaun_config::constants::{SHORTCUTS_PANEL_HEIGHT, SHORTCUTS_PANEL_WIDTH};
use shaun_keymap::{ShortcutBinding, SHORTCUTS};
use shaun_modal::base::hit;
use shaun_modal::centered_rect_with_size;
use shaun_theme::Theme;

/// Width of the action column.
const ACTION_COLUMN_WIDTH: u16 = 14;

/// Events reported to the owner of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutsEvent {
    /// The user closed the window
    Close,
}

/// Shortcut reference window
#[derive(Debug)]
pub struct ShortcutsPanel {
    bindings: &'static [ShortcutBinding],
    last_area: Option<Rect>,
    last_close_area: Option<Rect>,
}

impl Default for ShortcutsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutsPanel {
    /// Create the window from the static shortcut table
    pub fn new() -> Self {
        Self {
            bindings: &SHORTCUTS,
            last_area: None,
            last_close_area: None,
        }
    }

    pub fn bindings(&self) -> &[ShortcutBinding] {
        self.bindings
    }

    /// Window rectangle inside `screen`: fixed size, centered, clamped
    pub fn area(screen: Rect) -> Rect {
        centered_rect_with_size(SHORTCUTS_PANEL_WIDTH, SHORTCUTS_PANEL_HEIGHT, screen)
    }

    /// Check if a screen cell belongs to the last rendered window
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.last_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    pub fn render(&mut self, screen: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        let area = Self::area(screen);
        Clear.render(area, buf);

        // Same colours as the main window, accented border while focused
        let text_style = Style::default().fg(theme.fg).bg(theme.bg);
        let border_fg = if focused { theme.accented_fg } else { theme.fg };
        let block = Block::default()
            .title(Span::styled(
                " [X] Shortcuts ",
                Style::default().fg(border_fg).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_fg))
            .style(text_style);

        let inner = block.inner(area);
        block.render(area, buf);
        self.last_area = Some(area);
        // The [X] follows the corner and one space
        self.last_close_area = Some(Rect::new(area.x + 2, area.y, 3, 1).intersection(area));

        let header = Row::new(["Action", "Shortcut"])
            .style(text_style.add_modifier(Modifier::BOLD))
            .bottom_margin(1);
        let rows = self
            .bindings
            .iter()
            .map(|binding| Row::new([binding.label, binding.chord]).style(text_style));

        Table::new(rows, [Constraint::Length(ACTION_COLUMN_WIDTH), Constraint::Min(0)])
            .header(header)
            .column_spacing(1)
            .style(text_style)
            .render(inner, buf);
    }

    /// Esc, Enter and `q` close the window
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ShortcutsEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(ShortcutsEvent::Close),
            _ => None,
        }
    }

    /// Clicking [X] closes the window
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ShortcutsEvent> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        self.last_close_area
            .filter(|area| hit(*area, mouse.column, mouse.row))
            .map(|_| ShortcutsEvent::Close)
    }
}
