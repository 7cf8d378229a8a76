//! Frame composition.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Widget},
    Frame,
};

use shaun_modal::Modal;
use shaun_ui_render::menu::title_positions;
use shaun_ui_render::{render_menu_bar, Dropdown, Menu, StatusBar, StatusBarParams};

use super::App;
use crate::file_io::display_name;
use crate::state::{ActiveModal, Focus};

/// Screen regions of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub menu_bar: Rect,
    /// Bordered text area, border included
    pub editor: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(screen: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(screen);
        Self {
            menu_bar: chunks[0],
            editor: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Dropdown of the open menu, anchored under its title
pub(super) fn dropdown_for<'a>(
    menus: &'a [Menu],
    open: usize,
    selected: usize,
    menu_bar: Rect,
) -> Option<Dropdown<'a>> {
    let menu = menus.get(open)?;
    let (x, _) = title_positions(menus, menu_bar).get(open).copied()?;
    Some(Dropdown::new(&menu.items, selected, x, menu_bar.y + 1))
}

impl App {
    /// Draw the whole window
    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let screen = frame.area();
        self.state.screen = screen;
        let layout = AppLayout::new(screen);
        let theme = self.state.theme();
        let menus = self.state.menus();
        let overlay_active = self.state.is_modal_open() || self.state.is_menu_open();
        let buf = frame.buffer_mut();

        render_menu_bar(buf, layout.menu_bar, &menus, self.state.menu.open, theme);

        // Text area
        let title = match &self.state.current_file {
            Some(path) => format!(" {} ", display_name(path)),
            None => " Untitled ".to_string(),
        };
        let editor_focused = !overlay_active && self.state.focus == Focus::Editor;
        let border_color = if editor_focused {
            theme.accented_fg
        } else {
            theme.disabled
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color).bg(theme.bg))
            .style(theme.text_style());
        let inner = block.inner(layout.editor);
        block.render(layout.editor, buf);
        self.state
            .text_area
            .render(inner, buf, theme, editor_focused);

        // Status bar
        let cursor = self.state.text_area.cursor();
        let font = self.state.text_area.font().to_string();
        let file_label = self.state.file_label();
        StatusBar::render(
            buf,
            layout.status_bar,
            &StatusBarParams {
                theme,
                message: self.state.status_message.as_ref(),
                file_label: &file_label,
                line: cursor.line + 1,
                column: cursor.column + 1,
                font: &font,
                mode: self.state.theme_mode.name(),
            },
        );

        // Overlays, bottom to top
        if let Some(panel) = self.state.shortcuts.as_mut() {
            let focused = !overlay_active && self.state.focus == Focus::Shortcuts;
            panel.render(screen, buf, theme, focused);
        }

        if let Some(open) = self.state.menu.open {
            if let Some(dropdown) = dropdown_for(&menus, open, self.state.menu.selected, layout.menu_bar)
            {
                dropdown.render(buf, screen, theme);
            }
        }

        if let Some(modal) = self.state.active_modal.as_mut() {
            match modal {
                ActiveModal::Input(m) => m.render(screen, buf, theme),
                ActiveModal::Info(m) => m.render(screen, buf, theme),
            }
        }
    }
}
