//! Mouse event handling.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use shaun_panel_shortcuts::ShortcutsEvent;
use shaun_ui_render::menu_at;

use super::render::{dropdown_for, AppLayout};
use super::App;
use crate::state::Focus;

impl App {
    /// Handle mouse event
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.is_modal_open() {
            return self.handle_modal_mouse(mouse);
        }

        let layout = AppLayout::new(self.state.screen);
        let is_click = mouse.kind == MouseEventKind::Down(MouseButton::Left);

        if self.state.is_menu_open() {
            if is_click {
                self.handle_menu_click(mouse, &layout);
            }
            return Ok(());
        }

        if is_click && layout.menu_bar.contains(Position::new(mouse.column, mouse.row)) {
            let menus = self.state.menus();
            if let Some(index) = menu_at(&menus, layout.menu_bar, mouse.column) {
                self.state.open_menu(index);
            }
            return Ok(());
        }

        if let Some(panel) = self.state.shortcuts.as_mut() {
            if panel.contains(mouse.column, mouse.row) {
                if is_click {
                    self.state.focus = Focus::Shortcuts;
                }
                if let Some(ShortcutsEvent::Close) = panel.handle_mouse(mouse) {
                    self.close_shortcuts();
                }
                return Ok(());
            }
        }

        if is_click && layout.editor.contains(Position::new(mouse.column, mouse.row)) {
            self.state.focus = Focus::Editor;
        }
        self.state.text_area.handle_mouse(mouse);
        Ok(())
    }

    /// Click while a dropdown is shown: switch menus, pick an item or close
    fn handle_menu_click(&mut self, mouse: MouseEvent, layout: &AppLayout) {
        let Some(open) = self.state.menu.open else {
            return;
        };
        let menus = self.state.menus();

        if layout.menu_bar.contains(Position::new(mouse.column, mouse.row)) {
            match menu_at(&menus, layout.menu_bar, mouse.column) {
                Some(index) if index != open => self.state.open_menu(index),
                _ => self.state.close_menu(),
            }
            return;
        }

        let item = dropdown_for(&menus, open, self.state.menu.selected, layout.menu_bar)
            .and_then(|dropdown| dropdown.item_at(self.state.screen, mouse.column, mouse.row));
        match item {
            Some(idx) => {
                if menus[open].items[idx].enabled {
                    self.activate_menu_item(open, idx);
                }
            }
            None => self.state.close_menu(),
        }
    }
}
