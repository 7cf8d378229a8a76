//! Menu navigation and activation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

impl App {
    /// Handle keyboard event in menu
    pub(super) fn handle_menu_key(&mut self, key: KeyEvent) {
        let Some(open) = self.state.menu.open else {
            return;
        };
        let menus = self.state.menus();
        let count = menus.len();
        let menu = &menus[open];

        match key.code {
            KeyCode::Esc | KeyCode::F(10) => {
                self.state.close_menu();
            }
            KeyCode::Left => {
                self.state.open_menu((open + count - 1) % count);
            }
            KeyCode::Right => {
                self.state.open_menu((open + 1) % count);
            }
            KeyCode::Up => {
                let from = (self.state.menu.selected + menu.items.len() - 1) % menu.items.len();
                if let Some(idx) = menu.next_enabled(from, false) {
                    self.state.menu.selected = idx;
                }
            }
            KeyCode::Down => {
                let from = (self.state.menu.selected + 1) % menu.items.len();
                if let Some(idx) = menu.next_enabled(from, true) {
                    self.state.menu.selected = idx;
                }
            }
            KeyCode::Enter => {
                self.activate_menu_item(open, self.state.menu.selected);
            }
            KeyCode::Char(c) if key.modifiers == KeyModifiers::ALT => {
                let c = c.to_ascii_lowercase();
                if let Some(index) = menus.iter().position(|menu| menu.mnemonic == c) {
                    self.state.open_menu(index);
                }
            }
            _ => {}
        }
    }

    /// Close the menu and run the item's action if it is enabled
    pub(super) fn activate_menu_item(&mut self, menu_index: usize, item_index: usize) {
        let item = self
            .state
            .menus()
            .get(menu_index)
            .and_then(|menu| menu.items.get(item_index))
            .filter(|item| item.enabled)
            .map(|item| item.action);

        if let Some(action) = item {
            self.state.close_menu();
            self.dispatch(action);
        }
    }
}
