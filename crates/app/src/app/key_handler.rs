//! Keyboard event handling.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use shaun_logger as logger;
use shaun_panel_shortcuts::ShortcutsEvent;

use super::App;
use crate::state::Focus;

impl App {
    /// Handle keyboard event.
    ///
    /// Routing order: modal, open menu, menu openers, global chords, the
    /// focused shortcuts window, the text area.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        logger::debug(format!("Key: {:?} {:?}", key.code, key.modifiers));

        if self.state.is_modal_open() {
            return self.handle_modal_key(key);
        }

        self.state.clear_status();

        if self.state.is_menu_open() {
            self.handle_menu_key(key);
            return Ok(());
        }

        if let Some(index) = self.menu_opener(&key) {
            self.state.open_menu(index);
            return Ok(());
        }

        if let Some(action) = self.keymap.action_for(&key) {
            self.dispatch(action);
            return Ok(());
        }

        if self.state.focus == Focus::Shortcuts {
            if let Some(panel) = self.state.shortcuts.as_mut() {
                if let Some(ShortcutsEvent::Close) = panel.handle_key(key) {
                    self.close_shortcuts();
                }
                return Ok(());
            }
        }

        self.state.text_area.handle_key(key)?;
        Ok(())
    }

    /// Menu opened by F10 or Alt+mnemonic
    fn menu_opener(&self, key: &KeyEvent) -> Option<usize> {
        match key.code {
            KeyCode::F(10) if key.modifiers.is_empty() => Some(0),
            KeyCode::Char(c) if key.modifiers == KeyModifiers::ALT => {
                let c = c.to_ascii_lowercase();
                self.state.menus().iter().position(|menu| menu.mnemonic == c)
            }
            _ => None,
        }
    }
}
