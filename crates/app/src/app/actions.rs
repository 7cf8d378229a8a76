//! Action handlers.
//!
//! Menu items and chords both end up in [`App::dispatch`], which calls one
//! handler per [`Action`].

use std::env;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use anyhow::Result;

use shaun_keymap::Action;
use shaun_logger as logger;
use shaun_modal::{InfoModal, InputModal};
use shaun_panel_shortcuts::ShortcutsPanel;

use super::App;
use crate::file_io::{self, display_name};
use crate::state::{ActiveModal, Focus, PendingAction};

impl App {
    /// Run the handler of `action`.
    ///
    /// Widget failures are logged and reported in the status bar; no
    /// action error ends the application.
    pub fn dispatch(&mut self, action: Action) {
        logger::debug(format!("Action: {:?}", action));

        let result = match action {
            Action::Open => self.handle_open(),
            Action::Save => self.handle_save(),
            Action::SaveAs => self.handle_save_as(),
            Action::Exit => self.handle_exit(),
            Action::Undo => self.handle_undo(),
            Action::Redo => self.handle_redo(),
            Action::Cut => self.handle_cut(),
            Action::Copy => self.handle_copy(),
            Action::Paste => self.handle_paste(),
            Action::Delete => self.handle_delete(),
            Action::SelectAll => self.handle_select_all(),
            Action::ZoomIn => self.handle_zoom(1),
            Action::ZoomOut => self.handle_zoom(-1),
            Action::ToggleTheme => self.handle_toggle_theme(),
            Action::ShowShortcuts => self.handle_show_shortcuts(),
        };

        if let Err(e) = result {
            logger::error(format!("{} failed: {:#}", action.label(), e));
            self.state.set_error(format!("{} failed", action.label()));
        }
    }

    // ===== File =====

    fn handle_open(&mut self) -> Result<()> {
        let default = self.dialog_directory();
        self.show_path_prompt(PendingAction::Open, "Open", "File to open:", default);
        Ok(())
    }

    fn handle_save(&mut self) -> Result<()> {
        match self.state.current_file.clone() {
            Some(path) => {
                self.save_to(&path);
                Ok(())
            }
            None => self.handle_save_as(),
        }
    }

    fn handle_save_as(&mut self) -> Result<()> {
        let default = match &self.state.current_file {
            Some(path) => path.display().to_string(),
            None => self.dialog_directory(),
        };
        self.show_path_prompt(PendingAction::SaveAs, "Save As", "Save to file:", default);
        Ok(())
    }

    fn handle_exit(&mut self) -> Result<()> {
        logger::info("Exit requested");
        self.state.should_quit = true;
        Ok(())
    }

    /// Read `path` and replace the whole text with its content.
    ///
    /// Relative paths are resolved against the working directory. On failure
    /// the text and the current file stay as they were.
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = resolve_path(path.as_ref());
        match file_io::read_text(&path) {
            Ok(text) => {
                self.state.text_area.set_text(&text)?;
                logger::info(format!("Opened {}", path.display()));
                self.state.set_info(format!("Opened {}", display_name(&path)));
                self.state.current_file = Some(path);
            }
            Err(e) => {
                logger::error(e.to_string());
                self.show_notice("Error", "Error opening file");
            }
        }
        Ok(())
    }

    /// Write the text to `path` and make it the current file
    pub fn save_file_as(&mut self, path: impl AsRef<Path>) {
        let path = resolve_path(path.as_ref());
        if self.save_to(&path) {
            self.state.current_file = Some(path);
        }
    }

    /// Write the text to `path`; returns false and shows a notice on failure
    fn save_to(&mut self, path: &Path) -> bool {
        match file_io::write_text(path, &self.state.text_area.text()) {
            Ok(()) => {
                logger::info(format!("Saved {}", path.display()));
                self.state.set_info(format!("Saved {}", display_name(path)));
                true
            }
            Err(e) => {
                logger::error(e.to_string());
                self.show_notice("Error", "Error saving file");
                false
            }
        }
    }

    // ===== Edit =====

    fn handle_undo(&mut self) -> Result<()> {
        if let Err(e) = self.state.text_area.undo() {
            logger::warn(format!("Undo failed: {:#}", e));
            self.show_notice("Undo", format!("Unable to undo: {}", e));
        }
        Ok(())
    }

    fn handle_redo(&mut self) -> Result<()> {
        if let Err(e) = self.state.text_area.redo() {
            logger::warn(format!("Redo failed: {:#}", e));
            self.show_notice("Redo", format!("Unable to redo: {}", e));
        }
        Ok(())
    }

    fn handle_cut(&mut self) -> Result<()> {
        if self.copy_selection() {
            self.state.text_area.delete_selection()?;
        }
        Ok(())
    }

    fn handle_copy(&mut self) -> Result<()> {
        self.copy_selection();
        Ok(())
    }

    /// Put the selection on the clipboard.
    ///
    /// Returns false if nothing was selected or the clipboard refused it.
    fn copy_selection(&mut self) -> bool {
        let Some(text) = self.state.text_area.selected_text() else {
            return false;
        };
        match self.clipboard.set_text(&text) {
            Ok(()) => true,
            Err(e) => {
                logger::error(format!("Failed to copy to clipboard: {:#}", e));
                false
            }
        }
    }

    fn handle_paste(&mut self) -> Result<()> {
        match self.clipboard.get_text() {
            Some(text) => self.state.text_area.replace_selection(&text),
            None => {
                logger::debug("Clipboard holds no text");
                Ok(())
            }
        }
    }

    fn handle_delete(&mut self) -> Result<()> {
        self.state.text_area.delete_selection()?;
        Ok(())
    }

    fn handle_select_all(&mut self) -> Result<()> {
        self.state.text_area.select_all();
        Ok(())
    }

    // ===== Format =====

    fn handle_zoom(&mut self, delta: i32) -> Result<()> {
        let font = self.state.text_area.font().resized(delta);
        if font.size <= 0 {
            logger::warn(format!("Font size is now {}pt", font.size));
        }
        self.state.text_area.set_font(font);
        Ok(())
    }

    // ===== View =====

    fn handle_toggle_theme(&mut self) -> Result<()> {
        self.state.theme_mode = self.state.theme_mode.toggled();
        logger::debug(format!("Theme set to {}", self.state.theme_mode.name()));
        Ok(())
    }

    fn handle_show_shortcuts(&mut self) -> Result<()> {
        if self.state.shortcuts.is_some() {
            return Ok(());
        }
        self.state.shortcuts = Some(ShortcutsPanel::new());
        self.state.focus = Focus::Shortcuts;
        logger::info("Shortcuts window opened");
        Ok(())
    }

    pub(super) fn close_shortcuts(&mut self) {
        if self.state.shortcuts.take().is_some() {
            logger::info("Shortcuts window closed");
        }
        self.state.focus = Focus::Editor;
    }

    // ===== Dialogs =====

    fn show_path_prompt(
        &mut self,
        action: PendingAction,
        title: &str,
        prompt: &str,
        default: String,
    ) {
        let modal = InputModal::new(title, prompt, default);
        self.state.pending_action = Some(action);
        self.state.active_modal = Some(ActiveModal::Input(Box::new(modal)));
    }

    pub(super) fn show_notice(&mut self, title: &str, message: impl Into<String>) {
        let modal = InfoModal::new(title, message);
        self.state.pending_action = None;
        self.state.active_modal = Some(ActiveModal::Info(Box::new(modal)));
    }

    /// Directory the path prompts start in, with a trailing separator
    fn dialog_directory(&self) -> String {
        let dir = self
            .state
            .current_file
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .or_else(|| env::current_dir().ok())
            .unwrap_or_default();

        let mut dir = dir.display().to_string();
        if !dir.is_empty() && !dir.ends_with(MAIN_SEPARATOR) {
            dir.push(MAIN_SEPARATOR);
        }
        dir
    }
}

/// Make `path` absolute against the working directory
fn resolve_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
