//! Editor state and types.
//!
//! All state the window shows lives in one [`EditorState`] owned by the
//! `App`. Handlers mutate it; rendering only reads it (apart from caching
//! geometry for mouse hit-testing).

use std::path::PathBuf;

use ratatui::layout::Rect;

use shaun_buffer::History;
use shaun_config::Config;
use shaun_logger as logger;
use shaun_panel_editor::{Font, TextArea};
use shaun_panel_shortcuts::ShortcutsPanel;
use shaun_theme::{Theme, ThemeMode};
use shaun_ui_render::{build_menus, Menu, MenuContext, StatusMessage};

// Re-export ActiveModal from modal crate
pub use shaun_modal::ActiveModal;

/// Which window receives keys not claimed by a global chord
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Editor,
    Shortcuts,
}

/// What the open path dialog was opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Open,
    SaveAs,
}

/// Menu bar state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Index of the menu whose dropdown is shown
    pub open: Option<usize>,
    /// Highlighted item in the open dropdown
    pub selected: usize,
}

/// Global editor state
#[derive(Debug)]
pub struct EditorState {
    /// Should application quit
    pub should_quit: bool,
    /// Text display widget; owns the text and its undo history
    pub text_area: TextArea,
    /// File the text was last opened from or saved to
    pub current_file: Option<PathBuf>,
    pub theme_mode: ThemeMode,
    pub menu: MenuState,
    /// Active modal window
    pub active_modal: Option<ActiveModal>,
    /// Action pending modal result
    pub pending_action: Option<PendingAction>,
    /// Shortcut reference window, at most one
    pub shortcuts: Option<ShortcutsPanel>,
    pub focus: Focus,
    /// Transient message in the status bar
    pub status_message: Option<StatusMessage>,
    /// Application configuration
    pub config: Config,
    /// Screen size of the last frame
    pub screen: Rect,
    /// Flag indicating UI needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl EditorState {
    /// Create new editor state, loading config from file
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: Could not load config: {:#}. Using defaults.", e);
            Config::default()
        });
        Self::with_config(config)
    }

    /// Create new editor state from the given config
    pub fn with_config(config: Config) -> Self {
        let theme_mode = ThemeMode::from_name(&config.general.theme).unwrap_or_else(|| {
            logger::warn(format!(
                "Unknown theme '{}', using light",
                config.general.theme
            ));
            ThemeMode::Light
        });

        let mut history = History::with_capacity(config.editor.history_limit);
        history.set_group_typing(config.editor.group_typing);

        let mut text_area = TextArea::new();
        text_area.set_history(history);
        text_area.set_tab_size(config.editor.tab_size);
        text_area.set_font(Font::new(
            config.editor.font_family.clone(),
            config.editor.font_size,
        ));

        Self {
            should_quit: false,
            text_area,
            current_file: None,
            theme_mode,
            menu: MenuState::default(),
            active_modal: None,
            pending_action: None,
            shortcuts: None,
            focus: Focus::Editor,
            status_message: None,
            config,
            screen: Rect::default(),
            needs_redraw: true,
        }
    }

    /// Palette of the current theme mode
    pub fn theme(&self) -> &'static Theme {
        Theme::for_mode(self.theme_mode)
    }

    /// Menus as they should currently look
    pub fn menus(&self) -> Vec<Menu> {
        build_menus(MenuContext {
            theme_mode: self.theme_mode,
            shortcuts_enabled: self.shortcuts.is_none(),
        })
    }

    /// File path for the status bar, or "Untitled"
    pub fn file_label(&self) -> String {
        self.current_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    // ===== Menu =====

    pub fn is_menu_open(&self) -> bool {
        self.menu.open.is_some()
    }

    /// Open the dropdown of menu `index`, highlighting its first enabled item
    pub fn open_menu(&mut self, index: usize) {
        let menus = self.menus();
        let Some(menu) = menus.get(index) else {
            return;
        };
        self.menu = MenuState {
            open: Some(index),
            selected: menu.next_enabled(0, true).unwrap_or(0),
        };
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::default();
    }

    // ===== Modal =====

    pub fn is_modal_open(&self) -> bool {
        self.active_modal.is_some()
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub fn take_pending_action(&mut self) -> Option<PendingAction> {
        self.pending_action.take()
    }

    // ===== Status =====

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage::info(message));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage::error(message));
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
