//! Main application module.
//!
//! Contains the App struct and all event handlers.

use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

use shaun_clipboard::ClipboardProvider;
use shaun_config::constants::EVENT_HANDLER_INTERVAL_MS;
use shaun_config::Config;
use shaun_keymap::Keymap;
use shaun_logger as logger;

use crate::event::{Event, EventHandler};
use crate::state::EditorState;

mod actions;
mod key_handler;
mod menu_actions;
mod modal_handler;
mod mouse_handler;
mod render;

pub use render::AppLayout;

/// Main application
pub struct App {
    state: EditorState,
    keymap: Keymap,
    clipboard: Box<dyn ClipboardProvider>,
    event_handler: EventHandler,
}

impl App {
    /// Create the application from the user's config and the system
    /// clipboard.
    ///
    /// Initializes the global logger, so this must run once before the
    /// first frame.
    pub fn new() -> Self {
        let state = EditorState::new();

        let min_log_level = logger::LogLevel::from_str(&state.config.logging.min_level)
            .unwrap_or(logger::LogLevel::Info);
        logger::init(state.config.log_file_path(), min_log_level);
        logger::info("Application started");

        let (clipboard, clipboard_error) = shaun_clipboard::system_or_memory();
        if let Some(e) = clipboard_error {
            logger::warn(format!("{:#}; using in-memory clipboard", e));
        }

        Self::with_state(state, clipboard)
    }

    /// Create the application from explicit parts, without touching the
    /// logger, the config file or the system clipboard.
    pub fn with_parts(config: Config, clipboard: Box<dyn ClipboardProvider>) -> Self {
        Self::with_state(EditorState::with_config(config), clipboard)
    }

    fn with_state(state: EditorState, clipboard: Box<dyn ClipboardProvider>) -> Self {
        Self {
            state,
            keymap: Keymap::new(),
            clipboard,
            event_handler: EventHandler::new(Duration::from_millis(EVENT_HANDLER_INTERVAL_MS)),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.state.should_quit {
            if self.state.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.state.needs_redraw = false;
            }

            match self.event_handler.next()? {
                Event::Key(key) => {
                    self.handle_key_event(key)?;
                    self.state.needs_redraw = true;
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse)?;
                    self.state.needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    self.state.needs_redraw = true;
                }
                Event::Tick => {}
            }
        }

        logger::info("Application exiting");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
