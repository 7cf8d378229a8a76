// Common test utilities

#![allow(dead_code)]

use std::path::Path;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use shaun_app::state::ActiveModal;
use shaun_app::App;
use shaun_clipboard::MemoryClipboard;
use shaun_config::Config;

/// Drives an `App` through key and mouse events on an in-memory terminal
pub struct EditorHarness {
    app: App,
    terminal: Terminal<TestBackend>,
}

impl EditorHarness {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_clipboard(width, height, MemoryClipboard::new())
    }

    pub fn with_clipboard(width: u16, height: u16, clipboard: MemoryClipboard) -> Self {
        let app = App::with_parts(Config::default(), Box::new(clipboard));
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut harness = Self { app, terminal };
        harness.render();
        harness
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn render(&mut self) {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame)).unwrap();
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// One screen row as text
    pub fn row(&self, y: u16) -> String {
        let buf = self.buffer();
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    pub fn screen(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.app
            .handle_key_event(KeyEvent::new(code, modifiers))
            .unwrap();
        self.render();
    }

    pub fn press(&mut self, code: KeyCode) {
        self.send_key(code, KeyModifiers::NONE);
    }

    pub fn ctrl(&mut self, c: char) {
        self.send_key(KeyCode::Char(c), KeyModifiers::CONTROL);
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\n' => self.press(KeyCode::Enter),
                ch => self.press(KeyCode::Char(ch)),
            }
        }
    }

    pub fn click(&mut self, column: u16, row: u16) {
        self.app
            .handle_mouse_event(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
            .unwrap();
        self.app
            .handle_mouse_event(MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
            .unwrap();
        self.render();
    }

    pub fn text(&self) -> String {
        self.app.state().text_area.text()
    }

    /// Current value of the open path prompt
    pub fn prompt_value(&self) -> Option<String> {
        match &self.app.state().active_modal {
            Some(ActiveModal::Input(modal)) => Some(modal.value()),
            _ => None,
        }
    }

    pub fn prompt_title(&self) -> Option<String> {
        match &self.app.state().active_modal {
            Some(ActiveModal::Input(modal)) => Some(modal.title().to_string()),
            _ => None,
        }
    }

    /// Message of the open notice
    pub fn notice(&self) -> Option<String> {
        match &self.app.state().active_modal {
            Some(ActiveModal::Info(modal)) => Some(modal.message().to_string()),
            _ => None,
        }
    }

    /// Replace the prompt's pre-filled text with `path` and confirm
    pub fn answer_prompt(&mut self, path: &Path) {
        let len = self
            .prompt_value()
            .expect("a path prompt should be open")
            .chars()
            .count();
        self.press(KeyCode::End);
        for _ in 0..len {
            self.press(KeyCode::Backspace);
        }
        self.type_text(&path.display().to_string());
        self.press(KeyCode::Enter);
    }
}
