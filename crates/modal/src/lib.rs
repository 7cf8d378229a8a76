//! Modal dialog system for shaun-editor.
//!
//! A modal captures all keyboard input until it reports a [`ModalResult`].
//! The editor uses two: a path prompt for Open/Save As and a notice for
//! errors.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{buffer::Buffer, layout::Rect};

use shaun_theme::Theme;

pub mod base;
pub mod info;
pub mod input;
mod text_input;

pub use base::{calculate_modal_width, centered_rect_with_size, ModalWidthConfig};
pub use info::InfoModal;
pub use input::InputModal;
pub use text_input::TextInput;

/// Modal window result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult<T> {
    /// User confirmed the action with a result.
    Confirmed(T),
    /// User cancelled the action.
    Cancelled,
}

/// Active modal window.
#[derive(Debug)]
pub enum ActiveModal {
    /// Path prompt
    Input(Box<InputModal>),
    /// Blocking notice
    Info(Box<InfoModal>),
}

/// Trait for all modal windows.
pub trait Modal {
    /// Modal window result type.
    type Result;

    /// Render the modal window centered in `area`.
    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Handle keyboard event.
    /// Returns Some(result) if the modal window should close.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>>;

    /// Handle mouse event.
    /// Returns Some(result) if the modal window should close.
    fn handle_mouse(&mut self, _mouse: MouseEvent) -> Result<Option<ModalResult<Self::Result>>> {
        Ok(None)
    }
}
