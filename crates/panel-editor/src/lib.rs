//! Text area widget for shaun-editor.
//!
//! [`TextArea`] owns the document buffer with its undo history, the caret
//! and the selection. It handles navigation and typing itself; clipboard
//! and file operations are driven from outside through its public methods.

mod click_tracker;
mod core;
pub mod font;
pub mod keyboard;
mod rendering;

pub use core::TextArea;
pub use font::Font;
pub use keyboard::EditorCommand;
