//! Text storage for shaun-editor.
//!
//! Provides rope-backed text storage together with an explicit
//! command-pattern edit history (undo/redo) and the cursor/selection
//! types used by the text area.

mod buffer;
mod cursor;
mod history;

pub use buffer::TextBuffer;
pub use cursor::{Cursor, Selection};
pub use history::{EditRecord, History};
