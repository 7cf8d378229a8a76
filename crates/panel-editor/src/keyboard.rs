//! Keyboard command handling for the text area.
//!
//! Key parsing is separated from execution so that bindings can be listed
//! and tested in one place. Clipboard and history chords are global
//! shortcuts and never reach this table.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::TextArea;

/// Text area command representing a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    // Navigation (clears selection)
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,
    MoveToLineStart,
    MoveToLineEnd,
    PageUp,
    PageDown,
    MoveToDocumentStart,
    MoveToDocumentEnd,

    // Navigation with selection (Shift modifier)
    MoveCursorUpWithSelection,
    MoveCursorDownWithSelection,
    MoveCursorLeftWithSelection,
    MoveCursorRightWithSelection,
    MoveToLineStartWithSelection,
    MoveToLineEndWithSelection,
    PageUpWithSelection,
    PageDownWithSelection,
    MoveToDocumentStartWithSelection,
    MoveToDocumentEndWithSelection,

    // Text editing
    InsertChar(char),
    InsertTab,
    InsertNewline,
    Backspace,
    Delete,

    // No operation (for unhandled keys)
    None,
}

impl EditorCommand {
    /// Parse a KeyEvent into an EditorCommand.
    pub fn from_key_event(key: KeyEvent) -> Self {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            // Typing (Shift only changes the char itself)
            KeyCode::Char(ch) if !ctrl && !alt => Self::InsertChar(ch),
            KeyCode::Enter if key.modifiers.is_empty() => Self::InsertNewline,
            KeyCode::Tab if key.modifiers.is_empty() => Self::InsertTab,
            KeyCode::Backspace if !ctrl && !alt => Self::Backspace,
            KeyCode::Delete if key.modifiers.is_empty() => Self::Delete,

            _ if alt => Self::None,

            KeyCode::Up if !ctrl => pick(shift, Self::MoveCursorUp, Self::MoveCursorUpWithSelection),
            KeyCode::Down if !ctrl => pick(
                shift,
                Self::MoveCursorDown,
                Self::MoveCursorDownWithSelection,
            ),
            KeyCode::Left if !ctrl => pick(
                shift,
                Self::MoveCursorLeft,
                Self::MoveCursorLeftWithSelection,
            ),
            KeyCode::Right if !ctrl => pick(
                shift,
                Self::MoveCursorRight,
                Self::MoveCursorRightWithSelection,
            ),
            KeyCode::PageUp if !ctrl => pick(shift, Self::PageUp, Self::PageUpWithSelection),
            KeyCode::PageDown if !ctrl => pick(shift, Self::PageDown, Self::PageDownWithSelection),
            KeyCode::Home if ctrl => pick(
                shift,
                Self::MoveToDocumentStart,
                Self::MoveToDocumentStartWithSelection,
            ),
            KeyCode::End if ctrl => pick(
                shift,
                Self::MoveToDocumentEnd,
                Self::MoveToDocumentEndWithSelection,
            ),
            KeyCode::Home => pick(
                shift,
                Self::MoveToLineStart,
                Self::MoveToLineStartWithSelection,
            ),
            KeyCode::End => pick(shift, Self::MoveToLineEnd, Self::MoveToLineEndWithSelection),

            _ => Self::None,
        }
    }

    /// Execute this command on the given text area.
    pub fn execute(self, area: &mut TextArea) -> Result<()> {
        match self {
            Self::MoveCursorUp => area.move_lines(-1, false),
            Self::MoveCursorDown => area.move_lines(1, false),
            Self::MoveCursorLeft => area.move_left(false),
            Self::MoveCursorRight => area.move_right(false),
            Self::MoveToLineStart => area.move_line_start(false),
            Self::MoveToLineEnd => area.move_line_end(false),
            Self::PageUp => area.move_lines(-area.page_lines(), false),
            Self::PageDown => area.move_lines(area.page_lines(), false),
            Self::MoveToDocumentStart => area.move_document_start(false),
            Self::MoveToDocumentEnd => area.move_document_end(false),

            Self::MoveCursorUpWithSelection => area.move_lines(-1, true),
            Self::MoveCursorDownWithSelection => area.move_lines(1, true),
            Self::MoveCursorLeftWithSelection => area.move_left(true),
            Self::MoveCursorRightWithSelection => area.move_right(true),
            Self::MoveToLineStartWithSelection => area.move_line_start(true),
            Self::MoveToLineEndWithSelection => area.move_line_end(true),
            Self::PageUpWithSelection => area.move_lines(-area.page_lines(), true),
            Self::PageDownWithSelection => area.move_lines(area.page_lines(), true),
            Self::MoveToDocumentStartWithSelection => area.move_document_start(true),
            Self::MoveToDocumentEndWithSelection => area.move_document_end(true),

            Self::InsertChar(ch) => {
                let mut utf8 = [0u8; 4];
                area.replace_selection(ch.encode_utf8(&mut utf8))?;
            }
            Self::InsertTab => area.replace_selection("\t")?,
            Self::InsertNewline => area.replace_selection("\n")?,
            Self::Backspace => area.backspace()?,
            Self::Delete => area.delete_forward()?,

            Self::None => {}
        }
        Ok(())
    }
}

/// Plain or selecting variant of a navigation command
fn pick(shift: bool, plain: EditorCommand, selecting: EditorCommand) -> EditorCommand {
    if shift {
        selecting
    } else {
        plain
    }
}
