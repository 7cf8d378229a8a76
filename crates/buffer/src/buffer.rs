use std::ops::Range;

use anyhow::{bail, Result};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

use super::{Cursor, EditRecord, History};

/// Text buffer based on Rope.
///
/// Text is stored verbatim: line endings are never normalized, so what was
/// read from disk is exactly what gets written back.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// Rope structure for storing text
    rope: Rope,
    /// Edit history for undo/redo
    history: History,
}

/// Chars ropey treats as line breaks
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create buffer holding `text` with an empty history
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            history: History::new(),
        }
    }

    /// Replace the history (e.g. to apply configured limits)
    pub fn set_history(&mut self, history: History) {
        self.history = history;
    }

    /// Get all text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total length in chars
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if buffer holds no text
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Get line count (a rope always has at least one line)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get line by index, including its line terminator
    pub fn line(&self, index: usize) -> Option<String> {
        if index < self.line_count() {
            Some(self.rope.line(index).to_string())
        } else {
            None
        }
    }

    /// Get line content by index, without its line terminator
    pub fn line_content(&self, index: usize) -> Option<String> {
        let line = self.line(index)?;
        Some(line.chars().take(self.line_len(index)).collect())
    }

    /// Char index of the first char of a line
    pub fn line_start(&self, index: usize) -> usize {
        let index = index.min(self.line_count().saturating_sub(1));
        self.rope.line_to_char(index)
    }

    /// Line length in chars, without the line terminator
    pub fn line_len(&self, index: usize) -> usize {
        if index >= self.line_count() {
            return 0;
        }

        let line = self.rope.line(index);
        let total = line.len_chars();
        if total == 0 {
            return 0;
        }

        if total >= 2 && line.char(total - 2) == '\r' && line.char(total - 1) == '\n' {
            total - 2
        } else if is_line_break(line.char(total - 1)) {
            total - 1
        } else {
            total
        }
    }

    /// Convert a char index into a line/column cursor
    pub fn char_to_cursor(&self, idx: usize) -> Cursor {
        let idx = idx.min(self.len_chars());
        let line = self.rope.char_to_line(idx);
        let column = (idx - self.rope.line_to_char(line)).min(self.line_len(line));
        Cursor::at(line, column)
    }

    /// Convert a cursor into a char index, clamping to the document
    pub fn cursor_to_char(&self, cursor: &Cursor) -> usize {
        let line = cursor.line.min(self.line_count().saturating_sub(1));
        let column = cursor.column.min(self.line_len(line));
        self.rope.line_to_char(line) + column
    }

    /// Get text in a char range
    pub fn slice(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        self.rope.slice(start..end).to_string()
    }

    /// Replace a char range with `text` and record the edit.
    ///
    /// Returns the char index right after the inserted text.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> Result<usize> {
        if range.start > range.end || range.end > self.len_chars() {
            bail!(
                "Range {}..{} out of bounds (length {})",
                range.start,
                range.end,
                self.len_chars()
            );
        }

        if range.is_empty() && text.is_empty() {
            return Ok(range.start);
        }

        let record = EditRecord::new(range.start, self.slice(range), text);
        let caret = self.apply(&record)?;
        self.history.push(record);
        Ok(caret)
    }

    /// Insert text at a char index
    pub fn insert(&mut self, idx: usize, text: &str) -> Result<usize> {
        self.replace(idx..idx, text)
    }

    /// Remove a char range
    pub fn remove(&mut self, range: Range<usize>) -> Result<usize> {
        self.replace(range, "")
    }

    /// Replace the whole text as a single undoable edit
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.replace(0..self.len_chars(), text)?;
        Ok(())
    }

    /// Undo last edit.
    ///
    /// Returns the caret position after the revert, or None if there was
    /// nothing to undo.
    pub fn undo(&mut self) -> Result<Option<usize>> {
        let Some(record) = self.history.undo() else {
            return Ok(None);
        };

        match self.apply(&record) {
            Ok(caret) => Ok(Some(caret)),
            Err(e) => {
                self.history.restore_undo();
                Err(e)
            }
        }
    }

    /// Redo undone edit
    pub fn redo(&mut self) -> Result<Option<usize>> {
        let Some(record) = self.history.redo() else {
            return Ok(None);
        };

        match self.apply(&record) {
            Ok(caret) => Ok(Some(caret)),
            Err(e) => {
                self.history.restore_redo();
                Err(e)
            }
        }
    }

    /// Apply a record to the rope without touching history
    fn apply(&mut self, record: &EditRecord) -> Result<usize> {
        let start = record.position;
        let end = start + record.removed_len();

        if end > self.len_chars() {
            bail!("edit at {} extends past the end of the text", start);
        }
        if self.rope.slice(start..end) != record.removed.as_str() {
            bail!("text at {} no longer matches the recorded edit", start);
        }

        self.rope.remove(start..end);
        self.rope.insert(start, &record.inserted);
        Ok(start + record.inserted_len())
    }

    /// Check if undo is possible
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is possible
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop all recorded edits
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Char index of the next grapheme boundary after `idx`.
    ///
    /// A CRLF pair counts as one grapheme, so stepping never lands between
    /// `\r` and `\n`.
    pub fn next_grapheme_boundary(&self, idx: usize) -> usize {
        let len = self.len_chars();
        if idx >= len {
            return len;
        }

        let line_idx = self.rope.char_to_line(idx);
        let line_start = self.rope.line_to_char(line_idx);
        let line = self.rope.line(line_idx).to_string();
        let local = idx - line_start;

        let mut chars = 0;
        for grapheme in line.graphemes(true) {
            chars += grapheme.chars().count();
            if chars > local {
                return line_start + chars;
            }
        }
        (idx + 1).min(len)
    }

    /// Char index of the previous grapheme boundary before `idx`
    pub fn prev_grapheme_boundary(&self, idx: usize) -> usize {
        let idx = idx.min(self.len_chars());
        if idx == 0 {
            return 0;
        }

        let line_idx = self.rope.char_to_line(idx - 1);
        let line_start = self.rope.line_to_char(line_idx);
        let line = self.rope.line(line_idx).to_string();
        let local = idx - line_start;

        let mut chars = 0;
        let mut last_boundary = 0;
        for grapheme in line.graphemes(true) {
            if chars >= local {
                break;
            }
            last_boundary = chars;
            chars += grapheme.chars().count();
        }
        line_start + last_boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        let buf = TextBuffer::new();
        assert_eq!(buf.line_count(), 1);
        assert!(buf.is_empty());
        assert!(!buf.can_undo());
    }

    #[test]
    fn test_insert_and_lines() {
        let mut buf = TextBuffer::new();
        let caret = buf.insert(0, "hello\nworld").unwrap();

        assert_eq!(caret, 11);
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line(0).unwrap(), "hello\n");
        assert_eq!(buf.line_content(1).unwrap(), "world");
    }

    #[test]
    fn test_replace_records_removed_text() {
        let mut buf = TextBuffer::from_text("hello world");
        buf.replace(0..5, "howdy").unwrap();
        assert_eq!(buf.text(), "howdy world");

        buf.undo().unwrap();
        assert_eq!(buf.text(), "hello world");
        buf.redo().unwrap();
        assert_eq!(buf.text(), "howdy world");
    }

    #[test]
    fn test_undo_restores_each_edit() {
        let mut buf = TextBuffer::from_text("hello");
        buf.insert(5, " ").unwrap();
        buf.insert(6, "world").unwrap();
        buf.remove(0..1).unwrap();
        assert_eq!(buf.text(), "ello world");

        assert_eq!(buf.undo().unwrap(), Some(1));
        assert_eq!(buf.text(), "hello world");
        buf.undo().unwrap();
        assert_eq!(buf.text(), "hello ");
        buf.undo().unwrap();
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.undo().unwrap(), None);
    }

    #[test]
    fn test_set_text_is_one_edit() {
        let mut buf = TextBuffer::from_text("old");
        buf.set_text("brand new").unwrap();
        assert_eq!(buf.text(), "brand new");

        buf.undo().unwrap();
        assert_eq!(buf.text(), "old");
    }

    #[test]
    fn test_out_of_range_replace_fails() {
        let mut buf = TextBuffer::from_text("abc");
        assert!(buf.replace(2..9, "x").is_err());
        assert_eq!(buf.text(), "abc");
        assert!(!buf.can_undo());
    }

    #[test]
    fn test_noop_replace_not_recorded() {
        let mut buf = TextBuffer::from_text("abc");
        buf.replace(1..1, "").unwrap();
        assert!(!buf.can_undo());
    }

    #[test]
    fn test_crlf_preserved() {
        let buf = TextBuffer::from_text("one\r\ntwo\r\n");
        assert_eq!(buf.text(), "one\r\ntwo\r\n");
        assert_eq!(buf.line_len(0), 3);
        assert_eq!(buf.line_content(1).unwrap(), "two");
    }

    #[test]
    fn test_cursor_conversion() {
        let buf = TextBuffer::from_text("ab\ncde");
        assert_eq!(buf.char_to_cursor(4), Cursor::at(1, 1));
        assert_eq!(buf.cursor_to_char(&Cursor::at(1, 1)), 4);
        // Column past line end clamps
        assert_eq!(buf.cursor_to_char(&Cursor::at(0, 10)), 2);
        // Line past document end clamps to last line
        assert_eq!(buf.cursor_to_char(&Cursor::at(9, 0)), 3);
    }

    #[test]
    fn test_grapheme_boundaries_skip_crlf() {
        let buf = TextBuffer::from_text("a\r\nb");
        assert_eq!(buf.next_grapheme_boundary(1), 3);
        assert_eq!(buf.prev_grapheme_boundary(3), 1);
    }

    #[test]
    fn test_grapheme_boundaries_combining_marks() {
        // "e" + combining acute accent is one grapheme
        let buf = TextBuffer::from_text("e\u{301}x");
        assert_eq!(buf.next_grapheme_boundary(0), 2);
        assert_eq!(buf.prev_grapheme_boundary(2), 0);
        assert_eq!(buf.next_grapheme_boundary(3), 3);
        assert_eq!(buf.prev_grapheme_boundary(0), 0);
    }

    #[test]
    fn test_grouped_typing_undoes_together() {
        let mut buf = TextBuffer::new();
        let mut history = History::new();
        history.set_group_typing(true);
        buf.set_history(history);

        buf.insert(0, "a").unwrap();
        buf.insert(1, "b").unwrap();
        buf.undo().unwrap();
        assert_eq!(buf.text(), "");
    }
}
