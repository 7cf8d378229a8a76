use std::ops::Range;

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthChar;

use shaun_buffer::{Cursor, History, Selection, TextBuffer};

use crate::click_tracker::ClickTracker;
use crate::keyboard::EditorCommand;
use crate::Font;

/// Lines scrolled per mouse wheel step.
const MOUSE_SCROLL_LINES: usize = 3;
const DEFAULT_TAB_SIZE: usize = 4;

/// Multi-line text widget with caret, selection and undo history.
#[derive(Debug)]
pub struct TextArea {
    buffer: TextBuffer,
    /// Caret as char index
    caret: usize,
    /// Selection anchor; the selection spans anchor..caret
    anchor: Option<usize>,
    /// Display column kept across vertical moves
    goal_column: Option<usize>,
    font: Font,
    tab_size: usize,
    pub(crate) scroll_row: usize,
    pub(crate) scroll_col: usize,
    /// Scroll to the caret on next render
    pub(crate) follow_caret: bool,
    /// Text area of the last render, for mouse mapping and paging
    pub(crate) last_area: Option<Rect>,
    click_tracker: ClickTracker,
    /// Left button went down inside the text
    dragging: bool,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl TextArea {
    /// Create an empty text area
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            caret: 0,
            anchor: None,
            goal_column: None,
            font: Font::default(),
            tab_size: DEFAULT_TAB_SIZE,
            scroll_row: 0,
            scroll_col: 0,
            follow_caret: true,
            last_area: None,
            click_tracker: ClickTracker::default(),
            dragging: false,
        }
    }

    /// Replace the undo history (limits, typing coalescing)
    pub fn set_history(&mut self, history: History) {
        self.buffer.set_history(history);
    }

    pub fn set_tab_size(&mut self, tab_size: usize) {
        self.tab_size = tab_size.max(1);
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Full document text
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Caret position as char index
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Caret position as line and column
    pub fn cursor(&self) -> Cursor {
        self.buffer.char_to_cursor(self.caret)
    }

    /// Current non-empty selection
    pub fn selection(&self) -> Option<Selection> {
        self.anchor
            .map(|anchor| Selection::new(anchor, self.caret))
            .filter(|selection| !selection.is_empty())
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    fn selection_range(&self) -> Option<Range<usize>> {
        self.selection().map(|selection| selection.range())
    }

    /// Text of the current selection
    pub fn selected_text(&self) -> Option<String> {
        self.selection_range().map(|range| self.buffer.slice(range))
    }

    // ===== Document replacement =====

    /// Replace the whole document as one undoable edit.
    ///
    /// The caret moves to the start and the view scrolls to the top.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.buffer.set_text(text)?;
        self.caret = 0;
        self.anchor = None;
        self.goal_column = None;
        self.scroll_row = 0;
        self.scroll_col = 0;
        self.follow_caret = true;
        Ok(())
    }

    // ===== Editing =====

    /// Replace the selection with `text`, or insert it at the caret
    pub fn replace_selection(&mut self, text: &str) -> Result<()> {
        let range = self
            .selection_range()
            .unwrap_or(self.caret..self.caret);
        let caret = self.buffer.replace(range, text)?;
        self.place_caret(caret);
        Ok(())
    }

    /// Remove the selected text.
    ///
    /// Returns false (and does nothing) if the selection is empty.
    pub fn delete_selection(&mut self) -> Result<bool> {
        let Some(range) = self.selection_range() else {
            return Ok(false);
        };
        let caret = self.buffer.remove(range)?;
        self.place_caret(caret);
        Ok(true)
    }

    /// Delete the selection or the grapheme after the caret
    pub fn delete_forward(&mut self) -> Result<()> {
        if self.delete_selection()? {
            return Ok(());
        }
        let end = self.buffer.next_grapheme_boundary(self.caret);
        if end > self.caret {
            let caret = self.buffer.remove(self.caret..end)?;
            self.place_caret(caret);
        }
        Ok(())
    }

    /// Delete the selection or the grapheme before the caret
    pub fn backspace(&mut self) -> Result<()> {
        if self.delete_selection()? {
            return Ok(());
        }
        let start = self.buffer.prev_grapheme_boundary(self.caret);
        if start < self.caret {
            let caret = self.buffer.remove(start..self.caret)?;
            self.place_caret(caret);
        }
        Ok(())
    }

    /// Revert the last edit. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool> {
        match self.buffer.undo()? {
            Some(caret) => {
                self.place_caret(caret);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reapply the last undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> Result<bool> {
        match self.buffer.redo()? {
            Some(caret) => {
                self.place_caret(caret);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.buffer.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.buffer.can_redo()
    }

    fn place_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.buffer.len_chars());
        self.anchor = None;
        self.goal_column = None;
        self.follow_caret = true;
    }

    // ===== Selection and caret =====

    /// Select the whole document
    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.caret = self.buffer.len_chars();
        self.goal_column = None;
        self.follow_caret = true;
    }

    /// Move the caret, optionally extending the selection
    pub fn move_to(&mut self, idx: usize, extend: bool) {
        if extend {
            self.anchor.get_or_insert(self.caret);
        } else {
            self.anchor = None;
        }
        self.caret = idx.min(self.buffer.len_chars());
        self.follow_caret = true;
    }

    /// Select the char range `range`, caret at its end
    pub fn select(&mut self, range: Range<usize>) {
        let len = self.buffer.len_chars();
        self.anchor = Some(range.start.min(len));
        self.caret = range.end.min(len);
        self.goal_column = None;
        self.follow_caret = true;
    }

    // ===== Navigation =====

    pub(crate) fn move_left(&mut self, extend: bool) {
        self.goal_column = None;
        match self.selection() {
            Some(selection) if !extend => self.move_to(selection.start(), false),
            _ => self.move_to(self.buffer.prev_grapheme_boundary(self.caret), extend),
        }
    }

    pub(crate) fn move_right(&mut self, extend: bool) {
        self.goal_column = None;
        match self.selection() {
            Some(selection) if !extend => self.move_to(selection.end(), false),
            _ => self.move_to(self.buffer.next_grapheme_boundary(self.caret), extend),
        }
    }

    /// Move the caret `delta` lines, keeping its display column
    pub(crate) fn move_lines(&mut self, delta: isize, extend: bool) {
        let cursor = self.cursor();
        let goal = self
            .goal_column
            .unwrap_or_else(|| self.display_column(cursor.line, cursor.column));
        let last_line = self.buffer.line_count().saturating_sub(1);

        let target = if delta < 0 {
            if cursor.line == 0 {
                self.move_to(0, extend);
                return;
            }
            cursor.line.saturating_sub(delta.unsigned_abs())
        } else {
            if cursor.line >= last_line {
                self.move_to(self.buffer.len_chars(), extend);
                return;
            }
            (cursor.line + delta.unsigned_abs()).min(last_line)
        };

        let column = self.char_column_at(target, goal);
        self.move_to(self.buffer.cursor_to_char(&Cursor::at(target, column)), extend);
        self.goal_column = Some(goal);
    }

    /// Lines moved by PageUp/PageDown
    pub(crate) fn page_lines(&self) -> isize {
        self.last_area
            .map(|area| area.height.max(1) as isize)
            .unwrap_or(1)
    }

    pub(crate) fn move_line_start(&mut self, extend: bool) {
        self.goal_column = None;
        let line = self.cursor().line;
        self.move_to(self.buffer.line_start(line), extend);
    }

    pub(crate) fn move_line_end(&mut self, extend: bool) {
        self.goal_column = None;
        let line = self.cursor().line;
        self.move_to(self.buffer.line_start(line) + self.buffer.line_len(line), extend);
    }

    pub(crate) fn move_document_start(&mut self, extend: bool) {
        self.goal_column = None;
        self.move_to(0, extend);
    }

    pub(crate) fn move_document_end(&mut self, extend: bool) {
        self.goal_column = None;
        self.move_to(self.buffer.len_chars(), extend);
    }

    // ===== Columns =====

    /// Display width of `ch` when drawn at display column `col`
    pub(crate) fn char_width(&self, ch: char, col: usize) -> usize {
        if ch == '\t' {
            self.tab_size - col % self.tab_size
        } else {
            ch.width().unwrap_or(1)
        }
    }

    /// Display column of char column `column` in `line`
    pub(crate) fn display_column(&self, line: usize, column: usize) -> usize {
        let content = self.buffer.line_content(line).unwrap_or_default();
        content
            .chars()
            .take(column)
            .fold(0, |col, ch| col + self.char_width(ch, col))
    }

    /// Char column whose cell covers display column `target` in `line`
    pub(crate) fn char_column_at(&self, line: usize, target: usize) -> usize {
        let content = self.buffer.line_content(line).unwrap_or_default();
        let mut col = 0;
        for (idx, ch) in content.chars().enumerate() {
            let width = self.char_width(ch, col);
            if col + width > target {
                return idx;
            }
            col += width;
        }
        content.chars().count()
    }

    // ===== Input =====

    /// Handle a key press.
    ///
    /// Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        let command = EditorCommand::from_key_event(key);
        if command == EditorCommand::None {
            return Ok(false);
        }
        command.execute(self)?;
        Ok(true)
    }

    /// Handle a mouse event inside the last rendered area.
    ///
    /// Returns true if the event changed the caret, selection or scroll.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let Some(area) = self.last_area else {
            return false;
        };
        let inside = area.contains(Position::new(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                let idx = self.index_at(area, mouse.column, mouse.row);
                self.goal_column = None;
                self.dragging = true;
                if mouse.modifiers.contains(KeyModifiers::SHIFT) {
                    self.move_to(idx, true);
                } else if self.click_tracker.click(idx) {
                    self.select_word_at(idx);
                } else {
                    self.move_to(idx, false);
                }
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.dragging = false;
                false
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                // Clamp so dragging past an edge selects up to it
                let column = mouse
                    .column
                    .clamp(area.x, area.right().saturating_sub(1));
                let row = mouse.row.clamp(area.y, area.bottom().saturating_sub(1));
                let idx = self.index_at(area, column, row);
                self.goal_column = None;
                self.move_to(idx, true);
                true
            }
            MouseEventKind::ScrollUp if inside => {
                self.scroll_row = self.scroll_row.saturating_sub(MOUSE_SCROLL_LINES);
                self.follow_caret = false;
                true
            }
            MouseEventKind::ScrollDown if inside => {
                let last_line = self.buffer.line_count().saturating_sub(1);
                self.scroll_row = (self.scroll_row + MOUSE_SCROLL_LINES).min(last_line);
                self.follow_caret = false;
                true
            }
            _ => false,
        }
    }

    /// Char index under a screen cell of `area`
    fn index_at(&self, area: Rect, column: u16, row: u16) -> usize {
        let line = self.scroll_row + row.saturating_sub(area.y) as usize;
        if line >= self.buffer.line_count() {
            return self.buffer.len_chars();
        }
        let display_col = self.scroll_col + column.saturating_sub(area.x) as usize;
        let char_col = self.char_column_at(line, display_col);
        self.buffer.cursor_to_char(&Cursor::at(line, char_col))
    }

    /// Select the word around `idx`, or just place the caret there
    fn select_word_at(&mut self, idx: usize) {
        let is_word = |ch: char| ch.is_alphanumeric() || ch == '_';
        let cursor = self.buffer.char_to_cursor(idx);
        let chars: Vec<char> = self
            .buffer
            .line_content(cursor.line)
            .unwrap_or_default()
            .chars()
            .collect();

        if !chars.get(cursor.column).copied().is_some_and(is_word) {
            self.move_to(idx, false);
            return;
        }

        let mut start = cursor.column;
        while start > 0 && is_word(chars[start - 1]) {
            start -= 1;
        }
        let mut end = cursor.column;
        while end < chars.len() && is_word(chars[end]) {
            end += 1;
        }

        let line_start = self.buffer.line_start(cursor.line);
        self.select(line_start + start..line_start + end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn area_with(text: &str) -> TextArea {
        let mut area = TextArea::new();
        area.set_text(text).unwrap();
        area.buffer.clear_history();
        area
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_typing_then_undo_each_char() {
        let mut area = TextArea::new();
        for ch in "hey".chars() {
            area.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
                .unwrap();
        }
        assert_eq!(area.text(), "hey");
        assert!(area.undo().unwrap());
        assert_eq!(area.text(), "he");
        assert_eq!(area.caret(), 2);
    }

    #[test]
    fn test_replace_selection() {
        let mut area = area_with("hello world");
        area.select(0..5);
        area.replace_selection("howdy").unwrap();
        assert_eq!(area.text(), "howdy world");
        assert_eq!(area.caret(), 5);
        assert!(!area.has_selection());
    }

    #[test]
    fn test_delete_selection_empty_is_noop() {
        let mut area = area_with("abc");
        area.move_to(1, false);
        assert!(!area.delete_selection().unwrap());
        assert_eq!(area.text(), "abc");
        assert!(!area.can_undo());
    }

    #[test]
    fn test_delete_forward_without_selection() {
        let mut area = area_with("abc");
        area.move_to(1, false);
        area.delete_forward().unwrap();
        assert_eq!(area.text(), "ac");

        area.move_to(2, false);
        area.delete_forward().unwrap();
        assert_eq!(area.text(), "ac");
    }

    #[test]
    fn test_backspace_joins_crlf_lines() {
        let mut area = area_with("a\r\nb");
        area.move_to(3, false);
        area.backspace().unwrap();
        assert_eq!(area.text(), "ab");
    }

    #[test]
    fn test_select_all_and_selected_text() {
        let mut area = area_with("one\ntwo");
        assert_eq!(area.selected_text(), None);
        area.select_all();
        assert_eq!(area.selected_text().as_deref(), Some("one\ntwo"));
    }

    #[test]
    fn test_set_text_resets_caret_and_is_undoable() {
        let mut area = area_with("old");
        area.move_to(3, false);
        area.set_text("new text").unwrap();
        assert_eq!(area.caret(), 0);
        assert!(area.undo().unwrap());
        assert_eq!(area.text(), "old");
    }

    #[test]
    fn test_vertical_moves_keep_goal_column() {
        let mut area = area_with("abcdef\nxy\nlonger line");
        area.move_to(5, false);
        area.move_lines(1, false);
        assert_eq!(area.cursor(), Cursor::at(1, 2));
        area.move_lines(1, false);
        assert_eq!(area.cursor(), Cursor::at(2, 5));
    }

    #[test]
    fn test_tabs_expand_to_tab_stops() {
        let mut area = area_with("\tx");
        area.set_tab_size(4);
        assert_eq!(area.display_column(0, 1), 4);
        assert_eq!(area.char_column_at(0, 2), 0);
        assert_eq!(area.char_column_at(0, 4), 1);
    }

    #[test]
    fn test_mouse_click_and_drag() {
        let mut area = area_with("hello\nworld");
        area.last_area = Some(Rect::new(1, 1, 20, 5));

        assert!(area.handle_mouse(click(3, 2)));
        assert_eq!(area.cursor(), Cursor::at(1, 2));

        let drag = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 5,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        assert!(area.handle_mouse(drag));
        assert_eq!(area.selected_text().as_deref(), Some("rl"));
    }

    #[test]
    fn test_double_click_selects_word() {
        let mut area = area_with("foo bar_baz qux");
        area.last_area = Some(Rect::new(0, 0, 40, 5));
        area.handle_mouse(click(6, 0));
        area.handle_mouse(click(6, 0));
        assert_eq!(area.selected_text().as_deref(), Some("bar_baz"));
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let mut area = area_with("hello");
        area.last_area = Some(Rect::new(1, 1, 20, 5));
        assert!(!area.handle_mouse(click(0, 0)));
        assert_eq!(area.caret(), 0);
    }
}
