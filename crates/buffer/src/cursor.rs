use std::cmp::{max, min};
use std::ops::Range;

/// Cursor position in document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Line number (0-based)
    pub line: usize,
    /// Position in line in chars (0-based)
    pub column: usize,
}

impl Cursor {
    /// Create cursor at specified position
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.column.cmp(&other.column),
            other => other,
        }
    }
}

/// Text selection between two char indices.
///
/// `anchor` stays where the selection started, `active` follows the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub active: usize,
}

impl Selection {
    /// Create a new selection
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Selection start (smaller index)
    pub fn start(&self) -> usize {
        min(self.anchor, self.active)
    }

    /// Selection end (larger index)
    pub fn end(&self) -> usize {
        max(self.anchor, self.active)
    }

    /// Selected char range
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Check if selection is empty
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Check if char index is inside the selection
    pub fn contains(&self, idx: usize) -> bool {
        idx >= self.start() && idx < self.end()
    }
}
