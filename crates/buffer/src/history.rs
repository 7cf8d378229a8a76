/// One undoable change to the text.
///
/// Every mutation is expressed as "at `position`, `removed` was replaced by
/// `inserted`". Pure insertions have an empty `removed`, pure deletions an
/// empty `inserted`. Positions are char indices into the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    /// Char index where the change starts
    pub position: usize,
    /// Text that was removed at `position`
    pub removed: String,
    /// Text that was inserted at `position`
    pub inserted: String,
}

impl EditRecord {
    /// Create a new edit record
    pub fn new(position: usize, removed: impl Into<String>, inserted: impl Into<String>) -> Self {
        Self {
            position,
            removed: removed.into(),
            inserted: inserted.into(),
        }
    }

    /// Get inverse record (swaps removed and inserted text)
    pub fn inverse(&self) -> EditRecord {
        EditRecord {
            position: self.position,
            removed: self.inserted.clone(),
            inserted: self.removed.clone(),
        }
    }

    /// Number of chars this record removes
    pub fn removed_len(&self) -> usize {
        self.removed.chars().count()
    }

    /// Number of chars this record inserts
    pub fn inserted_len(&self) -> usize {
        self.inserted.chars().count()
    }

    /// Check if `other` continues this record as plain typing.
    ///
    /// Only single-char insertions directly after the previously inserted
    /// text merge; newlines always start a new record.
    pub fn can_merge_with(&self, other: &EditRecord) -> bool {
        self.removed.is_empty()
            && other.removed.is_empty()
            && other.inserted_len() == 1
            && !other.inserted.contains('\n')
            && !self.inserted.contains('\n')
            && other.position == self.position + self.inserted_len()
    }

    /// Merge a typing continuation into this record
    pub fn merge(&mut self, other: EditRecord) {
        self.inserted.push_str(&other.inserted);
    }
}

/// Edit history for undo/redo
#[derive(Debug, Clone)]
pub struct History {
    /// Record stack for undo
    undo_stack: Vec<EditRecord>,
    /// Record stack for redo
    redo_stack: Vec<EditRecord>,
    /// Maximum number of undo records kept
    max_size: usize,
    /// Coalesce consecutive typed characters into one record
    group_typing: bool,
    /// Record still accepting typing continuations
    pending: Option<EditRecord>,
}

impl History {
    /// Create a new history
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Create history with specified size
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
            group_typing: false,
            pending: None,
        }
    }

    /// Enable or disable coalescing of typed characters
    pub fn set_group_typing(&mut self, enabled: bool) {
        if !enabled {
            self.commit_pending();
        }
        self.group_typing = enabled;
    }

    /// Record a new edit. Clears the redo stack.
    pub fn push(&mut self, record: EditRecord) {
        self.redo_stack.clear();

        if !self.group_typing {
            self.push_undo(record);
            return;
        }

        if let Some(pending) = &mut self.pending {
            if pending.can_merge_with(&record) {
                pending.merge(record);
                return;
            }
        }

        self.commit_pending();
        self.pending = Some(record);
    }

    /// Close the record that is still accepting typing continuations
    pub fn commit_pending(&mut self) {
        if let Some(record) = self.pending.take() {
            self.push_undo(record);
        }
    }

    fn push_undo(&mut self, record: EditRecord) {
        self.undo_stack.push(record);
        if self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Pop the last edit and return the record that reverts it
    pub fn undo(&mut self) -> Option<EditRecord> {
        self.commit_pending();

        let record = self.undo_stack.pop()?;
        let inverse = record.inverse();
        self.redo_stack.push(record);
        Some(inverse)
    }

    /// Pop the last undone edit and return it for replay
    pub fn redo(&mut self) -> Option<EditRecord> {
        self.commit_pending();

        let record = self.redo_stack.pop()?;
        self.undo_stack.push(record.clone());
        Some(record)
    }

    /// Put a record returned by `undo` back on the undo stack.
    ///
    /// Used when replaying the inverse failed and the text is unchanged.
    pub fn restore_undo(&mut self) {
        if let Some(record) = self.redo_stack.pop() {
            self.undo_stack.push(record);
        }
    }

    /// Put a record returned by `redo` back on the redo stack
    pub fn restore_redo(&mut self) {
        if let Some(record) = self.undo_stack.pop() {
            self.redo_stack.push(record);
        }
    }

    /// Check if undo is possible
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() || self.pending.is_some()
    }

    /// Check if redo is possible
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.pending = None;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_undo_redo() {
        let mut history = History::new();
        history.push(EditRecord::new(0, "", "hello"));

        assert!(history.can_undo());
        assert!(!history.can_redo());

        let undo = history.undo().unwrap();
        assert_eq!(undo, EditRecord::new(0, "hello", ""));
        assert!(!history.can_undo());
        assert!(history.can_redo());

        let redo = history.redo().unwrap();
        assert_eq!(redo, EditRecord::new(0, "", "hello"));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut history = History::new();
        history.push(EditRecord::new(0, "", "a"));
        history.undo();
        assert!(history.can_redo());

        history.push(EditRecord::new(0, "", "b"));
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_undo_order_is_reverse() {
        let mut history = History::new();
        history.push(EditRecord::new(0, "", "a"));
        history.push(EditRecord::new(1, "", "b"));

        assert_eq!(history.undo().unwrap().position, 1);
        assert_eq!(history.undo().unwrap().position, 0);
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_no_merge_by_default() {
        let mut history = History::new();
        history.push(EditRecord::new(0, "", "h"));
        history.push(EditRecord::new(1, "", "e"));

        assert_eq!(history.undo_stack.len(), 2);
    }

    #[test]
    fn test_merge_typing_when_grouped() {
        let mut history = History::new();
        history.set_group_typing(true);

        history.push(EditRecord::new(0, "", "h"));
        history.push(EditRecord::new(1, "", "e"));
        history.push(EditRecord::new(2, "", "l"));
        history.commit_pending();

        assert_eq!(history.undo_stack.len(), 1);
        assert_eq!(history.undo().unwrap(), EditRecord::new(0, "hel", ""));
    }

    #[test]
    fn test_newline_breaks_merge() {
        let mut history = History::new();
        history.set_group_typing(true);

        history.push(EditRecord::new(0, "", "h"));
        history.push(EditRecord::new(1, "", "\n"));
        history.commit_pending();

        assert_eq!(history.undo_stack.len(), 2);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::with_capacity(2);
        history.push(EditRecord::new(0, "", "a"));
        history.push(EditRecord::new(1, "", "b"));
        history.push(EditRecord::new(2, "", "c"));

        assert_eq!(history.undo().unwrap().position, 2);
        assert_eq!(history.undo().unwrap().position, 1);
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_restore_after_failed_replay() {
        let mut history = History::new();
        history.push(EditRecord::new(0, "", "a"));

        history.undo();
        history.restore_undo();
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }
}
