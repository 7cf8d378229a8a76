use unicode_width::UnicodeWidthChar;

/// Single-line text field with a char-based cursor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    chars: Vec<char>,
    /// Cursor position in chars
    cursor: usize,
}

impl TextInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input holding `text`, cursor at the end
    pub fn with_text(text: impl AsRef<str>) -> Self {
        let chars: Vec<char> = text.as_ref().chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    /// Current text
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Portion of the text that fits into `width` columns with the cursor
    /// visible, and the cursor column inside it.
    ///
    /// Long paths scroll so that their tail stays in view.
    pub fn visible(&self, width: u16) -> (String, u16) {
        let width = width as usize;
        if width == 0 {
            return (String::new(), 0);
        }

        // Leave one column for the cursor block
        let mut start = self.cursor;
        let mut used = 1;
        while start > 0 {
            let w = self.chars[start - 1].width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }
        let cursor_col = (used - 1) as u16;

        let mut text = String::new();
        let mut total = 0;
        for &ch in &self.chars[start..] {
            let w = ch.width().unwrap_or(0);
            if total + w > width {
                break;
            }
            total += w;
            text.push(ch);
        }

        (text, cursor_col)
    }
}
