//! Drawing the text area into a ratatui buffer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use shaun_theme::Theme;

use crate::TextArea;

impl TextArea {
    /// Render the visible part of the document into `area`.
    ///
    /// The caret is drawn only when `focused`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        self.last_area = Some(area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.follow_caret {
            self.scroll_to_caret(area);
            self.follow_caret = false;
        }

        buf.set_style(area, theme.text_style());

        let selection = self.selection();
        let caret = self.cursor();
        let width = area.width as usize;
        let buffer = self.buffer();

        for row in 0..area.height {
            let line_idx = self.scroll_row + row as usize;
            let Some(content) = buffer.line_content(line_idx) else {
                break;
            };
            let line_start = buffer.line_start(line_idx);
            let y = area.y + row;

            let mut col = 0;
            for (offset, ch) in content.chars().enumerate() {
                let char_width = self.char_width(ch, col);
                let char_col = col;
                col += char_width;

                if char_width == 0 || char_col < self.scroll_col {
                    continue;
                }
                let visible_col = char_col - self.scroll_col;
                if visible_col + char_width > width {
                    break;
                }

                let style = if selection.is_some_and(|s| s.contains(line_start + offset)) {
                    theme.selection_style()
                } else {
                    theme.text_style()
                };
                let x = area.x + visible_col as u16;

                match ch {
                    '\t' => {
                        buf.set_string(x, y, " ".repeat(char_width), style);
                    }
                    ch if ch.is_control() => {
                        buf.set_string(x, y, "?", style.fg(theme.disabled));
                    }
                    ch => {
                        buf.set_string(x, y, ch.to_string(), style);
                    }
                }
            }

            // Selected line break
            if let Some(selection) = selection {
                let break_idx = line_start + buffer.line_len(line_idx);
                let break_col = col.saturating_sub(self.scroll_col);
                if col >= self.scroll_col
                    && break_col < width
                    && line_idx + 1 < buffer.line_count()
                    && selection.contains(break_idx)
                {
                    buf[(area.x + break_col as u16, y)].set_style(theme.selection_style());
                }
            }
        }

        if focused {
            let caret_col = self.display_column(caret.line, caret.column);
            if caret.line >= self.scroll_row && caret_col >= self.scroll_col {
                let row = caret.line - self.scroll_row;
                let col = caret_col - self.scroll_col;
                if row < area.height as usize && col < width {
                    render_cursor_at(buf, area.x + col as u16, area.y + row as u16, theme);
                }
            }
        }
    }

    /// Adjust scroll offsets so that the caret cell is inside `area`
    fn scroll_to_caret(&mut self, area: Rect) {
        let caret = self.cursor();
        let height = area.height as usize;
        let width = area.width as usize;

        if caret.line < self.scroll_row {
            self.scroll_row = caret.line;
        } else if caret.line >= self.scroll_row + height {
            self.scroll_row = caret.line + 1 - height;
        }

        let col = self.display_column(caret.line, caret.column);
        if col < self.scroll_col {
            self.scroll_col = col;
        } else if col >= self.scroll_col + width {
            self.scroll_col = col + 1 - width;
        }
    }
}

/// Draw the caret by inverting the colors of one cell.
fn render_cursor_at(buf: &mut Buffer, x: u16, y: u16, theme: &Theme) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        let fg = match cell.fg {
            Color::Reset => theme.fg,
            color => color,
        };
        let bg = match cell.bg {
            Color::Reset => theme.bg,
            color => color,
        };
        cell.set_style(Style::default().fg(bg).bg(fg).add_modifier(Modifier::BOLD));
    }
}
