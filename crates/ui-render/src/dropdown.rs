//! Dropdown list of a menu.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};
use unicode_width::UnicodeWidthStr;

use shaun_theme::Theme;

use crate::menu::MenuItem;

/// Columns between label and chord.
const CHORD_GAP: usize = 4;

/// Dropdown anchored below a menu title
pub struct Dropdown<'a> {
    items: &'a [MenuItem],
    selected: usize,
    x: u16,
    y: u16,
}

impl<'a> Dropdown<'a> {
    pub fn new(items: &'a [MenuItem], selected: usize, x: u16, y: u16) -> Self {
        Self {
            items,
            selected,
            x,
            y,
        }
    }

    fn label_width(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.label.width())
            .max()
            .unwrap_or(0)
    }

    /// Screen area of the dropdown, shifted to stay inside `screen`
    pub fn area(&self, screen: Rect) -> Rect {
        let chord_width = self
            .items
            .iter()
            .filter_map(|item| item.chord.map(|chord| chord.width()))
            .max()
            .map(|width| width + CHORD_GAP)
            .unwrap_or(0);
        // borders + one column of padding on each side
        let width = (self.label_width() + chord_width + 4) as u16;
        let height = self.items.len() as u16 + 2;

        let width = width.min(screen.width);
        let height = height.min(screen.height);
        let x = self.x.min(screen.right().saturating_sub(width));
        let y = self.y.min(screen.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }

    /// Item under a screen cell
    pub fn item_at(&self, screen: Rect, column: u16, row: u16) -> Option<usize> {
        let inner = Block::default().borders(Borders::ALL).inner(self.area(screen));
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let idx = (row - inner.y) as usize;
        (idx < self.items.len()).then_some(idx)
    }

    pub fn render(&self, buf: &mut Buffer, screen: Rect, theme: &Theme) {
        if self.items.is_empty() {
            return;
        }

        let area = self.area(screen);
        Clear.render(area, buf);

        let inner_width = area.width.saturating_sub(2) as usize;
        let label_width = self.label_width();

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let style = if idx == self.selected && item.enabled {
                    theme.selection_style()
                } else if item.enabled {
                    theme.chrome_style()
                } else {
                    theme.chrome_style().fg(theme.disabled)
                };
                let chord_style = if idx == self.selected && item.enabled {
                    style
                } else {
                    style.fg(theme.disabled)
                };

                let chord = item.chord.unwrap_or("");
                let padding = inner_width
                    .saturating_sub(2 + label_width + chord.width())
                    .max(1);
                let line = Line::from(vec![
                    Span::styled(" ", style),
                    Span::styled(format!("{:<label_width$}", item.label), style),
                    Span::styled(" ".repeat(padding), style),
                    Span::styled(chord, chord_style),
                    Span::styled(" ", style),
                ]);
                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accented_fg))
                    .style(theme.chrome_style()),
            )
            .render(area, buf);
    }
}
