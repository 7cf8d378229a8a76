//! Blocking notice with a single OK button.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use shaun_theme::Theme;

use crate::base::{
    calculate_modal_width, centered_rect_with_size, hit, render_buttons, render_modal_frame,
    ModalWidthConfig,
};
use crate::{Modal, ModalResult};

/// Notice window, closed by Enter, Space, Esc, OK or [X]
#[derive(Debug)]
pub struct InfoModal {
    title: String,
    message: String,
    last_close_area: Option<Rect>,
    last_button_area: Option<Rect>,
}

impl InfoModal {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            last_close_area: None,
            last_button_area: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Modal for InfoModal {
    type Result = ();

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let width = calculate_modal_width(
            self.message
                .lines()
                .map(|line| line.width() as u16)
                .chain(std::iter::once(self.title.width() as u16 + 6)),
            area.width,
            ModalWidthConfig::default(),
        );
        let text_width = width.saturating_sub(2).max(1) as usize;
        let text_lines: u16 = self
            .message
            .lines()
            .map(|line| line.width().max(1).div_ceil(text_width) as u16)
            .sum::<u16>()
            .max(1);
        // border + empty + text + empty + button + border
        let height = text_lines + 5;

        let modal_area = centered_rect_with_size(width, height, area);
        let (inner, close_area) = render_modal_frame(modal_area, buf, theme, &self.title);
        self.last_close_area = Some(close_area);

        let text_area = Rect::new(inner.x, inner.y + 1, inner.width, text_lines).intersection(inner);
        Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(theme.bg).bg(theme.fg))
            .render(text_area, buf);

        let button_row = Rect::new(inner.x, inner.y + text_lines + 2, inner.width, 1).intersection(inner);
        self.last_button_area = render_buttons(buf, button_row, &["OK"], Some(0), theme)
            .into_iter()
            .next();
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Ok(Some(ModalResult::Confirmed(()))),
            KeyCode::Esc => Ok(Some(ModalResult::Cancelled)),
            _ => Ok(None),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Option<ModalResult<Self::Result>>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        let on = |area: Option<Rect>| area.is_some_and(|a| hit(a, mouse.column, mouse.row));
        if on(self.last_button_area) {
            Ok(Some(ModalResult::Confirmed(())))
        } else if on(self.last_close_area) {
            Ok(Some(ModalResult::Cancelled))
        } else {
            Ok(None)
        }
    }
}
