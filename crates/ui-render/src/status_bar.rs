use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use shaun_theme::Theme;

/// Transient message shown in place of the file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Status bar rendering parameters
pub struct StatusBarParams<'a> {
    pub theme: &'a Theme,
    pub message: Option<&'a StatusMessage>,
    /// Current file path, or "Untitled"
    pub file_label: &'a str,
    /// Caret line, 1-based
    pub line: usize,
    /// Caret column, 1-based
    pub column: usize,
    /// Font description, e.g. "Monospaced 13pt"
    pub font: &'a str,
    /// Theme mode name
    pub mode: &'a str,
}

/// Status bar at the bottom of screen
pub struct StatusBar;

impl StatusBar {
    pub fn render(buf: &mut Buffer, area: Rect, params: &StatusBarParams<'_>) {
        if area.height == 0 {
            return;
        }
        let theme = params.theme;
        let base_style = Style::default().fg(theme.disabled).bg(theme.accented_bg);
        let highlight_style = Style::default()
            .fg(theme.accented_fg)
            .bg(theme.accented_bg)
            .add_modifier(Modifier::BOLD);

        let left = match params.message {
            Some(message) => {
                let color = if message.is_error {
                    theme.error
                } else {
                    theme.success
                };
                Span::styled(
                    format!(" {} ", message.text),
                    Style::default()
                        .fg(color)
                        .bg(theme.accented_bg)
                        .add_modifier(Modifier::BOLD),
                )
            }
            None => Span::styled(format!(" {} ", params.file_label), highlight_style),
        };

        let right = vec![
            Span::styled(format!("Ln {}, Col {}", params.line, params.column), base_style),
            Span::styled(" | ", base_style),
            Span::styled(params.font, base_style),
            Span::styled(" | ", base_style),
            Span::styled(params.mode, base_style),
            Span::styled(" ", base_style),
        ];
        let right_width: usize = right.iter().map(|span| span.width()).sum();
        let remaining = (area.width as usize).saturating_sub(left.content.width() + right_width);

        let mut spans = vec![left];
        // Right part is dropped on narrow screens
        if remaining > 0 {
            spans.push(Span::styled(" ".repeat(remaining), base_style));
            spans.extend(right);
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.accented_bg))
            .render(area, buf);
    }
}
