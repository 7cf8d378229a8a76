//! Common modal rendering utilities.
//!
//! - Sizing and centering
//! - Frame rendering with [X] close button
//! - Button rows with click areas

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use shaun_config::constants::MODAL_BUTTON_SPACING;
use shaun_theme::Theme;

/// Minimum modal width.
const MIN_WIDTH: u16 = 30;
/// Minimum modal width for wide dialogs.
const MIN_WIDTH_WIDE: u16 = 50;
/// Border plus two columns of padding on each side.
const PADDING: u16 = 6;

/// Configuration for modal width calculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalWidthConfig {
    /// Use wide constraints (90% of the screen instead of 75%).
    pub wide: bool,
}

/// Calculate modal width from content widths and screen width.
///
/// Takes the widest content, adds padding, then clamps to the minimum
/// width and to a share of the screen.
pub fn calculate_modal_width(
    content_widths: impl Iterator<Item = u16>,
    screen_width: u16,
    config: ModalWidthConfig,
) -> u16 {
    let content_width = content_widths.max().unwrap_or(0);
    let (max_share, min_width) = if config.wide {
        (0.90, MIN_WIDTH_WIDE)
    } else {
        (0.75, MIN_WIDTH)
    };
    let max_width = (screen_width as f32 * max_share) as u16;

    (content_width + PADDING)
        .max(min_width)
        .min(max_width)
        .min(screen_width)
}

/// Rectangle of `width` x `height` centered in `r`, clamped to `r`.
pub fn centered_rect_with_size(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// Render modal frame with [X] close button.
///
/// Colors are inverted relative to the text area.
/// Returns (inner_area, close_button_area).
pub fn render_modal_frame(area: Rect, buf: &mut Buffer, theme: &Theme, title: &str) -> (Rect, Rect) {
    Clear.render(area, buf);

    let block = Block::default()
        .title(Span::styled(
            format!(" [X] {} ", title),
            Style::default().fg(theme.bg).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.bg))
        .style(Style::default().fg(theme.bg).bg(theme.fg));

    // The [X] follows the corner and one space
    let close_button_area = Rect::new(area.x + 2, area.y, 3, 1).intersection(area);

    let inner = block.inner(area);
    block.render(area, buf);

    (inner, close_button_area)
}

/// Render a centered row of `[ label ]` buttons on the first line of `area`.
///
/// Returns the click area of every button, in order.
pub fn render_buttons(
    buf: &mut Buffer,
    area: Rect,
    labels: &[&str],
    selected: Option<usize>,
    theme: &Theme,
) -> Vec<Rect> {
    if area.height == 0 {
        return Vec::new();
    }

    let texts: Vec<String> = labels.iter().map(|label| format!("[ {} ]", label)).collect();
    let total_width: u16 = texts.iter().map(|t| t.width() as u16).sum::<u16>()
        + MODAL_BUTTON_SPACING * texts.len().saturating_sub(1) as u16;

    let mut x = area.x + area.width.saturating_sub(total_width) / 2;
    let mut areas = Vec::with_capacity(texts.len());

    for (idx, text) in texts.iter().enumerate() {
        let style = if selected == Some(idx) {
            Style::default()
                .fg(theme.fg)
                .bg(theme.accented_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accented_fg).bg(theme.fg)
        };

        let width = text.width() as u16;
        let button = Rect::new(x, area.y, width, 1).intersection(area);
        buf.set_string(button.x, button.y, text, style);
        areas.push(button);
        x = x.saturating_add(width + MODAL_BUTTON_SPACING);
    }

    areas
}

/// Check if a screen cell lies inside `rect`.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}
