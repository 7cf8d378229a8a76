//! Path prompt used by the Open and Save As dialogs.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use shaun_theme::Theme;

use crate::base::{
    calculate_modal_width, centered_rect_with_size, hit, render_buttons, render_modal_frame,
    ModalWidthConfig,
};
use crate::{Modal, ModalResult, TextInput};

const BUTTONS: [&str; 2] = ["OK", "Cancel"];

/// Focus area in the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusArea {
    Input,
    Buttons,
}

/// Text input modal window
#[derive(Debug)]
pub struct InputModal {
    title: String,
    prompt: String,
    input: TextInput,
    focus: FocusArea,
    /// 0 = OK, 1 = Cancel
    selected_button: usize,
    last_close_area: Option<Rect>,
    last_button_areas: Vec<Rect>,
}

impl InputModal {
    /// Create a prompt pre-filled with `default`
    pub fn new(title: impl Into<String>, prompt: impl Into<String>, default: impl AsRef<str>) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            input: TextInput::with_text(default),
            focus: FocusArea::Input,
            selected_button: 0,
            last_close_area: None,
            last_button_areas: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current input text
    pub fn value(&self) -> String {
        self.input.text()
    }

    /// Confirm with the current input; an empty input cancels
    fn confirm(&self) -> Option<ModalResult<String>> {
        if self.input.is_empty() {
            Some(ModalResult::Cancelled)
        } else {
            Some(ModalResult::Confirmed(self.input.text()))
        }
    }

    fn modal_size(&self, screen: Rect) -> (u16, u16) {
        let width = calculate_modal_width(
            [
                self.title.width() as u16 + 6,
                self.prompt.width() as u16,
                self.input.text().width() as u16 + 4,
            ]
            .into_iter(),
            screen.width,
            ModalWidthConfig { wide: true },
        );
        // border + prompt + input(3) + buttons + border
        (width, 7u16.min(screen.height))
    }

    fn edit(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert(c)
            }
            KeyCode::Backspace => {
                self.input.backspace();
            }
            KeyCode::Delete => {
                self.input.delete();
            }
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }
}

impl Modal for InputModal {
    type Result = String;

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let (width, height) = self.modal_size(area);
        let modal_area = centered_rect_with_size(width, height, area);
        let (inner, close_area) = render_modal_frame(modal_area, buf, theme, &self.title);
        self.last_close_area = Some(close_area);

        if inner.height == 0 {
            return;
        }

        let text_style = Style::default().fg(theme.bg).bg(theme.fg);
        buf.set_stringn(inner.x, inner.y, &self.prompt, inner.width as usize, text_style);

        // Input field
        let field_area = Rect::new(inner.x, inner.y + 1, inner.width, 3).intersection(inner);
        let field_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accented_fg).bg(theme.fg));
        let field_inner = field_block.inner(field_area);
        field_block.render(field_area, buf);

        if field_inner.width > 0 && field_inner.height > 0 {
            let (visible, cursor_col) = self.input.visible(field_inner.width);
            buf.set_string(field_inner.x, field_inner.y, &visible, text_style);
            if self.focus == FocusArea::Input {
                buf[(field_inner.x + cursor_col, field_inner.y)]
                    .set_style(text_style.add_modifier(Modifier::REVERSED));
            }
        }

        // Buttons
        let buttons_area = Rect::new(inner.x, inner.y + 4, inner.width, 1).intersection(inner);
        let selected = (self.focus == FocusArea::Buttons).then_some(self.selected_button);
        self.last_button_areas = render_buttons(buf, buttons_area, &BUTTONS, selected, theme);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        // Escape always cancels
        if key.code == KeyCode::Esc {
            return Ok(Some(ModalResult::Cancelled));
        }

        match self.focus {
            FocusArea::Input => match key.code {
                KeyCode::Enter => return Ok(self.confirm()),
                KeyCode::Down | KeyCode::Tab => self.focus = FocusArea::Buttons,
                _ => self.edit(key),
            },
            FocusArea::Buttons => match key.code {
                KeyCode::Enter => {
                    return Ok(if self.selected_button == 0 {
                        self.confirm()
                    } else {
                        Some(ModalResult::Cancelled)
                    });
                }
                KeyCode::Left | KeyCode::Right => self.selected_button = 1 - self.selected_button,
                KeyCode::Up | KeyCode::BackTab => self.focus = FocusArea::Input,
                KeyCode::Tab => {
                    if self.selected_button == 0 {
                        self.selected_button = 1;
                    } else {
                        self.selected_button = 0;
                        self.focus = FocusArea::Input;
                    }
                }
                _ => {
                    // Typing goes back to the input
                    self.focus = FocusArea::Input;
                    self.edit(key);
                }
            },
        }
        Ok(None)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Option<ModalResult<Self::Result>>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        if let Some(close) = self.last_close_area {
            if hit(close, mouse.column, mouse.row) {
                return Ok(Some(ModalResult::Cancelled));
            }
        }

        match self
            .last_button_areas
            .iter()
            .position(|area| hit(*area, mouse.column, mouse.row))
        {
            Some(0) => Ok(self.confirm()),
            Some(_) => Ok(Some(ModalResult::Cancelled)),
            None => Ok(None),
        }
    }
}
