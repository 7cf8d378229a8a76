//! Menu model and menu bar rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use shaun_keymap::Action;
use shaun_theme::{Theme, ThemeMode};

/// One entry of a dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// Chord shown right-aligned
    pub chord: Option<&'static str>,
    pub action: Action,
    pub enabled: bool,
}

impl MenuItem {
    fn new(action: Action) -> Self {
        Self {
            label: action.label().to_string(),
            chord: action.chord(),
            action,
            enabled: true,
        }
    }

    fn labeled(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Top-level menu with its dropdown items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    /// Letter opened with Alt (lowercase)
    pub mnemonic: char,
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Index of the first enabled item at or after `from`, wrapping around
    pub fn next_enabled(&self, from: usize, forward: bool) -> Option<usize> {
        let len = self.items.len();
        (0..len)
            .map(|step| {
                if forward {
                    (from + step) % len
                } else {
                    (from + len - step % len) % len
                }
            })
            .find(|&idx| self.items[idx].enabled)
    }
}

/// Editor state the menus depend on
#[derive(Debug, Clone, Copy)]
pub struct MenuContext {
    pub theme_mode: ThemeMode,
    /// False while the shortcuts window is open
    pub shortcuts_enabled: bool,
}

/// Build the File, Edit, Format and View menus
pub fn build_menus(ctx: MenuContext) -> Vec<Menu> {
    vec![
        Menu {
            title: "File",
            mnemonic: 'f',
            items: vec![
                MenuItem::new(Action::Open),
                MenuItem::new(Action::Save),
                MenuItem::new(Action::SaveAs),
                MenuItem::new(Action::Exit),
            ],
        },
        Menu {
            title: "Edit",
            mnemonic: 'e',
            items: vec![
                MenuItem::new(Action::Undo),
                MenuItem::new(Action::Redo),
                MenuItem::new(Action::Cut),
                MenuItem::new(Action::Copy),
                MenuItem::new(Action::Paste),
                MenuItem::new(Action::Delete),
                MenuItem::new(Action::SelectAll),
            ],
        },
        Menu {
            title: "Format",
            mnemonic: 'o',
            items: vec![MenuItem::new(Action::ZoomIn), MenuItem::new(Action::ZoomOut)],
        },
        Menu {
            title: "View",
            mnemonic: 'v',
            items: vec![
                MenuItem::new(Action::ToggleTheme).labeled(ctx.theme_mode.toggle_label()),
                MenuItem::new(Action::ShowShortcuts).enabled(ctx.shortcuts_enabled),
            ],
        },
    ]
}

/// Screen column and width of every menu title in the bar at `area`
pub fn title_positions(menus: &[Menu], area: Rect) -> Vec<(u16, u16)> {
    let mut x = area.x + 1;
    menus
        .iter()
        .map(|menu| {
            let width = menu.title.width() as u16 + 2;
            let position = (x, width);
            x = x.saturating_add(width + 1);
            position
        })
        .collect()
}

/// Menu whose title covers `column`
pub fn menu_at(menus: &[Menu], area: Rect, column: u16) -> Option<usize> {
    title_positions(menus, area)
        .into_iter()
        .position(|(x, width)| column >= x && column < x + width)
}

/// Render the menu bar, highlighting the open menu
pub fn render_menu_bar(
    buf: &mut Buffer,
    area: Rect,
    menus: &[Menu],
    open: Option<usize>,
    theme: &Theme,
) {
    let mut spans = vec![Span::raw(" ")];

    for (idx, menu) in menus.iter().enumerate() {
        let (base_style, accent_style) = if open == Some(idx) {
            let base = theme.selection_style().add_modifier(Modifier::BOLD);
            (base, base.add_modifier(Modifier::UNDERLINED))
        } else {
            let base = Style::default().fg(theme.fg);
            let accent = Style::default()
                .fg(theme.accented_fg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            (base, accent)
        };

        // Underline the mnemonic letter
        spans.push(Span::styled(" ", base_style));
        let mut marked = false;
        for ch in menu.title.chars() {
            let style = if !marked && ch.to_ascii_lowercase() == menu.mnemonic {
                marked = true;
                accent_style
            } else {
                base_style
            };
            spans.push(Span::styled(ch.to_string(), style));
        }
        spans.push(Span::styled(" ", base_style));
        spans.push(Span::raw(" "));
    }

    let hint = if open.is_some() {
        "←→ Menus  Enter Select  Esc Close "
    } else {
        "F10 Menu "
    };
    let used: usize = spans.iter().map(|span| span.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hint.width());
    if remaining > 0 {
        spans.push(Span::raw(" ".repeat(remaining)));
        spans.push(Span::styled(hint, Style::default().fg(theme.disabled)));
    }

    Paragraph::new(Line::from(spans))
        .style(theme.chrome_style())
        .render(area, buf);
}
