mod common;

use crossterm::event::{KeyCode, KeyModifiers};

use shaun_app::{Action, Focus};
use shaun_panel_editor::Font;
use shaun_panel_shortcuts::ShortcutsPanel;
use shaun_theme::{Theme, ThemeMode};

use common::EditorHarness;

fn font(harness: &EditorHarness) -> Font {
    harness.app().state().text_area.font().clone()
}

#[test]
fn test_zoom_in_then_out_restores_size() {
    let mut harness = EditorHarness::new(80, 24);
    let before = font(&harness);

    harness.ctrl('=');
    assert_eq!(font(&harness).size, before.size + 1);
    assert!(harness.row(23).contains("Monospaced 14pt"));

    harness.ctrl('-');
    assert_eq!(font(&harness), before);
}

#[test]
fn test_zoom_out_has_no_lower_bound() {
    let mut harness = EditorHarness::new(80, 24);
    for _ in 0..20 {
        harness.app_mut().dispatch(Action::ZoomOut);
    }
    assert_eq!(font(&harness).size, 13 - 20);
}

#[test]
fn test_toggle_theme_twice_restores_colors_and_label() {
    let mut harness = EditorHarness::new(80, 24);
    let initial_bg = harness.buffer()[(2, 2)].bg;
    assert_eq!(harness.app().state().menus()[3].items[0].label, "Set to Dark");

    harness.app_mut().dispatch(Action::ToggleTheme);
    harness.render();
    assert_eq!(harness.app().state().theme_mode, ThemeMode::Dark);
    assert_eq!(harness.app().state().menus()[3].items[0].label, "Set to Light");
    assert_eq!(harness.buffer()[(2, 2)].bg, Theme::dark().bg);

    harness.app_mut().dispatch(Action::ToggleTheme);
    harness.render();
    assert_eq!(harness.app().state().theme_mode, ThemeMode::Light);
    assert_eq!(harness.app().state().menus()[3].items[0].label, "Set to Dark");
    assert_eq!(harness.buffer()[(2, 2)].bg, initial_bg);
}

#[test]
fn test_show_shortcuts_is_singleton() {
    let mut harness = EditorHarness::new(80, 24);

    harness.app_mut().dispatch(Action::ShowShortcuts);
    assert!(harness.app().state().shortcuts.is_some());
    assert!(!harness.app().state().menus()[3].items[1].enabled);
    assert_eq!(harness.app().state().focus, Focus::Shortcuts);

    // Second request changes nothing
    harness.app_mut().state_mut().focus = Focus::Editor;
    harness.app_mut().dispatch(Action::ShowShortcuts);
    assert!(harness.app().state().shortcuts.is_some());
    assert_eq!(harness.app().state().focus, Focus::Editor);
}

#[test]
fn test_close_then_show_opens_new_window() {
    let mut harness = EditorHarness::new(80, 24);
    harness.app_mut().dispatch(Action::ShowShortcuts);

    harness.press(KeyCode::Esc);
    assert!(harness.app().state().shortcuts.is_none());
    assert!(harness.app().state().menus()[3].items[1].enabled);
    assert_eq!(harness.app().state().focus, Focus::Editor);

    harness.app_mut().dispatch(Action::ShowShortcuts);
    assert!(harness.app().state().shortcuts.is_some());
}

#[test]
fn test_shortcuts_window_lists_bindings() {
    let mut harness = EditorHarness::new(80, 24);
    harness.app_mut().dispatch(Action::ShowShortcuts);
    harness.render();

    let screen = harness.screen();
    assert!(screen.contains("Shortcuts"));
    assert!(screen.contains("Ctrl+Shift+S"));
    assert!(screen.contains("Zoom In"));
}

#[test]
fn test_focused_shortcuts_window_swallows_typing() {
    let mut harness = EditorHarness::new(80, 24);
    harness.app_mut().dispatch(Action::ShowShortcuts);

    harness.type_text("x");
    assert_eq!(harness.text(), "");

    // Global chords still work
    harness.ctrl('=');
    assert_eq!(font(&harness).size, 14);

    harness.type_text("q");
    assert!(harness.app().state().shortcuts.is_none());
}

#[test]
fn test_click_in_text_moves_focus_but_keeps_window() {
    let mut harness = EditorHarness::new(80, 24);
    harness.app_mut().dispatch(Action::ShowShortcuts);
    harness.render();

    harness.click(2, 2);
    assert_eq!(harness.app().state().focus, Focus::Editor);
    assert!(harness.app().state().shortcuts.is_some());

    harness.type_text("hi");
    assert_eq!(harness.text(), "hi");

    let area = ShortcutsPanel::area(harness.buffer().area);
    harness.click(area.x + 5, area.y + 5);
    assert_eq!(harness.app().state().focus, Focus::Shortcuts);
}

#[test]
fn test_close_button_closes_shortcuts_window() {
    let mut harness = EditorHarness::new(80, 24);
    harness.app_mut().dispatch(Action::ShowShortcuts);
    harness.render();

    let area = ShortcutsPanel::area(harness.buffer().area);
    harness.click(area.x + 3, area.y);
    assert!(harness.app().state().shortcuts.is_none());
}

#[test]
fn test_layout_shows_title_and_status() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("hello");

    assert!(harness.row(0).contains("File"));
    assert!(harness.row(0).contains("View"));
    assert!(harness.row(1).contains("Untitled"));
    assert!(harness.row(2).starts_with("│hello"));
    assert!(harness.row(23).contains("Ln 1, Col 6"));
    assert!(harness.row(23).contains("light"));
}

#[test]
fn test_uppercase_mnemonic_opens_menu() {
    let mut harness = EditorHarness::new(80, 24);
    harness.send_key(KeyCode::Char('E'), KeyModifiers::ALT);
    assert_eq!(harness.app().state().menu.open, Some(1));
}
