mod common;

use crossterm::event::{KeyCode, KeyModifiers};

use shaun_app::Action;
use shaun_clipboard::MemoryClipboard;

use common::EditorHarness;

#[test]
fn test_undo_restores_state_before_edit() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("ab");

    harness.ctrl('z');
    assert_eq!(harness.text(), "a");

    harness.ctrl('y');
    assert_eq!(harness.text(), "ab");
}

#[test]
fn test_new_edit_clears_redo() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("a");
    harness.ctrl('z');
    harness.type_text("b");

    harness.ctrl('y');
    assert_eq!(harness.text(), "b");
    assert!(!harness.app().state().text_area.can_redo());
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut harness = EditorHarness::new(80, 24);
    harness.ctrl('z');
    harness.ctrl('y');

    assert_eq!(harness.text(), "");
    assert!(harness.app().state().active_modal.is_none());
}

#[test]
fn test_undo_of_selection_replacement() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("hello");
    harness.send_key(KeyCode::Home, KeyModifiers::SHIFT);
    harness.type_text("x");
    assert_eq!(harness.text(), "x");

    harness.ctrl('z');
    assert_eq!(harness.text(), "hello");
}

#[test]
fn test_copy_and_paste() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("hello");
    harness.ctrl('a');
    harness.ctrl('c');
    harness.press(KeyCode::End);
    harness.ctrl('v');

    assert_eq!(harness.text(), "hellohello");
}

#[test]
fn test_cut_removes_and_paste_restores() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("abc");
    harness.send_key(KeyCode::Left, KeyModifiers::SHIFT);
    harness.ctrl('x');
    assert_eq!(harness.text(), "ab");

    harness.press(KeyCode::Home);
    harness.ctrl('v');
    assert_eq!(harness.text(), "cab");
}

#[test]
fn test_copy_without_selection_keeps_clipboard() {
    let mut harness = EditorHarness::with_clipboard(80, 24, MemoryClipboard::with_text("kept"));
    harness.type_text("new ");
    harness.ctrl('c');
    harness.ctrl('x');
    assert_eq!(harness.text(), "new ");

    harness.ctrl('v');
    assert_eq!(harness.text(), "new kept");
}

#[test]
fn test_paste_with_empty_clipboard_is_noop() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("abc");
    harness.ctrl('v');

    assert_eq!(harness.text(), "abc");
    assert!(harness.app().state().text_area.can_undo());
}

#[test]
fn test_paste_replaces_selection() {
    let mut harness = EditorHarness::with_clipboard(80, 24, MemoryClipboard::with_text("XY"));
    harness.type_text("abcd");
    harness.app_mut().state_mut().text_area.select(1..3);
    harness.ctrl('v');

    assert_eq!(harness.text(), "aXYd");
}

#[test]
fn test_delete_action_removes_only_selection() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("abcd");

    // Empty selection: nothing happens
    harness.app_mut().dispatch(Action::Delete);
    assert_eq!(harness.text(), "abcd");

    harness.app_mut().state_mut().text_area.select(0..2);
    harness.app_mut().dispatch(Action::Delete);
    assert_eq!(harness.text(), "cd");
}

#[test]
fn test_del_key_deletes_next_character() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("abc");
    harness.press(KeyCode::Home);
    harness.press(KeyCode::Delete);

    assert_eq!(harness.text(), "bc");
}

#[test]
fn test_select_all() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("one\ntwo");
    harness.ctrl('a');

    assert_eq!(
        harness.app().state().text_area.selected_text().as_deref(),
        Some("one\ntwo")
    );
}
