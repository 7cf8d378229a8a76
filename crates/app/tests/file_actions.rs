mod common;

use std::fs;

use crossterm::event::{KeyCode, KeyModifiers};
use tempfile::TempDir;

use common::EditorHarness;

#[test]
fn test_type_then_save_writes_typed_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hello.txt");
    let mut harness = EditorHarness::new(80, 24);

    harness.type_text("hello");
    harness.type_text(" world");
    harness.ctrl('s');

    // No current file yet: Save shows the Save As prompt
    assert_eq!(harness.prompt_title().as_deref(), Some("Save As"));
    harness.answer_prompt(&path);

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
    assert_eq!(harness.app().state().current_file.as_deref(), Some(path.as_path()));
    assert!(harness.app().state().active_modal.is_none());
}

#[test]
fn test_save_with_current_file_skips_dialog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    let mut harness = EditorHarness::new(80, 24);

    harness.type_text("first");
    harness.app_mut().save_file_as(&path);
    harness.type_text(" second");
    harness.ctrl('s');

    assert!(harness.app().state().active_modal.is_none());
    assert_eq!(fs::read_to_string(&path).unwrap(), "first second");
    assert!(harness.row(23).contains("Saved notes.txt"));
}

#[test]
fn test_fresh_save_and_save_as_show_same_dialog() {
    let mut save = EditorHarness::new(80, 24);
    save.ctrl('s');

    let mut save_as = EditorHarness::new(80, 24);
    save_as.send_key(
        KeyCode::Char('s'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    );

    assert!(save.prompt_title().is_some());
    assert_eq!(save.prompt_title(), save_as.prompt_title());
    assert_eq!(save.prompt_value(), save_as.prompt_value());
}

#[test]
fn test_open_then_save_is_identity() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.txt");
    let original = "line one\r\nline two\n\ttabbed\r\n";
    fs::write(&path, original).unwrap();
    let mut harness = EditorHarness::new(80, 24);

    harness.ctrl('o');
    assert_eq!(harness.prompt_title().as_deref(), Some("Open"));
    harness.answer_prompt(&path);
    assert_eq!(harness.text(), original);

    harness.ctrl('s');
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_open_replaces_text_and_is_undoable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");
    fs::write(&path, "from disk").unwrap();
    let mut harness = EditorHarness::new(80, 24);

    harness.type_text("draft");
    harness.app_mut().open_file(&path).unwrap();
    assert_eq!(harness.text(), "from disk");
    assert_eq!(harness.app().state().text_area.caret(), 0);

    harness.ctrl('z');
    assert_eq!(harness.text(), "draft");
}

#[test]
fn test_open_prompt_starts_in_current_file_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");
    fs::write(&path, "x").unwrap();
    let mut harness = EditorHarness::new(80, 24);
    harness.app_mut().open_file(&path).unwrap();

    harness.ctrl('o');
    let value = harness.prompt_value().unwrap();
    assert!(value.starts_with(&dir.path().display().to_string()));
    assert!(!value.ends_with("doc.txt"));

    harness.press(KeyCode::Esc);
    harness.send_key(
        KeyCode::Char('s'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    );
    assert_eq!(harness.prompt_value(), Some(path.display().to_string()));
}

#[test]
fn test_open_missing_file_shows_notice_and_keeps_state() {
    let dir = TempDir::new().unwrap();
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("keep me");

    harness.ctrl('o');
    harness.answer_prompt(&dir.path().join("missing.txt"));

    assert_eq!(harness.notice().as_deref(), Some("Error opening file"));
    assert_eq!(harness.text(), "keep me");
    assert!(harness.app().state().current_file.is_none());

    harness.press(KeyCode::Enter);
    assert!(harness.app().state().active_modal.is_none());
}

#[test]
fn test_open_directory_shows_notice() {
    let dir = TempDir::new().unwrap();
    let mut harness = EditorHarness::new(80, 24);

    harness.app_mut().open_file(dir.path()).unwrap();
    assert_eq!(harness.notice().as_deref(), Some("Error opening file"));
}

#[test]
fn test_failed_save_as_keeps_current_file() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.txt");
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("text");
    harness.app_mut().save_file_as(&good);

    harness.app_mut().save_file_as(dir.path().join("no-dir").join("bad.txt"));

    assert_eq!(harness.notice().as_deref(), Some("Error saving file"));
    assert_eq!(harness.app().state().current_file.as_deref(), Some(good.as_path()));
}

#[test]
fn test_cancelled_dialogs_change_nothing() {
    let mut harness = EditorHarness::new(80, 24);
    harness.type_text("abc");

    harness.ctrl('o');
    harness.press(KeyCode::Esc);
    harness.send_key(
        KeyCode::Char('s'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    );
    harness.press(KeyCode::Esc);

    assert!(harness.app().state().active_modal.is_none());
    assert!(harness.app().state().current_file.is_none());
    assert_eq!(harness.text(), "abc");
}

#[test]
fn test_exit_chord_quits() {
    let mut harness = EditorHarness::new(80, 24);
    harness.send_key(KeyCode::Esc, KeyModifiers::CONTROL);
    assert!(harness.app().should_quit());
}

#[cfg(unix)]
#[test]
fn test_save_through_symlink_updates_link_target() {
    let dir = TempDir::new().unwrap();
    let real = dir.path().join("real.txt");
    let link = dir.path().join("link.txt");
    fs::write(&real, "hello").unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();
    let mut harness = EditorHarness::new(80, 24);

    harness.app_mut().open_file(&link).unwrap();
    harness.type_text("X");
    harness.ctrl('s');

    assert_eq!(fs::read_to_string(&real).unwrap(), "Xhello");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
}

#[cfg(unix)]
#[test]
fn test_save_keeps_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.sh");
    fs::write(&path, "echo hi\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    let mut harness = EditorHarness::new(80, 24);

    harness.app_mut().open_file(&path).unwrap();
    harness.type_text("#");
    harness.ctrl('s');

    assert_eq!(fs::read_to_string(&path).unwrap(), "#echo hi\n");
    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o755);
}
