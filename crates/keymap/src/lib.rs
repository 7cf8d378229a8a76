//! Editor actions and their keyboard bindings.
//!
//! Every menu item and global chord resolves to one [`Action`]; the app
//! runs one handler per action. [`SHORTCUTS`] is the read-only table shown
//! in the shortcuts panel and next to menu items.
//!
//! ```text
//! KeyEvent → Keymap → Option<Action> → EditorShell::dispatch
//! ```

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Actions
// ============================================================================

/// User-level operations of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === File ===
    Open,
    Save,
    SaveAs,
    Exit,

    // === Edit ===
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Delete,
    SelectAll,

    // === Format ===
    ZoomIn,
    ZoomOut,

    // === View ===
    ToggleTheme,
    ShowShortcuts,
}

impl Action {
    /// Fixed menu label. The theme toggle label depends on the current mode
    /// and is supplied by the menu builder instead.
    pub fn label(self) -> &'static str {
        match self {
            Action::Open => "Open",
            Action::Save => "Save",
            Action::SaveAs => "Save As",
            Action::Exit => "Exit",
            Action::Undo => "Undo",
            Action::Redo => "Redo",
            Action::Cut => "Cut",
            Action::Copy => "Copy",
            Action::Paste => "Paste",
            Action::Delete => "Delete",
            Action::SelectAll => "Select All",
            Action::ZoomIn => "Zoom In",
            Action::ZoomOut => "Zoom Out",
            Action::ToggleTheme => "Toggle Theme",
            Action::ShowShortcuts => "Shortcuts",
        }
    }

    /// Display chord of the action, if it has one
    pub fn chord(self) -> Option<&'static str> {
        SHORTCUTS
            .iter()
            .find(|binding| binding.action == self)
            .map(|binding| binding.chord)
    }
}

// ============================================================================
// Shortcut table
// ============================================================================

/// One row of the shortcut reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutBinding {
    pub action: Action,
    /// Chord as displayed, e.g. "Ctrl+Shift+S"
    pub chord: &'static str,
    pub label: &'static str,
}

const fn shortcut(action: Action, label: &'static str, chord: &'static str) -> ShortcutBinding {
    ShortcutBinding {
        action,
        chord,
        label,
    }
}

/// Shortcut reference, in display order.
pub static SHORTCUTS: [ShortcutBinding; 13] = [
    shortcut(Action::Open, "Open", "Ctrl+O"),
    shortcut(Action::Save, "Save", "Ctrl+S"),
    shortcut(Action::SaveAs, "Save As", "Ctrl+Shift+S"),
    shortcut(Action::Exit, "Exit", "Ctrl+Esc"),
    shortcut(Action::Undo, "Undo", "Ctrl+Z"),
    shortcut(Action::Redo, "Redo", "Ctrl+Y"),
    shortcut(Action::Cut, "Cut", "Ctrl+X"),
    shortcut(Action::Copy, "Copy", "Ctrl+C"),
    shortcut(Action::Paste, "Paste", "Ctrl+V"),
    shortcut(Action::Delete, "Delete", "Del"),
    shortcut(Action::SelectAll, "Select All", "Ctrl+A"),
    shortcut(Action::ZoomIn, "Zoom In", "Ctrl+="),
    shortcut(Action::ZoomOut, "Zoom Out", "Ctrl+-"),
];

// ============================================================================
// Key bindings
// ============================================================================

/// A key binding specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// The key code (e.g., Char('s'), Esc)
    pub code: KeyCode,
    /// Exact modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }.normalize()
    }

    /// Create a Ctrl+key binding.
    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Create a Ctrl+Shift+key binding.
    pub fn ctrl_shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL | KeyModifiers::SHIFT)
    }

    /// Bring a chord into the form used as map key.
    ///
    /// Terminals report Ctrl+Shift+S either as `S` or as `s` with SHIFT;
    /// both become `s` + SHIFT. Letter case is ignored otherwise.
    fn normalize(mut self) -> Self {
        if let KeyCode::Char(ch) = self.code {
            if ch.is_uppercase() {
                self.code = KeyCode::Char(ch.to_lowercase().next().unwrap_or(ch));
                self.modifiers |= KeyModifiers::SHIFT;
            }
        }
        self.modifiers &= KeyModifiers::CONTROL | KeyModifiers::SHIFT | KeyModifiers::ALT;
        self
    }
}

impl From<KeyEvent> for KeyBinding {
    fn from(event: KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// Chord to action map for global shortcuts.
///
/// Lookups are exact: Ctrl+S does not fire for Ctrl+Shift+S.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl Keymap {
    /// Create a keymap with the default bindings.
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        // File
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('o')), Action::Open);
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('s')), Action::Save);
        bindings.insert(KeyBinding::ctrl_shift(KeyCode::Char('s')), Action::SaveAs);
        bindings.insert(KeyBinding::ctrl(KeyCode::Esc), Action::Exit);

        // Edit
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('z')), Action::Undo);
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('y')), Action::Redo);
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('x')), Action::Cut);
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Copy);
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('v')), Action::Paste);
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('a')), Action::SelectAll);

        // Format
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('=')), Action::ZoomIn);
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('-')), Action::ZoomOut);

        Self { bindings }
    }

    /// Action bound to a key event, if any.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from(*key)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_file_chords() {
        let keymap = Keymap::new();
        assert_eq!(keymap.action_for(&ctrl('o')), Some(Action::Open));
        assert_eq!(keymap.action_for(&ctrl('s')), Some(Action::Save));
        assert_eq!(
            keymap.action_for(&KeyEvent::new(KeyCode::Esc, KeyModifiers::CONTROL)),
            Some(Action::Exit)
        );
    }

    #[test]
    fn test_save_as_reported_either_way() {
        let keymap = Keymap::new();
        let upper = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL);
        let upper_shift = KeyEvent::new(
            KeyCode::Char('S'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        let lower_shift = KeyEvent::new(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(keymap.action_for(&upper), Some(Action::SaveAs));
        assert_eq!(keymap.action_for(&upper_shift), Some(Action::SaveAs));
        assert_eq!(keymap.action_for(&lower_shift), Some(Action::SaveAs));
    }

    #[test]
    fn test_lookup_is_exact() {
        let keymap = Keymap::new();
        // Plain Esc and plain letters are not shortcuts
        assert_eq!(
            keymap.action_for(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            keymap.action_for(&KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
        // Extra Alt does not match Ctrl+Z
        assert_eq!(
            keymap.action_for(&KeyEvent::new(
                KeyCode::Char('z'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            )),
            None
        );
    }

    #[test]
    fn test_zoom_and_edit_chords() {
        let keymap = Keymap::new();
        assert_eq!(keymap.action_for(&ctrl('=')), Some(Action::ZoomIn));
        assert_eq!(keymap.action_for(&ctrl('-')), Some(Action::ZoomOut));
        assert_eq!(keymap.action_for(&ctrl('z')), Some(Action::Undo));
        assert_eq!(keymap.action_for(&ctrl('y')), Some(Action::Redo));
        assert_eq!(keymap.action_for(&ctrl('a')), Some(Action::SelectAll));
    }

    #[test]
    fn test_del_key_is_left_to_the_text_area() {
        let keymap = Keymap::new();
        let del = KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(keymap.action_for(&del), None);
    }

    #[test]
    fn test_shortcut_table() {
        assert_eq!(SHORTCUTS.len(), 13);
        assert_eq!(SHORTCUTS[0].chord, "Ctrl+O");
        assert_eq!(Action::SaveAs.chord(), Some("Ctrl+Shift+S"));
        assert_eq!(Action::Delete.chord(), Some("Del"));
        assert_eq!(Action::ShowShortcuts.chord(), None);
        for binding in SHORTCUTS.iter() {
            assert_eq!(binding.label, binding.action.label());
        }
    }
}
