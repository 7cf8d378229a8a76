//! Clipboard operations for shaun-editor.
//!
//! Provides cross-platform clipboard access using arboard behind the
//! `ClipboardProvider` trait, plus an in-memory provider used when no
//! system clipboard is reachable (headless sessions, tests).
//! On Linux, copies go to both CLIPBOARD and PRIMARY selections.

use anyhow::{anyhow, Result};
use arboard::Clipboard;

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};

/// Source and sink for clipboard text
pub trait ClipboardProvider {
    /// Put text on the clipboard
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Read text from the clipboard.
    /// Returns None if the clipboard holds no text or is inaccessible.
    fn get_text(&mut self) -> Option<String>;
}

/// System clipboard backed by arboard
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    /// Connect to the system clipboard
    pub fn new() -> Result<Self> {
        let inner = Clipboard::new().map_err(|e| anyhow!("Failed to initialize clipboard: {}", e))?;
        Ok(Self { inner })
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        #[cfg(target_os = "linux")]
        {
            // CLIPBOARD selection (Ctrl+C/V)
            self.inner
                .set()
                .clipboard(LinuxClipboardKind::Clipboard)
                .text(text.to_string())
                .map_err(|e| anyhow!("Failed to set clipboard text: {}", e))?;

            // PRIMARY selection (middle-click)
            let _ = self
                .inner
                .set()
                .clipboard(LinuxClipboardKind::Primary)
                .text(text.to_string());
        }

        #[cfg(not(target_os = "linux"))]
        {
            self.inner
                .set_text(text)
                .map_err(|e| anyhow!("Failed to set clipboard text: {}", e))?;
        }

        Ok(())
    }

    fn get_text(&mut self) -> Option<String> {
        #[cfg(target_os = "linux")]
        {
            // Try CLIPBOARD selection first, then PRIMARY
            if let Ok(text) = self
                .inner
                .get()
                .clipboard(LinuxClipboardKind::Clipboard)
                .text()
            {
                if !text.is_empty() {
                    return Some(text);
                }
            }

            self.inner
                .get()
                .clipboard(LinuxClipboardKind::Primary)
                .text()
                .ok()
                .filter(|t| !t.is_empty())
        }

        #[cfg(not(target_os = "linux"))]
        self.inner.get_text().ok().filter(|t| !t.is_empty())
    }
}

/// Process-local clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard already holding `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }

    fn get_text(&mut self) -> Option<String> {
        self.text.clone().filter(|t| !t.is_empty())
    }
}

/// Connect to the system clipboard, falling back to an in-memory one.
///
/// The error explains why the system clipboard was not used.
pub fn system_or_memory() -> (Box<dyn ClipboardProvider>, Option<anyhow::Error>) {
    match SystemClipboard::new() {
        Ok(clipboard) => (Box::new(clipboard), None),
        Err(e) => (Box::new(MemoryClipboard::new()), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_starts_empty() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.get_text(), None);
    }

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.set_text("hello").unwrap();
        assert_eq!(clipboard.get_text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_empty_text_reads_as_none() {
        let mut clipboard = MemoryClipboard::with_text("");
        assert_eq!(clipboard.get_text(), None);
    }
}
