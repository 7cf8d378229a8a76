//! Application-wide constants.

/// Window title
pub const APP_TITLE: &str = "Shaun Text Editor";

/// Event polling interval in milliseconds
pub const EVENT_HANDLER_INTERVAL_MS: u64 = 250;

/// Log file name inside the cache directory
pub const LOG_FILE_NAME: &str = "shaun-editor.log";

/// Fixed size of the shortcuts window (columns, rows)
pub const SHORTCUTS_PANEL_WIDTH: u16 = 36;
pub const SHORTCUTS_PANEL_HEIGHT: u16 = 17;

/// Spacing between dialog buttons
pub const MODAL_BUTTON_SPACING: u16 = 4;
