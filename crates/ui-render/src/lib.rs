//! UI rendering components for shaun-editor.
//!
//! The menu model, the menu bar with its dropdowns and the status bar.

pub mod dropdown;
pub mod menu;
pub mod status_bar;

pub use dropdown::Dropdown;
pub use menu::{build_menus, menu_at, render_menu_bar, Menu, MenuContext, MenuItem};
pub use status_bar::{StatusBar, StatusBarParams, StatusMessage};
