//! Application orchestrator for shaun-editor.
//!
//! This crate ties the editor together and provides:
//! - `App` - owns the state, turns input into [`Action`]s and runs the loop
//! - `EditorState` - everything the window shows
//! - file reading and atomic saving with typed errors
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      shaun-editor (bin)                          │
//! │  main.rs - entry point, terminal setup, App composition         │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     shaun-app (this crate)                       │
//! │  App, EditorState, action dispatch, dialogs, event loop         │
//! └─────────────────────────────────────────────────────────────────┘
//!        │             │             │             │            │
//!        ▼             ▼             ▼             ▼            ▼
//!  ┌──────────┐ ┌────────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐
//!  │  keymap  │ │panel-editor│ │ shortcuts│ │  modal   │ │ ui-render│
//!  └──────────┘ └────────────┘ └──────────┘ └──────────┘ └──────────┘
//! ```
//!
//! Every menu item and chord resolves to one [`Action`], and every action
//! has exactly one handler in [`App::dispatch`].

pub mod app;
pub mod event;
pub mod file_io;
pub mod state;

pub use app::App;
pub use event::{Event, EventHandler};
pub use file_io::FileError;
pub use state::{EditorState, Focus, MenuState, PendingAction};

pub use shaun_keymap::Action;
