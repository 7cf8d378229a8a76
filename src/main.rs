use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use shaun_app::App;
use shaun_config::constants::APP_TITLE;
use shaun_config::Config;
use shaun_theme::set_themes_dir;

fn main() -> Result<()> {
    // User palettes must be known before the first theme lookup
    if let Ok(themes_dir) = Config::get_themes_dir() {
        set_themes_dir(themes_dir);
    }

    // Config warnings go to stderr, so build the app before raw mode
    let mut app = App::new();

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // The kitty keyboard protocol makes Ctrl+Shift+S, Ctrl+Esc, Ctrl+= and
    // Ctrl+- distinguishable from their plain forms
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);

    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(APP_TITLE)
    )?;

    if keyboard_enhanced {
        // REPORT_ALL_KEYS_AS_ESCAPE_CODES would report bare modifier presses
        // and break Shift+navigation, so only disambiguate.
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
            )
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run application
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    if keyboard_enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Print error if there was one
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}
