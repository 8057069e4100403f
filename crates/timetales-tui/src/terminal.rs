//! Terminal lifecycle management.
//!
//! Raw mode and the alternate screen are restored on normal exit, on
//! error paths, and on panic via the installed hook.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Set up the terminal for the TUI.
///
/// Enables raw mode, enters the alternate screen, and creates the
/// terminal instance. Call [`install_panic_hook`] first so the terminal
/// is restored if a panic unwinds past the event loop.
///
/// # Errors
///
/// Returns an error if raw mode or the alternate screen cannot be
/// enabled.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to its pre-TUI state.
///
/// # Errors
///
/// Returns an error if raw mode or the alternate screen cannot be
/// restored.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}

/// Install a panic hook that restores the terminal before the default
/// hook prints the panic message.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}
