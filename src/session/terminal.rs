//! Scoped ownership of the terminal.
//!
//! [`TerminalGuard`] holds raw mode, the alternate screen and the hidden cursor
//! for as long as it lives. Dropping it, or panicking while it is alive, puts the
//! terminal back the way the shell expects it.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    /// Take over the terminal
    pub fn acquire() -> io::Result<Self> {
        install_panic_hook();
        enter()?;
        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = restore();
                return Err(e);
            }
        };
        log::debug!("Terminal acquired");
        Ok(TerminalGuard { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Hand the terminal to `f` (a child process) and take it back afterwards.
    /// The screen is cleared so the next draw repaints everything.
    pub fn suspend<T>(&mut self, f: impl FnOnce() -> T) -> io::Result<T> {
        restore()?;
        let output = f();
        enter()?;
        self.terminal.clear()?;
        Ok(output)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            log::warn!("Failed to restore terminal: {e}");
        }
        log::debug!("Terminal restored");
    }
}

fn enter() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Restore the terminal before the default hook prints the panic message
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let original = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore();
            original(info);
        }));
    });
}
