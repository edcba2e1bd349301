//! Terminal setup and teardown.
//!
//! `TerminalGuard` owns raw mode, the alternate screen and mouse capture for
//! as long as it lives. Restoring is best-effort: every step runs even if an
//! earlier one fails, whether the guard is dropped normally, during an
//! early `?` return, or from the panic hook.

use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::warn;
use std::io::{self, Write};

pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enable raw mode, switch to the alternate screen and capture the mouse.
    ///
    /// If any step after raw mode fails, the guard is dropped on the way out
    /// and undoes what was already done.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _private: () };

        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Put the terminal back the way the shell expects it.
pub fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!("failed to disable raw mode: {}", e);
    }
    for e in restore_screen(&mut io::stdout()) {
        warn!("failed to restore terminal: {}", e);
    }
}

/// Release the mouse, leave the alternate screen and show the cursor.
/// Every step is attempted; the failures are returned.
pub fn restore_screen<W: Write>(out: &mut W) -> Vec<io::Error> {
    let steps = [
        out.execute(DisableMouseCapture).err(),
        out.execute(LeaveAlternateScreen).err(),
        out.execute(Show).err(),
    ];
    steps.into_iter().flatten().collect()
}

/// Restore the terminal before the default panic message is printed, so the
/// message lands on the normal screen.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        default_hook(info);
    }));
}
