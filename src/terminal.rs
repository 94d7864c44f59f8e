//! Cursor visibility handling around a paced run.

use std::io;

use crossterm::cursor;
use crossterm::execute;
use crossterm::style::ResetColor;

/// Hides the cursor on creation and restores it on drop.
///
/// Dropping on every exit path keeps the terminal usable when a run is
/// cut short by an error or an interrupt. Escape sequences are only
/// emitted when stdout is a terminal, so redirected output stays clean.
pub struct CursorGuard {
    hidden: bool,
}

impl CursorGuard {
    /// Hide the cursor, resetting any stray text attributes first.
    pub fn hide() -> Self {
        if !atty::is(atty::Stream::Stdout) {
            return Self::noop();
        }
        let hidden = execute!(io::stdout(), ResetColor, cursor::Hide).is_ok();
        Self { hidden }
    }

    /// Guard that never touches the terminal.
    pub fn noop() -> Self {
        Self { hidden: false }
    }

    /// Restore the cursor now instead of waiting for drop.
    pub fn restore(&mut self) {
        if self.hidden {
            let _ = execute!(io::stdout(), ResetColor, cursor::Show);
            self.hidden = false;
        }
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
