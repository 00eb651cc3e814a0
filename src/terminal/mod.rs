//! Terminal I/O facade.
//!
//! Rendering only ever needs two things from a terminal: its size and a
//! place to write bytes. [`Terminal`] captures that, with [`StdTerminal`]
//! for real output and [`VirtualTerminal`] for headless use.

mod output;
mod style;
mod virtual_term;

pub use output::{OutputBuffer, HALF_BLOCK};
pub use style::{text_style, ColorSpec, Modifiers, TextStyle};
pub use virtual_term::VirtualTerminal;

use crossterm::{cursor, execute, terminal};
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};

/// A terminal frames can be rendered to.
pub trait Terminal {
    /// Size as `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Write `bytes` and flush. Rendering calls this once per frame.
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Hide the cursor.
    fn hide_cursor(&mut self) -> io::Result<()> {
        self.write_all(b"\x1b[?25l")
    }

    /// Show the cursor.
    fn show_cursor(&mut self) -> io::Result<()> {
        self.write_all(b"\x1b[?25h")
    }

    /// Drop any color or style left behind by rendering.
    fn reset_style(&mut self) -> io::Result<()> {
        self.write_all(b"\x1b[0m")
    }
}

/// Terminal backed by a writer, normally stdout.
pub struct StdTerminal<W: Write = Stdout> {
    writer: W,
}

impl StdTerminal<Stdout> {
    /// Terminal writing to the process's stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StdTerminal<W> {
    /// Wrap an arbitrary writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a mutable reference to the writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Terminal for StdTerminal<W> {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size().or_else(|err| {
            env_size().map_or(Err(err), |size| {
                log::debug!("terminal size query failed, using COLUMNS/LINES {size:?}");
                Ok(size)
            })
        })
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)?;
        self.writer.flush()
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Hide)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Show)
    }
}

impl<W: Write> std::fmt::Debug for StdTerminal<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdTerminal").finish_non_exhaustive()
    }
}

/// Terminal size from the `COLUMNS` and `LINES` environment variables.
fn env_size() -> Option<(u16, u16)> {
    let read = |name: &str| std::env::var(name).ok()?.trim().parse::<u16>().ok();
    Some((read("COLUMNS")?, read("LINES")?))
}

/// Hides the cursor while alive; shows it again and resets colors on drop.
///
/// Dereferences to the wrapped terminal so rendering can continue through
/// the guard.
pub struct CursorGuard<'a, T: Terminal + ?Sized> {
    terminal: &'a mut T,
}

impl<'a, T: Terminal + ?Sized> CursorGuard<'a, T> {
    /// Hide the cursor of `terminal` until the guard is dropped.
    pub fn new(terminal: &'a mut T) -> io::Result<Self> {
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }
}

impl<T: Terminal + ?Sized> Deref for CursorGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> DerefMut for CursorGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> Drop for CursorGuard<'_, T> {
    fn drop(&mut self) {
        if let Err(err) = self.terminal.show_cursor() {
            log::warn!("failed to show cursor: {err}");
        }
        if let Err(err) = self.terminal.reset_style() {
            log::warn!("failed to reset terminal style: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_terminal_writes_through() {
        let mut term = StdTerminal::new(Vec::new());
        term.write_all(b"abc").unwrap();
        term.hide_cursor().unwrap();
        term.reset_style().unwrap();
        assert_eq!(term.into_inner(), b"abc\x1b[?25l\x1b[0m");
    }

    #[test]
    fn test_cursor_guard_restores() {
        let mut term = StdTerminal::new(Vec::new());
        {
            let mut guard = CursorGuard::new(&mut term).unwrap();
            guard.write_all(b"x").unwrap();
        }
        assert_eq!(term.into_inner(), b"\x1b[?25lx\x1b[?25h\x1b[0m");
    }

    #[test]
    fn test_cursor_guard_on_virtual_terminal() {
        let mut term = VirtualTerminal::new(4, 2);
        {
            let guard = CursorGuard::new(&mut term).unwrap();
            assert!(!guard.cursor_visible());
        }
        assert!(term.cursor_visible());
    }
}
