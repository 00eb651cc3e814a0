//! Message types for actor communication.
//!
//! These enums define the protocol between actors in the system.

use crate::buffer::Frame;

/// Key codes for keyboard input.
///
/// This is a simplified subset of crossterm's `KeyCode`, covering what
/// games and viewers built on frames need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Check if any modifier is active.
    pub const fn any(&self) -> bool {
        self.shift || self.control || self.alt
    }
}

/// Events from the input thread.
///
/// These are sent from the input actor to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Focus gained.
    FocusGained,

    /// Focus lost.
    FocusLost,

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

impl InputEvent {
    /// Whether this is one of the conventional quit keys: `q`, Esc or
    /// Ctrl+C.
    pub const fn is_quit(&self) -> bool {
        match self {
            Self::Key { code, modifiers } => matches!(
                (code, modifiers.control),
                (KeyCode::Char('q') | KeyCode::Esc, _) | (KeyCode::Char('c'), true)
            ),
            _ => false,
        }
    }
}

/// Commands sent to the render thread.
#[derive(Debug)]
pub enum RenderCommand {
    /// Show this frame, diffed against the last one shown.
    Frame(Box<Frame>),

    /// Redraw the last frame in full.
    Redraw,

    /// The terminal was resized; the next frame is drawn in full.
    Resize {
        /// New width.
        width: u16,
        /// New height.
        height: u16,
    },

    /// Shutdown the render thread.
    Shutdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, control: bool) -> InputEvent {
        InputEvent::Key {
            code,
            modifiers: KeyModifiers {
                control,
                ..KeyModifiers::NONE
            },
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(key(KeyCode::Char('q'), false).is_quit());
        assert!(key(KeyCode::Esc, false).is_quit());
        assert!(key(KeyCode::Char('c'), true).is_quit());
        assert!(!key(KeyCode::Char('c'), false).is_quit());
        assert!(!key(KeyCode::Up, false).is_quit());
        assert!(!InputEvent::FocusLost.is_quit());
    }

    #[test]
    fn test_modifiers_any() {
        assert!(!KeyModifiers::NONE.any());
        assert!(KeyModifiers { alt: true, ..KeyModifiers::NONE }.any());
    }
}
