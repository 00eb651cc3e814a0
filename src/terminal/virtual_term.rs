//! Virtual terminal: a `vt100` screen model behind the [`Terminal`] trait.
//!
//! Used for headless rendering and to check that emitted escape sequences
//! actually reproduce a frame.

use super::{Terminal, HALF_BLOCK};
use crate::buffer::{Frame, Rgb};
use std::io;

/// In-memory terminal of a fixed size.
pub struct VirtualTerminal {
    parser: vt100::Parser,
    cols: u16,
    rows: u16,
    writes: usize,
}

impl VirtualTerminal {
    /// Create a blank terminal of `cols × rows` cells.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            parser: vt100::Parser::new(rows, cols, 0),
            cols,
            rows,
            writes: 0,
        }
    }

    /// Resize the screen, keeping what still fits.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.parser.set_size(rows, cols);
        self.cols = cols;
        self.rows = rows;
    }

    /// Number of `write_all` calls so far.
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// The underlying screen model.
    pub fn screen(&self) -> &vt100::Screen {
        self.parser.screen()
    }

    /// Whether the cursor is currently visible.
    pub fn cursor_visible(&self) -> bool {
        !self.parser.screen().hide_cursor()
    }

    /// `(top, bottom)` pixel colors of the cell at `(col, row)`.
    ///
    /// Returns `None` if the cell is out of range or doesn't hold `▀`.
    pub fn cell_pixels(&self, col: u16, row: u16) -> Option<(Rgb, Rgb)> {
        let cell = self.parser.screen().cell(row, col)?;
        if !cell.contents().starts_with(HALF_BLOCK) {
            return None;
        }
        Some((to_rgb(cell.fgcolor()), to_rgb(cell.bgcolor())))
    }

    /// Read the whole screen back into a frame of `cols × 2·rows` pixels.
    ///
    /// Cells that don't show a half block read as black.
    pub fn snapshot(&self) -> Frame {
        let mut frame = Frame::with_rows(u32::from(self.cols), u32::from(self.rows));

        for row in 0..self.rows {
            for col in 0..self.cols {
                if let Some((top, bottom)) = self.cell_pixels(col, row) {
                    let (x, y) = (u32::from(col), 2 * u32::from(row));
                    frame.set_pixel(x, y, top);
                    frame.set_pixel(x, y + 1, bottom);
                }
            }
        }
        frame
    }
}

impl Terminal for VirtualTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.cols, self.rows))
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.parser.process(bytes);
        self.writes += 1;
        Ok(())
    }
}

impl std::fmt::Debug for VirtualTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualTerminal")
            .field("cols", &self.cols)
            .field("rows", &self.rows)
            .field("writes", &self.writes)
            .finish_non_exhaustive()
    }
}

const fn to_rgb(color: vt100::Color) -> Rgb {
    match color {
        vt100::Color::Rgb(r, g, b) => Rgb::new(r, g, b),
        vt100::Color::Idx(i) => ansi_to_rgb(i),
        vt100::Color::Default => Rgb::BLACK,
    }
}

/// Convert ANSI color index to RGB.
const fn ansi_to_rgb(idx: u8) -> Rgb {
    match idx {
        0 => Rgb::new(0, 0, 0),
        1 => Rgb::new(128, 0, 0),
        2 => Rgb::new(0, 128, 0),
        3 => Rgb::new(128, 128, 0),
        4 => Rgb::new(0, 0, 128),
        5 => Rgb::new(128, 0, 128),
        6 => Rgb::new(0, 128, 128),
        7 => Rgb::new(192, 192, 192),
        8 => Rgb::new(128, 128, 128),
        9 => Rgb::new(255, 0, 0),
        10 => Rgb::new(0, 255, 0),
        11 => Rgb::new(255, 255, 0),
        12 => Rgb::new(0, 0, 255),
        13 => Rgb::new(255, 0, 255),
        14 => Rgb::new(0, 255, 255),
        15 => Rgb::new(255, 255, 255),
        16..=231 => {
            let i = idx - 16;
            Rgb::new(cube_level((i / 36) % 6), cube_level((i / 6) % 6), cube_level(i % 6))
        }
        232..=255 => {
            let v = (idx - 232) * 10 + 8;
            Rgb::new(v, v, v)
        }
    }
}

const fn cube_level(v: u8) -> u8 {
    if v == 0 {
        0
    } else {
        v * 40 + 55
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_screen_snapshot_is_black() {
        let term = VirtualTerminal::new(5, 3);
        let frame = term.snapshot();
        assert_eq!((frame.width(), frame.height()), (5, 6));
        assert!(frame.pixels().iter().all(|&p| p == Rgb::BLACK));
        assert_eq!(term.cell_pixels(0, 0), None);
    }

    #[test]
    fn test_cell_pixels_reads_colors() {
        let mut term = VirtualTerminal::new(4, 2);
        term.write_all("\x1b[2;3H\x1b[38;2;1;2;3m\x1b[48;2;4;5;6m\u{2580}".as_bytes())
            .unwrap();
        assert_eq!(
            term.cell_pixels(2, 1),
            Some((Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)))
        );
        let frame = term.snapshot();
        assert_eq!(frame.pixel(2, 2), Some(Rgb::new(1, 2, 3)));
        assert_eq!(frame.pixel(2, 3), Some(Rgb::new(4, 5, 6)));
        assert_eq!(term.writes(), 1);
    }

    #[test]
    fn test_cursor_visibility() {
        let mut term = VirtualTerminal::new(4, 2);
        assert!(term.cursor_visible());
        term.hide_cursor().unwrap();
        assert!(!term.cursor_visible());
        term.show_cursor().unwrap();
        assert!(term.cursor_visible());
    }

    #[test]
    fn test_indexed_colors() {
        assert_eq!(ansi_to_rgb(196), Rgb::new(255, 0, 0));
        assert_eq!(ansi_to_rgb(232), Rgb::new(8, 8, 8));
    }
}
