//! Built-in 3×5 pixel font.
//!
//! Each glyph is five rows of three bits, most significant bit leftmost.

/// Glyph width of the built-in font.
pub const WIDTH: u32 = 3;
/// Glyph height of the built-in font.
pub const HEIGHT: u32 = 5;

#[rustfmt::skip]
pub const GLYPHS: [(char, [u8; 5]); 94] = [
    ('A', [0b010, 0b101, 0b111, 0b101, 0b101]),
    ('B', [0b110, 0b101, 0b110, 0b101, 0b110]),
    ('C', [0b011, 0b100, 0b100, 0b100, 0b011]),
    ('D', [0b110, 0b101, 0b101, 0b101, 0b110]),
    ('E', [0b111, 0b100, 0b110, 0b100, 0b111]),
    ('F', [0b111, 0b100, 0b110, 0b100, 0b100]),
    ('G', [0b011, 0b100, 0b101, 0b101, 0b011]),
    ('H', [0b101, 0b101, 0b111, 0b101, 0b101]),
    ('I', [0b111, 0b010, 0b010, 0b010, 0b111]),
    ('J', [0b001, 0b001, 0b001, 0b101, 0b010]),
    ('K', [0b101, 0b101, 0b110, 0b101, 0b101]),
    ('L', [0b100, 0b100, 0b100, 0b100, 0b111]),
    ('M', [0b101, 0b111, 0b111, 0b101, 0b101]),
    ('N', [0b101, 0b111, 0b111, 0b111, 0b101]),
    ('O', [0b010, 0b101, 0b101, 0b101, 0b010]),
    ('P', [0b110, 0b101, 0b110, 0b100, 0b100]),
    ('Q', [0b010, 0b101, 0b101, 0b111, 0b011]),
    ('R', [0b110, 0b101, 0b110, 0b101, 0b101]),
    ('S', [0b011, 0b100, 0b010, 0b001, 0b110]),
    ('T', [0b111, 0b010, 0b010, 0b010, 0b010]),
    ('U', [0b101, 0b101, 0b101, 0b101, 0b111]),
    ('V', [0b101, 0b101, 0b101, 0b101, 0b010]),
    ('W', [0b101, 0b101, 0b111, 0b111, 0b101]),
    ('X', [0b101, 0b101, 0b010, 0b101, 0b101]),
    ('Y', [0b101, 0b101, 0b010, 0b010, 0b010]),
    ('Z', [0b111, 0b001, 0b010, 0b100, 0b111]),
    ('a', [0b000, 0b110, 0b011, 0b101, 0b111]),
    ('b', [0b100, 0b110, 0b101, 0b101, 0b110]),
    ('c', [0b000, 0b011, 0b100, 0b100, 0b011]),
    ('d', [0b001, 0b011, 0b101, 0b101, 0b011]),
    ('e', [0b000, 0b011, 0b101, 0b110, 0b011]),
    ('f', [0b001, 0b010, 0b111, 0b010, 0b010]),
    ('g', [0b000, 0b011, 0b101, 0b011, 0b110]),
    ('h', [0b100, 0b110, 0b101, 0b101, 0b101]),
    ('i', [0b010, 0b000, 0b010, 0b010, 0b010]),
    ('j', [0b001, 0b000, 0b001, 0b101, 0b010]),
    ('k', [0b100, 0b101, 0b110, 0b110, 0b101]),
    ('l', [0b110, 0b010, 0b010, 0b010, 0b111]),
    ('m', [0b000, 0b111, 0b111, 0b111, 0b101]),
    ('n', [0b000, 0b110, 0b101, 0b101, 0b101]),
    ('o', [0b000, 0b010, 0b101, 0b101, 0b010]),
    ('p', [0b000, 0b110, 0b101, 0b110, 0b100]),
    ('q', [0b000, 0b011, 0b101, 0b011, 0b001]),
    ('r', [0b000, 0b011, 0b100, 0b100, 0b100]),
    ('s', [0b000, 0b011, 0b110, 0b011, 0b110]),
    ('t', [0b010, 0b111, 0b010, 0b010, 0b011]),
    ('u', [0b000, 0b101, 0b101, 0b101, 0b011]),
    ('v', [0b000, 0b101, 0b101, 0b111, 0b010]),
    ('w', [0b000, 0b101, 0b111, 0b111, 0b111]),
    ('x', [0b000, 0b101, 0b010, 0b010, 0b101]),
    ('y', [0b000, 0b101, 0b011, 0b001, 0b110]),
    ('z', [0b000, 0b111, 0b011, 0b110, 0b111]),
    ('~', [0b000, 0b011, 0b110, 0b000, 0b000]),
    ('`', [0b100, 0b010, 0b000, 0b000, 0b000]),
    ('0', [0b111, 0b101, 0b101, 0b101, 0b111]),
    ('1', [0b010, 0b110, 0b010, 0b010, 0b111]),
    ('2', [0b110, 0b001, 0b010, 0b100, 0b111]),
    ('3', [0b110, 0b001, 0b010, 0b001, 0b110]),
    ('4', [0b101, 0b101, 0b111, 0b001, 0b001]),
    ('5', [0b111, 0b100, 0b110, 0b001, 0b110]),
    ('6', [0b011, 0b100, 0b111, 0b101, 0b111]),
    ('7', [0b111, 0b001, 0b010, 0b100, 0b100]),
    ('8', [0b111, 0b101, 0b111, 0b101, 0b111]),
    ('9', [0b111, 0b101, 0b111, 0b001, 0b110]),
    ('-', [0b000, 0b000, 0b111, 0b000, 0b000]),
    ('_', [0b000, 0b000, 0b000, 0b000, 0b111]),
    ('+', [0b000, 0b010, 0b111, 0b010, 0b000]),
    ('=', [0b000, 0b111, 0b000, 0b111, 0b000]),
    ('!', [0b010, 0b010, 0b010, 0b000, 0b010]),
    ('@', [0b010, 0b101, 0b111, 0b100, 0b011]),
    ('#', [0b101, 0b111, 0b101, 0b111, 0b101]),
    ('$', [0b011, 0b110, 0b010, 0b011, 0b110]),
    ('%', [0b101, 0b001, 0b010, 0b100, 0b101]),
    ('^', [0b010, 0b101, 0b000, 0b000, 0b000]),
    ('&', [0b010, 0b101, 0b010, 0b101, 0b011]),
    ('*', [0b101, 0b010, 0b101, 0b000, 0b000]),
    ('(', [0b001, 0b010, 0b010, 0b010, 0b001]),
    (')', [0b100, 0b010, 0b010, 0b010, 0b100]),
    ('[', [0b110, 0b100, 0b100, 0b100, 0b110]),
    ('{', [0b011, 0b010, 0b110, 0b010, 0b011]),
    (']', [0b011, 0b001, 0b001, 0b001, 0b011]),
    ('}', [0b110, 0b010, 0b011, 0b010, 0b110]),
    ('|', [0b010, 0b010, 0b010, 0b010, 0b010]),
    ('\\', [0b100, 0b100, 0b010, 0b001, 0b001]),
    (';', [0b000, 0b010, 0b000, 0b010, 0b100]),
    (':', [0b000, 0b010, 0b000, 0b010, 0b000]),
    ('\'', [0b010, 0b010, 0b000, 0b000, 0b000]),
    ('"', [0b101, 0b101, 0b000, 0b000, 0b000]),
    (',', [0b000, 0b000, 0b000, 0b010, 0b100]),
    ('<', [0b001, 0b010, 0b100, 0b010, 0b001]),
    ('.', [0b000, 0b000, 0b000, 0b000, 0b010]),
    ('>', [0b100, 0b010, 0b001, 0b010, 0b100]),
    ('/', [0b001, 0b001, 0b010, 0b100, 0b100]),
    ('?', [0b110, 0b001, 0b010, 0b000, 0b010]),
];

/// Whether the pixel at `(x, y)` of a glyph bitmap is set.
#[inline]
pub const fn is_set(rows: &[u8; 5], x: u32, y: u32) -> bool {
    rows[y as usize] & (0b100 >> x) != 0
}
