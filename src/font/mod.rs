//! Bitmap font engine.
//!
//! A [`Font`] is parsed from a single sprite sheet laid out as four rows of
//! glyphs (see [`SHEET_LAYOUT`]), every glyph separated by a 1px gutter and no
//! outer border. A sheet of `W × H` pixels therefore needs `W = 26w + 25` and
//! `H = 4h + 3` for glyphs of `w × h`.
//!
//! [`Font::assemble`] turns a string into a colorized RGBA bitmap ready to be
//! composited onto a [`Frame`](crate::Frame).

mod builtin;

use crate::buffer::Rgba;
use crate::error::{Error, Result};
use image::{imageops, RgbaImage};
use std::collections::HashMap;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// Glyph order of a font sheet, one string per sheet row.
pub const SHEET_LAYOUT: [&str; 4] = [
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "~`0123456789-_+=",
    "!@#$%^&*()[{]}|\\;:'\",<.>/?",
];

/// Glyphs per sheet row the dimensions are computed for.
const SHEET_COLUMNS: u32 = 26;
/// Number of sheet rows.
const SHEET_ROWS: u32 = SHEET_LAYOUT.len() as u32;

/// Monospaced bitmap font.
///
/// All glyphs share the same `glyph_width × height`. Space is always
/// supported and renders as a fully transparent glyph.
#[derive(Clone)]
pub struct Font {
    name: String,
    glyph_width: u32,
    glyph_height: u32,
    glyphs: HashMap<char, RgbaImage>,
}

impl Font {
    /// Parse a font from a sprite sheet.
    ///
    /// `name` is only used in error messages and [`Font::name`].
    pub fn from_image(name: impl Into<String>, sheet: &RgbaImage) -> Result<Self> {
        let name = name.into();
        let (width, height) = sheet.dimensions();
        let malformed = |reason: String| Error::FontSheet {
            font: name.clone(),
            reason,
        };

        if height % SHEET_ROWS != SHEET_ROWS - 1 {
            return Err(malformed(format!(
                "height must be 4n+3 pixels, got {height}"
            )));
        }
        if width % SHEET_COLUMNS != SHEET_COLUMNS - 1 {
            return Err(malformed(format!(
                "width must be 26n+25 pixels, got {width}"
            )));
        }

        let glyph_width = (width - (SHEET_COLUMNS - 1)) / SHEET_COLUMNS;
        let glyph_height = (height - (SHEET_ROWS - 1)) / SHEET_ROWS;
        if glyph_width == 0 || glyph_height == 0 {
            return Err(malformed(format!(
                "glyphs would be {glyph_width}x{glyph_height} pixels"
            )));
        }

        let mut glyphs = HashMap::with_capacity(96);
        for (row, symbols) in SHEET_LAYOUT.iter().enumerate() {
            let y = row as u32 * (glyph_height + 1);
            for (col, symbol) in symbols.chars().enumerate() {
                let x = col as u32 * (glyph_width + 1);
                let glyph = imageops::crop_imm(sheet, x, y, glyph_width, glyph_height).to_image();
                glyphs.insert(symbol, glyph);
            }
        }
        glyphs.insert(' ', RgbaImage::new(glyph_width, glyph_height));

        log::debug!("loaded font {name}: {glyph_width}x{glyph_height} glyphs");

        Ok(Self {
            name,
            glyph_width,
            glyph_height,
            glyphs,
        })
    }

    /// Decode a sheet image from disk and parse it with [`Font::from_image`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let sheet = image::open(path)
            .map_err(|source| Error::Image {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgba8();
        Self::from_image(path.display().to_string(), &sheet)
    }

    /// The built-in 3×5 pixel font.
    pub fn builtin() -> Self {
        let (glyph_width, glyph_height) = (builtin::WIDTH, builtin::HEIGHT);
        let mut glyphs: HashMap<char, RgbaImage> = builtin::GLYPHS
            .iter()
            .map(|(symbol, rows)| {
                let glyph = RgbaImage::from_fn(glyph_width, glyph_height, |x, y| {
                    if builtin::is_set(rows, x, y) {
                        image::Rgba([255, 255, 255, 255])
                    } else {
                        image::Rgba([0, 0, 0, 0])
                    }
                });
                (*symbol, glyph)
            })
            .collect();
        glyphs.insert(' ', RgbaImage::new(glyph_width, glyph_height));

        Self {
            name: "builtin".to_string(),
            glyph_width,
            glyph_height,
            glyphs,
        }
    }

    /// Render the built-in font as a sprite sheet in the layout
    /// [`Font::from_image`] expects.
    pub fn builtin_sheet() -> RgbaImage {
        let font = Self::builtin();
        let width = SHEET_COLUMNS * font.glyph_width + SHEET_COLUMNS - 1;
        let height = SHEET_ROWS * font.glyph_height + SHEET_ROWS - 1;
        let mut sheet = RgbaImage::new(width, height);

        for (row, symbols) in SHEET_LAYOUT.iter().enumerate() {
            let y = i64::from(row as u32 * (font.glyph_height + 1));
            for (col, symbol) in symbols.chars().enumerate() {
                let x = i64::from(col as u32 * (font.glyph_width + 1));
                if let Some(glyph) = font.glyph(symbol) {
                    imageops::replace(&mut sheet, glyph, x, y);
                }
            }
        }
        sheet
    }

    /// Font name: the sheet path for fonts loaded with [`Font::open`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width of every glyph in pixels.
    pub const fn glyph_width(&self) -> u32 {
        self.glyph_width
    }

    /// Height of every glyph, and of assembled text, in pixels.
    pub const fn height(&self) -> u32 {
        self.glyph_height
    }

    /// Glyph bitmap for `c`, if the font has one.
    pub fn glyph(&self, c: char) -> Option<&RgbaImage> {
        self.glyphs.get(&c)
    }

    /// Whether every character of `text` can be rendered.
    pub fn supports(&self, text: &str) -> bool {
        text.chars().all(|c| self.glyphs.contains_key(&c))
    }

    /// Pixel width of `chars` glyphs assembled with the default 1px spacing.
    ///
    /// Saturates at `u32::MAX`.
    pub const fn width_of(&self, chars: usize) -> u32 {
        if chars == 0 {
            return 0;
        }
        let n = if chars > u32::MAX as usize { u32::MAX } else { chars as u32 };
        n.saturating_mul(self.glyph_width).saturating_add(n - 1)
    }

    /// Assemble `text` into a bitmap with 1px spacing between glyphs.
    ///
    /// See [`Font::assemble_with_spacing`].
    pub fn assemble(&self, text: &str, color: impl Into<Rgba>) -> Result<RgbaImage> {
        self.assemble_with_spacing(text, color, 1)
    }

    /// Assemble `text` into a bitmap of `height()` rows.
    ///
    /// Glyphs are laid out left to right with `spacing` transparent columns
    /// between them (none after the last). Every pixel with nonzero alpha is
    /// then recolored to `color`; an opaque [`Rgb`](crate::Rgb) color gives
    /// alpha 255, an [`Rgba`] color keeps its own alpha.
    ///
    /// Fails with [`Error::UnsupportedCharacter`] on the first grapheme that
    /// isn't a single character present in the font.
    pub fn assemble_with_spacing(
        &self,
        text: &str,
        color: impl Into<Rgba>,
        spacing: u32,
    ) -> Result<RgbaImage> {
        let glyphs = text
            .graphemes(true)
            .map(|grapheme| {
                let mut chars = grapheme.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.glyph(c),
                    _ => None,
                }
                .ok_or_else(|| Error::UnsupportedCharacter {
                    character: grapheme.to_string(),
                    font: self.name.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let n = glyphs.len() as u64;
        let width = if n == 0 {
            0
        } else {
            n * u64::from(self.glyph_width) + (n - 1) * u64::from(spacing)
        };
        let width = u32::try_from(width).map_err(|_| Error::TextTooWide { width })?;
        let mut bitmap = RgbaImage::new(width, self.glyph_height);

        let advance = i64::from(self.glyph_width) + i64::from(spacing);
        for (i, glyph) in glyphs.into_iter().enumerate() {
            imageops::replace(&mut bitmap, glyph, i as i64 * advance, 0);
        }

        let color: Rgba = color.into();
        let paint = image::Rgba::from(color);
        for pixel in bitmap.pixels_mut() {
            if pixel[3] != 0 {
                *pixel = paint;
            }
        }
        Ok(bitmap)
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name)
            .field("glyph_width", &self.glyph_width)
            .field("glyph_height", &self.glyph_height)
            .field("glyphs", &self.glyphs.len())
            .finish()
    }
}
