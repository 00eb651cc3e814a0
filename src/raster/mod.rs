//! Raster module: the pixel-level primitives frames are drawn with.
//!
//! - [`Canvas`]: a mutable view over a frame's pixel array
//! - [`Sprite`]: an opaque or translucent source image
//! - [`blend`]: alpha compositing of a sprite onto a canvas region
//! - [`draw_line`]: thick, clipped Bresenham lines

mod blend;
mod line;

pub use blend::{blend, composite};
pub use line::{draw_line, line_path, LinePath};

use crate::buffer::Rgb;
use crate::layout::Rect;
use image::{RgbImage, RgbaImage};

/// Mutable view over a row-major pixel array.
///
/// This is what drawing primitives operate on; a [`Frame`](crate::Frame)
/// lends one out for the duration of a drawing call.
pub struct Canvas<'a> {
    pixels: &'a mut [Rgb],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Wrap a pixel slice of `width × height` pixels.
    ///
    /// # Panics
    /// Panics if the slice length doesn't match the dimensions.
    pub fn new(pixels: &'a mut [Rgb], width: u32, height: u32) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "canvas dimensions must match the pixel slice"
        );
        Self { pixels, width, height }
    }

    /// Canvas width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Bounds as a rectangle at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Mutable slice of `len` pixels starting at `(x, y)`.
    #[inline]
    fn span_mut(&mut self, x: u32, y: u32, len: u32) -> &mut [Rgb] {
        let start = y as usize * self.width as usize + x as usize;
        &mut self.pixels[start..start + len as usize]
    }

    /// Overwrite every pixel.
    #[inline]
    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Overwrite a single pixel. Out-of-bounds writes are ignored.
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height) {
            let idx = y as usize * self.width as usize + x as usize;
            self.pixels[idx] = color;
        }
    }
}

/// Source image for compositing.
///
/// Opaque sprites overwrite the destination; translucent sprites are
/// alpha-blended onto it.
#[derive(Clone, Copy)]
pub enum Sprite<'a> {
    /// RGB image, treated as fully opaque.
    Opaque(&'a RgbImage),
    /// RGBA image, blended by its alpha channel.
    Translucent(&'a RgbaImage),
}

impl Sprite<'_> {
    /// Sprite width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            Self::Opaque(img) => img.width(),
            Self::Translucent(img) => img.width(),
        }
    }

    /// Sprite height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            Self::Opaque(img) => img.height(),
            Self::Translucent(img) => img.height(),
        }
    }
}

impl<'a> From<&'a RgbImage> for Sprite<'a> {
    fn from(img: &'a RgbImage) -> Self {
        Self::Opaque(img)
    }
}

impl<'a> From<&'a RgbaImage> for Sprite<'a> {
    fn from(img: &'a RgbaImage) -> Self {
        Self::Translucent(img)
    }
}
