//! Frame: the pixel buffer every drawing call targets.
//!
//! Pixels are stored row-major as opaque [`Rgb`]. Two vertically adjacent
//! pixel rows map onto one terminal row, so a frame's height and vertical
//! position are always even.

use super::color::{Rgb, Rgba};
use super::diff::{self, RenderStats};
use crate::error::{Error, Result};
use crate::font::Font;
use crate::layout::{adjust_for_anchor, Anchor};
use crate::raster::{self, Canvas, Sprite};
use crate::terminal::{OutputBuffer, Terminal};
use image::{DynamicImage, RgbImage, RgbaImage};
use std::ops::{Index, IndexMut};
use std::path::Path;

/// Gradient direction for [`Frame::fill_with_gradient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Color changes from left to right.
    #[default]
    Horizontal,
    /// Color changes from top to bottom.
    Vertical,
}

/// Optional styling for [`Frame::add_rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectStyle {
    /// Outline thickness in pixels. The outline grows the rectangle outward.
    pub outline_width: u32,
    /// Outline paint.
    pub outline_color: Rgba,
    /// Which point of the outlined rectangle `(x, y)` refers to.
    pub anchor: Anchor,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            outline_width: 0,
            outline_color: Rgba::TRANSPARENT,
            anchor: Anchor::TopLeft,
        }
    }
}

impl RectStyle {
    /// Style with only an anchor set.
    pub fn anchored(anchor: Anchor) -> Self {
        Self {
            anchor,
            ..Self::default()
        }
    }

    /// Add an outline.
    #[must_use]
    pub fn with_outline(mut self, width: u32, color: impl Into<Rgba>) -> Self {
        self.outline_width = width;
        self.outline_color = color.into();
        self
    }
}

/// A `width × height` pixel image placed at `(x, y)` on the terminal.
///
/// Coordinates passed to drawing calls are relative to the frame's top-left
/// pixel. Anything drawn outside the frame is clipped silently.
#[derive(Clone)]
pub struct Frame {
    /// Row-major pixel storage.
    pixels: Vec<Rgb>,
    /// Width in pixels (= terminal columns).
    width: u32,
    /// Height in pixels (= 2 × terminal rows).
    height: u32,
    /// Screen column of the left edge.
    x: u32,
    /// Screen pixel row of the top edge, always even.
    y: u32,
}

impl Frame {
    /// Create a black frame of the given size at the screen origin.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if height % 2 != 0 {
            return Err(Error::OddHeight(height));
        }
        Ok(Self::with_rows(width, height / 2))
    }

    /// Create a black frame covering `width × rows` terminal cells.
    pub fn with_rows(width: u32, rows: u32) -> Self {
        let height = 2 * rows;
        Self {
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
            width,
            height,
            x: 0,
            y: 0,
        }
    }

    /// Start building a frame with a custom size or position.
    pub fn builder() -> FrameBuilder {
        FrameBuilder::default()
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of terminal rows the frame covers.
    #[inline]
    pub const fn terminal_rows(&self) -> u32 {
        self.height / 2
    }

    /// Screen position `(column, pixel row)` of the top-left pixel.
    #[inline]
    pub const fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Move the frame on screen. `y` must be even.
    pub fn set_position(&mut self, x: u32, y: u32) -> Result<()> {
        if y % 2 != 0 {
            return Err(Error::OddPosition(y));
        }
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Whether `other` has the same width and height.
    #[inline]
    pub const fn same_size(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Raw pixel slice, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable raw pixel slice, row-major.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Iterate over pixel rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Pixel row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// Borrow the pixels as a drawing [`Canvas`].
    #[inline]
    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.pixels, self.width, self.height)
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Color of the pixel at `(x, y)`, or `None` outside the frame.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// Returns `false` if the coordinates are outside the frame.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx] = color;
            true
        } else {
            false
        }
    }

    /// Deep copy, position included.
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Paint every pixel with `color`.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Paint a linear gradient from `from` to `to`.
    ///
    /// Each column (horizontal) or row (vertical) gets one color; the first
    /// and last are exactly `from` and `to`, intermediate channels are
    /// truncated.
    pub fn fill_with_gradient(&mut self, from: Rgb, to: Rgb, direction: Direction) {
        if self.pixels.is_empty() {
            return;
        }
        match direction {
            Direction::Horizontal => {
                let ramp = gradient(from, to, self.width);
                for row in self.pixels.chunks_exact_mut(self.width as usize) {
                    row.copy_from_slice(&ramp);
                }
            }
            Direction::Vertical => {
                let ramp = gradient(from, to, self.height);
                for (row, color) in self
                    .pixels
                    .chunks_exact_mut(self.width as usize)
                    .zip(ramp)
                {
                    row.fill(color);
                }
            }
        }
    }

    /// Draw a `width × height` rectangle of `color`.
    ///
    /// An outline of `style.outline_width` pixels is added around the
    /// rectangle, so the painted area is `(width + 2·ow) × (height + 2·ow)`,
    /// starting at `(x - ow, y - ow)` before the anchor is applied to the
    /// outlined size. Translucent paint is alpha-blended.
    pub fn add_rect(
        &mut self,
        color: impl Into<Rgba>,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        style: RectStyle,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyRect { width, height });
        }

        let ow = i64::from(style.outline_width);
        let outer_w = i64::from(width) + 2 * ow;
        let outer_h = i64::from(height) + 2 * ow;
        let (dx, dy) = style.anchor.offset(outer_w as u64, outer_h as u64);
        let left = i64::from(x) - ow - dx;
        let top = i64::from(y) - ow - dy;

        // Only the part of the outlined rectangle that lands on the frame
        let (x0, y0) = (left.max(0), top.max(0));
        let x1 = (left + outer_w).min(i64::from(self.width));
        let y1 = (top + outer_h).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return Ok(());
        }

        let color: Rgba = color.into();
        let paint = image::Rgba::from(color);
        let outline = image::Rgba::from(style.outline_color);
        let inner_x = left + ow..left + ow + i64::from(width);
        let inner_y = top + ow..top + ow + i64::from(height);
        let rect = RgbaImage::from_fn((x1 - x0) as u32, (y1 - y0) as u32, |px, py| {
            let (fx, fy) = (x0 + i64::from(px), y0 + i64::from(py));
            if inner_x.contains(&fx) && inner_y.contains(&fy) {
                paint
            } else {
                outline
            }
        });

        raster::composite(&mut self.canvas(), Sprite::from(&rect), x0 as i32, y0 as i32);
        Ok(())
    }

    /// Draw `text` in `font` with its `anchor` point at `(x, y)`.
    pub fn add_large_text(
        &mut self,
        x: i32,
        y: i32,
        font: &Font,
        text: &str,
        anchor: Anchor,
        color: impl Into<Rgba>,
    ) -> Result<()> {
        let bitmap = font.assemble(text, color)?;
        self.add_image(&bitmap, x, y, anchor);
        Ok(())
    }

    /// Composite an image with its `anchor` point at `(x, y)`.
    ///
    /// [`RgbImage`]s overwrite; [`RgbaImage`]s are alpha-blended.
    pub fn add_image<'a>(&mut self, image: impl Into<Sprite<'a>>, x: i32, y: i32, anchor: Anchor) {
        let sprite = image.into();
        let (left, top) = adjust_for_anchor(x, y, sprite.width(), sprite.height(), anchor);
        raster::composite(&mut self.canvas(), sprite, left, top);
    }

    /// Decode an image file and composite it like [`Frame::add_image`].
    ///
    /// Images with an alpha channel are blended, others overwrite.
    pub fn add_image_from_path(
        &mut self,
        path: impl AsRef<Path>,
        x: i32,
        y: i32,
        anchor: Anchor,
    ) -> Result<()> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?;

        if decoded.color().has_alpha() {
            self.add_image(&decoded.into_rgba8(), x, y, anchor);
        } else {
            let rgb: RgbImage = match decoded {
                DynamicImage::ImageRgb8(img) => img,
                other => other.into_rgb8(),
            };
            self.add_image(&rgb, x, y, anchor);
        }
        Ok(())
    }

    /// Draw an opaque line from `from` to `to`, both `(x, y)`.
    ///
    /// `width` is the stroke radius; 1 is a single-pixel line.
    pub fn add_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb, width: u32) {
        raster::draw_line(&mut self.canvas(), from, to, color, width);
    }

    /// Render this frame to `terminal`, diffing against `previous`.
    ///
    /// Falls back to a full render when there is no previous frame or its
    /// size differs. The whole update goes out in one write; nothing is
    /// written when the frames are identical.
    pub fn render<T: Terminal + ?Sized>(
        &self,
        previous: Option<&Self>,
        terminal: &mut T,
    ) -> Result<RenderStats> {
        let mut output = OutputBuffer::with_capacity(diff::estimate_capacity(self));
        let stats = diff::render(self, previous, &mut output);
        log::trace!("render: {stats:?}");

        if !output.is_empty() {
            terminal.write_all(output.as_bytes())?;
        }
        Ok(stats)
    }
}

/// `n` evenly spaced colors from `from` to `to`, truncated per channel.
fn gradient(from: Rgb, to: Rgb, n: u32) -> Vec<Rgb> {
    let steps = f64::from(n.saturating_sub(1).max(1));
    let lerp = |a: u8, b: u8, i: u32| {
        let (a, b) = (f64::from(a), f64::from(b));
        (a + (b - a) * f64::from(i) / steps) as u8
    };
    (0..n)
        .map(|i| {
            Rgb::new(
                lerp(from.r, to.r, i),
                lerp(from.g, to.g, i),
                lerp(from.b, to.b, i),
            )
        })
        .collect()
}

impl PartialEq for Frame {
    /// Frames are equal when their pixels are; position is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.same_size(other) && self.pixels == other.pixels
    }
}

impl Eq for Frame {}

impl Index<(u32, u32)> for Frame {
    type Output = Rgb;

    /// Pixel at `(row, column)`.
    fn index(&self, (row, col): (u32, u32)) -> &Rgb {
        assert!(col < self.width && row < self.height, "pixel ({row}, {col}) out of bounds");
        &self.pixels[row as usize * self.width as usize + col as usize]
    }
}

impl IndexMut<(u32, u32)> for Frame {
    fn index_mut(&mut self, (row, col): (u32, u32)) -> &mut Rgb {
        assert!(col < self.width && row < self.height, "pixel ({row}, {col}) out of bounds");
        &mut self.pixels[row as usize * self.width as usize + col as usize]
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish_non_exhaustive()
    }
}

/// Builder for frames whose size comes from the terminal.
///
/// ```no_run
/// use halfblock::{Frame, StdTerminal};
///
/// let term = StdTerminal::stdout();
/// // Full terminal width, 20 pixels (10 rows) tall, placed on row 2.
/// let frame = Frame::builder().height(20).position(0, 4).build(&term)?;
/// # Ok::<(), halfblock::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameBuilder {
    width: Option<u32>,
    height: Option<u32>,
    x: u32,
    y: u32,
}

impl FrameBuilder {
    /// Width in pixels. Defaults to the terminal width.
    #[must_use]
    pub const fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Height in pixels. Defaults to twice the terminal height.
    #[must_use]
    pub const fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Width and height in pixels.
    #[must_use]
    pub const fn size(self, width: u32, height: u32) -> Self {
        self.width(width).height(height)
    }

    /// Screen position of the top-left pixel.
    #[must_use]
    pub const fn position(mut self, x: u32, y: u32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Build, querying `terminal` for any dimension left unset.
    pub fn build<T: Terminal + ?Sized>(self, terminal: &T) -> Result<Frame> {
        if self.width.is_some() && self.height.is_some() {
            return self.finish();
        }
        let (cols, rows) = terminal.size()?;
        Self {
            width: self.width.or(Some(u32::from(cols))),
            height: self.height.or(Some(2 * u32::from(rows))),
            ..self
        }
        .finish()
    }

    /// Build without a terminal. Unset dimensions are zero.
    pub fn build_sized(self) -> Result<Frame> {
        self.finish()
    }

    fn finish(self) -> Result<Frame> {
        let mut frame = Frame::new(self.width.unwrap_or(0), self.height.unwrap_or(0))?;
        frame.set_position(self.x, self.y)?;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::VirtualTerminal;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn lit(frame: &Frame, color: Rgb) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if frame.pixel(x, y) == Some(color) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_frame_new() {
        let frame = Frame::new(80, 48).unwrap();
        assert_eq!(frame.width(), 80);
        assert_eq!(frame.height(), 48);
        assert_eq!(frame.terminal_rows(), 24);
        assert_eq!(frame.position(), (0, 0));
        assert!(frame.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_frame_odd_height() {
        assert!(matches!(Frame::new(10, 7), Err(Error::OddHeight(7))));
    }

    #[test]
    fn test_builder_odd_position() {
        let err = Frame::builder().size(4, 4).position(3, 1).build_sized();
        assert!(matches!(err, Err(Error::OddPosition(1))));
        let ok = Frame::builder().size(4, 4).position(3, 2).build_sized().unwrap();
        assert_eq!(ok.position(), (3, 2));
    }

    #[test]
    fn test_builder_uses_terminal_size() {
        let term = VirtualTerminal::new(30, 12);
        let frame = Frame::builder().build(&term).unwrap();
        assert_eq!((frame.width(), frame.height()), (30, 24));

        let frame = Frame::builder().width(7).build(&term).unwrap();
        assert_eq!((frame.width(), frame.height()), (7, 24));
    }

    #[test]
    fn test_pixel_get_set() {
        let mut frame = Frame::new(4, 2).unwrap();
        assert!(frame.set_pixel(3, 1, RED));
        assert!(!frame.set_pixel(4, 1, RED));
        assert_eq!(frame.pixel(3, 1), Some(RED));
        assert_eq!(frame.pixel(0, 2), None);
        // Index is (row, column).
        assert_eq!(frame[(1, 3)], RED);
        frame[(0, 1)] = BLUE;
        assert_eq!(frame.pixel(1, 0), Some(BLUE));
    }

    #[test]
    fn test_copy_is_deep() {
        let mut frame = Frame::builder().size(2, 2).position(5, 6).build_sized().unwrap();
        let copy = frame.copy();
        frame.fill(RED);
        assert_eq!(copy.pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(copy.position(), (5, 6));
        assert_ne!(frame, copy);
    }

    #[test]
    fn test_equality_ignores_position() {
        let a = Frame::new(3, 2).unwrap();
        let b = Frame::builder().size(3, 2).position(9, 4).build_sized().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Frame::new(2, 2).unwrap());
    }

    #[test]
    fn test_rows() {
        let mut frame = Frame::new(3, 2).unwrap();
        frame.set_pixel(1, 1, GREEN);
        let rows: Vec<&[Rgb]> = frame.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[Rgb::BLACK, GREEN, Rgb::BLACK]);
        assert_eq!(frame.row(1), rows[1]);
    }

    #[test]
    fn test_fill() {
        let mut frame = Frame::new(5, 4).unwrap();
        frame.fill(GREEN);
        assert!(frame.pixels().iter().all(|&p| p == GREEN));
    }

    #[test]
    fn test_gradient_horizontal() {
        let mut frame = Frame::new(5, 2).unwrap();
        frame.fill_with_gradient(Rgb::BLACK, Rgb::new(100, 200, 255), Direction::Horizontal);
        assert_eq!(frame.pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(frame.pixel(4, 1), Some(Rgb::new(100, 200, 255)));
        // 255 * 1/4 = 63.75
        assert_eq!(frame.pixel(1, 0), Some(Rgb::new(25, 50, 63)));
        assert_eq!(frame.row(0), frame.row(1));
    }

    #[test]
    fn test_gradient_vertical() {
        let mut frame = Frame::new(3, 4).unwrap();
        frame.fill_with_gradient(RED, BLUE, Direction::Vertical);
        assert!(frame.row(0).iter().all(|&p| p == RED));
        assert!(frame.row(3).iter().all(|&p| p == BLUE));
        // 255 * 1/3 = 85, 255 * 2/3 = 170
        assert_eq!(frame.pixel(2, 1), Some(Rgb::new(170, 0, 85)));
    }

    #[test]
    fn test_gradient_single_column() {
        let mut frame = Frame::new(1, 2).unwrap();
        frame.fill_with_gradient(RED, BLUE, Direction::Horizontal);
        assert_eq!(frame.pixel(0, 0), Some(RED));
    }

    #[test]
    fn test_add_rect_basic() {
        let mut frame = Frame::new(6, 6).unwrap();
        frame.add_rect(RED, 1, 2, 3, 2, RectStyle::default()).unwrap();
        assert_eq!(lit(&frame, RED), vec![(1, 2), (2, 2), (3, 2), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_add_rect_empty() {
        let mut frame = Frame::new(6, 6).unwrap();
        let err = frame.add_rect(RED, 1, 2, 0, 2, RectStyle::default());
        assert!(matches!(err, Err(Error::EmptyRect { width: 0, height: 2 })));
    }

    #[test]
    fn test_add_rect_outline() {
        let mut frame = Frame::new(8, 8).unwrap();
        let style = RectStyle::default().with_outline(1, BLUE);
        frame.add_rect(RED, 2, 2, 2, 2, style).unwrap();

        assert_eq!(lit(&frame, RED), vec![(2, 2), (3, 2), (2, 3), (3, 3)]);
        // Outline ring of a 4x4 box at (1, 1).
        assert_eq!(lit(&frame, BLUE).len(), 12);
        assert_eq!(frame.pixel(1, 1), Some(BLUE));
        assert_eq!(frame.pixel(4, 4), Some(BLUE));
        assert_eq!(frame.pixel(5, 5), Some(Rgb::BLACK));
    }

    #[test]
    fn test_add_rect_default_outline_is_transparent() {
        let mut frame = Frame::new(8, 8).unwrap();
        frame.fill(GREEN);
        let style = RectStyle {
            outline_width: 2,
            ..RectStyle::default()
        };
        frame.add_rect(RED, 3, 3, 2, 2, style).unwrap();
        assert_eq!(lit(&frame, RED).len(), 4);
        assert_eq!(lit(&frame, GREEN).len(), 60);
    }

    #[test]
    fn test_zero_outline_matches_plain_rect() {
        let mut a = Frame::new(10, 10).unwrap();
        let mut b = Frame::new(10, 10).unwrap();
        a.add_rect(RED, 4, 4, 3, 5, RectStyle::anchored(Anchor::Center)).unwrap();
        b.add_rect(RED, 4, 4, 3, 5, RectStyle::anchored(Anchor::Center).with_outline(0, BLUE))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_add_rect_anchor_center() {
        let mut frame = Frame::new(10, 10).unwrap();
        frame.add_rect(RED, 5, 5, 3, 3, RectStyle::anchored(Anchor::Center)).unwrap();
        let lit = lit(&frame, RED);
        assert_eq!(lit.first(), Some(&(4, 4)));
        assert_eq!(lit.last(), Some(&(6, 6)));
    }

    #[test]
    fn test_add_rect_translucent() {
        let mut frame = Frame::new(2, 2).unwrap();
        frame.fill(Rgb::WHITE);
        frame.add_rect(Rgba::new(0, 0, 0, 0), 0, 0, 2, 2, RectStyle::default()).unwrap();
        assert!(frame.pixels().iter().all(|&p| p == Rgb::WHITE));
    }

    #[test]
    fn test_add_rect_clipped() {
        let mut frame = Frame::new(4, 4).unwrap();
        frame.add_rect(RED, -2, -2, 3, 3, RectStyle::default()).unwrap();
        assert_eq!(lit(&frame, RED), vec![(0, 0)]);
        frame.add_rect(RED, 100, 100, 3, 3, RectStyle::default()).unwrap();
        assert_eq!(lit(&frame, RED).len(), 1);
    }

    #[test]
    fn test_add_rect_huge_outline() {
        let mut frame = Frame::new(4, 4).unwrap();
        let style = RectStyle::default().with_outline(1 << 31, Rgb::WHITE);
        frame.add_rect(RED, 1, 1, 2, 2, style).unwrap();
        assert_eq!(lit(&frame, RED), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert_eq!(lit(&frame, Rgb::WHITE).len(), 12);

        let style = RectStyle::default().with_outline(u32::MAX, BLUE);
        frame.add_rect(RED, 0, 0, 2, 2, style).unwrap();
        assert_eq!(lit(&frame, RED), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(lit(&frame, BLUE).len(), 12);
    }

    #[test]
    fn test_add_rect_oversized() {
        let mut frame = Frame::new(4, 4).unwrap();
        frame.add_rect(RED, -50_000, -50_000, 100_000, 100_000, RectStyle::default()).unwrap();
        assert_eq!(lit(&frame, RED).len(), 16);

        let mut frame = Frame::new(4, 4).unwrap();
        let style = RectStyle::anchored(Anchor::Center);
        frame.add_rect(GREEN, 0, 0, u32::MAX, u32::MAX, style).unwrap();
        assert_eq!(lit(&frame, GREEN).len(), 16);
    }

    #[test]
    fn test_add_large_text() {
        let font = Font::builtin();
        let mut frame = Frame::new(20, 10).unwrap();
        frame
            .add_large_text(10, 5, &font, "Hi", Anchor::Center, Rgb::WHITE)
            .unwrap();
        // "Hi" is 7x5; centered on (10, 5) puts the top-left at (7, 3).
        let lit = lit(&frame, Rgb::WHITE);
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&(x, y)| (7..14).contains(&x) && (3..8).contains(&y)));
        // 'H' top-left pixel.
        assert_eq!(frame.pixel(7, 3), Some(Rgb::WHITE));
    }

    #[test]
    fn test_add_large_text_unsupported() {
        let font = Font::builtin();
        let mut frame = Frame::new(20, 10).unwrap();
        let err = frame.add_large_text(0, 0, &font, "\u{1F600}", Anchor::TopLeft, Rgb::WHITE);
        assert!(matches!(err, Err(Error::UnsupportedCharacter { .. })));
    }

    #[test]
    fn test_add_image_anchor() {
        let mut frame = Frame::new(6, 6).unwrap();
        let img = RgbImage::from_pixel(2, 2, image::Rgb([0, 255, 0]));
        frame.add_image(&img, 5, 5, Anchor::BottomRight);
        assert_eq!(lit(&frame, GREEN), vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
    }

    #[test]
    fn test_add_image_from_missing_path() {
        let mut frame = Frame::new(6, 6).unwrap();
        let err = frame.add_image_from_path("/nonexistent/halfblock.png", 0, 0, Anchor::TopLeft);
        assert!(matches!(err, Err(Error::Image { .. })));
    }

    #[test]
    fn test_add_line() {
        let mut frame = Frame::new(5, 4).unwrap();
        frame.add_line((0, 0), (4, 0), RED, 1);
        assert_eq!(lit(&frame, RED).len(), 5);
    }

    #[test]
    fn test_add_line_far_endpoints() {
        let mut frame = Frame::new(4, 4).unwrap();
        frame.add_line((-2_000_000_000, 1), (2_000_000_000, 1), Rgb::WHITE, 1);
        assert_eq!(lit(&frame, Rgb::WHITE), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_add_line_huge_width() {
        let mut frame = Frame::new(4, 4).unwrap();
        frame.add_line((0, 0), (1, 1), Rgb::WHITE, u32::MAX);
        assert_eq!(lit(&frame, Rgb::WHITE).len(), 16);
    }

    #[test]
    fn test_render_writes_once_and_skips_when_unchanged() {
        let mut term = VirtualTerminal::new(4, 2);
        let mut frame = Frame::new(4, 4).unwrap();
        frame.fill(RED);

        let stats = frame.render(None, &mut term).unwrap();
        assert!(stats.bytes > 0);
        assert_eq!(term.writes(), 1);

        let stats = frame.render(Some(&frame.copy()), &mut term).unwrap();
        assert_eq!(stats.bytes, 0);
        assert_eq!(term.writes(), 1);
    }
}
