//! Blending engine: composite a [`Sprite`] onto a [`Canvas`] in place.

use super::{Canvas, Sprite};
use crate::buffer::Rgb;
use crate::layout::Rect;

/// Blend `sprite` into `region` of the canvas.
///
/// The sprite is read starting at `origin` (its own coordinates) and laid
/// over the region top-left first. Anything beyond either the region, the
/// canvas or the sprite is discarded; an empty overlap is a no-op.
///
/// Opaque sprites overwrite. Translucent sprites compute
/// `src * a + dst * (1 - a)` with `a = alpha / 255` in floating point,
/// truncated back to 8 bits.
pub fn blend(canvas: &mut Canvas<'_>, region: Rect, sprite: Sprite<'_>, origin: (u32, u32)) {
    let Some(region) = region.intersection(&canvas.bounds()) else {
        return;
    };

    let (ox, oy) = origin;
    let width = region.width.min(sprite.width().saturating_sub(ox));
    let height = region.height.min(sprite.height().saturating_sub(oy));
    if width == 0 || height == 0 {
        return;
    }

    // Region was clipped to the canvas, so its origin is non-negative.
    let (dx, dy) = (region.x as u32, region.y as u32);

    match sprite {
        Sprite::Opaque(img) => {
            let stride = img.width() as usize * 3;
            let raw = img.as_raw();
            for row in 0..height {
                let start = (oy + row) as usize * stride + ox as usize * 3;
                let src = &raw[start..start + width as usize * 3];
                let dst = canvas.span_mut(dx, dy + row, width);
                for (d, s) in dst.iter_mut().zip(src.chunks_exact(3)) {
                    *d = Rgb::new(s[0], s[1], s[2]);
                }
            }
        }
        Sprite::Translucent(img) => {
            let stride = img.width() as usize * 4;
            let raw = img.as_raw();
            for row in 0..height {
                let start = (oy + row) as usize * stride + ox as usize * 4;
                let src = &raw[start..start + width as usize * 4];
                let dst = canvas.span_mut(dx, dy + row, width);
                for (d, s) in dst.iter_mut().zip(src.chunks_exact(4)) {
                    *d = blend_pixel(*d, s);
                }
            }
        }
    }
}

/// Place `sprite` with its top-left corner at `(x, y)`, clipping to the
/// canvas. Coordinates may be negative or past the far edges.
pub fn composite(canvas: &mut Canvas<'_>, sprite: Sprite<'_>, x: i32, y: i32) {
    let placed = Rect::new(x, y, sprite.width(), sprite.height());
    let Some(visible) = placed.intersection(&canvas.bounds()) else {
        return;
    };

    let origin = (
        (i64::from(visible.x) - i64::from(x)) as u32,
        (i64::from(visible.y) - i64::from(y)) as u32,
    );
    blend(canvas, visible, sprite, origin);
}

#[inline]
fn blend_pixel(dst: Rgb, src: &[u8]) -> Rgb {
    match src[3] {
        0 => dst,
        u8::MAX => Rgb::new(src[0], src[1], src[2]),
        alpha => {
            let a = f64::from(alpha) / 255.0;
            let mix = |s: u8, d: u8| (f64::from(s) * a + f64::from(d) * (1.0 - a)) as u8;
            Rgb::new(mix(src[0], dst.r), mix(src[1], dst.g), mix(src[2], dst.b))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb as ImgRgb, RgbImage, Rgba as ImgRgba, RgbaImage};

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn pixels(width: u32, height: u32, color: Rgb) -> Vec<Rgb> {
        vec![color; (width * height) as usize]
    }

    #[test]
    fn test_opaque_rgba_is_overwrite() {
        let mut px = pixels(4, 4, BLUE);
        let mut canvas = Canvas::new(&mut px, 4, 4);
        let src = RgbaImage::from_pixel(2, 2, ImgRgba([255, 0, 0, 255]));

        composite(&mut canvas, Sprite::from(&src), 1, 1);

        assert_eq!(px[5], RED);
        assert_eq!(px[10], RED);
        assert_eq!(px[0], BLUE);
        assert_eq!(px[15], BLUE);
    }

    #[test]
    fn test_transparent_leaves_destination() {
        let mut px = pixels(3, 2, BLUE);
        let mut canvas = Canvas::new(&mut px, 3, 2);
        let src = RgbaImage::from_pixel(3, 2, ImgRgba([255, 255, 255, 0]));

        composite(&mut canvas, Sprite::from(&src), 0, 0);

        assert!(px.iter().all(|&p| p == BLUE));
    }

    #[test]
    fn test_half_alpha_is_midpoint() {
        let mut px = pixels(1, 2, Rgb::BLACK);
        let mut canvas = Canvas::new(&mut px, 1, 2);
        let src = RgbaImage::from_pixel(1, 2, ImgRgba([255, 200, 100, 128]));

        composite(&mut canvas, Sprite::from(&src), 0, 0);

        // 255 * 128/255 = 128, 200 * 128/255 = 100.39, 100 * 128/255 = 50.19
        let close = |got: u8, want: u8| got.abs_diff(want) <= 1;
        assert!(close(px[0].r, 128), "{:?}", px[0]);
        assert!(close(px[0].g, 100), "{:?}", px[0]);
        assert!(close(px[0].b, 50), "{:?}", px[0]);
    }

    #[test]
    fn test_opaque_rgb_clipped_to_canvas() {
        let mut px = pixels(3, 3, Rgb::BLACK);
        let mut canvas = Canvas::new(&mut px, 3, 3);
        let mut src = RgbImage::new(4, 4);
        for (x, y, p) in src.enumerate_pixels_mut() {
            *p = ImgRgb([x as u8, y as u8, 7]);
        }

        composite(&mut canvas, Sprite::from(&src), -1, -2);

        // Canvas (0, 0) shows sprite (1, 2).
        assert_eq!(px[0], Rgb::new(1, 2, 7));
        // Canvas (2, 1) shows sprite (3, 3).
        assert_eq!(px[5], Rgb::new(3, 3, 7));
        // Sprite runs out below row 1.
        assert_eq!(px[6], Rgb::BLACK);
    }

    #[test]
    fn test_region_limits_sprite() {
        let mut px = pixels(4, 1, Rgb::BLACK);
        let mut canvas = Canvas::new(&mut px, 4, 1);
        let src = RgbImage::from_pixel(4, 1, ImgRgb([9, 9, 9]));

        blend(&mut canvas, Rect::new(1, 0, 2, 1), Sprite::from(&src), (0, 0));

        assert_eq!(px, vec![Rgb::BLACK, Rgb::new(9, 9, 9), Rgb::new(9, 9, 9), Rgb::BLACK]);
    }

    #[test]
    fn test_offscreen_is_noop() {
        let mut px = pixels(4, 4, BLUE);
        let mut canvas = Canvas::new(&mut px, 4, 4);
        let src = RgbImage::from_pixel(2, 2, ImgRgb([1, 2, 3]));

        composite(&mut canvas, Sprite::from(&src), 4, 0);
        composite(&mut canvas, Sprite::from(&src), -2, 0);
        composite(&mut canvas, Sprite::from(&src), 0, -100);

        assert!(px.iter().all(|&p| p == BLUE));
    }

    #[test]
    fn test_origin_past_sprite_is_noop() {
        let mut px = pixels(2, 2, BLUE);
        let mut canvas = Canvas::new(&mut px, 2, 2);
        let src = RgbImage::from_pixel(2, 2, ImgRgb([1, 2, 3]));

        blend(&mut canvas, Rect::from_size(2, 2), Sprite::from(&src), (2, 0));

        assert!(px.iter().all(|&p| p == BLUE));
    }
}
