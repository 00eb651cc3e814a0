//! Color primitives: opaque [`Rgb`] pixels and translucent [`Rgba`] paint.
//!
//! Frames only ever store [`Rgb`]. [`Rgba`] exists for drawing calls whose
//! result is alpha-blended onto the frame; an [`Rgb`] converts into a fully
//! opaque [`Rgba`] with `From`.

use crate::error::{Error, Result};
use std::str::FromStr;

/// True-color RGB pixel.
///
/// Uses 3 bytes for 24-bit color depth. This is the only pixel type a
/// [`Frame`](crate::Frame) stores.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Attach an alpha channel.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }

    /// Parse a hex color: `#ff00ff`, `d208c7`, `#cd3` or `778`.
    ///
    /// Three-digit forms expand each digit (`#cd3` is `#ccdd33`).
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let invalid = || Error::InvalidColor(s.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };

        let hex = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        Ok(Self::from_u32(hex))
    }

    /// Look up one of the predefined color names (`"teal"`, `"darkgray"`, ...).
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }
}

/// Predefined color names accepted by [`Rgb::named`] and [`FromStr`].
pub const NAMED_COLORS: [(&str, Rgb); 18] = [
    ("white", Rgb::new(255, 255, 255)),
    ("silver", Rgb::new(192, 192, 192)),
    ("gray", Rgb::new(128, 128, 128)),
    ("black", Rgb::new(0, 0, 0)),
    ("red", Rgb::new(255, 0, 0)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("olive", Rgb::new(128, 128, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("aqua", Rgb::new(0, 255, 255)),
    ("teal", Rgb::new(0, 128, 128)),
    ("blue", Rgb::new(0, 0, 255)),
    ("navy", Rgb::new(0, 0, 128)),
    ("fuchsia", Rgb::new(255, 0, 255)),
    ("purple", Rgb::new(128, 0, 128)),
    ("darkgray", Rgb::new(64, 64, 64)),
    ("lightgray", Rgb::new(192, 192, 192)),
];

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Accepts a predefined name first, then any hex form.
    fn from_str(s: &str) -> Result<Self> {
        Self::named(s).map_or_else(|| Self::from_hex(s), Ok)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

impl From<image::Rgb<u8>> for Rgb {
    #[inline]
    fn from(image::Rgb([r, g, b]): image::Rgb<u8>) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    #[inline]
    fn from(c: Rgb) -> Self {
        Self([c.r, c.g, c.b])
    }
}

/// RGB color with an alpha channel, used only while compositing.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel, 0 is fully transparent and 255 fully opaque.
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Drop the alpha channel.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Check if the color is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }
}

impl std::fmt::Debug for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<Rgb> for Rgba {
    /// An opaque color: alpha is 255.
    #[inline]
    fn from(c: Rgb) -> Self {
        c.with_alpha(u8::MAX)
    }
}

impl From<(u8, u8, u8)> for Rgba {
    #[inline]
    fn from(rgb: (u8, u8, u8)) -> Self {
        Rgb::from(rgb).into()
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    #[inline]
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<image::Rgba<u8>> for Rgba {
    #[inline]
    fn from(image::Rgba([r, g, b, a]): image::Rgba<u8>) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for image::Rgba<u8> {
    #[inline]
    fn from(c: Rgba) -> Self {
        Self([c.r, c.g, c.b, c.a])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_tuple() {
        let rgb: Rgb = (255, 128, 0).into();
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.g, 128);
        assert_eq!(rgb.b, 0);
    }

    #[test]
    fn test_rgb_from_hex_u32() {
        let rgb: Rgb = 0xFF8000.into();
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_rgb_from_hex_str() {
        assert_eq!(Rgb::from_hex("#ff00ff").unwrap(), Rgb::new(255, 0, 255));
        assert_eq!(Rgb::from_hex("d208c7").unwrap(), Rgb::new(0xd2, 0x08, 0xc7));
        assert_eq!(Rgb::from_hex("#cd3").unwrap(), Rgb::new(0xcc, 0xdd, 0x33));
        assert_eq!(Rgb::from_hex("778").unwrap(), Rgb::new(0x77, 0x77, 0x88));
    }

    #[test]
    fn test_rgb_from_hex_rejects_garbage() {
        assert!(matches!(Rgb::from_hex("#12"), Err(Error::InvalidColor(_))));
        assert!(matches!(Rgb::from_hex("zzzzzz"), Err(Error::InvalidColor(_))));
        assert!(matches!(Rgb::from_hex("#ff00ff00"), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_rgb_parse_named() {
        assert_eq!("teal".parse::<Rgb>().unwrap(), Rgb::new(0, 128, 128));
        assert_eq!("DarkGray".parse::<Rgb>().unwrap(), Rgb::new(64, 64, 64));
        assert_eq!("#000080".parse::<Rgb>().unwrap(), Rgb::named("navy").unwrap());
        assert!("chartreuse".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgba_from_rgb_is_opaque() {
        let rgba: Rgba = Rgb::new(1, 2, 3).into();
        assert_eq!(rgba, Rgba::new(1, 2, 3, 255));
        assert!(rgba.is_opaque());
        assert_eq!(rgba.rgb(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_debug_formats_hex() {
        assert_eq!(format!("{:?}", Rgb::new(255, 0, 16)), "#ff0010");
        assert_eq!(format!("{:?}", Rgba::new(255, 0, 16, 128)), "#ff001080");
    }
}
