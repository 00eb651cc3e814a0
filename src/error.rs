//! Error type shared by every fallible operation in the crate.
//!
//! Geometry edge cases (off-screen placement, oversized shapes, empty clip
//! results) and frame size mismatches are deliberately absent: those are
//! handled silently by clipping and by the full-render fallback.

use std::path::PathBuf;

/// Errors returned by frame construction, drawing and font loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Frame height must be even: one terminal row holds two pixel rows.
    #[error("frame height must be even, got {0}")]
    OddHeight(u32),

    /// Frame y position must be even so rows map onto whole terminal rows.
    #[error("frame y position must be even, got {0}")]
    OddPosition(u32),

    /// A rectangle with zero width or height was requested.
    #[error("rectangle size must be positive, got {width}x{height}")]
    EmptyRect {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The font sprite sheet does not have a valid layout.
    #[error("malformed font sheet {font}: {reason}")]
    FontSheet {
        /// Font name (usually the file path).
        font: String,
        /// What is wrong with the sheet.
        reason: String,
    },

    /// Text contains a character the font has no glyph for.
    #[error("can't render unsupported character {character:?} with font {font}")]
    UnsupportedCharacter {
        /// The offending grapheme.
        character: String,
        /// Font name.
        font: String,
    },

    /// Assembled text would be wider than an image can be.
    #[error("text is too wide to assemble: {width} pixels")]
    TextTooWide {
        /// Width the text would need.
        width: u64,
    },

    /// A color string could not be parsed.
    #[error("invalid color {0:?}")]
    InvalidColor(String),

    /// An image file could not be opened or decoded.
    #[error("failed to load image {}", path.display())]
    Image {
        /// Path of the image.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: image::ImageError,
    },

    /// Terminal I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias using the crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
