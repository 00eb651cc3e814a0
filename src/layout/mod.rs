//! Layout module: placement geometry for drawing calls.
//!
//! Every drawing call resolves its anchor to a top-left corner, then clips
//! the resulting [`Rect`] against the frame bounds.

mod anchor;
mod rect;

pub use anchor::{adjust_for_anchor, Anchor, ParseAnchorError};
pub use rect::Rect;
