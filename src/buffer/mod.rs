//! Buffer module: the pixel frame and how it reaches the terminal.
//!
//! This module contains:
//! - [`Rgb`] / [`Rgba`]: True-color pixels and translucent paint
//! - [`Frame`]: A grid of pixels, two per terminal cell
//! - [`diff`]: Differential renderer generating minimal ANSI sequences

mod color;
mod frame;
pub mod diff;

pub use color::{Rgb, Rgba, NAMED_COLORS};
pub use frame::{Direction, Frame, FrameBuilder, RectStyle};
