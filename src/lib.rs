//! # halfblock
//!
//! Pixel graphics in any truecolor terminal.
//!
//! Every terminal cell shows two vertically stacked pixels by printing the
//! upper half block `▀` with the top pixel as foreground color and the
//! bottom pixel as background color. A [`Frame`] is a pixel grid with an
//! even height; drawing happens on the frame, and rendering turns it into
//! escape sequences, redrawing only what changed since the previous frame.
//!
//! ## Core Concepts
//!
//! - **Frames**: RGB pixel grids with drawing primitives (rects, lines,
//!   images, bitmap text) and anchor-based placement
//! - **Differential rendering**: per-row changed spans, with color
//!   sequences skipped across runs of identical cells
//! - **Terminal facade**: a small [`Terminal`] trait with stdout-backed and
//!   headless implementations
//! - **Actor model**: isolated threads for input, ticking and rendering
//!
//! ## Example
//!
//! ```rust
//! use halfblock::{Anchor, Font, Frame, RectStyle, Rgb, VirtualTerminal};
//!
//! // 20x10 pixels fill a 20x5 cell terminal
//! let mut frame = Frame::new(20, 10)?;
//! frame.fill(Rgb::new(0, 0, 64));
//! frame.add_rect(Rgb::WHITE, 10, 5, 6, 4, RectStyle::anchored(Anchor::Center))?;
//! frame.add_large_text(0, 0, &Font::builtin(), "ok", Anchor::TopLeft, Rgb::new(255, 200, 0))?;
//!
//! let mut terminal = VirtualTerminal::new(20, 5);
//! frame.render(None, &mut terminal)?;
//! assert_eq!(terminal.snapshot(), frame);
//! # Ok::<(), halfblock::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod error;
pub mod font;
pub mod layout;
pub mod raster;
pub mod terminal;

// Re-exports for convenience
pub use actor::{
    Engine, EngineConfig, InputEvent, KeyCode, KeyModifiers, RenderCommand, Renderer,
    RendererStats, Tick, TickerActor,
};
pub use buffer::diff::{RenderMode, RenderSpan, RenderStats};
pub use buffer::{Direction, Frame, FrameBuilder, RectStyle, Rgb, Rgba, NAMED_COLORS};
pub use error::{Error, Result};
pub use font::Font;
pub use layout::{adjust_for_anchor, Anchor, ParseAnchorError, Rect};
pub use terminal::{
    text_style, ColorSpec, CursorGuard, Modifiers, OutputBuffer, StdTerminal, Terminal,
    TextStyle, VirtualTerminal, HALF_BLOCK,
};
