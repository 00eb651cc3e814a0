//! Actor Model: Message-passing concurrency for interactive programs.
//!
//! This module implements a simple actor system using crossbeam channels:
//! - **Input Actor**: Polls terminal events, forwards to main loop
//! - **Render Actor**: Receives frames, diffs and flushes
//! - **Ticker Actor**: Paces animation with regular ticks
//! - **Main Loop**: Draws frames and handles application logic
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐        Tick         │  Main Loop   │
//! │Ticker Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐    RenderCommand    │              │
//! │Render Thread │ ◀───────────────── │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod renderer;
mod ticker;

pub use engine::{Engine, EngineConfig};
pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers, RenderCommand};
pub use renderer::{Renderer, RendererActor, RendererStats};
pub use ticker::{Tick, TickerActor};
