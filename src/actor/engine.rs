//! Engine: Main coordinator that ties actors together.
//!
//! The Engine is the entry point for interactive programs. It puts the
//! terminal into raw mode, spawns the input and render actors, and hands
//! out frames sized to the terminal.

use super::messages::{InputEvent, RenderCommand};
use super::{InputActor, RendererActor};
use crate::buffer::Frame;
use crate::error::Result;
use crate::terminal::StdTerminal;
use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::{Duration, Instant};

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Target frames per second for [`Engine::end_frame`] pacing.
    pub target_fps: u32,
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Whether to hide the cursor while running.
    pub hide_cursor: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
            hide_cursor: true,
        }
    }
}

/// The main halfblock engine.
///
/// This coordinates between the input and render actors, providing
/// a simple interface for applications:
///
/// ```no_run
/// use halfblock::{Engine, Rgb};
///
/// let mut engine = Engine::new()?;
/// while engine.is_running() {
///     engine.begin_frame();
///     for event in engine.drain_input() {
///         if event.is_quit() {
///             engine.stop();
///         }
///     }
///     let mut frame = engine.new_frame();
///     frame.fill(Rgb::new(0, 0, 64));
///     engine.end_frame(frame);
/// }
/// # Ok::<(), halfblock::Error>(())
/// ```
pub struct Engine {
    /// Configuration.
    config: EngineConfig,
    /// Input event receiver.
    input_rx: Receiver<InputEvent>,
    /// Render command sender.
    render_tx: Sender<RenderCommand>,
    /// Input actor handle.
    input_actor: Option<InputActor>,
    /// Renderer actor handle.
    renderer_actor: Option<RendererActor>,
    /// Terminal width in columns.
    width: u16,
    /// Terminal height in rows.
    height: u16,
    /// Frame timing.
    frame_start: Instant,
    frame_duration: Duration,
    frame_count: u64,
    /// Whether the engine is running.
    running: bool,
}

impl Engine {
    /// Create a new engine with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new engine with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails or an actor thread can't be
    /// spawned.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if config.hide_cursor {
            execute!(stdout, cursor::Hide)?;
        }

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        // Small queue: a slow terminal should drop the producer's pace, not
        // pile up stale frames
        let (render_tx, render_rx) = bounded::<RenderCommand>(2);

        let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout)?;
        let renderer_actor = RendererActor::spawn(render_rx, StdTerminal::stdout())?;

        let frame_duration = Duration::from_secs(1) / config.target_fps.max(1);
        log::debug!("engine started on {width}x{height} terminal");

        Ok(Self {
            config,
            input_rx,
            render_tx,
            input_actor: Some(input_actor),
            renderer_actor: Some(renderer_actor),
            width,
            height,
            frame_start: Instant::now(),
            frame_duration,
            frame_count: 0,
            running: true,
        })
    }

    /// Get the terminal width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the terminal height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// A black frame covering the whole terminal: `width` pixels wide and
    /// `2 * height` pixels tall.
    pub fn new_frame(&self) -> Frame {
        Frame::with_rows(u32::from(self.width), u32::from(self.height))
    }

    /// Get the input receiver for event-driven loops.
    pub const fn input_receiver(&self) -> &Receiver<InputEvent> {
        &self.input_rx
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Poll for the next input event (non-blocking).
    ///
    /// Returns `None` if no event is available. Resize events update the
    /// engine's size before being returned.
    pub fn poll_input(&mut self) -> Option<InputEvent> {
        let event = match self.input_rx.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                InputEvent::Error("Input channel disconnected".to_string())
            }
        };
        self.observe(&event);
        Some(event)
    }

    /// Wait for the next input event (blocking with timeout).
    pub fn wait_input(&mut self, timeout: Duration) -> Option<InputEvent> {
        let event = self.input_rx.recv_timeout(timeout).ok()?;
        self.observe(&event);
        Some(event)
    }

    /// Drain all pending input events.
    pub fn drain_input(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.input_rx.try_recv() {
            self.observe(&event);
            events.push(event);
        }
        events
    }

    fn observe(&mut self, event: &InputEvent) {
        if let InputEvent::Resize { width, height } = *event {
            self.handle_resize(width, height);
        }
    }

    /// Send `frame` to the render thread.
    ///
    /// Blocks while the render queue is full.
    pub fn present(&self, frame: Frame) {
        if self.render_tx.send(RenderCommand::Frame(Box::new(frame))).is_err() {
            log::warn!("render thread is gone, dropping frame");
        }
    }

    /// Request a full redraw of the frame on screen.
    pub fn request_redraw(&self) {
        let _ = self.render_tx.send(RenderCommand::Redraw);
    }

    /// Handle a resize event.
    ///
    /// Frames from [`Engine::new_frame`] take the new size, and the next
    /// frame presented is drawn in full.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let _ = self.render_tx.send(RenderCommand::Resize { width, height });
    }

    /// Begin a new frame.
    ///
    /// Call this at the start of your render loop.
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// End a frame: present it, then sleep if necessary to maintain the
    /// target FPS.
    pub fn end_frame(&mut self, frame: Frame) {
        self.frame_count += 1;

        self.present(frame);

        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_duration {
            std::thread::sleep(self.frame_duration - elapsed);
        }
    }

    /// Get the current frame count.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        // Let queued frames land before restoring the screen
        let _ = self.render_tx.send(RenderCommand::Shutdown);
        if let Some(actor) = self.renderer_actor.take() {
            actor.join();
        }

        if let Err(e) = restore_terminal(self.config.alternate_screen) {
            log::warn!("failed to restore terminal: {e}");
        }
    }
}

/// Undo the setup done by [`Engine::with_config`].
fn restore_terminal(alternate_screen: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, crossterm::style::ResetColor, cursor::Show)?;
    if alternate_screen {
        execute!(stdout, LeaveAlternateScreen)?;
    }
    terminal::disable_raw_mode()
}
