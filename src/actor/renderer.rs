//! Renderer Actor: Dedicated thread for rendering to the terminal.
//!
//! This actor owns the terminal and the last frame it showed. It receives
//! frames from the main loop and performs the actual diffing and output
//! flushing.

use super::messages::RenderCommand;
use crate::buffer::diff::{self, RenderStats};
use crate::buffer::Frame;
use crate::terminal::{OutputBuffer, Terminal};
use crossbeam_channel::Receiver;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Cumulative render statistics for debugging/profiling.
#[derive(Debug, Clone, Default)]
pub struct RendererStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Total bytes written to terminal.
    pub bytes_written: u64,
    /// Average render time in microseconds.
    pub avg_render_us: u64,
    /// Last render time in microseconds.
    pub last_render_us: u64,
    /// Breakdown of the most recent frame.
    pub last: RenderStats,
}

/// Renders a stream of frames to a terminal, diffing each against the
/// previous one.
///
/// This is the state behind [`RendererActor`]; it can also be driven
/// directly from a single-threaded loop.
pub struct Renderer<T: Terminal> {
    /// Where output goes.
    terminal: T,
    /// Frame currently on screen.
    previous: Option<Frame>,
    /// Pre-allocated output buffer, reused across frames.
    output: OutputBuffer,
    /// Clear the screen before the next full draw.
    clear_pending: bool,
    /// Render statistics.
    stats: RendererStats,
}

impl<T: Terminal> Renderer<T> {
    /// Create a renderer with nothing on screen yet.
    pub fn new(terminal: T) -> Self {
        Self {
            terminal,
            previous: None,
            output: OutputBuffer::with_capacity(65536),
            clear_pending: false,
            stats: RendererStats::default(),
        }
    }

    /// Get a reference to the terminal.
    pub const fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Get a mutable reference to the terminal.
    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    /// The frame currently on screen.
    pub const fn previous(&self) -> Option<&Frame> {
        self.previous.as_ref()
    }

    /// Render statistics.
    pub const fn stats(&self) -> &RendererStats {
        &self.stats
    }

    /// Apply one command.
    ///
    /// Returns `Ok(false)` once [`RenderCommand::Shutdown`] is received.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn handle(&mut self, command: RenderCommand) -> io::Result<bool> {
        match command {
            RenderCommand::Frame(frame) => self.present(*frame)?,
            RenderCommand::Redraw => self.redraw()?,
            RenderCommand::Resize { width, height } => {
                log::debug!("terminal resized to {width}x{height}");
                self.invalidate();
            }
            RenderCommand::Shutdown => return Ok(false),
        }
        Ok(true)
    }

    /// Show `frame`, writing only what changed since the last frame.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn present(&mut self, frame: Frame) -> io::Result<()> {
        let previous = self.previous.take();
        match self.draw(&frame, previous.as_ref()) {
            Ok(()) => {
                self.previous = Some(frame);
                Ok(())
            }
            Err(e) => {
                // The screen may hold part of the update
                self.invalidate();
                Err(e)
            }
        }
    }

    /// Redraw the frame on screen in full.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn redraw(&mut self) -> io::Result<()> {
        if let Some(frame) = self.previous.take() {
            if let Err(e) = self.draw(&frame, None) {
                self.invalidate();
                return Err(e);
            }
            self.previous = Some(frame);
        }
        Ok(())
    }

    /// Forget what is on screen; the next frame is drawn in full onto a
    /// cleared screen.
    pub fn invalidate(&mut self) {
        self.previous = None;
        self.clear_pending = true;
    }

    /// Perform a render cycle.
    fn draw(&mut self, frame: &Frame, previous: Option<&Frame>) -> io::Result<()> {
        let start = Instant::now();
        self.output.clear();

        if previous.is_none() && self.clear_pending {
            self.output.clear_screen();
            self.clear_pending = false;
        }
        let stats = diff::render(frame, previous, &mut self.output);

        // Flush to terminal in a single write
        if !self.output.is_empty() {
            self.terminal.write_all(self.output.as_bytes())?;
        }

        let elapsed = start.elapsed();
        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.last_render_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.stats.last = stats;

        // Smoothed average
        if self.stats.avg_render_us == 0 {
            self.stats.avg_render_us = self.stats.last_render_us;
        } else {
            self.stats.avg_render_us =
                (self.stats.avg_render_us * 15 + self.stats.last_render_us) / 16;
        }

        log::trace!(
            "{:?} render: {} rows, {} cells, {} bytes in {}us",
            stats.mode,
            stats.rows,
            stats.cells,
            stats.bytes,
            self.stats.last_render_us
        );
        Ok(())
    }
}

impl<T: Terminal> std::fmt::Debug for Renderer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_previous", &self.previous.is_some())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Renderer actor that handles terminal output.
pub struct RendererActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl RendererActor {
    /// Spawn the renderer actor thread, which takes ownership of
    /// `terminal`.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread can't be spawned.
    pub fn spawn<T>(receiver: Receiver<RenderCommand>, terminal: T) -> io::Result<Self>
    where
        T: Terminal + Send + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("halfblock-render".to_string())
            .spawn(move || {
                let mut renderer = Renderer::new(terminal);
                if let Err(e) = Self::run_loop(&receiver, &shutdown_clone, &mut renderer) {
                    log::error!("render thread error: {e}");
                }
                log::debug!("render thread stopped after {} frames", renderer.stats().frames);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the render thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the render thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main render loop.
    fn run_loop<T: Terminal>(
        receiver: &Receiver<RenderCommand>,
        shutdown: &AtomicBool,
        renderer: &mut Renderer<T>,
    ) -> io::Result<()> {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Wait for command with timeout so shutdown is noticed
            match receiver.recv_timeout(Duration::from_millis(16)) {
                Ok(command) => {
                    if !renderer.handle(command)? {
                        break;
                    }
                }
                Err(crossbeam_channel::RecvTimeoutError::Timeout) => {}
                Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
            }
        }

        Ok(())
    }
}

impl Drop for RendererActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
