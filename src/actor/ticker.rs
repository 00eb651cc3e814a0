//! Ticker Actor: Dedicated thread for pacing animation.
//!
//! Frames are drawn on the main loop whenever a tick arrives, so animation
//! speed is tied to wall time rather than to how fast frames render.

use crossbeam_channel::{bounded, select, tick, Receiver, Sender, TrySendError};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Tick number, counting delivered ticks from 0.
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
    /// Time since the previous delivered tick. Larger than the interval
    /// when ticks were skipped.
    pub delta: Duration,
}

/// Ticker actor that generates regular timing events.
///
/// At most two ticks are buffered; a consumer that falls behind loses ticks
/// instead of receiving a burst. [`Tick::delta`] shows the gap.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Stop signal; dropping it also stops the thread.
    stop_tx: Sender<()>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a ticker firing every `interval`.
    pub fn spawn(interval: Duration) -> io::Result<Self> {
        let (stop_tx, stop_rx) = bounded(1);
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("halfblock-ticker".to_string())
            .spawn(move || run_loop(&tick_tx, &stop_rx, interval))?;

        Ok(Self {
            handle: Some(handle),
            stop_tx,
            tick_rx,
        })
    }

    /// Spawn a ticker firing `fps` times per second.
    pub fn with_fps(fps: u32) -> io::Result<Self> {
        Self::spawn(Duration::from_secs(1) / fps.max(1))
    }

    /// Get a reference to the tick receiver.
    ///
    /// Use this with `select!` for event-driven loops:
    ///
    /// ```ignore
    /// loop {
    ///     select! {
    ///         recv(engine.input_receiver()) -> event => handle_input(event),
    ///         recv(ticker.receiver()) -> _ => engine.present(draw()),
    ///     }
    /// }
    /// ```
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the ticker to stop.
    pub fn shutdown(&self) {
        let _ = self.stop_tx.try_send(());
    }

    /// Stop the ticker and wait for its thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_loop(tick_tx: &Sender<Tick>, stop_rx: &Receiver<()>, interval: Duration) {
    let clock = tick(interval);
    let start = Instant::now();
    let mut last = start;
    let mut frame = 0u64;

    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(clock) -> at => {
                let Ok(at) = at else { break };
                let event = Tick {
                    frame,
                    elapsed: at.saturating_duration_since(start),
                    delta: at.saturating_duration_since(last),
                };
                match tick_tx.try_send(event) {
                    Ok(()) => {
                        frame += 1;
                        last = at;
                    }
                    // Consumer is behind: drop this tick
                    Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Disconnected(_)) => break,
                }
            }
        }
    }
    log::trace!("ticker stopped after {frame} ticks");
}
