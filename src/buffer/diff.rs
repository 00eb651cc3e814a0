//! Differential renderer: turn a frame into half-block escape sequences.
//!
//! Each terminal row shows two pixel rows: the top pixel as the foreground
//! of `▀`, the bottom pixel as its background.
//!
//! 1. Without a usable previous frame, every cell is redrawn
//!    ([`render_full`]).
//! 2. Otherwise only the span between the first and last differing column of
//!    each terminal row is redrawn ([`render_diff`]).
//! 3. Inside a span, color sequences are skipped while consecutive cells
//!    share the same (top, bottom) pair.
//!
//! All output is accumulated in a single buffer and flushed with one syscall.

use super::{Frame, Rgb};
use crate::terminal::OutputBuffer;

/// How a frame was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Every cell was redrawn.
    #[default]
    Full,
    /// Only changed spans were redrawn.
    Diff,
}

/// Result of a render operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Full or differential.
    pub mode: RenderMode,
    /// Number of terminal rows with output.
    pub rows: usize,
    /// Number of half-block cells written.
    pub cells: usize,
    /// Number of color-set (fg + bg) sequences emitted.
    pub color_sets: usize,
    /// Bytes appended to the output buffer.
    pub bytes: usize,
}

/// Inclusive column range of terminal row `row` that must be redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSpan {
    /// Terminal row within the frame.
    pub row: u32,
    /// First column to redraw.
    pub start: u32,
    /// Last column to redraw.
    pub end: u32,
}

/// First and last index where two pixel rows differ.
#[inline]
fn diff_bounds(current: &[Rgb], previous: &[Rgb]) -> Option<(usize, usize)> {
    let mut pairs = current.iter().zip(previous);
    let first = pairs.position(|(a, b)| a != b)?;
    let last = current
        .iter()
        .zip(previous)
        .rposition(|(a, b)| a != b)
        .unwrap_or(first);
    Some((first, last))
}

/// Columns of terminal row `row` that differ between two equally sized
/// frames, or `None` when both pixel rows are identical.
pub fn row_span(current: &Frame, previous: &Frame, row: u32) -> Option<RenderSpan> {
    debug_assert!(current.same_size(previous));

    let (top, bottom) = (2 * row, 2 * row + 1);
    let bounds = match (
        diff_bounds(current.row(top), previous.row(top)),
        diff_bounds(current.row(bottom), previous.row(bottom)),
    ) {
        (None, None) => return None,
        (Some(b), None) | (None, Some(b)) => b,
        (Some((s1, e1)), Some((s2, e2))) => (s1.min(s2), e1.max(e2)),
    };

    Some(RenderSpan {
        row,
        start: bounds.0 as u32,
        end: bounds.1 as u32,
    })
}

/// Write columns `start..=end` of terminal row `row`, skipping color sets
/// while the (top, bottom) pair repeats.
fn emit_span(frame: &Frame, span: RenderSpan, output: &mut OutputBuffer, stats: &mut RenderStats) {
    let (x, y) = frame.position();
    output.cursor_move(x + span.start, span.row + y / 2);

    let top = frame.row(2 * span.row);
    let bottom = frame.row(2 * span.row + 1);
    let mut last: Option<(Rgb, Rgb)> = None;

    for col in span.start as usize..=span.end as usize {
        let pair = (top[col], bottom[col]);
        if last != Some(pair) {
            output.set_colors(pair.0, pair.1);
            stats.color_sets += 1;
            last = Some(pair);
        }
        output.half_block();
        stats.cells += 1;
    }
    stats.rows += 1;
}

/// Generate a full redraw of `frame` (no diffing).
///
/// One cursor move per terminal row, then a color set and `▀` for every
/// column. This is used for the first frame and after a size change.
pub fn render_full(frame: &Frame, output: &mut OutputBuffer) -> RenderStats {
    let before = output.len();
    let mut stats = RenderStats::default();
    let (x, y) = frame.position();

    for row in 0..frame.terminal_rows() {
        output.cursor_move(x, row + y / 2);

        let top = frame.row(2 * row);
        let bottom = frame.row(2 * row + 1);
        for (&t, &b) in top.iter().zip(bottom) {
            output.set_colors(t, b);
            output.half_block();
        }

        stats.rows += 1;
        stats.cells += top.len();
        stats.color_sets += top.len();
    }

    stats.bytes = output.len() - before;
    stats
}

/// Render the difference between `previous` (what the terminal shows) and
/// `current` into `output`.
///
/// Frames of different width or height can't be diffed; that falls back to
/// [`render_full`] rather than failing. Identical frames emit nothing.
pub fn render_diff(current: &Frame, previous: &Frame, output: &mut OutputBuffer) -> RenderStats {
    if !current.same_size(previous) {
        log::debug!(
            "frame size changed from {}x{} to {}x{}, redrawing everything",
            previous.width(),
            previous.height(),
            current.width(),
            current.height()
        );
        return render_full(current, output);
    }

    let before = output.len();
    let mut stats = RenderStats {
        mode: RenderMode::Diff,
        ..RenderStats::default()
    };

    for row in 0..current.terminal_rows() {
        if let Some(span) = row_span(current, previous, row) {
            emit_span(current, span, output, &mut stats);
        }
    }

    stats.bytes = output.len() - before;
    stats
}

/// Render `current`, diffing against `previous` when there is one.
pub fn render(current: &Frame, previous: Option<&Frame>, output: &mut OutputBuffer) -> RenderStats {
    match previous {
        Some(previous) => render_diff(current, previous, output),
        None => render_full(current, output),
    }
}

/// Initial output buffer capacity for rendering `frame`.
pub fn estimate_capacity(frame: &Frame) -> usize {
    (frame.width() as usize * frame.terminal_rows() as usize * 8).clamp(64, 1 << 20)
}
