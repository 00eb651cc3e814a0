//! Line rasterizer: Bresenham paths thickened into disks.
//!
//! Segments are clipped to the canvas before they are walked, so the work
//! done is bounded by the canvas size no matter how far away the endpoints
//! are.

use super::Canvas;
use crate::buffer::Rgb;

/// Integer pixel path from `from` to `to`, both endpoints included.
///
/// Standard all-octant Bresenham; points are `(x, y)`. The path is produced
/// lazily.
pub fn line_path(from: (i32, i32), to: (i32, i32)) -> LinePath {
    LinePath::new(
        (i64::from(from.0), i64::from(from.1)),
        (i64::from(to.0), i64::from(to.1)),
    )
}

/// Iterator over the points of a Bresenham line. See [`line_path`].
#[derive(Debug, Clone)]
pub struct LinePath {
    x: i64,
    y: i64,
    end: (i64, i64),
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl LinePath {
    /// Coordinates must fit in 33 bits so `2 * err` can't overflow.
    fn new((x0, y0): (i64, i64), (x1, y1): (i64, i64)) -> Self {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            end: (x1, y1),
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePath {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if point == self.end {
            self.done = true;
            return Some(point);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let left = (self.end.0 - self.x).abs().max((self.end.1 - self.y).abs());
        let left = usize::try_from(left).map_or(usize::MAX, |n| n.saturating_add(1));
        (left, Some(left))
    }
}

/// Offsets `(dx, dy)` of the pixels within a disk of the given radius,
/// i.e. those with `dx² + dy² < radius²`. Radius 1 is the center pixel only.
///
/// Offsets are limited to `|dx| <= reach_x` and `|dy| <= reach_y`. Anything
/// further lands on the same clamped pixel as the offset at the limit.
fn disk_offsets(radius: u32, reach_x: i64, reach_y: i64) -> Vec<(i64, i64)> {
    let r = i64::from(radius);
    let r2 = i128::from(r).pow(2);
    let (ex, ey) = ((r - 1).min(reach_x), (r - 1).min(reach_y));
    let mut offsets = Vec::new();
    for dy in -ey..=ey {
        for dx in -ex..=ex {
            if i128::from(dx).pow(2) + i128::from(dy).pow(2) < r2 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Parameter range `[t0, t1]` of `p + t·d` over which `lo <= p + t·d <= hi`,
/// narrowed from `range`.
fn clip_axis(p: f64, d: f64, lo: f64, hi: f64, range: (f64, f64)) -> Option<(f64, f64)> {
    if d == 0.0 {
        return (lo..=hi).contains(&p).then_some(range);
    }
    let (a, b) = ((lo - p) / d, (hi - p) / d);
    let (t0, t1) = (range.0.max(a.min(b)), range.1.min(a.max(b)));
    (t0 <= t1).then_some((t0, t1))
}

/// Stamp centers of a line on a `(max_x + 1) × (max_y + 1)` canvas.
///
/// Rows outside the canvas are dropped. Stretches of the line left or right
/// of the canvas collapse onto the nearest edge column, one center per row.
fn centers(
    from: (i32, i32),
    to: (i32, i32),
    max_x: i64,
    max_y: i64,
) -> impl Iterator<Item = (i64, i64)> {
    let (x0, y0) = (f64::from(from.0), f64::from(from.1));
    let (dx, dy) = (f64::from(to.0) - x0, f64::from(to.1) - y0);
    let at = move |t: f64| {
        let x = (x0 + t * dx).round() as i64;
        let y = (y0 + t * dy).round() as i64;
        (x.clamp(0, max_x), y.clamp(0, max_y))
    };
    let edge_run = move |ta: f64, tb: f64| {
        let column = if x0 + (ta + tb) / 2.0 * dx < 0.0 { 0 } else { max_x };
        let (ya, yb) = (at(ta).1, at(tb).1);
        (ya.min(yb)..=ya.max(yb)).map(move |y| (column, y))
    };

    let rows = clip_axis(y0, dy, 0.0, max_y as f64, (0.0, 1.0));
    let columns = rows.and_then(|r| clip_axis(x0, dx, 0.0, max_x as f64, r));
    let (lead, inside, trail) = match (rows, columns) {
        (None, _) => (None, None, None),
        (Some((r0, r1)), None) => (Some(edge_run(r0, r1)), None, None),
        (Some((r0, r1)), Some((c0, c1))) => (
            (c0 > r0).then(|| edge_run(r0, c0)),
            Some(LinePath::new(at(c0), at(c1))),
            (c1 < r1).then(|| edge_run(c1, r1)),
        ),
    };

    lead.into_iter()
        .flatten()
        .chain(inside.into_iter().flatten())
        .chain(trail.into_iter().flatten())
}

/// Draw an opaque line of `color` from `from` to `to` with stroke `width`.
///
/// Every path pixel is stamped with a disk of radius `width`. Path pixels on
/// rows outside the canvas are dropped; their columns, and every stamped
/// coordinate, are clamped into the canvas.
pub fn draw_line(canvas: &mut Canvas<'_>, from: (i32, i32), to: (i32, i32), color: Rgb, width: u32) {
    if canvas.width() == 0 || canvas.height() == 0 || width == 0 {
        return;
    }

    let max_x = i64::from(canvas.width()) - 1;
    let max_y = i64::from(canvas.height()) - 1;
    let mut centers = centers(from, to, max_x, max_y);

    // A disk reaching every corner covers the canvas from any center
    let r2 = i128::from(width).pow(2);
    let corner2 = i128::from(max_x).pow(2) + i128::from(max_y).pow(2);
    if corner2 < r2 {
        if centers.next().is_some() {
            canvas.fill(color);
        }
        return;
    }

    let disk = disk_offsets(width, max_x, max_y);
    for (x, y) in centers {
        for &(dx, dy) in &disk {
            canvas.put((x + dx).clamp(0, max_x), (y + dy).clamp(0, max_y), color);
        }
    }
}
