//! Rect: a signed rectangle used to clip drawing operations to a frame.

use super::anchor::{adjust_for_anchor, Anchor};

/// A rectangle defined by position and size.
///
/// Positions are signed so shapes can sit partly (or entirely) off-screen;
/// clipping against the frame is done with [`Rect::intersection`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: i32,
    /// Y coordinate (pixel row) of the top-left corner.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle at the origin (e.g. the bounds of a frame).
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Create a rectangle whose `anchor` point is at `(x, y)`.
    #[inline]
    pub const fn anchored(x: i32, y: i32, width: u32, height: u32, anchor: Anchor) -> Self {
        let (left, top) = adjust_for_anchor(x, y, width, height, anchor);
        Self::new(left, top, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Get the area (number of pixels).
    #[inline]
    pub const fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x as i64 && x < self.right() && y >= self.y as i64 && y < self.bottom()
    }

    /// Check if this rectangle intersects with another.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        (self.x as i64) < other.right()
            && self.right() > other.x as i64
            && (self.y as i64) < other.bottom()
            && self.bottom() > other.y as i64
    }

    /// The overlapping area of two rectangles, or `None` if they don't touch.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if self.is_empty() || other.is_empty() || !self.intersects(other) {
            return None;
        }

        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Self::new(
            left,
            top,
            (right - i64::from(left)) as u32,
            (bottom - i64::from(top)) as u32,
        ))
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(-3, 4, 10, 2);
        assert_eq!(r.right(), 7);
        assert_eq!(r.bottom(), 6);
        assert_eq!(r.area(), 20);
        assert!(r.contains(-3, 4));
        assert!(!r.contains(7, 4));
    }

    #[test]
    fn test_intersection_clips_negative_origin() {
        let frame = Rect::from_size(20, 10);
        let shape = Rect::new(-5, -2, 8, 4);
        assert_eq!(shape.intersection(&frame), Some(Rect::new(0, 0, 3, 2)));
    }

    #[test]
    fn test_intersection_oversized() {
        let frame = Rect::from_size(20, 10);
        let shape = Rect::new(5, 5, 200, 200);
        assert_eq!(shape.intersection(&frame), Some(Rect::new(5, 5, 15, 5)));
    }

    #[test]
    fn test_intersection_disjoint() {
        let frame = Rect::from_size(20, 10);
        assert_eq!(Rect::new(20, 0, 5, 5).intersection(&frame), None);
        assert_eq!(Rect::new(0, -100, 5, 5).intersection(&frame), None);
        assert_eq!(Rect::new(2, 2, 0, 5).intersection(&frame), None);
    }

    #[test]
    fn test_anchored() {
        let r = Rect::anchored(10, 10, 4, 6, Anchor::Center);
        assert_eq!(r, Rect::new(8, 7, 4, 6));
    }
}
