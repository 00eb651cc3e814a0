//! Anchor: which point of a rectangle a placement coordinate refers to.

use std::fmt;
use std::str::FromStr;

/// Reference point of a rectangle used to resolve placement coordinates.
///
/// Drawing calls take an `(x, y)` plus an anchor; the anchor says which point
/// of the drawn shape lands on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Top-left corner (the default).
    #[default]
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
    /// Center of the rectangle.
    Center,
    /// Middle of the top edge.
    Top,
    /// Middle of the bottom edge.
    Bottom,
    /// Middle of the left edge.
    Left,
    /// Middle of the right edge.
    Right,
}

impl Anchor {
    /// Every anchor, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Center,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// Kebab-case name, e.g. `"bottom-right"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Offset from the top-left corner to the anchor point for a shape of
    /// the given size. Odd sizes round the middle down.
    pub const fn offset(self, size_x: u64, size_y: u64) -> (i64, i64) {
        let mid_x = (size_x / 2) as i64;
        let mid_y = (size_y / 2) as i64;
        let far_x = size_x as i64 - 1;
        let far_y = size_y as i64 - 1;

        match self {
            Self::TopLeft => (0, 0),
            Self::Top => (mid_x, 0),
            Self::TopRight => (far_x, 0),
            Self::Left => (0, mid_y),
            Self::Center => (mid_x, mid_y),
            Self::Right => (far_x, mid_y),
            Self::BottomLeft => (0, far_y),
            Self::Bottom => (mid_x, far_y),
            Self::BottomRight => (far_x, far_y),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown anchor name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid anchor {0:?}, expected one of top-left, top-right, bottom-left, bottom-right, center, top, bottom, left, right")]
pub struct ParseAnchorError(pub String);

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.name() == s)
            .ok_or_else(|| ParseAnchorError(s.to_string()))
    }
}

/// Top-left corner of a `size_x × size_y` rectangle whose `anchor` point is
/// at `(x, y)`.
///
/// ```
/// use halfblock::{adjust_for_anchor, Anchor};
///
/// assert_eq!(adjust_for_anchor(5, 5, 10, 12, Anchor::Center), (0, -1));
/// assert_eq!(adjust_for_anchor(5, 5, 3, 3, Anchor::BottomRight), (3, 3));
/// ```
pub const fn adjust_for_anchor(x: i32, y: i32, size_x: u32, size_y: u32, anchor: Anchor) -> (i32, i32) {
    let (dx, dy) = anchor.offset(size_x as u64, size_y as u64);
    ((x as i64 - dx) as i32, (y as i64 - dy) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_anchor() {
        assert_eq!(adjust_for_anchor(5, 5, 10, 12, Anchor::Center), (0, -1));
    }

    #[test]
    fn test_bottom_right_anchor() {
        assert_eq!(adjust_for_anchor(5, 5, 3, 3, Anchor::BottomRight), (3, 3));
    }

    #[test]
    fn test_top_left_is_identity() {
        assert_eq!(adjust_for_anchor(-4, 7, 100, 3, Anchor::TopLeft), (-4, 7));
    }

    #[test]
    fn test_edge_anchors_round_down() {
        assert_eq!(adjust_for_anchor(10, 10, 5, 5, Anchor::Top), (8, 10));
        assert_eq!(adjust_for_anchor(10, 10, 5, 5, Anchor::Bottom), (8, 6));
        assert_eq!(adjust_for_anchor(10, 10, 5, 5, Anchor::Left), (10, 8));
        assert_eq!(adjust_for_anchor(10, 10, 5, 5, Anchor::Right), (6, 8));
        assert_eq!(adjust_for_anchor(10, 10, 4, 4, Anchor::TopRight), (7, 10));
        assert_eq!(adjust_for_anchor(10, 10, 4, 4, Anchor::BottomLeft), (10, 7));
    }

    #[test]
    fn test_anchor_point_lands_on_input() {
        for anchor in Anchor::ALL {
            for (sx, sy) in [(1, 1), (2, 3), (10, 12), (7, 4)] {
                let (left, top) = adjust_for_anchor(20, 30, sx, sy, anchor);
                let (dx, dy) = anchor.offset(u64::from(sx), u64::from(sy));
                assert_eq!(i64::from(left) + dx, 20, "{anchor} {sx}x{sy}");
                assert_eq!(i64::from(top) + dy, 30, "{anchor} {sx}x{sy}");
                // The anchor point is inside the shape.
                assert!((0..i64::from(sx)).contains(&dx));
                assert!((0..i64::from(sy)).contains(&dy));
            }
        }
    }

    #[test]
    fn test_parse_anchor() {
        assert_eq!("bottom-right".parse::<Anchor>(), Ok(Anchor::BottomRight));
        assert_eq!("center".parse::<Anchor>(), Ok(Anchor::Center));
        assert!("middle".parse::<Anchor>().is_err());
        for anchor in Anchor::ALL {
            assert_eq!(anchor.to_string().parse::<Anchor>(), Ok(anchor));
        }
    }
}
