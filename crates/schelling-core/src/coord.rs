//! Grid cell coordinates.
//!
//! A coordinate is an `(x, y)` pair with `0 <= x < width` and
//! `0 <= y < height`.  The canonical array index for a coordinate is
//! row-major: `y * width + x`.  Bounds are enforced by the board, not
//! here — `Coord` is dumb data.

use std::fmt;

/// A cell position on the board.
///
/// `Coord` is `Copy + Ord + Hash` so it can be used as a map key and in
/// sorted collections without ceremony.  Ordering is row-major (by `y`,
/// then `x`), matching the board's scan order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Coord { x, y }
    }

    /// Row-major index of this coordinate on a board of the given width.
    #[inline]
    pub fn index(self, width: u32) -> usize {
        self.y as usize * width as usize + self.x as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn from_index(index: usize, width: u32) -> Self {
        Coord {
            x: (index % width as usize) as u32,
            y: (index / width as usize) as u32,
        }
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major ordering: `y` first, then `x`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
