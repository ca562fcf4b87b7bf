//! Renderer-facing board export.

use schelling_core::GroupId;

/// A point-in-time copy of the board as group ids.
///
/// Cells hold the occupying agent's group id widened to `i16`, or
/// [`GroupId::EMPTY_CELL`] (`-1`) for free cells.  The snapshot owns its
/// data and carries no reference to the board, so renderers and writers can
/// keep it across later mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    width:  u32,
    height: u32,
    cells:  Vec<i16>,
}

impl Snapshot {
    pub(crate) fn new(width: u32, height: u32, cells: Vec<i16>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Snapshot { width, height, cells }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The cell at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> i16 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// The raw row-major cell array.
    #[inline]
    pub fn cells(&self) -> &[i16] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[i16]> {
        self.cells.chunks(self.width as usize)
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != GroupId::EMPTY_CELL).count()
    }
}
