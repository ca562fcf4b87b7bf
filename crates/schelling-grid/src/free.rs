//! The free-cell pool.
//!
//! Relocation draws one uniformly random free coordinate per unhappy agent,
//! and an unhappy-dominated pass performs close to `width * height` such
//! draws.  A plain list with "search and remove" would make each draw O(n);
//! this pool pairs a dense coordinate array with a per-cell slot index so
//! every operation is O(1):
//!
//! - `take_random` — random index, `swap_remove`, patch the moved slot.
//! - `remove` / `insert` — direct slot lookup.
//!
//! The slot array is indexed by row-major cell index and holds `NOT_FREE`
//! for occupied cells, doubling as an O(1) membership test.

use schelling_core::{Coord, SimRng};

/// Slot marker for cells that are not in the pool.
const NOT_FREE: u32 = u32::MAX;

/// Array-backed set of unoccupied coordinates with O(1) random removal.
pub struct FreeCells {
    width: u32,
    /// Dense list of free coordinates, in no meaningful order.
    cells: Vec<Coord>,
    /// Row-major cell index → position in `cells`, or `NOT_FREE`.
    slot: Vec<u32>,
}

impl FreeCells {
    /// Create a pool containing every cell of a `width` x `height` board —
    /// a freshly constructed board is entirely free.
    pub fn all_free(width: u32, height: u32) -> Self {
        let area = width as usize * height as usize;
        let cells = (0..area).map(|i| Coord::from_index(i, width)).collect();
        let slot = (0..area as u32).collect();
        FreeCells { width, cells, slot }
    }

    /// Number of free cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `true` if `coord` is currently free.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.slot[coord.index(self.width)] != NOT_FREE
    }

    /// Remove and return one uniformly random free coordinate, or `None`
    /// if the pool is empty.
    pub fn take_random(&mut self, rng: &mut SimRng) -> Option<Coord> {
        if self.cells.is_empty() {
            return None;
        }
        let pick = rng.gen_range(0..self.cells.len());
        let taken = self.cells.swap_remove(pick);
        self.slot[taken.index(self.width)] = NOT_FREE;
        // swap_remove moved the former tail into `pick`; repoint its slot.
        if pick < self.cells.len() {
            self.slot[self.cells[pick].index(self.width)] = pick as u32;
        }
        Some(taken)
    }

    /// Remove a specific coordinate from the pool.  Returns `false` if it
    /// was not free.
    pub fn remove(&mut self, coord: Coord) -> bool {
        let idx = coord.index(self.width);
        let pos = self.slot[idx];
        if pos == NOT_FREE {
            return false;
        }
        self.cells.swap_remove(pos as usize);
        self.slot[idx] = NOT_FREE;
        if (pos as usize) < self.cells.len() {
            self.slot[self.cells[pos as usize].index(self.width)] = pos;
        }
        true
    }

    /// Add a vacated coordinate back to the pool.
    ///
    /// Callers guarantee `coord` is not already present; the debug assert
    /// catches double-frees in tests.
    pub fn insert(&mut self, coord: Coord) {
        let idx = coord.index(self.width);
        debug_assert_eq!(self.slot[idx], NOT_FREE, "double free of {coord}");
        self.slot[idx] = self.cells.len() as u32;
        self.cells.push(coord);
    }

    /// Iterate over the free coordinates (unspecified order).
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}
