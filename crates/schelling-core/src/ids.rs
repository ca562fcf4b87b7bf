//! Strongly typed agent group identifier.

use std::fmt;

/// An agent's categorical group (the "race" axis of the model, though the
/// engine is agnostic to what the category represents).
///
/// Group ids index the cumulative distribution and per-group tolerance
/// tables passed to `populate`, so they are dense small integers.  `u16`
/// keeps agent storage compact (max 65,535 groups — far beyond any
/// realistic run).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(pub u16);

impl GroupId {
    /// Cast to `usize` for direct use as a table index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Sentinel value used by board snapshots for empty cells.
    ///
    /// Snapshots store groups as `i16` so the empty sentinel `-1` can share
    /// the cell type; `as_snapshot_cell` performs that widening.
    pub const EMPTY_CELL: i16 = -1;

    /// This group as a snapshot cell value (always `>= 0`).
    #[inline(always)]
    pub fn as_snapshot_cell(self) -> i16 {
        debug_assert!(self.0 <= i16::MAX as u16, "group id too large for snapshot cells");
        self.0 as i16
    }
}

impl From<GroupId> for usize {
    #[inline(always)]
    fn from(id: GroupId) -> usize {
        id.0 as usize
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupId({})", self.0)
    }
}
