//! The backend-agnostic writer trait.

use crate::{CellSnapshotRow, OutputResult, PassSummaryRow, RunSummaryRow};

/// A sink for run output rows.
///
/// Implementations buffer or stream as they see fit; `finish` flushes
/// everything and must be called exactly once, after which the writer is
/// spent.
pub trait OutputWriter {
    fn write_pass_summary(&mut self, row: &PassSummaryRow) -> OutputResult<()>;

    fn write_snapshot(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()>;

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush all buffers.  Dropping a writer without calling `finish` may
    /// lose trailing rows.
    fn finish(&mut self) -> OutputResult<()>;
}
