//! `RunOutputObserver<W>` — bridges `RunObserver` to an `OutputWriter`.

use schelling_core::GroupId;
use schelling_grid::Board;
use schelling_sim::{RunObserver, RunReport};

use crate::row::{CellSnapshotRow, PassSummaryRow, RunSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`RunObserver`] that writes pass summaries and board snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `RunObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for RunOutputObserver<W> {
    fn on_pass_end(&mut self, pass: u64, relocations: usize) {
        let row = PassSummaryRow { pass, relocations: relocations as u64 };
        let result = self.writer.write_pass_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, pass: u64, board: &Board) {
        let snap = board.snapshot();
        let mut rows = Vec::with_capacity(snap.occupied_count());
        for y in 0..snap.height() {
            for x in 0..snap.width() {
                let group = snap.get(x, y);
                if group != GroupId::EMPTY_CELL {
                    rows.push(CellSnapshotRow { pass, x, y, group });
                }
            }
        }
        let result = self.writer.write_snapshot(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, report: &RunReport, _board: &Board) {
        let row = RunSummaryRow {
            iterations:  report.iterations,
            relocations: report.relocations,
            converged:   report.converged(),
            happiness:   report.happiness,
            segregation: report.segregation,
        };
        let result = self.writer.write_run_summary(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
