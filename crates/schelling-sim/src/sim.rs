//! The `Sim` struct and its pass loop.

use schelling_grid::{Board, Snapshot};

use crate::{RunObserver, SimResult};

/// Why a run stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunOutcome {
    /// A full pass relocated nobody — every agent is satisfied.
    Converged,
    /// The iteration budget ran out with agents still unhappy.
    BudgetExhausted,
}

/// Summary of a completed run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Passes actually scanned.  If the very first pass relocates nobody
    /// this is `1`, not `0` — the pass still ran.  `run(0)` reports `0`.
    pub iterations: u64,

    /// Total relocations across all passes.
    pub relocations: u64,

    pub outcome: RunOutcome,

    /// Final [`Board::happiness_fraction`], in `[0, 1]`.
    pub happiness: f64,

    /// Final [`Board::segregation_index`], in `[0, 1]`.
    pub segregation: f64,
}

impl RunReport {
    pub fn converged(&self) -> bool {
        self.outcome == RunOutcome::Converged
    }
}

/// The simulation runner: a populated board plus the loop that drives it
/// to convergence or a budget.
///
/// Create via [`SimBuilder`][crate::SimBuilder], which guarantees the
/// board is validated and populated, or wrap a hand-populated board with
/// [`Sim::new`].
pub struct Sim {
    pub board: Board,

    /// Call `RunObserver::on_snapshot` every this many passes; `0` (the
    /// default) means never.
    pub snapshot_interval: u64,
}

impl Sim {
    /// Wrap an already-populated board.
    pub fn new(board: Board) -> Self {
        Sim { board, snapshot_interval: 0 }
    }

    /// Run up to `max_iterations` passes, stopping early on the first pass
    /// with zero relocations.
    ///
    /// Returns a [`RunReport`]; `report.iterations` is the literal number
    /// of passes scanned, so a board that is already settled reports `1`
    /// (one pass ran and found nothing to do) and `run(0)` reports `0`
    /// without touching the board.
    pub fn run<O: RunObserver>(
        &mut self,
        max_iterations: u64,
        observer:       &mut O,
    ) -> SimResult<RunReport> {
        let mut total_relocations = 0_u64;

        for pass in 1..=max_iterations {
            observer.on_pass_start(pass);
            let moved = self.board.sweep()?;
            total_relocations += moved as u64;
            observer.on_pass_end(pass, moved);

            if self.snapshot_interval > 0 && pass % self.snapshot_interval == 0 {
                observer.on_snapshot(pass, &self.board);
            }

            if moved == 0 {
                return Ok(self.finish(pass, total_relocations, RunOutcome::Converged, observer));
            }
        }

        Ok(self.finish(
            max_iterations,
            total_relocations,
            RunOutcome::BudgetExhausted,
            observer,
        ))
    }

    /// Run exactly one pass, returning its relocation count.  Useful for
    /// incremental stepping and tests.
    pub fn step(&mut self) -> SimResult<usize> {
        Ok(self.board.sweep()?)
    }

    /// Convenience passthrough to [`Board::snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    fn finish<O: RunObserver>(
        &self,
        iterations:  u64,
        relocations: u64,
        outcome:     RunOutcome,
        observer:    &mut O,
    ) -> RunReport {
        let report = RunReport {
            iterations,
            relocations,
            outcome,
            happiness:   self.board.happiness_fraction(),
            segregation: self.board.segregation_index(),
        };
        observer.on_run_end(&report, &self.board);
        report
    }
}
