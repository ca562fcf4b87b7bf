//! Run observer trait for progress reporting and data collection.

use schelling_grid::Board;

use crate::RunReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// pass loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl RunObserver for ProgressPrinter {
///     fn on_pass_end(&mut self, pass: u64, relocations: usize) {
///         println!("pass {pass}: {relocations} unhappy agents relocated");
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called at the very start of each pass, before any cell is scanned.
    fn on_pass_start(&mut self, _pass: u64) {}

    /// Called at the end of each pass.
    ///
    /// `relocations` is the number of relocations the pass performed; the
    /// pass that reports `0` is the one that converged the run.
    fn on_pass_end(&mut self, _pass: u64, _relocations: usize) {}

    /// Called at snapshot intervals (every `snapshot_interval` passes, if
    /// configured on the [`Sim`][crate::Sim]).
    ///
    /// Provides read-only access to the board so output writers can record
    /// occupancy and statistics without the sim knowing any output format.
    fn on_snapshot(&mut self, _pass: u64, _board: &Board) {}

    /// Called once when the run ends, whether converged or budget-bound.
    fn on_run_end(&mut self, _report: &RunReport, _board: &Board) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
