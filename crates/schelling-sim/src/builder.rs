//! Fluent builder for constructing a [`Sim`].

use schelling_core::GridConfig;
use schelling_grid::{Board, PopulateParams};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// Validates the grid config, builds the board, populates it, and returns
/// a ready-to-run [`Sim`].  Construction failures surface before any state
/// exists — there is no partially-built simulation to clean up.
///
/// # Example
///
/// ```rust,ignore
/// let config = GridConfig { width: 100, height: 100, empty_ratio: 0.1, seed: 42 };
/// let mut sim = SimBuilder::new(config, PopulateParams::uniform(2, 0.5))
///     .snapshot_interval(10)
///     .build()?;
/// let report = sim.run(500, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:            GridConfig,
    params:            PopulateParams,
    snapshot_interval: u64,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: GridConfig, params: PopulateParams) -> Self {
        Self {
            config,
            params,
            snapshot_interval: 0,
        }
    }

    /// Emit `RunObserver::on_snapshot` every `interval` passes.
    ///
    /// `0` (the default) disables snapshots entirely.
    pub fn snapshot_interval(mut self, interval: u64) -> Self {
        self.snapshot_interval = interval;
        self
    }

    /// Validate, build, and populate the board; return a runnable [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let mut board = Board::new(&self.config)?;
        board.populate(&self.params)?;
        let mut sim = Sim::new(board);
        sim.snapshot_interval = self.snapshot_interval;
        Ok(sim)
    }
}
