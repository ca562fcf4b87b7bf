//! The `Board` — occupancy, placement, relocation, and the sweep pass.

use rustc_hash::FxHashSet;

use schelling_agent::Agent;
use schelling_core::{Coord, GridConfig, GroupId, ModelError, ModelResult, SimRng};

use crate::{FreeCells, PopulateParams, Snapshot};

/// The spatial state of one simulation run.
///
/// A board is constructed empty (every cell free), populated exactly once,
/// and from then on mutated only through [`relocate`](Self::relocate) —
/// either directly or via [`sweep`](Self::sweep).  No agent is ever
/// destroyed; re-population requires a fresh board.
///
/// The board owns its seeded [`SimRng`]; every random decision of a run
/// flows through it, which is what makes runs reproducible per seed.
pub struct Board {
    width:  u32,
    height: u32,

    /// Row-major occupancy: `cells[coord.index(width)]`.
    pub(crate) cells: Vec<Option<Agent>>,

    /// The unoccupied coordinates.  Always complements `cells`.
    pub(crate) free: FreeCells,

    pub(crate) rng: SimRng,

    /// Number of cells `populate` must leave free, from the config's
    /// `empty_ratio` (ceiling).
    free_target: usize,

    /// Set by the first placement; blocks a second `populate`.
    populated: bool,
}

impl Board {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build an empty board from a validated config.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for non-positive dimensions or an `empty_ratio`
    /// outside `[0, 1)`; no partial board is returned.
    pub fn new(config: &GridConfig) -> ModelResult<Self> {
        config.validate()?;
        Ok(Board {
            width:       config.width,
            height:      config.height,
            cells:       (0..config.area()).map(|_| None).collect(),
            free:        FreeCells::all_free(config.width, config.height),
            rng:         SimRng::new(config.seed),
            free_target: config.free_cell_target(),
            populated:   false,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The agent at `coord`, if the cell is occupied or in bounds at all.
    pub fn agent_at(&self, coord: Coord) -> Option<&Agent> {
        if coord.x >= self.width || coord.y >= self.height {
            return None;
        }
        self.cells[coord.index(self.width)].as_ref()
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.area() - self.free.len()
    }

    /// `true` once any agent has been placed.
    #[inline]
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Iterate over all agents in row-major cell order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.cells.iter().filter_map(|c| c.as_ref())
    }

    /// Iterate over the free coordinates (unspecified order).
    pub fn free_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.free.iter()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Populate the board: pick the free set, then fill every remaining
    /// cell with a randomly drawn agent.
    ///
    /// The free set is `free_cell_target` distinct coordinates chosen
    /// uniformly without replacement (rejection sampling).  Each occupied
    /// cell, visited in row-major order, draws a group from the cumulative
    /// distribution and receives an agent with that group's tolerance and
    /// the configured similarity policy.
    ///
    /// # Errors
    ///
    /// `InvalidConfig`, before anything is placed, if:
    /// - the parameter tables are malformed (see [`PopulateParams::validate`]);
    /// - the board is already populated;
    /// - the free target is zero — a board without free cells would make
    ///   every later relocation an invariant violation, so it is rejected
    ///   here instead;
    /// - the free target covers the whole board (no agents to place).
    pub fn populate(&mut self, params: &PopulateParams) -> ModelResult<()> {
        params.validate()?;
        if self.populated {
            return Err(ModelError::InvalidConfig(
                "board is already populated; use a fresh board instead".into(),
            ));
        }
        if self.free_target == 0 {
            return Err(ModelError::InvalidConfig(
                "empty_ratio leaves no free cells, so no agent could ever relocate".into(),
            ));
        }
        if self.free_target >= self.area() {
            return Err(ModelError::InvalidConfig(format!(
                "empty_ratio leaves {} of {} cells free — nowhere to place agents",
                self.free_target,
                self.area()
            )));
        }

        // Draw the cells that stay free: uniform, without replacement.
        let mut keep_free: FxHashSet<usize> = FxHashSet::default();
        keep_free.reserve(self.free_target);
        while keep_free.len() < self.free_target {
            let x = self.rng.gen_range(0..self.width);
            let y = self.rng.gen_range(0..self.height);
            keep_free.insert(Coord::new(x, y).index(self.width));
        }

        // Fill every other cell in row-major order.
        for idx in 0..self.area() {
            if keep_free.contains(&idx) {
                continue;
            }
            let u: f64 = self.rng.random();
            let group = params.group_for(u);
            let agent = Agent::for_group(
                GroupId(group as u16),
                params.tolerances[group],
                params.policy,
                Coord::from_index(idx, self.width),
            );
            self.place(agent)?;
        }
        Ok(())
    }

    /// Place an agent at its own `position`.
    ///
    /// The low-level primitive behind [`populate`](Self::populate), public
    /// so tests and demos can seed exact layouts.  Marks the board
    /// populated.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the position is out of bounds or already
    /// occupied.
    pub fn place(&mut self, agent: Agent) -> ModelResult<()> {
        let coord = agent.position;
        if coord.x >= self.width || coord.y >= self.height {
            return Err(ModelError::InvalidConfig(format!(
                "cannot place agent at {coord}: outside {}x{} board",
                self.width, self.height
            )));
        }
        if !self.free.remove(coord) {
            return Err(ModelError::InvalidConfig(format!(
                "cannot place agent at {coord}: cell is occupied"
            )));
        }
        self.cells[coord.index(self.width)] = Some(agent);
        self.populated = true;
        Ok(())
    }

    // ── Neighborhood ──────────────────────────────────────────────────────

    /// The occupied cells in the Chebyshev 1-ring around `coord` — up to 8,
    /// clipped at the board edge, no wraparound.
    ///
    /// Order is stable: `dy` outer, `dx` inner, both ascending, center
    /// skipped.  Nothing downstream depends on the order semantically, but
    /// keeping it fixed makes tests exact.
    pub fn neighbors_of(&self, coord: Coord) -> Vec<&Agent> {
        let mut neighbors = Vec::with_capacity(8);
        for dy in -1_i64..=1 {
            for dx in -1_i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let x = coord.x as i64 + dx;
                let y = coord.y as i64 + dy;
                if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
                    continue;
                }
                let idx = Coord::new(x as u32, y as u32).index(self.width);
                if let Some(agent) = self.cells[idx].as_ref() {
                    neighbors.push(agent);
                }
            }
        }
        neighbors
    }

    // ── Relocation ────────────────────────────────────────────────────────

    /// Move the agent at `from` to a uniformly random free cell, returning
    /// the destination.
    ///
    /// The destination is drawn *before* the vacated cell rejoins the pool,
    /// so an agent never "relocates" back onto the cell it just left.
    /// O(1) amortized — this is the hottest path of an unhappy-dominated
    /// pass, with close to one call per cell.
    ///
    /// # Errors
    ///
    /// `InvariantViolation` if `from` holds no agent or the free pool is
    /// empty.  Neither is reachable through `populate` + `sweep`: the pool
    /// size is fixed after population and population rejects an empty pool.
    pub fn relocate(&mut self, from: Coord) -> ModelResult<Coord> {
        if from.x >= self.width || from.y >= self.height {
            return Err(ModelError::InvariantViolation(format!(
                "relocate from {from}: outside {}x{} board",
                self.width, self.height
            )));
        }
        let from_idx = from.index(self.width);
        let mut agent = self.cells[from_idx]
            .take()
            .ok_or_else(|| {
                ModelError::InvariantViolation(format!("relocate from {from}: cell is empty"))
            })?;

        let Some(dest) = self.free.take_random(&mut self.rng) else {
            // Restore the agent so a failed call leaves the board intact.
            self.cells[from_idx] = Some(agent);
            return Err(ModelError::InvariantViolation(
                "relocate with an empty free-cell pool".into(),
            ));
        };
        self.free.insert(from);

        agent.position = dest;
        self.cells[dest.index(self.width)] = Some(agent);
        Ok(dest)
    }

    // ── Sweep ─────────────────────────────────────────────────────────────

    /// One full pass: scan every cell in row-major order, evaluate each
    /// occupant against its neighborhood, relocate it immediately if
    /// unsatisfied.  Returns the number of relocations.
    ///
    /// Mutation is interleaved by contract: an agent relocated early in the
    /// pass changes what later cells in the *same* pass see, and an agent
    /// that lands on a not-yet-scanned cell is evaluated again at its new
    /// position.  A snapshot-then-apply batch variant would be a different
    /// model, not an optimization of this one.
    pub fn sweep(&mut self) -> ModelResult<usize> {
        let mut moved = 0;
        for idx in 0..self.area() {
            let coord = Coord::from_index(idx, self.width);
            let satisfied = match self.cells[idx].as_ref() {
                None        => continue,
                Some(agent) => agent.is_satisfied(&self.neighbors_of(coord)),
            };
            if !satisfied {
                self.relocate(coord)?;
                moved += 1;
            }
        }
        Ok(moved)
    }

    // ── Snapshot ──────────────────────────────────────────────────────────

    /// Export the occupancy as a grid of group ids with `-1` for empty
    /// cells — the seam consumed by external renderers.
    pub fn snapshot(&self) -> Snapshot {
        let cells = self
            .cells
            .iter()
            .map(|c| match c {
                Some(agent) => agent.group.as_snapshot_cell(),
                None        => GroupId::EMPTY_CELL,
            })
            .collect();
        Snapshot::new(self.width, self.height, cells)
    }
}
