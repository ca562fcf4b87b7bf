//! Read-only aggregate statistics over the current occupancy.
//!
//! Happiness and segregation answer different questions and treat the
//! neighborless agent differently on purpose: it *is* satisfied (nothing
//! to object to) but its like-neighbor ratio is zero (nothing to cluster
//! with).  Both scans are O(8n) and touch nothing mutable, so the
//! `parallel` feature may fan them out over Rayon without changing any
//! result.

use rustc_hash::FxHashMap;

use schelling_agent::Agent;
use schelling_core::{Coord, GroupId};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::Board;

impl Board {
    /// Fraction of agents currently satisfied, in `[0, 1]`.
    ///
    /// Agents with no occupied neighbors count as satisfied.  An
    /// unpopulated board reports `1.0` (vacuously, everyone is content).
    pub fn happiness_fraction(&self) -> f64 {
        let total = self.occupied_count();
        if total == 0 {
            return 1.0;
        }
        let satisfied = self.count_cells(|board, coord, agent| {
            agent.is_satisfied(&board.neighbors_of(coord)) as usize
        });
        satisfied as f64 / total as f64
    }

    /// Mean like-neighbor ratio across all agents, in `[0, 1]`.
    ///
    /// Agents with no occupied neighbors contribute a ratio of `0` — they
    /// are not clustered with anyone, however satisfied they may be.  An
    /// unpopulated board reports `0.0`.
    pub fn segregation_index(&self) -> f64 {
        let total = self.occupied_count();
        if total == 0 {
            return 0.0;
        }
        let sum: f64 = self.map_cells(|board, coord, agent| {
            agent
                .like_fraction(&board.neighbors_of(coord))
                .unwrap_or(0.0)
        });
        sum / total as f64
    }

    /// Occupied-cell census: how many agents each group currently has.
    pub fn group_counts(&self) -> FxHashMap<GroupId, usize> {
        let mut counts: FxHashMap<GroupId, usize> = FxHashMap::default();
        for agent in self.agents() {
            *counts.entry(agent.group).or_default() += 1;
        }
        counts
    }

    // ── Scan plumbing ─────────────────────────────────────────────────────

    /// Sum `f` over all occupied cells (usize-valued).
    fn count_cells<F>(&self, f: F) -> usize
    where
        F: Fn(&Board, Coord, &Agent) -> usize + Sync,
    {
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.area())
                .filter_map(|idx| {
                    let coord = Coord::from_index(idx, self.width());
                    self.cells[idx].as_ref().map(|a| f(self, coord, a))
                })
                .sum()
        }

        #[cfg(feature = "parallel")]
        {
            (0..self.area())
                .into_par_iter()
                .filter_map(|idx| {
                    let coord = Coord::from_index(idx, self.width());
                    self.cells[idx].as_ref().map(|a| f(self, coord, a))
                })
                .sum()
        }
    }

    /// Sum `f` over all occupied cells (f64-valued).
    fn map_cells<F>(&self, f: F) -> f64
    where
        F: Fn(&Board, Coord, &Agent) -> f64 + Sync,
    {
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.area())
                .filter_map(|idx| {
                    let coord = Coord::from_index(idx, self.width());
                    self.cells[idx].as_ref().map(|a| f(self, coord, a))
                })
                .sum()
        }

        #[cfg(feature = "parallel")]
        {
            (0..self.area())
                .into_par_iter()
                .filter_map(|idx| {
                    let coord = Coord::from_index(idx, self.width());
                    self.cells[idx].as_ref().map(|a| f(self, coord, a))
                })
                .sum()
        }
    }
}
