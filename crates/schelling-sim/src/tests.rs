//! Integration tests for the run loop.

use schelling_agent::{Agent, SimilarityPolicy};
use schelling_core::{Coord, GridConfig, GroupId};
use schelling_grid::{Board, PopulateParams};

use crate::{NoopObserver, RunObserver, RunOutcome, RunReport, Sim, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cfg(width: u32, height: u32, empty_ratio: f64, seed: u64) -> GridConfig {
    GridConfig { width, height, empty_ratio, seed }
}

fn agent(group: u16, tolerance: f64, x: u32, y: u32) -> Agent {
    Agent::for_group(
        GroupId(group),
        tolerance,
        SimilarityPolicy::GroupEquality,
        Coord::new(x, y),
    )
}

/// 2x2 board whose single intolerant agent can never settle: two content
/// group-0 agents plus one group-1 agent with full tolerance, one free
/// cell.  Every cell of a 2x2 board neighbors every other.
fn never_converging_sim() -> Sim {
    let mut board = Board::new(&cfg(2, 2, 0.25, 1)).unwrap();
    board.place(agent(0, 0.0, 0, 0)).unwrap();
    board.place(agent(0, 0.0, 1, 0)).unwrap();
    board.place(agent(1, 1.0, 1, 1)).unwrap();
    Sim::new(board)
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_a_populated_sim() {
        let sim = SimBuilder::new(cfg(10, 10, 0.1, 42), PopulateParams::uniform(2, 0.5))
            .build()
            .unwrap();
        assert!(sim.board.is_populated());
        assert_eq!(sim.board.free_count(), 10);
        assert_eq!(sim.snapshot_interval, 0);
    }

    #[test]
    fn invalid_config_propagates() {
        let result =
            SimBuilder::new(cfg(0, 10, 0.1, 42), PopulateParams::uniform(2, 0.5)).build();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_distribution_propagates() {
        let params = PopulateParams::new(vec![0.4, 0.9], vec![0.5, 0.5]);
        assert!(SimBuilder::new(cfg(10, 10, 0.1, 42), params).build().is_err());
    }

    #[test]
    fn snapshot_interval_is_stored() {
        let sim = SimBuilder::new(cfg(5, 5, 0.2, 42), PopulateParams::uniform(2, 0.5))
            .snapshot_interval(3)
            .build()
            .unwrap();
        assert_eq!(sim.snapshot_interval, 3);
    }
}

// ── Run semantics ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_zero_scans_nothing_and_changes_nothing() {
        let mut sim = SimBuilder::new(cfg(8, 8, 0.1, 42), PopulateParams::uniform(2, 0.9))
            .build()
            .unwrap();
        let before = sim.snapshot();
        let report = sim.run(0, &mut NoopObserver).unwrap();
        assert_eq!(report.iterations, 0);
        assert_eq!(report.relocations, 0);
        assert_eq!(report.outcome, RunOutcome::BudgetExhausted);
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn settled_board_converges_on_pass_one() {
        // A single agent has zero neighbors and is satisfied at any
        // tolerance; the first pass finds nothing to do.  The report says
        // 1 — one pass was scanned — not 0.
        let mut board = Board::new(&cfg(5, 5, 0.2, 42)).unwrap();
        board.place(agent(0, 0.0, 2, 2)).unwrap();
        let mut sim = Sim::new(board);

        for budget in [1_u64, 7, 100] {
            let report = sim.run(budget, &mut NoopObserver).unwrap();
            assert_eq!(report.iterations, 1);
            assert_eq!(report.relocations, 0);
            assert!(report.converged());
        }
    }

    #[test]
    fn single_group_board_converges_fully_happy() {
        let mut sim = SimBuilder::new(cfg(10, 10, 0.1, 42), PopulateParams::uniform(1, 1.0))
            .build()
            .unwrap();
        let report = sim.run(50, &mut NoopObserver).unwrap();
        assert!(report.converged());
        assert!(report.iterations <= 50);
        assert_eq!(report.happiness, 1.0);
        assert_eq!(sim.board.happiness_fraction(), 1.0);
    }

    #[test]
    fn budget_exhaustion_reports_the_budget() {
        let mut sim = never_converging_sim();
        let report = sim.run(5, &mut NoopObserver).unwrap();
        assert_eq!(report.iterations, 5);
        assert_eq!(report.outcome, RunOutcome::BudgetExhausted);
        // Pass 1 moves the agent once (it lands on an already-scanned
        // cell); passes 2-5 bounce it out and back within each pass.
        assert_eq!(report.relocations, 1 + 2 * 4);
    }

    #[test]
    fn step_runs_exactly_one_pass() {
        let mut sim = never_converging_sim();
        assert_eq!(sim.step().unwrap(), 1);
        assert_eq!(sim.step().unwrap(), 2);
    }

    #[test]
    fn report_statistics_match_the_board() {
        let mut sim = SimBuilder::new(cfg(10, 10, 0.1, 7), PopulateParams::uniform(2, 0.4))
            .build()
            .unwrap();
        let report = sim.run(200, &mut NoopObserver).unwrap();
        assert_eq!(report.happiness, sim.board.happiness_fraction());
        assert_eq!(report.segregation, sim.board.segregation_index());
        if report.converged() {
            assert_eq!(report.happiness, 1.0);
        }
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    /// Smallest interesting scenario: 3x3, one free cell, two even groups,
    /// full tolerance.  A fixed seed must reproduce the exact same
    /// occupancy after population and after one pass.
    ///
    /// The literal cells pin the rand 0.8 `SmallRng` stream for seed 1234;
    /// they change only if the RNG algorithm or the engine's draw order
    /// changes, and either is worth noticing.
    #[test]
    fn three_by_three_scenario_reproduces_exactly() {
        let config = cfg(3, 3, 1.0 / 9.0, 1234);
        let params = PopulateParams::new(vec![0.5, 1.0], vec![1.0, 1.0]);

        let mut a = SimBuilder::new(config.clone(), params.clone()).build().unwrap();
        let mut b = SimBuilder::new(config, params).build().unwrap();

        let populate_a = a.snapshot();
        assert_eq!(populate_a.occupied_count(), 8);
        assert_eq!(
            populate_a.cells(),
            &[0, -1, 1, 0, 1, 0, 1, 0, 0],
            "occupancy after population"
        );
        assert_eq!(populate_a, b.snapshot());

        let report_a = a.run(1, &mut NoopObserver).unwrap();
        let report_b = b.run(1, &mut NoopObserver).unwrap();
        assert_eq!(report_a.iterations, 1);
        // Eight mixed agents at tolerance 1.0: every one relocates, and the
        // one that lands on a not-yet-scanned cell relocates again.
        assert_eq!(report_a.relocations, 9);
        assert_eq!(report_b.relocations, 9);
        assert_eq!(
            a.snapshot().cells(),
            &[0, 1, 0, 1, 0, 1, 0, 0, -1],
            "occupancy after one pass"
        );
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn full_runs_reproduce_per_seed() {
        let config = cfg(20, 20, 0.12, 99);
        let params = PopulateParams::new(vec![0.4, 1.0], vec![0.5, 0.6]);

        let mut a = SimBuilder::new(config.clone(), params.clone()).build().unwrap();
        let mut b = SimBuilder::new(config, params).build().unwrap();

        let ra = a.run(200, &mut NoopObserver).unwrap();
        let rb = b.run(200, &mut NoopObserver).unwrap();
        assert_eq!(ra.iterations, rb.iterations);
        assert_eq!(ra.relocations, rb.relocations);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn different_seeds_usually_differ() {
        let params = PopulateParams::uniform(2, 0.5);
        let a = SimBuilder::new(cfg(20, 20, 0.1, 1), params.clone()).build().unwrap();
        let b = SimBuilder::new(cfg(20, 20, 0.1, 2), params).build().unwrap();
        // 360 group draws over 400 cells: identical layouts from different
        // seeds would be astronomically unlikely.
        assert_ne!(a.snapshot(), b.snapshot());
    }
}

// ── Observer plumbing ─────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        starts:      u64,
        ends:        u64,
        snapshots:   Vec<u64>,
        relocations: Vec<usize>,
        run_ends:    u64,
        final_report: Option<RunReport>,
    }

    impl RunObserver for Recorder {
        fn on_pass_start(&mut self, _pass: u64) {
            self.starts += 1;
        }
        fn on_pass_end(&mut self, _pass: u64, relocations: usize) {
            self.ends += 1;
            self.relocations.push(relocations);
        }
        fn on_snapshot(&mut self, pass: u64, _board: &Board) {
            self.snapshots.push(pass);
        }
        fn on_run_end(&mut self, report: &RunReport, _board: &Board) {
            self.run_ends += 1;
            self.final_report = Some(report.clone());
        }
    }

    #[test]
    fn every_pass_is_observed_once() {
        let mut sim = never_converging_sim();
        let mut rec = Recorder::default();
        let report = sim.run(6, &mut rec).unwrap();

        assert_eq!(rec.starts, report.iterations);
        assert_eq!(rec.ends, report.iterations);
        assert_eq!(rec.run_ends, 1);
        assert_eq!(
            rec.relocations.iter().map(|&r| r as u64).sum::<u64>(),
            report.relocations
        );
    }

    #[test]
    fn last_pass_of_a_converged_run_reports_zero() {
        let mut sim = SimBuilder::new(cfg(10, 10, 0.1, 42), PopulateParams::uniform(1, 1.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(50, &mut rec).unwrap();
        assert_eq!(rec.relocations.last(), Some(&0));
        assert!(rec.final_report.unwrap().converged());
    }

    #[test]
    fn snapshot_interval_is_honored() {
        let mut sim = never_converging_sim();
        sim.snapshot_interval = 2;
        let mut rec = Recorder::default();
        sim.run(7, &mut rec).unwrap();
        assert_eq!(rec.snapshots, vec![2, 4, 6]);
    }

    #[test]
    fn zero_interval_means_no_snapshots() {
        let mut sim = never_converging_sim();
        let mut rec = Recorder::default();
        sim.run(5, &mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
    }
}
