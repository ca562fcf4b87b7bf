//! demo-multi — three unevenly sized groups with per-group tolerances,
//! judged on the income axis.
//!
//! Shows the engine features the classic two-group run doesn't touch: a
//! skewed cumulative distribution, different tolerance per group, a
//! non-default similarity policy, and a progress observer printing the
//! per-pass unhappy count.

use std::time::Instant;

use anyhow::Result;

use schelling_agent::SimilarityPolicy;
use schelling_core::GridConfig;
use schelling_grid::PopulateParams;
use schelling_sim::{RunObserver, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:          u32 = 80;
const HEIGHT:         u32 = 80;
const EMPTY_RATIO:    f64 = 0.15;
const SEED:           u64 = 7;
const MAX_ITERATIONS: u64 = 300;

/// Cumulative draw table: 50% group 0, 30% group 1, 20% group 2.
const DISTRIBUTION: [f64; 3] = [0.5, 0.8, 1.0];
/// The minority group is the pickiest.
const TOLERANCES: [f64; 3] = [0.3, 0.5, 0.7];

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter {
    every: u64,
}

impl RunObserver for ProgressPrinter {
    fn on_pass_end(&mut self, pass: u64, relocations: usize) {
        if pass % self.every == 0 {
            println!("pass {pass}: {relocations} unhappy agents relocated");
        }
    }
}

fn main() -> Result<()> {
    let config = GridConfig {
        width:       WIDTH,
        height:      HEIGHT,
        empty_ratio: EMPTY_RATIO,
        seed:        SEED,
    };
    let params = PopulateParams::new(DISTRIBUTION.to_vec(), TOLERANCES.to_vec())
        .with_policy(SimilarityPolicy::IncomeEquality);

    let mut sim = SimBuilder::new(config, params).build()?;

    let counts = sim.board.group_counts();
    let mut groups: Vec<_> = counts.iter().collect();
    groups.sort();
    for (group, count) in groups {
        println!("{group}: {count} agents");
    }
    println!(
        "initial state: {:.1}% happiness, {:.1}% segregation",
        sim.board.happiness_fraction() * 100.0,
        sim.board.segregation_index() * 100.0
    );

    let start = Instant::now();
    let report = sim.run(MAX_ITERATIONS, &mut ProgressPrinter { every: 25 })?;

    println!(
        "{:?} after {} iterations in {:?}",
        report.outcome,
        report.iterations,
        start.elapsed()
    );
    println!(
        "final state: {:.1}% happiness, {:.1}% segregation",
        report.happiness * 100.0,
        report.segregation * 100.0
    );

    Ok(())
}
