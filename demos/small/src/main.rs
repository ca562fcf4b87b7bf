//! demo-small — the classic two-group run of the schelling segregation
//! engine.
//!
//! 100x100 board, 10% vacancy, two evenly drawn groups, tolerance 0.5.
//! Prints the initialization and run timings plus the happiness and
//! segregation statistics before and after, and writes the CSV output
//! files next to the binary in `./output/`.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use schelling_core::GridConfig;
use schelling_grid::PopulateParams;
use schelling_output::{CsvWriter, RunOutputObserver};
use schelling_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:          u32 = 100;
const HEIGHT:         u32 = 100;
const EMPTY_RATIO:    f64 = 0.10;
const TOLERANCE:      f64 = 0.5;
const SEED:           u64 = 42;
const MAX_ITERATIONS: u64 = 500;
const OUTPUT_DIR: &str = "output";

fn main() -> Result<()> {
    let config = GridConfig {
        width:       WIDTH,
        height:      HEIGHT,
        empty_ratio: EMPTY_RATIO,
        seed:        SEED,
    };

    let init_start = Instant::now();
    let mut sim = SimBuilder::new(config, PopulateParams::uniform(2, TOLERANCE))
        .snapshot_interval(50)
        .build()?;
    println!("initialization took {:?}", init_start.elapsed());

    println!(
        "initial state: {:.1}% happiness, {:.1}% segregation",
        sim.board.happiness_fraction() * 100.0,
        sim.board.segregation_index() * 100.0
    );

    fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut observer = RunOutputObserver::new(writer);

    let run_start = Instant::now();
    let report = sim.run(MAX_ITERATIONS, &mut observer)?;
    let run_elapsed = run_start.elapsed();

    if let Some(e) = observer.take_error() {
        eprintln!("output error: {e}");
    }

    println!(
        "run took {:?} ({} iterations, {:?} per iteration)",
        run_elapsed,
        report.iterations,
        run_elapsed / report.iterations.max(1) as u32
    );
    println!(
        "final state: {:.1}% happiness, {:.1}% segregation, {} relocations, {:?}",
        report.happiness * 100.0,
        report.segregation * 100.0,
        report.relocations,
        report.outcome
    );

    Ok(())
}
