//! `schelling-sim` — iteration loop orchestrator for the schelling
//! segregation engine.
//!
//! # The pass loop
//!
//! ```text
//! for pass in 1..=max_iterations:
//!   ① Sweep     — Board::sweep: row-major scan, unhappy agents relocate
//!                 immediately (interleaved mutation).
//!   ② Observe   — on_pass_end(pass, relocations); optional on_snapshot.
//!   ③ Converge? — a pass with zero relocations ends the run early.
//! ```
//!
//! The loop is strictly sequential: relocations within a pass feed the
//! evaluations of later cells in the same pass, so there is nothing safe to
//! parallelize here.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use schelling_grid::PopulateParams;
//! use schelling_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, PopulateParams::uniform(2, 0.5)).build()?;
//! let report = sim.run(500, &mut NoopObserver)?;
//! println!("{} iterations, {:?}", report.iterations, report.outcome);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use sim::{RunOutcome, RunReport, Sim};
