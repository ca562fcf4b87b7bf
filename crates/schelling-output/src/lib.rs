//! `schelling-output` — run output writers for the schelling segregation
//! engine.
//!
//! The CSV backend creates three files in the configured directory:
//!
//! | File                  | One row per…                | Written from        |
//! |-----------------------|------------------------------|---------------------|
//! | `pass_summaries.csv`  | pass                         | `on_pass_end`       |
//! | `board_snapshots.csv` | occupied cell per snapshot   | `on_snapshot`       |
//! | `run_summary.csv`     | run (single row)             | `on_run_end`        |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`RunOutputObserver`], which implements `schelling_sim::RunObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use schelling_output::{CsvWriter, RunOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RunOutputObserver::new(writer);
//! sim.run(500, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use row::{CellSnapshotRow, PassSummaryRow, RunSummaryRow};
pub use writer::OutputWriter;
