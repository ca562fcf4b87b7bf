//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `pass_summaries.csv`
//! - `board_snapshots.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CellSnapshotRow, OutputResult, PassSummaryRow, RunSummaryRow};

/// Writes run output to three CSV files.
pub struct CsvWriter {
    passes:    Writer<File>,
    snapshots: Writer<File>,
    summary:   Writer<File>,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut passes = Writer::from_path(dir.join("pass_summaries.csv"))?;
        passes.write_record(["pass", "relocations"])?;

        let mut snapshots = Writer::from_path(dir.join("board_snapshots.csv"))?;
        snapshots.write_record(["pass", "x", "y", "group"])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(["iterations", "relocations", "converged", "happiness", "segregation"])?;

        Ok(Self { passes, snapshots, summary })
    }
}

impl OutputWriter for CsvWriter {
    fn write_pass_summary(&mut self, row: &PassSummaryRow) -> OutputResult<()> {
        self.passes
            .write_record(&[row.pass.to_string(), row.relocations.to_string()])?;
        Ok(())
    }

    fn write_snapshot(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.pass.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.group.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.iterations.to_string(),
            row.relocations.to_string(),
            (row.converged as u8).to_string(),
            row.happiness.to_string(),
            row.segregation.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.passes.flush()?;
        self.snapshots.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
