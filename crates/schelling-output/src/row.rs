//! Flat row types shared by all output backends.

/// One row per pass: how much churn the pass produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassSummaryRow {
    pub pass:        u64,
    pub relocations: u64,
}

/// One row per occupied cell per recorded snapshot.
///
/// Free cells are omitted — the consumer reconstructs them from the board
/// dimensions, which keeps snapshot files proportional to the population
/// rather than the area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellSnapshotRow {
    pub pass:  u64,
    pub x:     u32,
    pub y:     u32,
    /// Group id of the occupying agent (always `>= 0` in these rows).
    pub group: i16,
}

/// The single end-of-run row.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummaryRow {
    pub iterations:  u64,
    pub relocations: u64,
    pub converged:   bool,
    /// Fraction of satisfied agents at the end of the run, in `[0, 1]`.
    pub happiness:   f64,
    /// Mean like-neighbor ratio at the end of the run, in `[0, 1]`.
    pub segregation: f64,
}
