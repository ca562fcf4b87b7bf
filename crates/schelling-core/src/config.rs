//! Board configuration.

use crate::{ModelError, ModelResult};

/// Validated parameters for constructing a board.
///
/// Typically built inline by the application and handed to
/// `Board::new`, which calls [`validate`](Self::validate) before
/// allocating anything.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Board width in cells.  Must be positive.
    pub width: u32,

    /// Board height in cells.  Must be positive.
    pub height: u32,

    /// Fraction of cells left unoccupied, in `[0, 1)`.
    ///
    /// A ratio of exactly `0.0` passes validation (the bound is on the
    /// interval, not on usefulness) but population will refuse it: a board
    /// with no free cells has no relocation targets.
    pub empty_ratio: f64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl GridConfig {
    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of cells that population will leave free:
    /// `ceil(width * height * empty_ratio)`.
    #[inline]
    pub fn free_cell_target(&self) -> usize {
        (self.area() as f64 * self.empty_ratio).ceil() as usize
    }

    /// Reject non-positive dimensions and out-of-range ratios.
    ///
    /// NaN fails the range check like any other out-of-range value.
    pub fn validate(&self) -> ModelResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ModelError::InvalidConfig(format!(
                "board dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..1.0).contains(&self.empty_ratio) {
            return Err(ModelError::InvalidConfig(format!(
                "empty_ratio must be in [0, 1), got {}",
                self.empty_ratio
            )));
        }
        Ok(())
    }
}
