//! Validated population parameters.

use schelling_agent::SimilarityPolicy;
use schelling_core::{ModelError, ModelResult};

/// Inputs for [`Board::populate`][crate::Board::populate].
///
/// `distribution` is a cumulative probability table indexed by group id: a
/// uniform draw `u` in `[0, 1)` selects the smallest index whose cumulative
/// value is `>= u`.  `tolerances` is indexed the same way.  Both tables
/// therefore have one entry per group and must be equal length.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulateParams {
    /// Monotonically non-decreasing cumulative probabilities, final entry
    /// `>= 1.0`.  Example for two even groups: `[0.5, 1.0]`.
    pub distribution: Vec<f64>,

    /// Per-group satisfaction threshold, each in `[0, 1]`.
    pub tolerances: Vec<f64>,

    /// Similarity policy given to every constructed agent.
    pub policy: SimilarityPolicy,
}

impl PopulateParams {
    /// Parameters with the default group-equality policy.
    pub fn new(distribution: Vec<f64>, tolerances: Vec<f64>) -> Self {
        PopulateParams {
            distribution,
            tolerances,
            policy: SimilarityPolicy::default(),
        }
    }

    /// Evenly distributed groups sharing one tolerance.
    pub fn uniform(num_groups: u16, tolerance: f64) -> Self {
        let n = num_groups.max(1) as usize;
        let distribution = (1..=n).map(|i| i as f64 / n as f64).collect();
        PopulateParams::new(distribution, vec![tolerance; n])
    }

    /// Replace the similarity policy.
    pub fn with_policy(mut self, policy: SimilarityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of groups described by these parameters.
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.distribution.len()
    }

    /// Group index for a uniform draw `u` in `[0, 1)`: the smallest index
    /// whose cumulative probability reaches `u`.
    ///
    /// Assumes [`validate`](Self::validate) passed, which guarantees the
    /// final entry covers every possible draw; the fallback to the last
    /// group is unreachable then.
    #[inline]
    pub fn group_for(&self, u: f64) -> usize {
        self.distribution
            .iter()
            .position(|&p| p >= u)
            .unwrap_or(self.distribution.len() - 1)
    }

    /// Reject malformed tables before any agent is placed.
    pub fn validate(&self) -> ModelResult<()> {
        if self.distribution.is_empty() {
            return Err(ModelError::InvalidConfig(
                "type distribution is empty".into(),
            ));
        }
        if self.distribution.len() != self.tolerances.len() {
            return Err(ModelError::InvalidConfig(format!(
                "distribution has {} groups but {} tolerances were given",
                self.distribution.len(),
                self.tolerances.len()
            )));
        }
        let mut prev = 0.0_f64;
        for (i, &p) in self.distribution.iter().enumerate() {
            if !p.is_finite() || p < prev {
                return Err(ModelError::InvalidConfig(format!(
                    "type distribution must be non-decreasing and finite, \
                     broken at index {i} ({p})"
                )));
            }
            prev = p;
        }
        // The last cumulative entry must cover every possible draw.
        if prev < 1.0 {
            return Err(ModelError::InvalidConfig(format!(
                "type distribution must end at 1.0 or above, ends at {prev}"
            )));
        }
        for (i, &t) in self.tolerances.iter().enumerate() {
            if !(0.0..=1.0).contains(&t) {
                return Err(ModelError::InvalidConfig(format!(
                    "tolerance for group {i} must be in [0, 1], got {t}"
                )));
            }
        }
        Ok(())
    }
}
