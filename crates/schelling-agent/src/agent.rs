//! The `Agent` — a typed occupant with a satisfaction threshold.

use schelling_core::{Coord, GroupId};

use crate::SimilarityPolicy;

/// One occupant of one board cell.
///
/// An agent is plain data: a categorical group, two secondary attribute
/// bands, a tolerance threshold, a similarity policy, and its current
/// position.  `position` is written only by the board's placement and
/// relocation operations; it always equals the coordinate under which the
/// agent is stored in the occupancy array.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Categorical group (the "race" axis).
    pub group: GroupId,

    /// Income band, compared by [`SimilarityPolicy::IncomeEquality`].
    pub income: u16,

    /// Academic band, compared by [`SimilarityPolicy::AcademicEquality`].
    pub academic: u16,

    /// Minimum fraction of like neighbors required for satisfaction,
    /// in `[0, 1]`.
    pub tolerance: f64,

    /// The comparison strategy this agent judges its neighbors with.
    pub policy: SimilarityPolicy,

    /// Current cell.  Mutated only by the board.
    pub position: Coord,
}

impl Agent {
    /// Full constructor with independent attribute bands.
    pub fn new(
        group:     GroupId,
        income:    u16,
        academic:  u16,
        tolerance: f64,
        policy:    SimilarityPolicy,
        position:  Coord,
    ) -> Self {
        Agent { group, income, academic, tolerance, policy, position }
    }

    /// Convenience constructor deriving both attribute bands from the
    /// group id — the mapping the model's population step uses by default.
    pub fn for_group(
        group:     GroupId,
        tolerance: f64,
        policy:    SimilarityPolicy,
        position:  Coord,
    ) -> Self {
        Agent::new(group, group.0, group.0, tolerance, policy, position)
    }

    /// Similarity contract: `0` if `other` is alike under this agent's
    /// policy, `1` otherwise.
    #[inline]
    pub fn similarity(&self, other: &Agent) -> u8 {
        if self.policy.is_like(self, other) { 0 } else { 1 }
    }

    /// Fraction of `neighbors` that are alike, or `None` for an empty
    /// neighborhood.
    ///
    /// The `None` case is what lets the two aggregate statistics diverge:
    /// a neighborless agent is *satisfied* (see [`is_satisfied`]) but
    /// contributes a like-ratio of zero to the segregation index.
    ///
    /// [`is_satisfied`]: Self::is_satisfied
    pub fn like_fraction(&self, neighbors: &[&Agent]) -> Option<f64> {
        if neighbors.is_empty() {
            return None;
        }
        let like = neighbors
            .iter()
            .filter(|n| self.similarity(n) == 0)
            .count();
        Some(like as f64 / neighbors.len() as f64)
    }

    /// `true` if this agent is content with its neighborhood.
    ///
    /// Zero occupied neighbors is always satisfied — there is no basis for
    /// dissatisfaction — independent of tolerance.  Otherwise the like
    /// fraction must reach the agent's tolerance threshold.
    pub fn is_satisfied(&self, neighbors: &[&Agent]) -> bool {
        match self.like_fraction(neighbors) {
            None           => true,
            Some(fraction) => fraction >= self.tolerance,
        }
    }
}
