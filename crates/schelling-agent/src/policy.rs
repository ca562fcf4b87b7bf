//! Similarity policies — the strategy seam for "who counts as alike".
//!
//! Each agent carries one policy, selected when the agent is built, and the
//! happiness evaluator dispatches through it.  Adding an axis means adding a
//! variant here, not threading conditionals through the board.

use crate::Agent;

/// Which attribute axis two agents are compared on.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimilarityPolicy {
    /// Agents are alike when their group ids match.  The classic racial
    /// axis of the model, and the default.
    #[default]
    GroupEquality,

    /// Agents are alike when their income bands match.
    IncomeEquality,

    /// Agents are alike when their academic bands match.
    AcademicEquality,
}

impl SimilarityPolicy {
    /// `true` if `a` and `b` are alike on this policy's axis.
    ///
    /// The comparison uses the policy of the agent doing the judging
    /// (`a`), so mixed-policy populations are well defined: each agent
    /// evaluates its neighborhood on its own axis.
    #[inline]
    pub fn is_like(self, a: &Agent, b: &Agent) -> bool {
        match self {
            SimilarityPolicy::GroupEquality => a.group == b.group,
            SimilarityPolicy::IncomeEquality => a.income == b.income,
            SimilarityPolicy::AcademicEquality => a.academic == b.academic,
        }
    }
}
