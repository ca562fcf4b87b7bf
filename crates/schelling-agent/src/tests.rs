//! Unit tests for agents and similarity policies.

use schelling_core::{Coord, GroupId};

use crate::{Agent, SimilarityPolicy};

fn at_origin(group: u16, tolerance: f64, policy: SimilarityPolicy) -> Agent {
    Agent::for_group(GroupId(group), tolerance, policy, Coord::new(0, 0))
}

#[cfg(test)]
mod policy {
    use super::*;

    #[test]
    fn group_equality() {
        let a = at_origin(0, 0.5, SimilarityPolicy::GroupEquality);
        let same = at_origin(0, 0.5, SimilarityPolicy::GroupEquality);
        let other = at_origin(1, 0.5, SimilarityPolicy::GroupEquality);
        assert_eq!(a.similarity(&same), 0);
        assert_eq!(a.similarity(&other), 1);
    }

    #[test]
    fn income_equality_ignores_group() {
        // Different groups, same income band.
        let mut a = at_origin(0, 0.5, SimilarityPolicy::IncomeEquality);
        let mut b = at_origin(1, 0.5, SimilarityPolicy::IncomeEquality);
        a.income = 3;
        b.income = 3;
        assert_eq!(a.similarity(&b), 0);

        b.income = 4;
        assert_eq!(a.similarity(&b), 1);
    }

    #[test]
    fn academic_equality_ignores_group() {
        let mut a = at_origin(0, 0.5, SimilarityPolicy::AcademicEquality);
        let mut b = at_origin(2, 0.5, SimilarityPolicy::AcademicEquality);
        a.academic = 1;
        b.academic = 1;
        assert_eq!(a.similarity(&b), 0);
    }

    #[test]
    fn judging_agent_chooses_the_axis() {
        // a judges on income, b judges on group: asymmetric verdicts are
        // allowed and well defined.
        let mut a = at_origin(0, 0.5, SimilarityPolicy::IncomeEquality);
        let mut b = at_origin(1, 0.5, SimilarityPolicy::GroupEquality);
        a.income = 9;
        b.income = 9;
        assert_eq!(a.similarity(&b), 0);
        assert_eq!(b.similarity(&a), 1);
    }

    #[test]
    fn for_group_derives_bands_from_group() {
        let a = at_origin(5, 0.5, SimilarityPolicy::GroupEquality);
        assert_eq!(a.income, 5);
        assert_eq!(a.academic, 5);
    }
}

#[cfg(test)]
mod satisfaction {
    use super::*;

    #[test]
    fn empty_neighborhood_always_satisfied() {
        // Even a maximally intolerant agent is content alone.
        let a = at_origin(0, 1.0, SimilarityPolicy::GroupEquality);
        assert!(a.is_satisfied(&[]));
        assert!(a.like_fraction(&[]).is_none());
    }

    #[test]
    fn threshold_is_inclusive() {
        let a = at_origin(0, 0.75, SimilarityPolicy::GroupEquality);
        let like = at_origin(0, 0.5, SimilarityPolicy::GroupEquality);
        let unlike = at_origin(1, 0.5, SimilarityPolicy::GroupEquality);

        // 3 of 4 alike = 0.75 — exactly at tolerance, satisfied.
        let neighbors = [&like, &like, &like, &unlike];
        assert!(a.is_satisfied(&neighbors));
        assert_eq!(a.like_fraction(&neighbors), Some(0.75));

        // 2 of 4 alike = 0.5 — below tolerance.
        let neighbors = [&like, &like, &unlike, &unlike];
        assert!(!a.is_satisfied(&neighbors));
    }

    #[test]
    fn zero_tolerance_is_always_satisfied() {
        let a = at_origin(0, 0.0, SimilarityPolicy::GroupEquality);
        let unlike = at_origin(1, 0.5, SimilarityPolicy::GroupEquality);
        assert!(a.is_satisfied(&[&unlike, &unlike, &unlike]));
    }

    #[test]
    fn full_tolerance_needs_unanimity() {
        let a = at_origin(0, 1.0, SimilarityPolicy::GroupEquality);
        let like = at_origin(0, 0.5, SimilarityPolicy::GroupEquality);
        let unlike = at_origin(1, 0.5, SimilarityPolicy::GroupEquality);
        assert!(a.is_satisfied(&[&like, &like]));
        assert!(!a.is_satisfied(&[&like, &unlike]));
    }
}
