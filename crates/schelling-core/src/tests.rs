//! Unit tests for schelling-core primitives.

#[cfg(test)]
mod coord {
    use crate::Coord;

    #[test]
    fn index_roundtrip() {
        let c = Coord::new(3, 2);
        assert_eq!(c.index(5), 13);
        assert_eq!(Coord::from_index(13, 5), c);
    }

    #[test]
    fn row_major_ordering() {
        // Same row: x decides.  Different rows: y decides.
        assert!(Coord::new(0, 0) < Coord::new(1, 0));
        assert!(Coord::new(4, 0) < Coord::new(0, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(7, 9).to_string(), "(7, 9)");
    }
}

#[cfg(test)]
mod ids {
    use crate::GroupId;

    #[test]
    fn index_and_display() {
        let g = GroupId(3);
        assert_eq!(g.index(), 3);
        assert_eq!(g.to_string(), "GroupId(3)");
    }

    #[test]
    fn snapshot_cell_is_non_negative() {
        assert_eq!(GroupId(0).as_snapshot_cell(), 0);
        assert_eq!(GroupId(7).as_snapshot_cell(), 7);
        assert!(GroupId::EMPTY_CELL < 0);
    }
}

#[cfg(test)]
mod config {
    use crate::GridConfig;

    fn cfg(width: u32, height: u32, empty_ratio: f64) -> GridConfig {
        GridConfig { width, height, empty_ratio, seed: 42 }
    }

    #[test]
    fn accepts_sane_values() {
        assert!(cfg(100, 100, 0.1).validate().is_ok());
        assert!(cfg(1, 1, 0.0).validate().is_ok());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(cfg(0, 10, 0.1).validate().is_err());
        assert!(cfg(10, 0, 0.1).validate().is_err());
    }

    #[test]
    fn rejects_ratio_out_of_range() {
        assert!(cfg(10, 10, 1.0).validate().is_err());
        assert!(cfg(10, 10, -0.01).validate().is_err());
        assert!(cfg(10, 10, f64::NAN).validate().is_err());
    }

    #[test]
    fn free_cell_target_rounds_up() {
        // 3x3 * (1/9) = 1.0 exactly → 1 free cell.
        assert_eq!(cfg(3, 3, 1.0 / 9.0).free_cell_target(), 1);
        // 10x10 * 0.101 = 10.1 → 11 free cells.
        assert_eq!(cfg(10, 10, 0.101).free_cell_target(), 11);
        assert_eq!(cfg(10, 10, 0.0).free_cell_target(), 0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: u64 = r1.random();
        let b: u64 = r2.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0usize..7);
            assert!(v < 7);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
