//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The engine owns exactly one `SimRng`, seeded once at board construction.
//! Every random decision — free-cell selection, group draws, relocation
//! targets — flows through it in a fixed order, so a given seed always
//! reproduces the same run.  There is no global RNG state anywhere in the
//! engine; tests inject a seed through `GridConfig` and assert on the
//! resulting board directly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Owned, seedable random source for one board.
///
/// The type wraps `SmallRng` — fast, not cryptographic, exactly right for
/// simulation.  It is `Send` but deliberately single-owner: the board holds
/// it by value and all mutation goes through `&mut Board` methods, so there
/// is never a shared-access question to answer.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed
    /// type.  For `f64` this is uniform over `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
