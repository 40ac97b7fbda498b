//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! The engine is a single-threaded event loop (see rday-engine), so one seeded
//! stream is enough: given the same seed and the same configuration, every
//! draw happens at the same point in the event order and a run reproduces
//! bit-for-bit.  `child()` derives independent streams for auxiliary uses
//! (demo warm-up draws, test fixtures) without disturbing the main stream's
//! position.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded simulation RNG.
///
/// Owned by the engine and threaded through every stochastic component
/// (service sampler, arrival generator, USMAPS assignment) in event order.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding auxiliary streams deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`dist.sample(rng.inner())`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
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
