//! Source of randomness for placement and enemy movement.

use rand::{rngs::SmallRng, Rng};

/// Anything that can hand out uniformly distributed integers.
pub trait RandomSource {
    /// Next value in `0..upper`. `upper` is always non-zero.
    fn next_in_range(&mut self, upper: usize) -> usize;
}

impl RandomSource for SmallRng {
    fn next_in_range(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, upper: usize) -> usize {
        (**self).next_in_range(upper)
    }
}

/// A `SmallRng` seeded from the thread RNG, so every run differs.
#[cfg(feature = "std")]
pub fn unseeded_rng() -> SmallRng {
    use rand::SeedableRng;

    let mut seed_rng = rand::rng();
    SmallRng::from_rng(&mut seed_rng)
}
