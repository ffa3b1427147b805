use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform indices for shuffling.
///
/// Sessions take one explicitly so tests can pin the question order.
pub trait RandomSource {
    /// Uniform index in `0..=upper`.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Thread-local RNG seeded by the OS.
#[derive(Debug, Clone)]
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    #[must_use]
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.0.random_range(0..=upper)
    }
}

/// Deterministic RNG; equal seeds give equal shuffles.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.0.random_range(0..=upper)
    }
}

/// Always picks `upper`, so [`shuffle`] leaves the order untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRandom;

impl RandomSource for IdentityRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        upper
    }
}

/// Fisher–Yates shuffle driven by `rng`.
///
/// Walks from the last index down to 1 and swaps each slot with a uniformly
/// chosen slot in `0..=i`, so every permutation is equally likely.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i).min(i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_source_keeps_order() {
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle(&mut items, &mut IdentityRandom);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = ThreadRandom::new();
        for _ in 0..200 {
            let mut items: Vec<u32> = (0..10).collect();
            shuffle(&mut items, &mut rng);
            let mut sorted = items.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut SeededRandom::new(7));
        shuffle(&mut b, &mut SeededRandom::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn every_permutation_of_three_occurs() {
        let mut rng = SeededRandom::new(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut items = [0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn shuffle_handles_empty_and_single() {
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut ThreadRandom::new());
        let mut one = vec![9];
        shuffle(&mut one, &mut ThreadRandom::new());
        assert_eq!(one, vec![9]);
    }
}
