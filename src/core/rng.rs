//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for dice and each card deck,
//!   so drawing a card never perturbs the dice sequence
//!
//! ```
//! use rust_monopoly::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut dice = rng.for_context("dice");
//! let mut chance = rng.for_context("chance");
//!
//! let die = dice.gen_range(1..7);
//! assert!((1..=6).contains(&die));
//! let _ = chance.gen_range(0..16);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// Context seeds come from `FxHasher`, whose output does not change
    /// between toolchains, so recorded seeds replay the same game.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Roll a single six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.gen_range(0..1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_die_range() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..600 {
            let die = rng.roll_die();
            assert!((1..=6).contains(&die));
            seen[(die - 1) as usize] = true;
        }

        // Every face shows up over 600 rolls
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_context_streams_differ() {
        let rng = GameRng::new(42);
        let mut dice = rng.for_context("dice");
        let mut chance = rng.for_context("chance");

        let seq1: Vec<_> = (0..10).map(|_| dice.gen_range(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| chance.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut ctx1 = GameRng::new(42).for_context("community_chest");
        let mut ctx2 = GameRng::new(42).for_context("community_chest");

        assert_eq!(ctx1.seed(), ctx2.seed());
        for _ in 0..10 {
            assert_eq!(ctx1.gen_range(0..1000), ctx2.gen_range(0..1000));
        }
    }

    #[test]
    fn test_context_seed_uses_fx_hash() {
        let mut hasher = FxHasher::default();
        42u64.hash(&mut hasher);
        "dice".hash(&mut hasher);

        assert_eq!(GameRng::new(42).for_context("dice").seed(), hasher.finish());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u8> = (0..16).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }
}
