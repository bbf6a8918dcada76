//! Spawn selection
//!
//! Uniform over the smallest ranks, independent of what is on the board.
//! Seeded Pcg32 so runs are reproducible and tests can fix the sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::fruit::{self, FruitKind};

/// Picks the next droppable fruit kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnSelector {
    seed: u64,
    /// Draws made so far; replayed on deserialize to restore the stream
    draws: u64,
    /// Spawns come from ranks `0..bound`
    bound: u8,
    #[serde(skip, default = "unseeded")]
    rng: Pcg32,
}

fn unseeded() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl SpawnSelector {
    pub fn new(seed: u64, bound: u8) -> Self {
        Self {
            seed,
            draws: 0,
            bound,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next spawn kind.
    pub fn next(&mut self) -> FruitKind {
        self.draws += 1;
        let rank = self.rng.random_range(0..self.bound.max(1));
        // A bound past the table end cannot happen with stock tuning; fall
        // back to the smallest kind rather than panicking.
        fruit::kind_at(rank).unwrap_or_else(fruit::smallest)
    }

    /// Rebuild the RNG stream after deserialization.
    pub fn restore_stream(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        for _ in 0..self.draws {
            let _ = self.rng.random_range(0..self.bound.max(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SPAWN_RANK_BOUND;
    use proptest::prelude::*;

    #[test]
    fn spawns_stay_in_bound_over_many_draws() {
        let mut selector = SpawnSelector::new(42, SPAWN_RANK_BOUND);
        for _ in 0..10_000 {
            let kind = selector.next();
            assert!(kind.rank < SPAWN_RANK_BOUND);
        }
    }

    #[test]
    fn fixed_seed_reproduces_sequence() {
        let mut a = SpawnSelector::new(1234, SPAWN_RANK_BOUND);
        let mut b = SpawnSelector::new(1234, SPAWN_RANK_BOUND);
        for _ in 0..100 {
            assert_eq!(a.next().rank, b.next().rank);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SpawnSelector::new(1, SPAWN_RANK_BOUND);
        let mut b = SpawnSelector::new(2, SPAWN_RANK_BOUND);
        let seq_a: Vec<u8> = (0..32).map(|_| a.next().rank).collect();
        let seq_b: Vec<u8> = (0..32).map(|_| b.next().rank).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn restore_stream_resumes_where_it_left_off() {
        let mut original = SpawnSelector::new(77, SPAWN_RANK_BOUND);
        for _ in 0..13 {
            original.next();
        }

        let mut restored = SpawnSelector::new(77, SPAWN_RANK_BOUND);
        restored.draws = 13;
        restored.restore_stream();

        for _ in 0..50 {
            assert_eq!(original.next().rank, restored.next().rank);
        }
    }

    proptest! {
        #[test]
        fn any_seed_respects_the_bound(seed in any::<u64>()) {
            let mut selector = SpawnSelector::new(seed, SPAWN_RANK_BOUND);
            for _ in 0..64 {
                prop_assert!(selector.next().rank < SPAWN_RANK_BOUND);
            }
        }
    }
}
