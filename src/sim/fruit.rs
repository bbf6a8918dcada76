//! Fruit ranks
//!
//! The ordered catalog of fruit kinds. Rank 0 is the smallest; the last rank
//! is terminal and has no successor. Radii strictly increase with rank.

use serde::{Deserialize, Serialize};

/// Radii for ranks 0..=10, smallest to largest
const RADII: [f32; 11] = [
    30.0, 35.0, 40.0, 50.0, 65.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0,
];

/// Largest rank; merging two of these produces nothing
pub const TERMINAL_RANK: u8 = (RADII.len() - 1) as u8;

/// One entry of the rank table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FruitKind {
    pub rank: u8,
    pub radius: f32,
}

impl FruitKind {
    pub fn is_terminal(&self) -> bool {
        self.rank == TERMINAL_RANK
    }
}

/// The rank-0 kind (the initial dropper piece).
pub fn smallest() -> FruitKind {
    FruitKind {
        rank: 0,
        radius: RADII[0],
    }
}

/// Look up a rank; `None` past the terminal rank.
pub fn kind_at(rank: u8) -> Option<FruitKind> {
    RADII.get(rank as usize).map(|&radius| FruitKind { rank, radius })
}

/// The next-larger kind, or `None` at the terminal rank.
pub fn successor(rank: u8) -> Option<FruitKind> {
    kind_at(rank.checked_add(1)?)
}

/// Score awarded for merging a pair of the given rank
pub fn merge_score(rank: u8) -> u32 {
    (rank as u32 + 1) * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radii_strictly_increase() {
        for rank in 1..=TERMINAL_RANK {
            let prev = kind_at(rank - 1).unwrap();
            let cur = kind_at(rank).unwrap();
            assert!(cur.radius > prev.radius, "rank {} not larger", rank);
        }
    }

    #[test]
    fn terminal_rank_has_no_successor() {
        assert!(successor(TERMINAL_RANK).is_none());
        assert!(kind_at(TERMINAL_RANK).unwrap().is_terminal());
    }

    #[test]
    fn every_other_rank_has_a_successor() {
        for rank in 0..TERMINAL_RANK {
            let next = successor(rank).unwrap();
            assert_eq!(next.rank, rank + 1);
        }
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        assert!(kind_at(TERMINAL_RANK + 1).is_none());
        assert!(kind_at(u8::MAX).is_none());
    }

    #[test]
    fn merge_score_scales_with_rank() {
        assert_eq!(merge_score(0), 2);
        assert_eq!(merge_score(1), 4);
        assert_eq!(merge_score(TERMINAL_RANK), 22);
    }
}
