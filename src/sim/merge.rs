//! Merge resolution
//!
//! Consumes one step's collision batch and realizes at most one merge: the
//! first pair of equal-rank fruits wins, the rest of the batch is discarded.
//! Processing the whole batch would double-count when three or more
//! same-rank fruits touch in the same step; clusters instead resolve
//! incrementally, one merge per colliding step.

use glam::Vec2;

use super::fruit;
use super::state::{GameEvent, GameState};
use crate::physics::{CollisionEvent, PhysicsBridge};

/// What a realized merge did (for logging and tests)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeOutcome {
    pub rank: u8,
    pub pos: Vec2,
    /// `None` when two terminal-rank fruits annihilated
    pub result: Option<fruit::FruitKind>,
}

/// Scan the batch in bridge order and realize the first valid merge.
///
/// Pairs referencing untracked bodies or differing ranks are skipped
/// silently; a stale event is harmless and the contact, if real, will be
/// reported again once the bodies touch anew.
pub fn resolve_merges(
    state: &mut GameState,
    bridge: &mut dyn PhysicsBridge,
    collisions: &[CollisionEvent],
) -> Option<MergeOutcome> {
    for pair in collisions {
        let (Some(kind_a), Some(kind_b)) = (state.kind_of(pair.a), state.kind_of(pair.b)) else {
            continue;
        };
        if kind_a.rank != kind_b.rank {
            continue;
        }
        // Defensive: a tracked rank outside the table means the tags are
        // inconsistent; skip rather than crash.
        if fruit::kind_at(kind_a.rank).is_none() {
            continue;
        }

        let rank = kind_a.rank;
        // The second body's position survives (fixed tie-break)
        let pos = bridge.body_position(pair.b).unwrap_or(pair.pos_b);

        state.score += fruit::merge_score(rank);
        state.untrack(pair.a);
        state.untrack(pair.b);
        bridge.destroy_body(pair.a);
        bridge.destroy_body(pair.b);

        let result = fruit::successor(rank);
        if let Some(next) = result {
            let body = bridge.create_body(pos, next.radius);
            state.track(body, next);
        }

        log::debug!(
            "merge: rank {} at ({:.1}, {:.1}) -> {:?}, score {}",
            rank,
            pos.x,
            pos.y,
            result.map(|k| k.rank),
            state.score
        );
        state.push_event(GameEvent::Merged { pos, result });

        // At most one merge per step; remaining pairs wait for a later step
        return Some(MergeOutcome { rank, pos, result });
    }
    None
}
