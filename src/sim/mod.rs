//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by body id)
//! - No rendering or platform dependencies; physics behind [`crate::physics::PhysicsBridge`]

pub mod fruit;
pub mod merge;
pub mod spawn;
pub mod state;
pub mod tick;

pub use fruit::{FruitKind, TERMINAL_RANK, kind_at, merge_score, successor};
pub use merge::{MergeOutcome, resolve_merges};
pub use spawn::SpawnSelector;
pub use state::{BoardFruit, Cooldown, FallingPiece, GameEvent, GameState, Phase};
pub use tick::{TickInput, restart, tick};
