//! Fruitfall - a falling-fruit merge game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (drop controller, merge rules, session state)
//! - `physics`: The `PhysicsBridge` seam plus `CircleWorld`, a built-in backend
//! - `tuning`: Data-driven game balance
//!
//! The crate is headless: it consumes collision events from a physics bridge
//! and emits body create/destroy commands plus presentation events. Rendering,
//! input mapping, and visual effects live outside.

pub mod physics;
pub mod sim;
pub mod tuning;

pub use physics::{BodyId, CircleWorld, PhysicsBridge};
pub use sim::{GameEvent, GameState, Phase, TickInput, tick};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Playfield dimensions (pixels, origin top-left, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 900.0;

    /// Ceiling sensor: a static band spanning the top of the playfield
    pub const CEILING_CENTER_Y: f32 = 50.0;
    pub const CEILING_HEIGHT: f32 = 100.0;

    /// The dropper hovers at `radius + DROPPER_Y_OFFSET` below the top edge
    pub const DROPPER_Y_OFFSET: f32 = 110.0;

    /// Delay after a release before the next piece arms (~500 ms at 120 Hz)
    pub const COOLDOWN_TICKS: u32 = 60;

    /// Spawns are drawn uniformly from ranks `0..SPAWN_RANK_BOUND`
    pub const SPAWN_RANK_BOUND: u8 = 5;

    /// Downward gravity (pixels/s²)
    pub const GRAVITY: f32 = 980.0;

    /// Fruit body material parameters
    pub const FRUIT_RESTITUTION: f32 = 0.2;
    pub const FRUIT_FRICTION: f32 = 0.005;
}

/// Clamp `x` so a circle of `radius` stays inside `[left, right]`.
///
/// Total over arbitrary input magnitudes and idempotent.
#[inline]
pub fn clamp_to_span(x: f32, radius: f32, left: f32, right: f32) -> f32 {
    x.clamp(left + radius, right - radius)
}
