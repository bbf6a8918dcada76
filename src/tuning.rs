//! Data-driven game balance
//!
//! Everything presentation-independent that a variant might want to tweak:
//! playfield geometry, drop cooldown, spawn bound, and the physics material
//! parameters handed to the bridge.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::physics::Rect;

/// Gameplay and playfield knobs. Defaults reproduce the stock 600x900 board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield width (pixels)
    pub width: f32,
    /// Playfield height (pixels)
    pub height: f32,
    /// Left wall inset (0 = wall at x=0)
    pub wall_left: f32,
    /// Right wall inset (0 = wall at x=width)
    pub wall_right_inset: f32,
    /// Ticks between a release and the next piece arming
    pub cooldown_ticks: u32,
    /// Spawns draw uniformly from ranks `0..spawn_rank_bound`
    pub spawn_rank_bound: u8,
    /// Downward gravity (pixels/s²)
    pub gravity: f32,
    /// Fruit bounce coefficient
    pub restitution: f32,
    /// Fruit surface friction
    pub friction: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            wall_left: 0.0,
            wall_right_inset: 0.0,
            cooldown_ticks: COOLDOWN_TICKS,
            spawn_rank_bound: SPAWN_RANK_BOUND,
            gravity: GRAVITY,
            restitution: FRUIT_RESTITUTION,
            friction: FRUIT_FRICTION,
        }
    }
}

impl Tuning {
    /// x coordinate of the left wall
    pub fn left(&self) -> f32 {
        self.wall_left
    }

    /// x coordinate of the right wall
    pub fn right(&self) -> f32 {
        self.width - self.wall_right_inset
    }

    /// Ceiling sensor region: a band spanning the playfield width near the top
    pub fn ceiling_rect(&self) -> Rect {
        Rect::centered(
            self.width / 2.0,
            CEILING_CENTER_Y,
            self.width,
            CEILING_HEIGHT,
        )
    }
}
