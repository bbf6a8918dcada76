//! Physics bridge seam
//!
//! The simulation does not own rigid-body dynamics. It issues body
//! create/destroy commands through [`PhysicsBridge`] and consumes the
//! per-step [`StepEvents`] batch the bridge reports back. Any engine that
//! can simulate falling circles fits behind the trait; [`CircleWorld`] is
//! the built-in backend used by the demo binary and the scenario tests.

pub mod world;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use world::CircleWorld;

/// Opaque handle to a physics body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Axis-aligned rectangle (used for the ceiling sensor region)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Rect {
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(cx, cy),
            half_extents: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    pub fn max_x(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    pub fn min_y(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    pub fn max_y(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Whether a circle at `pos` with `radius` overlaps this rect
    pub fn overlaps_circle(&self, pos: Vec2, radius: f32) -> bool {
        let closest = pos.clamp(
            self.center - self.half_extents,
            self.center + self.half_extents,
        );
        pos.distance_squared(closest) <= radius * radius
    }
}

/// One newly started contact between two bodies.
///
/// Positions are the bodies' centers at the step the contact began; the
/// simulation uses `pos_b` as the surviving position when the pair merges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub a: BodyId,
    pub b: BodyId,
    pub pos_a: Vec2,
    pub pos_b: Vec2,
}

/// Everything a bridge reports for one simulation step.
///
/// Collision events are contact-*start* events: a pair resting in contact is
/// reported once, when the contact begins (Matter-style `collisionstart`).
#[derive(Debug, Clone, Default)]
pub struct StepEvents {
    pub collisions: Vec<CollisionEvent>,
    /// Bodies that entered the ceiling sensor region this step
    pub sensor_hits: Vec<BodyId>,
}

/// External physics collaborator.
///
/// The simulation is single-threaded and tick-driven: it calls `step` once
/// per tick and reacts to the returned batch before the next step.
pub trait PhysicsBridge {
    /// Create a dynamic circular body at `pos`; returns its handle.
    fn create_body(&mut self, pos: Vec2, radius: f32) -> BodyId;

    /// Remove a body. Unknown handles are ignored.
    fn destroy_body(&mut self, id: BodyId);

    /// Position of a live body, if it exists.
    fn body_position(&self, id: BodyId) -> Option<Vec2>;

    /// Install or move the ceiling sensor region.
    fn set_ceiling_sensor(&mut self, rect: Rect);

    /// Remove every dynamic body (full board reset; the sensor stays).
    fn clear_bodies(&mut self);

    /// Advance the simulation by `dt` seconds and report what happened.
    fn step(&mut self, dt: f32) -> StepEvents;
}
