//! Fixed timestep simulation tick
//!
//! One tick drives the whole core: pointer tracking, release, the physics
//! step, merge resolution, the ceiling game-over transition, and the
//! cooldown re-arm. Everything is serialized in tick order; there is no
//! other thread of control.

use super::merge::resolve_merges;
use super::state::{Cooldown, GameEvent, GameState, Phase};
use crate::physics::PhysicsBridge;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer x (from mouse/touch); the dropper follows it
    pub pointer_x: Option<f32>,
    /// Release the armed piece (click/tap)
    pub release: bool,
    /// Restart after game over
    pub restart: bool,
}

/// Advance the session by one fixed timestep.
pub fn tick(state: &mut GameState, bridge: &mut dyn PhysicsBridge, input: &TickInput, dt: f32) {
    if state.game_over() {
        // Only the restart affordance is live; everything else is inert
        if input.restart {
            restart(state, bridge);
        }
        return;
    }

    state.time_ticks += 1;

    if let Some(x) = input.pointer_x {
        state.set_pointer_x(x);
    }

    if input.release {
        release(state, bridge);
    }

    let events = bridge.step(dt);

    // Merges first: a merge landing on the same tick as the ceiling contact
    // still counts toward the score the player saw.
    resolve_merges(state, bridge, &events.collisions);

    if !events.sensor_hits.is_empty() {
        game_over(state);
        return;
    }

    advance_cooldown(state);
}

/// Release the armed piece onto the board.
///
/// No-op while unarmed or mid-cooldown; the caller never sees an error.
fn release(state: &mut GameState, bridge: &mut dyn PhysicsBridge) {
    if state.cooldown.is_some() {
        return;
    }
    let Some(piece) = state.dropper.take() else {
        return;
    };

    let pos = piece.pos();
    let body = bridge.create_body(pos, piece.kind.radius);
    state.track(body, piece.kind);
    state.cooldown = Some(Cooldown {
        ticks_left: state.tuning.cooldown_ticks,
        generation: state.generation,
    });

    log::debug!("drop: rank {} at ({:.1}, {:.1})", piece.kind.rank, pos.x, pos.y);
    state.push_event(GameEvent::Dropped {
        kind: piece.kind,
        pos,
    });
}

/// Count the cooldown down and re-arm when it expires.
fn advance_cooldown(state: &mut GameState) {
    let Some(mut cd) = state.cooldown else {
        return;
    };

    // A cooldown scheduled before a restart must not arm a piece into the
    // fresh session.
    if cd.generation != state.generation {
        state.cooldown = None;
        return;
    }

    cd.ticks_left = cd.ticks_left.saturating_sub(1);
    if cd.ticks_left == 0 {
        state.cooldown = None;
        let kind = state.spawner.next();
        state.arm(kind);
    } else {
        state.cooldown = Some(cd);
    }
}

/// Ceiling sensor contact: suspend the session.
fn game_over(state: &mut GameState) {
    state.phase = Phase::GameOver;
    state.dropper = None;
    state.cooldown = None;
    log::info!("game over at score {}", state.score);
    state.push_event(GameEvent::GameOver);
}

/// Full session reset: clear the board, zero the score, re-arm.
pub fn restart(state: &mut GameState, bridge: &mut dyn PhysicsBridge) {
    bridge.clear_bodies();
    state.fruits.clear();
    state.score = 0;
    state.phase = Phase::Playing;
    state.generation = state.generation.wrapping_add(1);
    state.cooldown = None;
    // A restart is a full scene reset, so the dropper starts over with the
    // smallest fruit, just like a fresh session
    state.arm(super::fruit::smallest());
    log::info!("session restarted (generation {})", state.generation);
    state.push_event(GameEvent::Restarted);
}
