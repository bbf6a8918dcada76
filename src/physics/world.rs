//! Built-in circle physics backend
//!
//! A deliberately small rigid-body world: falling circles inside a walled
//! box, impulse-based contact resolution, and a ceiling sensor. Enough to
//! drive the merge simulation headlessly; a real engine can replace it
//! behind [`PhysicsBridge`] without the sim noticing.

use std::collections::HashSet;

use glam::Vec2;

use super::{BodyId, CollisionEvent, PhysicsBridge, Rect, StepEvents};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
struct Body {
    id: BodyId,
    pos: Vec2,
    vel: Vec2,
    radius: f32,
}

/// Default [`PhysicsBridge`] implementation.
#[derive(Debug, Clone)]
pub struct CircleWorld {
    gravity: f32,
    restitution: f32,
    friction: f32,
    left: f32,
    right: f32,
    floor: f32,
    ceiling: Option<Rect>,
    /// Bodies in creation order (ids are monotonic, so this is id order)
    bodies: Vec<Body>,
    /// Contact pairs seen last step, for contact-start detection
    touching: HashSet<(BodyId, BodyId)>,
    /// Bodies currently inside the sensor region
    in_sensor: HashSet<BodyId>,
    next_id: u32,
}

impl CircleWorld {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            gravity: tuning.gravity,
            restitution: tuning.restitution,
            friction: tuning.friction,
            left: tuning.left(),
            right: tuning.right(),
            floor: tuning.height,
            ceiling: None,
            bodies: Vec::new(),
            touching: HashSet::new(),
            in_sensor: HashSet::new(),
            next_id: 1,
        }
    }

    /// Number of live bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn find(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn integrate(&mut self, dt: f32) {
        for body in &mut self.bodies {
            body.vel.y += self.gravity * dt;
            body.pos += body.vel * dt;
        }
    }

    /// Clamp bodies into the box, reflecting velocity with restitution.
    fn resolve_bounds(&mut self) {
        for body in &mut self.bodies {
            if body.pos.x - body.radius < self.left {
                body.pos.x = self.left + body.radius;
                body.vel.x = -body.vel.x * self.restitution;
            } else if body.pos.x + body.radius > self.right {
                body.pos.x = self.right - body.radius;
                body.vel.x = -body.vel.x * self.restitution;
            }
            if body.pos.y + body.radius > self.floor {
                body.pos.y = self.floor - body.radius;
                if body.vel.y > 0.0 {
                    body.vel.y = -body.vel.y * self.restitution;
                }
                // Surface friction bleeds off horizontal motion on the floor
                body.vel.x *= 1.0 - self.friction;
            }
            if body.pos.y - body.radius < 0.0 {
                body.pos.y = body.radius;
                if body.vel.y < 0.0 {
                    body.vel.y = -body.vel.y * self.restitution;
                }
            }
        }
    }

    /// Separate overlapping pairs and exchange normal impulses.
    ///
    /// Returns the set of pairs in contact after resolution, in body order.
    fn resolve_contacts(&mut self) -> Vec<(BodyId, BodyId, Vec2, Vec2)> {
        let mut contacts = Vec::new();

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (head, tail) = self.bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];

                let delta = b.pos - a.pos;
                let dist = delta.length();
                let min_dist = a.radius + b.radius;
                if dist >= min_dist {
                    continue;
                }

                // Coincident centers: pick an arbitrary but fixed normal
                let normal = if dist > f32::EPSILON {
                    delta / dist
                } else {
                    Vec2::Y
                };

                // Positional correction, split evenly
                let penetration = min_dist - dist;
                a.pos -= normal * (penetration / 2.0);
                b.pos += normal * (penetration / 2.0);

                // Normal impulse (equal masses), only if approaching
                let rel_vel = (b.vel - a.vel).dot(normal);
                if rel_vel < 0.0 {
                    let impulse = -(1.0 + self.restitution) * rel_vel / 2.0;
                    a.vel -= normal * impulse;
                    b.vel += normal * impulse;
                }

                // Tangential friction damping
                let tangent = Vec2::new(-normal.y, normal.x);
                let rel_tangent = (b.vel - a.vel).dot(tangent) * self.friction / 2.0;
                a.vel += tangent * rel_tangent;
                b.vel -= tangent * rel_tangent;

                contacts.push((a.id, b.id, a.pos, b.pos));
            }
        }

        contacts
    }
}

impl PhysicsBridge for CircleWorld {
    fn create_body(&mut self, pos: Vec2, radius: f32) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
        });
        id
    }

    fn destroy_body(&mut self, id: BodyId) {
        self.bodies.retain(|b| b.id != id);
        self.touching.retain(|&(a, b)| a != id && b != id);
        self.in_sensor.remove(&id);
    }

    fn body_position(&self, id: BodyId) -> Option<Vec2> {
        self.find(id).map(|b| b.pos)
    }

    fn set_ceiling_sensor(&mut self, rect: Rect) {
        self.ceiling = Some(rect);
    }

    fn clear_bodies(&mut self) {
        self.bodies.clear();
        self.touching.clear();
        self.in_sensor.clear();
    }

    fn step(&mut self, dt: f32) -> StepEvents {
        self.integrate(dt);
        self.resolve_bounds();
        let contacts = self.resolve_contacts();

        // Contact-start detection: report a pair once, when it first touches
        let mut events = StepEvents::default();
        let mut now_touching = HashSet::with_capacity(contacts.len());
        for (a, b, pos_a, pos_b) in contacts {
            let key = if a <= b { (a, b) } else { (b, a) };
            now_touching.insert(key);
            if !self.touching.contains(&key) {
                events.collisions.push(CollisionEvent { a, b, pos_a, pos_b });
            }
        }
        self.touching = now_touching;

        // Sensor-entry detection
        if let Some(ceiling) = self.ceiling {
            let mut now_inside = HashSet::new();
            for body in &self.bodies {
                if ceiling.overlaps_circle(body.pos, body.radius) {
                    now_inside.insert(body.id);
                    if !self.in_sensor.contains(&body.id) {
                        events.sensor_hits.push(body.id);
                    }
                }
            }
            self.in_sensor = now_inside;
        }

        events
    }
}
