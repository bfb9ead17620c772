//! Ballistic integration for dropped bodies.
//!
//! Horizontal speed bleeds off to wind and never reverses; vertical speed
//! accumulates gravity with no terminal clamp. Each axis is moved on its own
//! and rejected independently when the destination leaves the world.

use glam::{Vec2, Vec3};

use crate::WorldLimits;

/// Hard cap on landing-prediction iterations, whatever the step size.
pub const MAX_PREDICTION_STEPS: usize = 100_000;

/// Per-step forces, already multiplied by the body mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallisticForces {
    /// Horizontal deceleration per unit time.
    pub drag: f32,
    /// Vertical deceleration per unit time.
    pub gravity: f32,
}

impl BallisticForces {
    pub fn new(wind_resistance: f32, gravity: f32, mass: f32) -> Self {
        Self {
            drag: wind_resistance * mass,
            gravity: gravity * mass,
        }
    }
}

/// A falling body carrying the heading it was launched with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallisticBody {
    pub position: Vec3,
    /// Horizontal speed along `heading`.
    pub speed: f32,
    /// Signed vertical speed (negative is falling).
    pub vertical_speed: f32,
    /// Launch heading in degrees; 0 points along +Z.
    pub heading: f32,
}

impl BallisticBody {
    pub fn new(position: Vec3, speed: f32, heading: f32) -> Self {
        Self {
            position,
            speed,
            vertical_speed: 0.0,
            heading,
        }
    }

    /// True while the body is not resting exactly on the floor under it.
    pub fn is_in_flight(&self, limits: &WorldLimits) -> bool {
        self.position.y != limits.floor_height(self.position.x, self.position.z)
    }

    /// Advance by `dt`. A zero or negative step leaves the body untouched.
    pub fn step(&mut self, dt: f32, forces: BallisticForces, limits: &WorldLimits) {
        if dt <= 0.0 {
            return;
        }

        self.speed = (self.speed - forces.drag * dt).max(0.0);
        self.vertical_speed -= forces.gravity * dt;

        if !self.is_in_flight(limits) {
            return;
        }

        let heading = self.heading.to_radians();
        let Vec3 { x, y, z } = self.position;

        let new_x = x + self.speed * heading.sin() * dt;
        if limits.is_within_bounds(new_x, y, z) {
            self.position.x = new_x;
        } else {
            log::trace!("Body X step to {new_x:.2} rejected");
        }

        let new_z = z + self.speed * heading.cos() * dt;
        if limits.is_within_bounds(self.position.x, y, new_z) {
            self.position.z = new_z;
        } else {
            log::trace!("Body Z step to {new_z:.2} rejected");
        }

        let new_y = y + self.vertical_speed * dt;
        let floor = limits.floor_height(self.position.x, self.position.z);
        self.position.y = if new_y >= floor { new_y } else { floor };
    }

    /// Step a copy of this body until it rests on the floor and return where
    /// it lands on the XZ plane. Gives up after `max_steps` iterations and
    /// returns the last position reached.
    pub fn predict_landing(
        &self,
        dt: f32,
        forces: BallisticForces,
        limits: &WorldLimits,
        max_steps: usize,
    ) -> Vec2 {
        let mut probe = *self;
        if dt > 0.0 {
            for _ in 0..max_steps.min(MAX_PREDICTION_STEPS) {
                if !probe.is_in_flight(limits) {
                    break;
                }
                probe.step(dt, forces, limits);
            }
        }
        Vec2::new(probe.position.x, probe.position.z)
    }
}
