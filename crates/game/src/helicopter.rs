//! Helicopter flight model.
//!
//! Two flight modes share one state: manual flight follows the operator's
//! heading and speed, automatic flight orbits the city centre at a fixed
//! radius. Either way the helicopter is airborne only while it is above the
//! floor under it, and every move is checked against [`WorldLimits`] before
//! it is committed.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec2, Vec3};
use input::ControlInput;
use physics::WorldLimits;

use crate::params::{
    SimParams, BRAKE_STEP, FLYING_ROTOR_SPEED, ROTOR_DECAY_DIVISOR, ROTOR_SPOOL_STEP, ROTOR_STOP_THRESHOLD,
    YAW_THRUST,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightMode {
    Manual,
    #[default]
    Automatic,
}

impl FlightMode {
    pub fn toggled(self) -> Self {
        match self {
            FlightMode::Manual => FlightMode::Automatic,
            FlightMode::Automatic => FlightMode::Manual,
        }
    }
}

/// Kinematic state of the helicopter. `position.y` is the skid height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelicopterState {
    pub position: Vec3,
    /// Heading in degrees; 0 flies along +Z. In automatic mode this is also
    /// the orbit angle.
    pub yaw: f32,
    pub speed: f32,
    pub rotor: f32,
    /// Hover wobble around the body axis, degrees.
    pub roll: f32,
    pub mode: FlightMode,
}

/// Point on the orbit circle for an orbit angle in degrees.
pub fn orbit_point(angle: f32, radius: f32) -> Vec2 {
    let a = angle.to_radians() - FRAC_PI_2;
    Vec2::new(a.sin() * radius, a.cos() * radius)
}

impl HelicopterState {
    /// Parked on the orbit circle at angle 0.
    pub fn initial(mode: FlightMode, radius: f32) -> Self {
        let start = orbit_point(0.0, radius);
        Self {
            position: Vec3::new(start.x, 0.0, start.y),
            yaw: 0.0,
            speed: 0.0,
            rotor: 0.0,
            roll: 0.0,
            mode,
        }
    }
}

/// Owns the helicopter and advances it once per tick.
#[derive(Debug, Clone)]
pub struct FlightModel {
    state: HelicopterState,
}

impl FlightModel {
    pub fn new(params: &SimParams) -> Self {
        Self {
            state: HelicopterState::initial(FlightMode::default(), params.orbit_radius),
        }
    }

    pub fn state(&self) -> &HelicopterState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut HelicopterState {
        &mut self.state
    }

    pub fn mode(&self) -> FlightMode {
        self.state.mode
    }

    pub fn is_airborne(&self, limits: &WorldLimits) -> bool {
        let p = self.state.position;
        limits.is_airborne(p.x, p.y, p.z)
    }

    /// Body pitch for the current speed, degrees.
    pub fn pitch_tilt(&self, params: &SimParams) -> f32 {
        params.pitch_for_speed(self.state.speed)
    }

    pub fn hover_roll(&self) -> f32 {
        self.state.roll
    }

    /// Back to the parked pose, keeping the flight mode.
    pub fn reset(&mut self, params: &SimParams) {
        self.state = HelicopterState::initial(self.state.mode, params.orbit_radius);
    }

    /// Switch between manual and automatic flight. The pose is reset.
    pub fn toggle_mode(&mut self, params: &SimParams) -> FlightMode {
        let mode = self.state.mode.toggled();
        self.state = HelicopterState::initial(mode, params.orbit_radius);
        log::info!("Flight mode: {:?}", mode);
        mode
    }

    /// Integrate one tick.
    pub fn advance(&mut self, dt: f32, time: f32, limits: &WorldLimits, params: &SimParams) {
        let airborne = self.is_airborne(limits);
        let s = &mut self.state;

        // Hover bob
        let Vec3 { x, y, z } = s.position;
        if airborne && limits.is_within_bounds(x, y, z) {
            let wobble = (time * PI).sin();
            s.position.y = (y + wobble / 90.0).max(limits.floor_height(x, z));
            s.roll = params.wind_resistance / 10.0 * wobble;
        } else {
            s.roll = 0.0;
        }

        match (s.mode, airborne) {
            (FlightMode::Automatic, true) => {
                if s.speed > 0.0 {
                    let radius = params.orbit_radius;
                    let yaw = s.yaw + 180.0 * s.speed * dt / (radius * PI);
                    let next = orbit_point(yaw, radius);
                    if limits.is_within_bounds(next.x, s.position.y, next.y) {
                        s.yaw = yaw;
                        s.position.x = next.x;
                        s.position.z = next.y;
                    } else {
                        log::trace!("Orbit step to ({:.2}, {:.2}) blocked", next.x, next.y);
                    }
                }
            }
            // Manual flight, and any grounded helicopter still carrying speed.
            _ => step_along_heading(s, dt, limits),
        }

        let p = s.position;
        if !limits.is_airborne(p.x, p.y, p.z) {
            s.rotor -= s.rotor / ROTOR_DECAY_DIVISOR;
            if s.rotor < ROTOR_STOP_THRESHOLD {
                s.rotor = 0.0;
            }
        }

        let drag = params.wind_resistance * params.helicopter_mass * dt;
        s.speed = if s.speed - drag >= 0.0 { s.speed - drag } else { 0.0 };
    }

    /// Apply the operator's held flight actions for this tick.
    pub fn apply_controls(&mut self, controls: &ControlInput, limits: &WorldLimits, params: &SimParams, dt: f32) {
        let airborne = self.is_airborne(limits);
        let s = &mut self.state;
        let below_max = |speed: f32| speed < params.max_speed;

        if controls.throttle_up {
            if s.rotor < FLYING_ROTOR_SPEED {
                s.rotor += ROTOR_SPOOL_STEP;
            } else {
                let Vec3 { x, y, z } = s.position;
                if limits.is_within_bounds(x, y + params.climb_step, z) {
                    s.position.y = y + params.climb_step;
                }
            }
        }

        if controls.descend {
            let Vec3 { x, y, z } = s.position;
            s.position.y = if limits.is_within_bounds(x, y - params.climb_step, z) {
                y - params.climb_step
            } else {
                limits.floor_height(x, z)
            };
        }

        if controls.brake {
            s.speed = (s.speed - BRAKE_STEP).max(0.0);
        }

        if !airborne {
            return;
        }

        match s.mode {
            FlightMode::Manual => {
                if controls.accelerate && below_max(s.speed) {
                    s.speed += params.acceleration;
                }
                for (held, sign) in [(controls.yaw_left, 1.0), (controls.yaw_right, -1.0)] {
                    if held {
                        s.yaw += sign * params.yaw_step / 2.0;
                        if below_max(s.speed) {
                            s.speed += YAW_THRUST * dt * params.yaw_step * params.yaw_step;
                        }
                    }
                }
            }
            FlightMode::Automatic => {
                if controls.orbit_accelerate && below_max(s.speed) {
                    s.speed += params.acceleration;
                }
            }
        }
    }
}

/// Move along the heading one axis at a time, Z first, each axis gated on
/// its own. A stopped rotor leaves the helicopter resting on the floor.
fn step_along_heading(s: &mut HelicopterState, dt: f32, limits: &WorldLimits) {
    let heading = s.yaw.to_radians();
    let Vec3 { x, y, z } = s.position;

    let new_z = z + s.speed * dt * heading.cos();
    if limits.is_within_bounds(x, y, new_z) {
        s.position.z = new_z;
    } else {
        log::trace!("Z step to {new_z:.2} rejected");
    }

    let new_x = x + s.speed * dt * heading.sin();
    if limits.is_within_bounds(new_x, y, s.position.z) {
        s.position.x = new_x;
    } else {
        log::trace!("X step to {new_x:.2} rejected");
    }

    if s.rotor == 0.0 {
        s.position.y = limits.floor_height(s.position.x, s.position.z);
    }
}
