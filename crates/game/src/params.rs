//! Tunable simulation parameters.
//!
//! Everything here can be edited live and through `config.ron`; the
//! simulation reads the record every tick and never caches derived values.

use serde::{Deserialize, Serialize};

/// Helicopter body dimensions. The body is an ellipsoid stretched along Z.
pub const BODY_DIAMETER: f32 = 5.0;
pub const BODY_X: f32 = BODY_DIAMETER / 3.0;
pub const BODY_Y: f32 = BODY_DIAMETER / 2.2;
pub const BODY_Z: f32 = BODY_DIAMETER;

/// Leg strut geometry.
pub const LEG_ANGLE_Y: f32 = 30.0;
pub const LEG_ANGLE_Z: f32 = 60.0;
pub const LEG_X: f32 = 1.2;
pub const LEG_Y: f32 = 1.0 / 7.0;
pub const LEG_Z: f32 = 1.0 / 4.0;
pub const FEET_X: f32 = 1.0 / 4.0;
pub const FEET_Y: f32 = 1.0 / 4.0;
pub const FEET_Z: f32 = BODY_Z;

/// Vertical distance from the skids to the body centre.
pub fn bottom_to_center() -> f32 {
    BODY_Y / 2.0 + (LEG_ANGLE_Y.to_radians().cos() * LEG_Y + FEET_Y) / 1.2
}

/// Eye height above the skids for the cockpit camera.
pub const COCKPIT_EYE_HEIGHT: f32 = BODY_Y + LEG_Y + FEET_Y + 0.5 + 1.5;

/// Rotor speed needed before the helicopter can climb.
pub const FLYING_ROTOR_SPEED: f32 = 1300.0;
pub const ROTOR_SPOOL_STEP: f32 = 50.0;
pub const ROTOR_DECAY_DIVISOR: f32 = 70.0;
pub const ROTOR_STOP_THRESHOLD: f32 = 0.03;
pub const MAX_ATTACK_ANGLE: f32 = 30.0;
pub const BRAKE_STEP: f32 = 1.0;
/// Yaw-induced acceleration factor.
pub const YAW_THRUST: f32 = 0.3;

/// Adjustable parameters, edited at runtime or loaded from config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Uniform scale applied to the whole scene.
    pub world_scale: f32,
    pub gravity: f32,
    pub wind_resistance: f32,
    /// When false the sun stays where it is.
    pub day_night_cycle: bool,
    /// Uniform scale of the helicopter assembly.
    pub helicopter_scale: f32,
    /// Axonometric camera yaw, degrees.
    pub camera_theta: f32,
    /// Axonometric camera elevation, degrees.
    pub camera_gamma: f32,

    pub helicopter_mass: f32,
    pub crate_mass: f32,
    pub orbit_radius: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    /// Full yaw step; one key action turns by half of it.
    pub yaw_step: f32,
    pub climb_step: f32,
    pub crate_size: f32,
    /// Minimum distance between predicted landing points of two crates.
    pub crate_overlap_radius: f32,
    /// Seconds a crate lives after being dropped.
    pub despawn_timeout: f32,
    /// Degrees per second the sun travels.
    pub sun_speed: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            world_scale: 1.0,
            gravity: 9.8,
            wind_resistance: 0.5,
            day_night_cycle: true,
            helicopter_scale: 1.0,
            camera_theta: 45.0,
            camera_gamma: 35.26439,
            helicopter_mass: 100.0,
            crate_mass: 7.0,
            orbit_radius: 70.0,
            max_speed: 200.0,
            acceleration: 1.6,
            yaw_step: 7.0,
            climb_step: 0.2,
            crate_size: 3.5,
            crate_overlap_radius: 3.5,
            despawn_timeout: 5.0,
            sun_speed: 10.0,
        }
    }
}

impl SimParams {
    /// Pitch tilt in degrees for a given forward speed.
    pub fn pitch_for_speed(&self, speed: f32) -> f32 {
        if self.max_speed <= 0.0 {
            return 0.0;
        }
        MAX_ATTACK_ANGLE * (speed / self.max_speed).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_keeps_defaults() {
        let params: SimParams = ron::from_str("(gravity: 0.0, orbit_radius: 50.0)").unwrap();
        assert_eq!(params.gravity, 0.0);
        assert_eq!(params.orbit_radius, 50.0);
        assert_eq!(params.crate_mass, 7.0);
        assert_eq!(params.despawn_timeout, 5.0);
    }

    #[test]
    fn pitch_saturates_at_max_attack() {
        let params = SimParams::default();
        assert_eq!(params.pitch_for_speed(0.0), 0.0);
        assert!((params.pitch_for_speed(100.0) - 15.0).abs() < 1e-5);
        assert_eq!(params.pitch_for_speed(1000.0), MAX_ATTACK_ANGLE);
    }
}
