//! The sun's orbit and the day/night palette it drives.

use engine_core::Color;

use crate::params::SimParams;

pub const SUN_COLOR: Color = Color::rgb(249, 201, 76);
pub const SUN_SCALE: f32 = 10.0;

/// Colours that change between day and night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenePalette {
    pub sky: Color,
    pub ground: Color,
    pub window: Color,
}

pub const DAY_PALETTE: ScenePalette = ScenePalette {
    sky: Color::rgb(204, 151, 142),
    ground: Color::rgb(100, 139, 20),
    window: Color::rgb(158, 191, 234),
};

pub const NIGHT_PALETTE: ScenePalette = ScenePalette {
    sky: Color::rgb(24, 22, 48),
    ground: Color::rgb(32, 52, 14),
    window: Color::rgb(255, 214, 102),
};

/// Sun position along its circle around the Z axis, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sun {
    angle: f32,
}

impl Sun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self, dt: f32, params: &SimParams) {
        if params.day_night_cycle {
            self.angle += params.sun_speed * dt;
        }
    }

    /// Angle reduced to `[0, 360)`, the value shading uses.
    pub fn light_angle(&self) -> f32 {
        self.angle.rem_euclid(360.0)
    }

    /// The sun orbits from -X, so it is above the horizon for the second half
    /// of each turn.
    pub fn is_day(&self) -> bool {
        (180.0..360.0).contains(&self.light_angle())
    }

    pub fn palette(&self) -> ScenePalette {
        if self.is_day() {
            DAY_PALETTE
        } else {
            NIGHT_PALETTE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun_at(angle: f32) -> Sun {
        Sun { angle }
    }

    #[test]
    fn day_is_the_upper_half_of_the_orbit() {
        assert!(!sun_at(0.0).is_day());
        assert!(!sun_at(90.0).is_day());
        assert!(sun_at(180.0).is_day());
        assert!(sun_at(270.0).is_day());
        assert!(!sun_at(360.0).is_day());
        assert!(sun_at(-45.0).is_day());
        assert_eq!(sun_at(630.0).palette(), DAY_PALETTE);
    }

    #[test]
    fn cycle_toggle_freezes_the_sun() {
        let mut params = SimParams::default();
        let mut sun = Sun::new();
        sun.advance(0.5, &params);
        assert_eq!(sun.angle(), 5.0);

        params.day_night_cycle = false;
        sun.advance(0.5, &params);
        assert_eq!(sun.angle(), 5.0);
    }

    #[test]
    fn light_angle_wraps() {
        assert!((sun_at(725.0).light_angle() - 5.0).abs() < 1e-4);
        assert!((sun_at(-10.0).light_angle() - 350.0).abs() < 1e-4);
    }
}
