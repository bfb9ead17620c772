//! The simulation context handed to every per-tick system.

use engine_core::SimClock;
use glam::Vec2;
use input::{CameraSelect, ControlInput, DrawModeSelect};
use physics::{WorldBounds, WorldLimits};
use procgen::CityLayout;
use renderer::{AxonometricAngles, CameraMode, CameraTarget, DrawMode, OrthoPreset, ViewState};

use crate::config::GameConfig;
use crate::helicopter::FlightModel;
use crate::params::{SimParams, BODY_X, BODY_Z, COCKPIT_EYE_HEIGHT};
use crate::sun::Sun;
use crate::supply_crate::CratePool;

/// Everything one tick reads or writes. There is no other mutable state.
#[derive(Debug)]
pub struct SimContext {
    pub clock: SimClock,
    pub params: SimParams,
    pub limits: WorldLimits,
    pub city: CityLayout,
    pub flight: FlightModel,
    pub crates: CratePool,
    pub sun: Sun,
    pub view: ViewState,
    pub draw_mode: DrawMode,
}

impl SimContext {
    pub fn new(config: &GameConfig) -> Self {
        let params = config.params.clone();
        Self {
            clock: SimClock::new(config.time_step),
            limits: WorldLimits::new(WorldBounds::default()),
            city: CityLayout::new(config.city_seed, Vec2::new(BODY_X, BODY_Z)),
            flight: FlightModel::new(&params),
            crates: CratePool::new(),
            sun: Sun::new(),
            view: ViewState::new(),
            draw_mode: DrawMode::default(),
            params,
        }
    }

    /// Draw a new city. The helicopter goes back to its parked pose so it
    /// never starts inside a building.
    pub fn regenerate(&mut self) {
        self.city.regenerate();
        self.flight.reset(&self.params);
    }

    /// Rebuild the per-frame footprint registry from the current city.
    pub fn register_footprints(&mut self) {
        self.limits.clear();
        for footprint in self.city.footprints() {
            self.limits.register_footprint(footprint);
        }
    }

    /// Apply the actions that work whether or not the simulation is paused.
    pub fn apply_view_actions(&mut self, controls: &ControlInput) {
        if controls.toggle_pause {
            let paused = self.clock.toggle_pause();
            log::info!("Simulation {}", if paused { "paused" } else { "resumed" });
        }
        if controls.time_faster {
            self.clock.speed_up();
        }
        if controls.time_slower {
            self.clock.slow_down();
        }

        if let Some(select) = controls.draw_mode {
            self.draw_mode = match select {
                DrawModeSelect::Wireframe => DrawMode::Wireframe,
                DrawModeSelect::Filled => DrawMode::Filled,
            };
        }
        if let Some(select) = controls.camera {
            self.view.mode = camera_mode(select);
        }

        if controls.look_left {
            self.view.look_left();
        }
        if controls.look_right {
            self.view.look_right();
        }
        if controls.look_up {
            self.view.look_up();
        }
        if controls.look_down {
            self.view.look_down();
        }
        if controls.zoom_in {
            self.view.zoom_in();
        }
        if controls.zoom_out {
            self.view.zoom_out();
        }

        if controls.toggle_auto {
            self.flight.toggle_mode(&self.params);
        }
        if controls.regenerate {
            self.regenerate();
        }
    }

    /// Apply helicopter and crate actions. Ignored while paused.
    pub fn apply_flight_actions(&mut self, controls: &ControlInput, dt: f32) {
        if self.clock.is_paused() {
            return;
        }
        self.flight.apply_controls(controls, &self.limits, &self.params, dt);
        if controls.spawn_crate {
            let time = self.clock.time();
            let heli = *self.flight.state();
            self.crates.spawn(&heli, time, dt, &self.limits, &self.params);
        }
    }

    pub fn camera_angles(&self) -> AxonometricAngles {
        AxonometricAngles {
            theta: self.params.camera_theta,
            gamma: self.params.camera_gamma,
        }
    }

    pub fn camera_target(&self) -> CameraTarget {
        let state = self.flight.state();
        CameraTarget {
            position: state.position,
            yaw: state.yaw,
            eye_height: COCKPIT_EYE_HEIGHT,
        }
    }
}

fn camera_mode(select: CameraSelect) -> CameraMode {
    match select {
        CameraSelect::Axonometric => CameraMode::Ortho(OrthoPreset::Axonometric),
        CameraSelect::Top => CameraMode::Ortho(OrthoPreset::Top),
        CameraSelect::Side => CameraMode::Ortho(OrthoPreset::Side),
        CameraSelect::Front => CameraMode::Ortho(OrthoPreset::Front),
        CameraSelect::Free => CameraMode::Free,
        CameraSelect::FirstPerson => CameraMode::FirstPerson,
        CameraSelect::Bottom => CameraMode::Bottom,
        CameraSelect::HelicopterFollow => CameraMode::HelicopterFollow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helicopter::HelicopterState;

    fn context() -> SimContext {
        let config = GameConfig {
            city_seed: Some(99),
            ..GameConfig::default()
        };
        SimContext::new(&config)
    }

    #[test]
    fn regeneration_resets_helicopter() {
        let mut ctx = context();
        let first = ctx.city.seeds().to_vec();
        {
            let state = ctx.flight.state_mut();
            state.position.y = 40.0;
            state.speed = 12.0;
            state.rotor = 1300.0;
        }
        ctx.apply_view_actions(&ControlInput {
            regenerate: true,
            ..ControlInput::default()
        });

        let expected = HelicopterState::initial(ctx.flight.mode(), ctx.params.orbit_radius);
        assert_eq!(*ctx.flight.state(), expected);
        assert_eq!(ctx.city.scenario(), 1);
        assert_ne!(ctx.city.seeds(), first.as_slice());
    }

    #[test]
    fn paused_context_ignores_flight_actions() {
        let mut ctx = context();
        ctx.register_footprints();
        ctx.apply_view_actions(&ControlInput {
            toggle_pause: true,
            ..ControlInput::default()
        });
        assert!(ctx.clock.is_paused());

        ctx.apply_flight_actions(
            &ControlInput {
                throttle_up: true,
                ..ControlInput::default()
            },
            0.0,
        );
        assert_eq!(ctx.flight.state().rotor, 0.0);
    }

    #[test]
    fn number_keys_switch_camera() {
        let mut ctx = context();
        ctx.apply_view_actions(&ControlInput {
            camera: Some(CameraSelect::Bottom),
            draw_mode: Some(DrawModeSelect::Filled),
            ..ControlInput::default()
        });
        assert_eq!(ctx.view.mode, CameraMode::Bottom);
        assert_eq!(ctx.draw_mode, DrawMode::Filled);
    }

    #[test]
    fn footprints_are_rebuilt_each_frame() {
        let mut ctx = context();
        ctx.register_footprints();
        let count = ctx.limits.footprints().len();
        assert_eq!(count, ctx.city.footprints().len());
        ctx.register_footprints();
        assert_eq!(ctx.limits.footprints().len(), count);
    }
}
