//! Top-level application state owned by the event loop.

use std::sync::Arc;

use anyhow::Result;
use glam::Mat4;
use input::{ControlInput, InputState};
use renderer::{DrawList, Primitive};
use winit::window::Window;

use crate::config::GameConfig;
use crate::render::SceneComposer;
use crate::simulation::SimContext;

/// Frames between periodic stats lines.
const STATS_INTERVAL: u64 = 600;

/// Window, simulation and the per-frame hand-off.
///
/// No GPU backend is attached: each redraw records the scene into
/// `draw_list` and stores the matching `projection`. A presenting backend
/// replays the list under that projection; without one the window stays
/// blank and the frame is only reported through the stats log.
pub struct GameState {
    pub window: Arc<Window>,
    pub config: GameConfig,
    pub ctx: SimContext,
    pub composer: SceneComposer,
    pub input: InputState,
    /// Recorded draws of the last frame, ready for a backend to replay.
    pub draw_list: DrawList,
    /// Projection of the last recorded frame, for the current view and aspect.
    pub projection: Mat4,
    pub aspect: f32,
    pub running: bool,
}

impl GameState {
    pub fn new(window: Arc<Window>, config: GameConfig) -> Result<Self> {
        let size = window.inner_size();
        let ctx = SimContext::new(&config);
        log::info!(
            "City seed {}, {} buildings, {} mode",
            ctx.city.seed(),
            ctx.city.seeds().len(),
            match ctx.flight.mode() {
                crate::helicopter::FlightMode::Manual => "manual",
                crate::helicopter::FlightMode::Automatic => "automatic",
            }
        );
        Ok(Self {
            window,
            config,
            ctx,
            composer: SceneComposer::new(),
            input: InputState::new(),
            draw_list: DrawList::new(),
            projection: Mat4::IDENTITY,
            aspect: aspect_ratio(size.width, size.height),
            running: true,
        })
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    /// Tick the simulation once and record the frame.
    pub fn frame(&mut self) -> Result<()> {
        let controls = ControlInput::from_input(&self.input);
        self.composer.render_frame(&mut self.ctx, &controls, &mut self.draw_list)?;
        self.input.begin_frame();
        self.projection = self.ctx.view.projection_matrix(self.aspect);

        let frame = self.ctx.clock.frame_count();
        if frame % STATS_INTERVAL == 0 {
            let state = self.ctx.flight.state();
            log::debug!(
                "frame {frame}: {:.0} fps, {} draws ({} cubes), heli at {}, speed {:.1}, {} crates",
                self.ctx.clock.fps(),
                self.draw_list.len(),
                self.draw_list.count(Primitive::Cube),
                state.position,
                state.speed,
                self.ctx.crates.len(),
            );
            log::trace!("projection: {}", self.projection);
        }
        Ok(())
    }

    /// Persist the live parameters before shutting down.
    pub fn shutdown(&mut self) {
        self.running = false;
        self.config.params = self.ctx.params.clone();
        self.config.save();
        log::info!("Shutting down after {} frames", self.ctx.clock.frame_count());
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
