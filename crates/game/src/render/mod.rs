//! Scene composition: walks the fixed scene hierarchy once per tick and
//! hands every posed primitive to a [`PrimitiveRenderer`].

mod city;
mod helicopter;
mod rider;

use engine_core::{Color, TransformStack};
use glam::Vec3;
use input::ControlInput;
use renderer::{DrawMode, Primitive, PrimitiveRenderer, RenderError};

use crate::simulation::SimContext;
use crate::sun::{SUN_COLOR, SUN_SCALE};

pub const CRATE_COLOR: Color = Color::rgb(115, 79, 13);

/// Selects a colour and draws under the current transform. Every draw in the
/// scene goes through here, so none can reach the backend uncoloured.
pub(crate) struct Painter<'a, R: PrimitiveRenderer> {
    renderer: &'a mut R,
    mode: DrawMode,
    light_angle: f32,
}

impl<R: PrimitiveRenderer> Painter<'_, R> {
    pub(crate) fn draw(&mut self, stack: &TransformStack, color: Color, primitive: Primitive) -> Result<(), RenderError> {
        self.renderer.select_color(color, self.light_angle);
        self.renderer.draw(primitive, self.mode, &stack.current())
    }
}

/// Owns the transform stack and runs one simulation tick per frame.
#[derive(Debug, Default)]
pub struct SceneComposer {
    stack: TransformStack,
}

impl SceneComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open scopes left on the stack. Zero between frames.
    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    /// Advance the simulation by one tick and draw the resulting scene.
    pub fn render_frame<R: PrimitiveRenderer>(
        &mut self,
        ctx: &mut SimContext,
        controls: &ControlInput,
        renderer: &mut R,
    ) -> Result<(), RenderError> {
        let dt = ctx.clock.tick();
        ctx.apply_view_actions(controls);
        let running = !ctx.clock.is_paused() && dt > 0.0;
        let time = ctx.clock.time();

        ctx.register_footprints();
        ctx.apply_flight_actions(controls, dt);

        let palette = ctx.sun.palette();
        renderer.begin_frame(palette.sky);
        let mut painter = Painter {
            renderer,
            mode: ctx.draw_mode,
            light_angle: ctx.sun.light_angle(),
        };

        self.stack.load(ctx.view.view_matrix(ctx.camera_angles(), &ctx.camera_target()));
        let mut root = self.stack.scope();
        root.scale(Vec3::splat(ctx.params.world_scale));

        // Ground
        {
            let bounds = ctx.limits.bounds();
            let mut s = root.scope();
            s.translate(Vec3::new(0.0, -1.0, 0.0))
                .scale(Vec3::new(bounds.max.x - bounds.min.x, 1.0, bounds.max.z - bounds.min.z));
            painter.draw(&s, palette.ground, Primitive::Cube)?;
        }

        city::draw_city(&mut root, &mut painter, &ctx.city, palette.window)?;

        // Helicopter
        if running {
            ctx.flight.advance(dt, time, &ctx.limits, &ctx.params);
        }
        {
            let state = *ctx.flight.state();
            let wobble = (time * std::f32::consts::PI).sin();
            let mut s = root.scope();
            s.translate(state.position)
                .rotate_z(ctx.flight.hover_roll())
                .translate(Vec3::new(0.0, crate::params::bottom_to_center(), 0.0))
                .rotate_z(wobble)
                .rotate_y(state.yaw)
                .rotate_x(ctx.flight.pitch_tilt(&ctx.params))
                .scale(Vec3::splat(ctx.params.helicopter_scale));
            helicopter::draw_helicopter(&mut s, &mut painter, state.rotor * time)?;
        }

        // Crates
        if running {
            ctx.crates.advance_all(dt, time, &ctx.limits, &ctx.params);
        }
        let size = ctx.params.crate_size;
        for c in ctx.crates.crates() {
            let p = c.position();
            let mut s = root.scope();
            s.translate(Vec3::new(p.x, p.y + size / 2.0, p.z)).scale(Vec3::splat(size));
            painter.draw(&s, CRATE_COLOR, Primitive::Cube)?;
        }

        // Sun
        if running {
            ctx.sun.advance(dt, &ctx.params);
        }
        {
            let orbit = 2.0 * ctx.limits.bounds().max.y;
            let mut s = root.scope();
            s.rotate_z(ctx.sun.angle())
                .translate(Vec3::new(-orbit, 0.0, 0.0))
                .scale(Vec3::splat(SUN_SCALE));
            painter.draw(&s, SUN_COLOR, Primitive::Sphere)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sun::{DAY_PALETTE, NIGHT_PALETTE};
    use glam::Mat4;
    use renderer::DrawList;

    fn context() -> SimContext {
        SimContext::new(&GameConfig {
            city_seed: Some(3),
            ..GameConfig::default()
        })
    }

    /// Fails on the n-th draw.
    struct FailingRenderer {
        remaining: usize,
    }

    impl PrimitiveRenderer for FailingRenderer {
        fn begin_frame(&mut self, _sky: Color) {}

        fn select_color(&mut self, _color: Color, _light_angle: f32) {}

        fn draw(&mut self, _primitive: Primitive, _mode: DrawMode, _model_view: &Mat4) -> Result<(), RenderError> {
            if self.remaining == 0 {
                return Err(RenderError::Backend("device lost".into()));
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    #[test]
    fn frame_leaves_stack_balanced() {
        let mut ctx = context();
        let mut composer = SceneComposer::new();
        let mut list = DrawList::new();
        for _ in 0..3 {
            composer.render_frame(&mut ctx, &ControlInput::default(), &mut list).unwrap();
            assert_eq!(composer.stack_depth(), 0);
        }
        assert!(!list.is_empty());
    }

    #[test]
    fn failed_draw_still_unwinds_stack() {
        let mut ctx = context();
        let mut composer = SceneComposer::new();
        for remaining in [0, 5, 40, 200] {
            let mut backend = FailingRenderer { remaining };
            assert!(composer.render_frame(&mut ctx, &ControlInput::default(), &mut backend).is_err());
            assert_eq!(composer.stack_depth(), 0);
        }
    }

    #[test]
    fn scene_has_one_helicopter_and_one_sun() {
        let mut ctx = context();
        let mut composer = SceneComposer::new();
        let mut list = DrawList::new();
        composer.render_frame(&mut ctx, &ControlInput::default(), &mut list).unwrap();

        // Main rotor hub and tail rotor hub.
        assert_eq!(list.count(Primitive::Cylinder), 2);
        assert_eq!(list.count_color(SUN_COLOR), 1);
        // Landmark spire.
        assert_eq!(list.count(Primitive::Pyramid), 1);
    }

    #[test]
    fn crates_are_drawn_while_alive() {
        let mut ctx = context();
        let mut composer = SceneComposer::new();
        let mut list = DrawList::new();
        ctx.flight.state_mut().position.y = 50.0;
        ctx.flight.state_mut().rotor = 1300.0;

        let drop = ControlInput {
            spawn_crate: true,
            ..ControlInput::default()
        };
        composer.render_frame(&mut ctx, &drop, &mut list).unwrap();
        assert_eq!(ctx.crates.len(), 1);
        assert_eq!(list.count_color(CRATE_COLOR), 1);
    }

    #[test]
    fn pause_freezes_the_scene() {
        let mut ctx = context();
        let mut composer = SceneComposer::new();
        let mut list = DrawList::new();
        let pause = ControlInput {
            toggle_pause: true,
            ..ControlInput::default()
        };
        composer.render_frame(&mut ctx, &pause, &mut list).unwrap();
        let (time, sun, heli) = (ctx.clock.time(), ctx.sun.angle(), *ctx.flight.state());

        for _ in 0..10 {
            composer.render_frame(&mut ctx, &ControlInput::default(), &mut list).unwrap();
        }
        assert_eq!(ctx.clock.time(), time);
        assert_eq!(ctx.sun.angle(), sun);
        assert_eq!(*ctx.flight.state(), heli);
        assert!(!list.is_empty());
    }

    #[test]
    fn sky_follows_day_and_night() {
        let mut ctx = context();
        let mut composer = SceneComposer::new();
        let mut list = DrawList::new();
        ctx.params.day_night_cycle = false;

        composer.render_frame(&mut ctx, &ControlInput::default(), &mut list).unwrap();
        assert_eq!(list.sky(), Some(NIGHT_PALETTE.sky));
        assert_eq!(list.count_color(NIGHT_PALETTE.ground), 1);

        ctx.params.day_night_cycle = true;
        ctx.params.sun_speed = 200.0 / ctx.clock.step();
        composer.render_frame(&mut ctx, &ControlInput::default(), &mut list).unwrap();
        composer.render_frame(&mut ctx, &ControlInput::default(), &mut list).unwrap();
        assert_eq!(list.sky(), Some(DAY_PALETTE.sky));
    }
}
