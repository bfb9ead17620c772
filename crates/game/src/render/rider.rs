//! The little box creature riding on top of the helicopter.

use engine_core::{Color, TransformStack};
use glam::Vec3;
use renderer::{Primitive, PrimitiveRenderer, RenderError};

use super::Painter;
use crate::params::BODY_Z;

pub(super) const RIDER_SCALE: f32 = 0.15;
/// Height of the rider's centre in its own (unscaled) units.
pub(super) const RIDER_HEIGHT: f32 = 27.0;

const SKIN: Color = Color::rgb(149, 102, 73);
const MOUTH: Color = Color::rgb(228, 54, 49);

const TORSO: Vec3 = Vec3::new(10.0, 30.0, 20.0);
const LEG: Vec3 = Vec3::new(14.0, 6.0, 6.0);
const EYE_SIZE: f32 = 2.5;
const TOOTH_SIZE: f32 = 2.0;

pub(super) fn draw_rider<R: PrimitiveRenderer>(
    stack: &mut TransformStack,
    painter: &mut Painter<'_, R>,
) -> Result<(), RenderError> {
    let face = TORSO.x / 2.0;
    let eye_z = BODY_Z / 1.5;

    {
        let mut s = stack.scope();
        s.scale(TORSO);
        painter.draw(&s, SKIN, Primitive::Cube)?;
    }
    for z in [LEG.z, -LEG.z] {
        let mut s = stack.scope();
        s.translate(Vec3::new(face, -TORSO.y / 2.0 + LEG.y / 2.0, z)).scale(LEG);
        painter.draw(&s, SKIN, Primitive::Cube)?;
    }
    {
        let mut s = stack.scope();
        s.translate(Vec3::new(face, 1.0, 0.0))
            .scale(Vec3::new(1.0, 6.0, TORSO.z / 2.0));
        painter.draw(&s, MOUTH, Primitive::Cube)?;
    }
    for z in [-eye_z, eye_z] {
        let mut s = stack.scope();
        s.translate(Vec3::new(face, TORSO.y / 3.0, z)).scale(Vec3::splat(EYE_SIZE));
        painter.draw(&s, Color::BLACK, Primitive::Sphere)?;
    }
    // Two rows of three teeth across the mouth.
    for y in [-0.5, 3.0] {
        for i in 0..3 {
            let z = eye_z - 2.0 * TOOTH_SIZE * i as f32 + 0.5;
            let mut s = stack.scope();
            s.translate(Vec3::new(face, y, z)).scale(Vec3::splat(TOOTH_SIZE));
            painter.draw(&s, Color::WHITE, Primitive::Cube)?;
        }
    }
    Ok(())
}
