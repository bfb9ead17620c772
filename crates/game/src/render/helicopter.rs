//! Helicopter assembly: body, main rotor, tail, landing gear and rider.
//!
//! Dimensions are in body units; the caller has already placed the stack at
//! the body centre with heading and tilt applied.

use engine_core::{Color, TransformStack};
use glam::Vec3;
use renderer::{Primitive, PrimitiveRenderer, RenderError};

use super::{rider, Painter};
use crate::params::{
    bottom_to_center, BODY_X, BODY_Y, BODY_Z, FEET_X, FEET_Y, FEET_Z, LEG_ANGLE_Y, LEG_ANGLE_Z, LEG_X, LEG_Y, LEG_Z,
};

const BODY_COLOR: Color = Color::rgb(255, 0, 0);
const BLADE_COLOR: Color = Color::rgb(0, 0, 255);
const HUB_COLOR: Color = Color::rgb(255, 255, 0);
const GEAR_COLOR: Color = Color::rgb(255, 255, 0);

const ROTOR_DIAMETER: f32 = 4.0;
const BLADE_SIZE: Vec3 = Vec3::new(ROTOR_DIAMETER, ROTOR_DIAMETER / 30.0, ROTOR_DIAMETER / 8.0);
const BLADE_COUNT: usize = 3;
const HUB_DIAMETER: f32 = 0.3;
const HUB_HEIGHT: f32 = 0.5;

const TAIL_BOOM: Vec3 = Vec3::new(4.0 / 18.0, 4.0 / 8.0, 4.0);
const TAIL_FIN: Vec3 = Vec3::new(1.0 / 13.0, 1.0, 1.0 / 1.8);
const TAIL_FIN_TILT: f32 = -20.0;
const TAIL_ROTOR_SCALE: f32 = 0.3;

pub(super) fn draw_helicopter<R: PrimitiveRenderer>(
    stack: &mut TransformStack,
    painter: &mut Painter<'_, R>,
    rotor_angle: f32,
) -> Result<(), RenderError> {
    {
        let mut s = stack.scope();
        s.scale(Vec3::new(BODY_X, BODY_Y, BODY_Z));
        painter.draw(&s, BODY_COLOR, Primitive::Sphere)?;
    }
    {
        let mut s = stack.scope();
        s.translate(Vec3::new(0.0, BODY_Y / 2.0 + HUB_HEIGHT / 2.0, 0.0));
        draw_rotor(&mut s, painter, rotor_angle)?;
    }
    {
        let mut s = stack.scope();
        s.translate(Vec3::new(0.0, BODY_Y / 4.0, -(BODY_Z + TAIL_BOOM.z) / 2.5));
        draw_tail(&mut s, painter, rotor_angle)?;
    }
    {
        let mut s = stack.scope();
        s.translate(Vec3::new(0.0, -bottom_to_center(), 0.0));
        for side in [-1.0, 1.0] {
            let mut leg = s.scope();
            // The right-hand gear is the left one mirrored.
            leg.translate(Vec3::new(side * BODY_X / 4.0, 0.0, 0.0))
                .scale(Vec3::new(-side, 1.0, 1.0));
            draw_landing_gear(&mut leg, painter)?;
        }
    }
    {
        let mut s = stack.scope();
        s.scale(Vec3::splat(rider::RIDER_SCALE))
            .rotate_y(-90.0)
            .translate(Vec3::new(0.0, rider::RIDER_HEIGHT, 0.0));
        rider::draw_rider(&mut s, painter)?;
    }
    Ok(())
}

/// Hub plus evenly spaced blades, spun by `angle` degrees.
fn draw_rotor<R: PrimitiveRenderer>(
    stack: &mut TransformStack,
    painter: &mut Painter<'_, R>,
    angle: f32,
) -> Result<(), RenderError> {
    {
        let mut s = stack.scope();
        s.scale(Vec3::new(HUB_DIAMETER, HUB_HEIGHT, HUB_DIAMETER));
        painter.draw(&s, HUB_COLOR, Primitive::Cylinder)?;
    }
    let spacing = 360.0 / BLADE_COUNT as f32;
    for i in 0..BLADE_COUNT {
        let mut s = stack.scope();
        s.rotate_y(angle + i as f32 * spacing)
            .translate(Vec3::new(ROTOR_DIAMETER / 2.0, 0.0, 0.0))
            .scale(BLADE_SIZE);
        painter.draw(&s, BLADE_COLOR, Primitive::Sphere)?;
    }
    Ok(())
}

fn draw_tail<R: PrimitiveRenderer>(
    stack: &mut TransformStack,
    painter: &mut Painter<'_, R>,
    rotor_angle: f32,
) -> Result<(), RenderError> {
    {
        let mut s = stack.scope();
        s.scale(TAIL_BOOM);
        painter.draw(&s, BODY_COLOR, Primitive::Sphere)?;
    }

    let mut tip = stack.scope();
    tip.translate(Vec3::new(0.0, TAIL_BOOM.y / 2.0, -TAIL_BOOM.z / 2.0));
    {
        let mut s = tip.scope();
        s.rotate_x(TAIL_FIN_TILT).scale(TAIL_FIN);
        painter.draw(&s, BODY_COLOR, Primitive::Sphere)?;
    }
    let mut s = tip.scope();
    s.translate(Vec3::new((TAIL_FIN.x + HUB_DIAMETER) / 2.0, 0.0, 0.0))
        .rotate_z(90.0)
        .scale(Vec3::splat(TAIL_ROTOR_SCALE));
    draw_rotor(&mut s, painter, rotor_angle)
}

/// Two struts and a skid.
fn draw_landing_gear<R: PrimitiveRenderer>(
    stack: &mut TransformStack,
    painter: &mut Painter<'_, R>,
) -> Result<(), RenderError> {
    for mirror in [1.0, -1.0] {
        let mut s = stack.scope();
        s.scale(Vec3::new(1.0, 1.0, mirror))
            .translate(Vec3::new(0.0, 0.0, BODY_Z / 4.0))
            .rotate_z(LEG_ANGLE_Z)
            .rotate_y(LEG_ANGLE_Y)
            .scale(Vec3::new(LEG_X, LEG_Y, LEG_Z));
        painter.draw(&s, GEAR_COLOR, Primitive::Cube)?;
    }

    let mut s = stack.scope();
    s.translate(Vec3::new(
        LEG_ANGLE_Z.to_radians().sin() * LEG_X + FEET_X / 2.0,
        -(LEG_ANGLE_Y.to_radians().cos() * LEG_Y + FEET_Y),
        0.0,
    ))
    .scale(Vec3::new(FEET_X, FEET_Y, FEET_Z));
    painter.draw(&s, GEAR_COLOR, Primitive::Cube)
}
