//! City buildings: the landmark tower and the generated blocks.

use engine_core::{Color, TransformStack};
use glam::Vec3;
use procgen::{
    BuildingPalette, BuildingSeed, CityLayout, FloorKind, FLOOR_HEIGHT, FLOOR_WIDTH, LANDMARK_BASE_HEIGHT,
    LANDMARK_BASE_SIZE, LANDMARK_BODY_HEIGHT, LANDMARK_BODY_SIZE, LANDMARK_POSITION, LANDMARK_SPIRE_HEIGHT,
    ROOF_OVERHANG, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use renderer::{Primitive, PrimitiveRenderer, RenderError};

use super::Painter;

const LANDMARK_BASE_COLOR: Color = Color::rgb(243, 156, 107);
const LANDMARK_BODY_COLOR: Color = Color::rgb(255, 56, 100);
const LANDMARK_SPIRE_COLOR: Color = Color::rgb(38, 20, 71);

const COLUMN_SIZE: Vec3 = Vec3::new(0.8, FLOOR_HEIGHT, 0.5);
const WALL_TRIM: Vec3 = Vec3::new(FLOOR_WIDTH, 1.0, 0.3);
const ROOF_THICKNESS: f32 = 0.7;
const WINDOW_SCALE: f32 = 0.7;
/// Distance from a facade's edge to its first window.
const WINDOW_INSET: f32 = 2.5;

pub(super) fn draw_city<R: PrimitiveRenderer>(
    stack: &mut TransformStack,
    painter: &mut Painter<'_, R>,
    city: &CityLayout,
    window: Color,
) -> Result<(), RenderError> {
    {
        let mut s = stack.scope();
        s.translate(LANDMARK_POSITION);
        draw_landmark(&mut s, painter)?;
    }
    for building in city.buildings() {
        let p = building.position;
        let mut s = stack.scope();
        s.translate(Vec3::new(p.x, p.y - 0.5, p.z));
        draw_building(&mut s, painter, &building.seed, window)?;
    }
    Ok(())
}

fn draw_landmark<R: PrimitiveRenderer>(
    stack: &mut TransformStack,
    painter: &mut Painter<'_, R>,
) -> Result<(), RenderError> {
    {
        let mut s = stack.scope();
        s.scale(Vec3::new(LANDMARK_BASE_SIZE, LANDMARK_BASE_HEIGHT, LANDMARK_BASE_SIZE));
        painter.draw(&s, LANDMARK_BASE_COLOR, Primitive::Cube)?;
    }
    {
        let mut s = stack.scope();
        s.translate(Vec3::new(0.0, LANDMARK_BODY_HEIGHT / 2.0, 0.0))
            .scale(Vec3::new(LANDMARK_BODY_SIZE, LANDMARK_BODY_HEIGHT, LANDMARK_BODY_SIZE));
        painter.draw(&s, LANDMARK_BODY_COLOR, Primitive::Cube)?;
    }
    let mut s = stack.scope();
    s.translate(Vec3::new(0.0, LANDMARK_BODY_HEIGHT + LANDMARK_BASE_HEIGHT, 0.0))
        .scale(Vec3::new(LANDMARK_BASE_SIZE, LANDMARK_SPIRE_HEIGHT, LANDMARK_BASE_SIZE));
    painter.draw(&s, LANDMARK_SPIRE_COLOR, Primitive::Pyramid)
}

/// Floors stacked from the ground up, then the roof cap.
fn draw_building<R: PrimitiveRenderer>(
    stack: &mut TransformStack,
    painter: &mut Painter<'_, R>,
    seed: &BuildingSeed,
    window: Color,
) -> Result<(), RenderError> {
    let palette = seed.palette();
    for level in 0..seed.floors {
        let mut s = stack.scope();
        s.translate(Vec3::new(0.0, FLOOR_HEIGHT * level as f32, 0.0));
        draw_floor(&mut s, painter, &palette, FloorKind::for_level(level), window)?;
    }

    let top = FLOOR_HEIGHT * seed.floors as f32 + 0.25 - FLOOR_HEIGHT / 2.0;
    let slab = Vec3::new(FLOOR_WIDTH + ROOF_OVERHANG, ROOF_THICKNESS, FLOOR_WIDTH + ROOF_OVERHANG);
    let mut roof = stack.scope();
    roof.translate(Vec3::new(0.0, top, 0.0));
    {
        let mut s = roof.scope();
        s.scale(slab);
        painter.draw(&s, palette.roof, Primitive::Cube)?;
    }
    let mut s = roof.scope();
    s.translate(Vec3::new(0.0, ROOF_THICKNESS / 2.0, 0.0))
        .scale(Vec3::new(0.9, 1.0, 0.9))
        .scale(slab);
    painter.draw(&s, palette.roof, Primitive::Cube)
}

fn draw_floor<R: PrimitiveRenderer>(
    stack: &mut TransformStack,
    painter: &mut Painter<'_, R>,
    palette: &BuildingPalette,
    kind: FloorKind,
    window: Color,
) -> Result<(), RenderError> {
    let half = FLOOR_WIDTH / 2.0;
    {
        let mut s = stack.scope();
        s.scale(Vec3::new(FLOOR_WIDTH, FLOOR_HEIGHT, FLOOR_WIDTH));
        painter.draw(&s, palette.floor, Primitive::Cube)?;
    }
    for (x, z) in [(1.0, 1.0), (-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0)] {
        let mut s = stack.scope();
        s.translate(Vec3::new(x * half, 0.0, z * half)).scale(COLUMN_SIZE);
        painter.draw(&s, palette.column, Primitive::Cube)?;
    }

    if kind == FloorKind::Walled {
        for side in 0..4 {
            let mut s = stack.scope();
            s.rotate_y(side as f32 * 90.0)
                .translate(Vec3::new(0.0, FLOOR_HEIGHT / 2.0, half))
                .scale(WALL_TRIM);
            painter.draw(&s, palette.wall, Primitive::Cube)?;
        }
    }

    for side in 0..4 {
        let mut facade = stack.scope();
        facade
            .rotate_y(side as f32 * 90.0)
            .translate(Vec3::new(-(half - WINDOW_INSET), 0.0, 0.0));
        match kind {
            FloorKind::Paired => {
                for i in 0..2 {
                    let mut s = facade.scope();
                    s.translate(Vec3::new(i as f32 * FLOOR_WIDTH / 2.0 + WINDOW_WIDTH / 4.0, 0.0, half))
                        .scale(Vec3::splat(WINDOW_SCALE));
                    draw_window(&mut s, painter, window)?;
                    s.translate(Vec3::new(WINDOW_WIDTH + 0.5, 0.0, 0.0));
                    draw_window(&mut s, painter, window)?;
                }
            }
            FloorKind::Columned | FloorKind::Walled => {
                for i in 0..3 {
                    let mut s = facade.scope();
                    s.translate(Vec3::new(i as f32 * FLOOR_WIDTH / 3.0 + WINDOW_WIDTH / 6.0, 0.0, half))
                        .scale(Vec3::splat(WINDOW_SCALE));
                    draw_window(&mut s, painter, window)?;
                }
            }
        }
    }
    Ok(())
}

fn draw_window<R: PrimitiveRenderer>(
    stack: &mut TransformStack,
    painter: &mut Painter<'_, R>,
    glass: Color,
) -> Result<(), RenderError> {
    let mut s = stack.scope();
    s.scale(Vec3::new(WINDOW_WIDTH, WINDOW_HEIGHT, 0.1));
    painter.draw(&s, glass, Primitive::Cube)
}
