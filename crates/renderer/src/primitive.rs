//! Renderable primitives and the draw contract backends implement.

use engine_core::Color;
use glam::Mat4;
use thiserror::Error;

/// Unit meshes every part of the scene is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Sphere,
    Cylinder,
    Cube,
    Pyramid,
}

/// Rasterisation mode for every draw in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    Wireframe,
    Filled,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("draw of {0:?} issued without a selected colour")]
    ColorNotSelected(Primitive),
    #[error("render backend failure: {0}")]
    Backend(String),
}

/// Backend side of the scene composer.
///
/// `select_color` must precede every `draw`; the light angle travels with the
/// colour so shading follows the sun.
pub trait PrimitiveRenderer {
    /// Start a frame cleared to `sky`.
    fn begin_frame(&mut self, sky: Color);

    fn select_color(&mut self, color: Color, light_angle: f32);

    /// Draw one unit primitive under the composed `model_view` transform.
    fn draw(&mut self, primitive: Primitive, mode: DrawMode, model_view: &Mat4) -> Result<(), RenderError>;
}
