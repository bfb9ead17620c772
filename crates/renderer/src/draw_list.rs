//! A renderer that records draw commands instead of issuing GPU calls.
//!
//! Used by headless runs and tests, and as the hand-off format a real
//! backend can replay.

use engine_core::{Color, TransformRaw};
use glam::Mat4;

use crate::{DrawMode, Primitive, PrimitiveRenderer, RenderError};

/// One recorded draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub primitive: Primitive,
    pub mode: DrawMode,
    pub color: Color,
    pub light_angle: f32,
    pub model_view: TransformRaw,
}

/// Frame-scoped list of draw commands.
#[derive(Debug, Default)]
pub struct DrawList {
    sky: Option<Color>,
    selected: Option<(Color, f32)>,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Background colour of the current frame, if one was started.
    pub fn sky(&self) -> Option<Color> {
        self.sky
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of draws of one primitive kind.
    pub fn count(&self, primitive: Primitive) -> usize {
        self.commands.iter().filter(|c| c.primitive == primitive).count()
    }

    /// Number of draws that used `color`.
    pub fn count_color(&self, color: Color) -> usize {
        self.commands.iter().filter(|c| c.color == color).count()
    }
}

impl PrimitiveRenderer for DrawList {
    fn begin_frame(&mut self, sky: Color) {
        self.sky = Some(sky);
        self.selected = None;
        self.commands.clear();
    }

    fn select_color(&mut self, color: Color, light_angle: f32) {
        self.selected = Some((color, light_angle));
    }

    fn draw(&mut self, primitive: Primitive, mode: DrawMode, model_view: &Mat4) -> Result<(), RenderError> {
        let (color, light_angle) = self.selected.ok_or(RenderError::ColorNotSelected(primitive))?;
        self.commands.push(DrawCommand {
            primitive,
            mode,
            color,
            light_angle,
            model_view: TransformRaw::from(*model_view),
        });
        Ok(())
    }
}
