//! Hierarchical transform composition with scoped push/pop.
//!
//! Parts of an articulated model are posed by multiplying translations,
//! rotations and scales onto the current matrix. Every push is owned by a
//! [`TransformScope`] guard that restores the saved matrix when dropped, so a
//! sibling part can never observe a transform leaked by the previous one.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use std::ops::{Deref, DerefMut};

/// Matrix stack used to compose model-view transforms.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Create an empty stack with an identity current matrix.
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            saved: Vec::with_capacity(16),
        }
    }

    /// Replace the current matrix (usually with the camera view matrix).
    pub fn load(&mut self, matrix: Mat4) {
        self.current = matrix;
    }

    /// The composed transform at this point of the hierarchy.
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Raw column-major data of the current matrix, ready for upload.
    pub fn raw(&self) -> TransformRaw {
        TransformRaw::from(self.current)
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Save the current matrix and return a guard that restores it on drop.
    pub fn scope(&mut self) -> TransformScope<'_> {
        self.saved.push(self.current);
        TransformScope { stack: self }
    }

    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        self.current *= Mat4::from_translation(offset);
        self
    }

    /// Rotate around the local X axis. Angle in degrees.
    pub fn rotate_x(&mut self, degrees: f32) -> &mut Self {
        self.current *= Mat4::from_rotation_x(degrees.to_radians());
        self
    }

    /// Rotate around the local Y axis. Angle in degrees.
    pub fn rotate_y(&mut self, degrees: f32) -> &mut Self {
        self.current *= Mat4::from_rotation_y(degrees.to_radians());
        self
    }

    /// Rotate around the local Z axis. Angle in degrees.
    pub fn rotate_z(&mut self, degrees: f32) -> &mut Self {
        self.current *= Mat4::from_rotation_z(degrees.to_radians());
        self
    }

    pub fn scale(&mut self, factors: Vec3) -> &mut Self {
        self.current *= Mat4::from_scale(factors);
        self
    }

    fn pop(&mut self) {
        match self.saved.pop() {
            Some(matrix) => self.current = matrix,
            None => log::error!("Transform stack underflow"),
        }
    }
}

/// Guard for one pushed matrix. Dereferences to the stack so nested scopes
/// and transform calls read naturally; the matching pop runs on drop.
pub struct TransformScope<'a> {
    stack: &'a mut TransformStack,
}

impl Deref for TransformScope<'_> {
    type Target = TransformStack;

    fn deref(&self) -> &Self::Target {
        self.stack
    }
}

impl DerefMut for TransformScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stack
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.stack.pop();
    }
}

/// Raw transform data for GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TransformRaw {
    pub model: [[f32; 4]; 4],
}

impl From<Mat4> for TransformRaw {
    fn from(matrix: Mat4) -> Self {
        Self {
            model: matrix.to_cols_array_2d(),
        }
    }
}

impl From<&TransformStack> for TransformRaw {
    fn from(stack: &TransformStack) -> Self {
        stack.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn scope_restores_matrix_on_drop() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(1.0, 2.0, 3.0));
        let before = stack.current();
        {
            let mut s = stack.scope();
            s.translate(Vec3::X * 10.0).rotate_y(45.0).scale(Vec3::splat(2.0));
            assert_eq!(s.depth(), 1);
        }
        assert_eq!(stack.current(), before);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn nested_scopes_unwind_in_order() {
        let mut stack = TransformStack::new();
        {
            let mut outer = stack.scope();
            outer.translate(Vec3::Y);
            let outer_matrix = outer.current();
            {
                let mut inner = outer.scope();
                inner.translate(Vec3::Y);
                assert_eq!(inner.depth(), 2);
                let p = inner.current().transform_point3(Vec3::ZERO);
                assert!(close(p, Vec3::new(0.0, 2.0, 0.0)));
            }
            assert_eq!(outer.current(), outer_matrix);
        }
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn scope_pops_on_early_return() {
        fn pose(stack: &mut TransformStack, bail: bool) -> Option<()> {
            let mut s = stack.scope();
            s.translate(Vec3::Z);
            if bail {
                return None;
            }
            Some(())
        }
        let mut stack = TransformStack::new();
        assert!(pose(&mut stack, true).is_none());
        assert!(pose(&mut stack, false).is_some());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn transforms_compose_in_local_frame() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(5.0, 0.0, 0.0)).rotate_y(90.0);
        // Local +X after a 90 degree yaw points along world -Z.
        let p = stack.current().transform_point3(Vec3::X);
        assert!(close(p, Vec3::new(5.0, 0.0, -1.0)));
    }

    #[test]
    fn raw_matches_column_major_layout() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(1.0, 2.0, 3.0));
        let raw = stack.raw();
        assert_eq!(raw.model[3], [1.0, 2.0, 3.0, 1.0]);
    }
}
