//! World bounds and the per-frame building height field.

use glam::{Vec2, Vec3};

/// Axis-aligned box the whole simulation is confined to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            min: Vec3::new(-100.0, 0.0, -100.0),
            max: Vec3::new(100.0, 100.0, 100.0),
        }
    }
}

/// Horizontal extent and height of one building column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Centre on the XZ plane (`x`, `z`).
    pub center: Vec2,
    /// Half of the width along X and Z.
    pub half_extents: Vec2,
    /// Roof height above ground.
    pub height: f32,
}

impl Footprint {
    pub fn new(center: Vec2, half_extents: Vec2, height: f32) -> Self {
        Self {
            center,
            half_extents,
            height,
        }
    }

    /// Strict containment: a point exactly on a wall line is outside.
    pub fn contains(&self, x: f32, z: f32) -> bool {
        let d = Vec2::new(x, z) - self.center;
        d.x.abs() < self.half_extents.x && d.y.abs() < self.half_extents.y
    }
}

/// Static bounds plus the footprints registered for the current frame.
///
/// Buildings are solid columns with no horizontal collision: anything may
/// pass through a wall but may not sink below the roof while over it.
#[derive(Debug, Clone, Default)]
pub struct WorldLimits {
    bounds: WorldBounds,
    footprints: Vec<Footprint>,
}

impl WorldLimits {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            footprints: Vec::new(),
        }
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Drop every registered footprint. Called at the top of each frame.
    pub fn clear(&mut self) {
        self.footprints.clear();
    }

    pub fn register_footprint(&mut self, footprint: Footprint) {
        self.footprints.push(footprint);
    }

    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    /// Height of the tallest footprint covering `(x, z)`, or 0 over open ground.
    pub fn floor_height(&self, x: f32, z: f32) -> f32 {
        self.footprints
            .iter()
            .filter(|f| f.contains(x, z))
            .fold(0.0, |floor, f| floor.max(f.height))
    }

    /// Inclusive bounds test where the lower Y limit is the floor under the
    /// destination column.
    pub fn is_within_bounds(&self, x: f32, y: f32, z: f32) -> bool {
        let b = &self.bounds;
        let within_x = x >= b.min.x && x <= b.max.x;
        let within_z = z >= b.min.z && z <= b.max.z;
        let within_y = y <= b.max.y && y >= self.floor_height(x, z);
        within_x && within_y && within_z
    }

    /// True when `y` is strictly above the floor at `(x, z)`.
    pub fn is_airborne(&self, x: f32, y: f32, z: f32) -> bool {
        y > self.floor_height(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits_with(footprints: &[Footprint]) -> WorldLimits {
        let mut limits = WorldLimits::default();
        for f in footprints {
            limits.register_footprint(*f);
        }
        limits
    }

    #[test]
    fn open_ground_floor_is_zero() {
        let limits = limits_with(&[Footprint::new(Vec2::ZERO, Vec2::splat(5.0), 10.0)]);
        for &(x, z) in &[(6.0, 0.0), (0.0, -5.5), (50.0, 50.0), (-99.0, 99.0)] {
            assert_eq!(limits.floor_height(x, z), 0.0, "({x}, {z})");
        }
    }

    #[test]
    fn single_footprint_reports_its_height() {
        let limits = limits_with(&[Footprint::new(Vec2::new(10.0, -10.0), Vec2::new(2.0, 3.0), 27.0)]);
        assert_eq!(limits.floor_height(10.0, -10.0), 27.0);
        assert_eq!(limits.floor_height(11.9, -12.9), 27.0);
    }

    #[test]
    fn overlapping_footprints_resolve_to_max() {
        let limits = limits_with(&[
            Footprint::new(Vec2::ZERO, Vec2::splat(5.0), 12.0),
            Footprint::new(Vec2::new(2.0, 0.0), Vec2::splat(5.0), 30.0),
            Footprint::new(Vec2::new(-1.0, 0.0), Vec2::splat(5.0), 4.0),
        ]);
        assert_eq!(limits.floor_height(1.0, 0.0), 30.0);
        // Only the first and last cover x = -4.5.
        assert_eq!(limits.floor_height(-4.5, 0.0), 12.0);
    }

    #[test]
    fn wall_line_is_open_ground() {
        let limits = limits_with(&[Footprint::new(Vec2::ZERO, Vec2::splat(5.0), 10.0)]);
        assert_eq!(limits.floor_height(5.0, 0.0), 0.0);
        assert_eq!(limits.floor_height(0.0, -5.0), 0.0);
    }

    #[test]
    fn below_floor_is_never_within_bounds() {
        let limits = limits_with(&[Footprint::new(Vec2::ZERO, Vec2::splat(5.0), 10.0)]);
        assert!(!limits.is_within_bounds(0.0, 9.99, 0.0));
        assert!(limits.is_within_bounds(0.0, 10.0, 0.0));
        // Out-of-box x with y below floor is still rejected.
        assert!(!limits.is_within_bounds(150.0, -1.0, 0.0));
    }

    #[test]
    fn box_limits_are_inclusive() {
        let limits = WorldLimits::default();
        assert!(limits.is_within_bounds(100.0, 100.0, -100.0));
        assert!(limits.is_within_bounds(-100.0, 0.0, 100.0));
        assert!(!limits.is_within_bounds(100.01, 1.0, 0.0));
        assert!(!limits.is_within_bounds(0.0, 100.01, 0.0));
        assert!(!limits.is_within_bounds(0.0, 1.0, -100.01));
    }

    #[test]
    fn clear_empties_registry() {
        let mut limits = limits_with(&[Footprint::new(Vec2::ZERO, Vec2::splat(5.0), 10.0)]);
        limits.clear();
        assert!(limits.footprints().is_empty());
        assert_eq!(limits.floor_height(0.0, 0.0), 0.0);
    }
}
