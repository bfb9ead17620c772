//! View state: which camera is active and how it is aimed.

use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

/// Step applied by one free-view look action, in radians.
pub const CAMERA_ANGLE_STEP: f32 = PI / 20.0;
/// Default half-height of the orthographic volume.
pub const DEFAULT_VIEW_DISTANCE: f32 = 100.0;

/// Fixed orthographic views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrthoPreset {
    /// Oblique view driven by the adjustable camera angles.
    #[default]
    Axonometric,
    /// Looking straight down.
    Top,
    /// Looking from +X towards the centre.
    Side,
    /// Looking from +Z towards the centre.
    Front,
}

/// Active camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Ortho(OrthoPreset),
    /// Free look from the world origin.
    Free,
    /// Cockpit view along the helicopter heading.
    FirstPerson,
    /// Looking straight down from under the helicopter.
    Bottom,
    /// Orthographic view centred on and turning with the helicopter.
    HelicopterFollow,
}

impl Default for CameraMode {
    fn default() -> Self {
        CameraMode::Ortho(OrthoPreset::default())
    }
}

/// What the helicopter-bound cameras look from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    /// Heading in degrees; 0 looks along +Z.
    pub yaw: f32,
    /// Eye height above `position.y` for cockpit-style views.
    pub eye_height: f32,
}

/// Angles of the axonometric camera, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxonometricAngles {
    /// Rotation around the vertical axis.
    pub theta: f32,
    /// Elevation above the ground plane.
    pub gamma: f32,
}

impl Default for AxonometricAngles {
    /// Isometric: the eye sits on the (1, 1, 1) diagonal.
    fn default() -> Self {
        Self {
            theta: 45.0,
            gamma: 35.264_39,
        }
    }
}

/// Presentation state fed into the same pipeline the scene is composed in.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub mode: CameraMode,
    /// Free-view heading in radians.
    horizontal: f32,
    /// Free-view elevation in radians.
    vertical: f32,
    /// Orthographic half-height; also scales depth range.
    distance: f32,
    /// Near plane of perspective views.
    pub perspective_near: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: CameraMode::default(),
            horizontal: 0.0,
            vertical: 0.0,
            distance: DEFAULT_VIEW_DISTANCE,
            perspective_near: 5.0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn look_left(&mut self) {
        self.horizontal += CAMERA_ANGLE_STEP;
    }

    pub fn look_right(&mut self) {
        self.horizontal -= CAMERA_ANGLE_STEP;
    }

    /// Raise the free view. Only steps while still below straight up.
    pub fn look_up(&mut self) {
        if self.vertical < FRAC_PI_2 {
            self.vertical += CAMERA_ANGLE_STEP;
        }
    }

    /// Lower the free view. Only steps while still above straight down.
    pub fn look_down(&mut self) {
        if self.vertical > -FRAC_PI_2 {
            self.vertical -= CAMERA_ANGLE_STEP;
        }
    }

    pub fn zoom_in(&mut self) {
        self.distance = (self.distance - 1.0).max(1.0);
    }

    pub fn zoom_out(&mut self) {
        self.distance += 1.0;
    }

    /// View matrix for the active mode.
    pub fn view_matrix(&self, angles: AxonometricAngles, target: &CameraTarget) -> Mat4 {
        let d = self.distance;
        match self.mode {
            CameraMode::Ortho(OrthoPreset::Axonometric) => {
                let (theta, gamma) = (angles.theta.to_radians(), angles.gamma.to_radians());
                let eye = Vec3::new(
                    gamma.cos() * theta.sin(),
                    gamma.sin(),
                    gamma.cos() * theta.cos(),
                ) * d;
                Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y)
            }
            CameraMode::Ortho(OrthoPreset::Top) => Mat4::look_at_rh(Vec3::new(0.0, d, 0.0), Vec3::ZERO, Vec3::Z),
            CameraMode::Ortho(OrthoPreset::Side) => Mat4::look_at_rh(Vec3::new(d, 0.0, 0.0), Vec3::ZERO, Vec3::Y),
            CameraMode::Ortho(OrthoPreset::Front) => Mat4::look_at_rh(Vec3::new(0.0, 0.0, d), Vec3::ZERO, Vec3::Y),
            CameraMode::Free => {
                let dir = Vec3::new(self.horizontal.sin(), self.vertical.sin(), self.horizontal.cos());
                Mat4::look_at_rh(Vec3::ZERO, dir, Vec3::Y)
            }
            CameraMode::FirstPerson => {
                let eye = target.position + Vec3::Y * target.eye_height;
                let yaw = target.yaw.to_radians();
                let forward = Vec3::new(yaw.sin(), 0.0, yaw.cos());
                Mat4::look_at_rh(eye, eye + forward, Vec3::Y)
            }
            CameraMode::Bottom => {
                let eye = target.position + Vec3::Y * target.eye_height;
                let ground = Vec3::new(eye.x, 0.0, eye.z);
                Mat4::look_at_rh(eye, ground, Vec3::X)
            }
            CameraMode::HelicopterFollow => {
                let eye = target.position;
                let view = Mat4::look_at_rh(eye, eye + Vec3::Z, Vec3::Y);
                Mat4::from_rotation_y(-target.yaw.to_radians()) * view
            }
        }
    }

    /// Projection for the active mode. Cockpit and bottom cameras use a
    /// 90 degree perspective; everything else is orthographic.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let d = self.distance;
        match self.mode {
            CameraMode::FirstPerson | CameraMode::Bottom => {
                Mat4::perspective_rh_gl(90f32.to_radians(), aspect, self.perspective_near, 3.0 * d)
            }
            _ => Mat4::orthographic_rh_gl(-d * aspect, d * aspect, -d, d, -3.0 * d, 3.0 * d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> CameraTarget {
        CameraTarget {
            position: Vec3::new(10.0, 20.0, 30.0),
            yaw: 90.0,
            eye_height: 4.0,
        }
    }

    #[test]
    fn vertical_look_stops_past_straight_up() {
        let mut view = ViewState::new();
        for _ in 0..40 {
            view.look_up();
        }
        assert!(view.vertical >= FRAC_PI_2);
        assert!(view.vertical < FRAC_PI_2 + CAMERA_ANGLE_STEP + 1e-5);
    }

    #[test]
    fn zoom_never_collapses() {
        let mut view = ViewState::new();
        for _ in 0..500 {
            view.zoom_in();
        }
        assert_eq!(view.distance, 1.0);
        view.zoom_out();
        assert_eq!(view.distance, 2.0);
    }

    #[test]
    fn first_person_looks_along_heading() {
        let view = ViewState {
            mode: CameraMode::FirstPerson,
            ..ViewState::default()
        };
        let m = view.view_matrix(AxonometricAngles::default(), &target());
        // A point ahead along +X (yaw 90) must land on the view axis (-Z in view space).
        let ahead = m.transform_point3(Vec3::new(20.0, 24.0, 30.0));
        assert!(ahead.x.abs() < 1e-4 && ahead.y.abs() < 1e-4);
        assert!(ahead.z < 0.0);
    }

    #[test]
    fn axonometric_default_is_isometric_diagonal() {
        let view = ViewState::new();
        let m = view.view_matrix(AxonometricAngles::default(), &target());
        let eye = m.inverse().transform_point3(Vec3::ZERO);
        assert!((eye.x - eye.y).abs() < 1e-2 && (eye.y - eye.z).abs() < 1e-2);
        assert!((eye.length() - DEFAULT_VIEW_DISTANCE).abs() < 1e-2);
    }

    #[test]
    fn helicopter_follow_centres_on_helicopter() {
        let view = ViewState {
            mode: CameraMode::HelicopterFollow,
            ..ViewState::default()
        };
        let m = view.view_matrix(AxonometricAngles::default(), &target());
        let p = m.transform_point3(target().position);
        assert!(p.length() < 1e-4);
    }

    #[test]
    fn projection_depends_on_mode_and_aspect() {
        let ortho = ViewState::new().projection_matrix(2.0);
        assert_eq!(ortho.w_axis.w, 1.0);
        assert!((ortho.x_axis.x - 1.0 / (2.0 * DEFAULT_VIEW_DISTANCE)).abs() < 1e-7);
        assert!((ortho.y_axis.y - 1.0 / DEFAULT_VIEW_DISTANCE).abs() < 1e-7);

        let cockpit = ViewState {
            mode: CameraMode::FirstPerson,
            ..ViewState::default()
        };
        let persp = cockpit.projection_matrix(1.0);
        assert_eq!(persp.w_axis.w, 0.0);
        assert_eq!(persp.z_axis.w, -1.0);
        // 90 degree vertical field of view.
        assert!((persp.y_axis.y - 1.0).abs() < 1e-6);
    }
}
