use glam::{Quat, Vec2, Vec3};

use super::core::{Camera, CameraPose};
use crate::options::CameraOptions;

/// Orbit-style camera controller.
///
/// Owns the camera plus the orbit parametrization (orientation quaternion,
/// focus point, distance). Direct manipulation (`rotate`/`pan`/`zoom`) is
/// gated by an `enabled` flag: the engine disables it while a view
/// transition is in flight and restores it on natural completion, so the
/// tween and the user never fight over the pose.
pub struct CameraController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,
    enabled: bool,

    /// The perspective camera this controller drives.
    pub camera: Camera,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl CameraController {
    /// Construct a controller at the given pose for a viewport, applying
    /// the breakpoint field-of-view policy for the initial width.
    #[must_use]
    pub fn new(
        options: &CameraOptions,
        initial: CameraPose,
        viewport: (u32, u32),
    ) -> Self {
        let (width, height) = viewport;
        let camera = Camera {
            eye: initial.eye,
            target: initial.target,
            up: Vec3::Y,
            aspect: width.max(1) as f32 / height.max(1) as f32,
            fovy: options.fov_for_width(width),
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut controller = Self {
            orientation: Quat::IDENTITY,
            distance: 1.0,
            focus_point: initial.target,
            enabled: true,
            camera,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        };
        controller.apply_pose(initial);
        controller
    }

    /// Re-read tunables (speeds, clip planes, distance clamp) after an
    /// options change. Does not move the camera.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.rotate_speed = options.rotate_speed;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
        self.min_distance = options.min_distance;
        self.max_distance = options.max_distance;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
    }

    /// Whether direct user manipulation is currently allowed.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable direct user manipulation.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Current eye/target pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Apply an externally computed pose (a tween step) and re-derive the
    /// orbit internals so user-driven control resumes from a consistent
    /// state.
    pub fn apply_pose(&mut self, pose: CameraPose) {
        if !pose.is_finite() {
            log::warn!("ignoring non-finite camera pose");
            return;
        }
        self.camera.eye = pose.eye;
        self.camera.target = pose.target;
        self.focus_point = pose.target;

        let offset = pose.eye - pose.target;
        let length = offset.length();
        if length > f32::EPSILON {
            self.distance = length;
            self.orientation = Quat::from_rotation_arc(Vec3::Z, offset / length);
        }
        self.camera.up = self.orientation * Vec3::Y;
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;
        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Recompute aspect ratio and reapply the breakpoint field-of-view
    /// policy for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32, options: &CameraOptions) {
        self.camera.aspect = width.max(1) as f32 / height.max(1) as f32;
        self.camera.fovy = options.fov_for_width(width);
    }

    /// Orbit the camera by a mouse drag delta. No-op while disabled.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal = Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal * self.orientation;

        // Vertical rotation around camera's right vector
        let right = self.orientation * Vec3::X;
        let vertical = Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = vertical * self.orientation;

        self.update_camera_pos();
    }

    /// Pan the focus point by a mouse drag delta. No-op while disabled.
    pub fn pan(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        let translation =
            right * (-delta.x * self.pan_speed) + up * (delta.y * self.pan_speed);
        self.focus_point += translation;
        self.update_camera_pos();
    }

    /// Dolly toward/away from the focus point. No-op while disabled.
    pub fn zoom(&mut self, delta: f32) {
        if !self.enabled {
            return;
        }
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }
}
