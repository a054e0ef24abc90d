//! First-person fly camera
//!
//! The camera is a plain value: everything `update` needs, including the
//! pointer baseline used to turn absolute pointer positions into deltas, lives
//! in the struct.

use std::collections::HashSet;
use std::f32::consts::PI;

use crate::core::types::{Mat4, Vec3};
use crate::math::transform::{look_at_rh, perspective_rh};
use crate::math::Aabb;

/// Pitch is hard-clamped to this magnitude (radians)
pub const PITCH_LIMIT: f32 = 1.5708;

/// Region the camera position is confined to
pub const CAMERA_BOUNDS: Aabb = Aabb::new(Vec3::new(-20.0, 0.0, -20.0), Vec3::new(20.0, 20.0, 20.0));

/// Movement intent below this length is treated as no input
const MIN_MOVE_INTENT: f32 = 0.01;

const FOV_Y: f32 = PI / 3.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

/// Platform-independent movement keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

/// Fly camera state
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// World position
    pub position: Vec3,
    /// Rotation around the Y axis in radians
    pub yaw: f32,
    /// Elevation angle in radians, within [-PITCH_LIMIT, PITCH_LIMIT]
    pub pitch: f32,
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Radians of rotation per pointer unit
    pub look_sensitivity: f32,
    /// World-to-camera transform
    pub view: Mat4,
    /// Camera-to-clip transform
    pub projection: Mat4,
    /// Pointer position seen by the previous update
    pub last_pointer: (f64, f64),
    /// Whether `last_pointer` has been captured yet
    pub has_pointer_baseline: bool,
}

impl Camera {
    /// Create the start-of-session camera for a viewport of the given size
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        let position = Vec3::new(0.0, 0.0, 3.0);
        let mut camera = Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            move_speed: 8.0,
            look_sensitivity: 0.005,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            last_pointer: (0.0, 0.0),
            has_pointer_baseline: false,
        };
        camera.set_viewport(viewport_width, viewport_height);
        camera.refresh_view();
        camera
    }

    /// Rebuild the projection for a new viewport size (call on window resize)
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        self.projection = perspective_rh(FOV_Y, aspect, NEAR, FAR);
    }

    /// Unit view direction derived from yaw and pitch
    pub fn forward(&self) -> Vec3 {
        let cos_pitch = self.pitch.cos();
        Vec3::new(
            self.yaw.sin() * cos_pitch,
            self.pitch.sin(),
            -self.yaw.cos() * cos_pitch,
        )
        .normalize()
    }

    /// Unit vector pointing to the camera's right, parallel to the ground
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Advance one frame.
    ///
    /// The first call only records the pointer; later calls rotate by the
    /// pointer delta since the previous call. Held keys move the camera at
    /// `move_speed` regardless of how many are combined, and the result is
    /// clamped to [`CAMERA_BOUNDS`].
    pub fn update(&mut self, dt: f32, keys: &HashSet<MoveKey>, pointer_x: f64, pointer_y: f64) {
        if !self.has_pointer_baseline {
            self.last_pointer = (pointer_x, pointer_y);
            self.has_pointer_baseline = true;
        }

        let delta_x = (pointer_x - self.last_pointer.0) as f32;
        let delta_y = (pointer_y - self.last_pointer.1) as f32;
        self.last_pointer = (pointer_x, pointer_y);

        self.yaw += delta_x * self.look_sensitivity;
        self.pitch -= delta_y * self.look_sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let forward = self.forward();
        let right = self.right();

        let mut intent = Vec3::ZERO;
        if keys.contains(&MoveKey::Forward) {
            intent += forward;
        }
        if keys.contains(&MoveKey::Back) {
            intent -= forward;
        }
        if keys.contains(&MoveKey::Left) {
            intent -= right;
        }
        if keys.contains(&MoveKey::Right) {
            intent += right;
        }
        if keys.contains(&MoveKey::Up) {
            intent.y += 1.0;
        }
        if keys.contains(&MoveKey::Down) {
            intent.y -= 1.0;
        }

        if intent.length() > MIN_MOVE_INTENT {
            self.position += intent.normalize() * self.move_speed * dt;
        }

        self.position = CAMERA_BOUNDS.clamp_point(self.position);
        self.refresh_view();
    }

    /// Keep the eye at or above `min_y` (e.g. ground height plus clearance).
    ///
    /// The lift never goes past the ceiling of [`CAMERA_BOUNDS`], so terrain
    /// taller than the box cannot push the camera out of it.
    pub fn rest_above(&mut self, min_y: f32) {
        let min_y = min_y.min(CAMERA_BOUNDS.max.y);
        if self.position.y < min_y {
            self.position.y = min_y;
            self.refresh_view();
        }
    }

    fn refresh_view(&mut self) {
        self.view = look_at_rh(self.position, self.position + self.forward(), Vec3::Y);
    }
}

/// Create the start-of-session camera for a viewport
pub fn make_camera(viewport_width: u32, viewport_height: u32) -> Camera {
    Camera::new(viewport_width, viewport_height)
}

/// Value-in, value-out form of [`Camera::update`]
pub fn update_camera(
    mut camera: Camera,
    dt: f32,
    keys: &HashSet<MoveKey>,
    pointer_x: f64,
    pointer_y: f64,
) -> Camera {
    camera.update(dt, keys, pointer_x, pointer_y);
    camera
}
