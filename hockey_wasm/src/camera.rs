//! Camera for the rink
//!
//! 2D orthographic camera in rink pixels (y grows downward) with a
//! goal-celebration shake.

use glam::{Mat4, Vec2, Vec3};

/// Short random jolt of the view after a goal
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Shake {
    duration: f32,
    remaining: f32,
    intensity: f32,
}

impl Shake {
    pub fn start(&mut self, duration: f32, intensity: f32) {
        self.duration = duration;
        self.remaining = duration;
        self.intensity = intensity;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Advance by `dt` and return this frame's view offset. `random` yields
    /// values in [0, 1).
    pub fn update(&mut self, dt: f32, width: f32, mut random: impl FnMut() -> f32) -> Vec2 {
        if !self.is_active() || self.duration <= 0.0 {
            self.remaining = 0.0;
            return Vec2::ZERO;
        }

        let falloff = self.remaining / self.duration;
        self.remaining = (self.remaining - dt).max(0.0);

        let reach = self.intensity * width * falloff;
        Vec2::new(
            (random() * 2.0 - 1.0) * reach,
            (random() * 2.0 - 1.0) * reach,
        )
    }
}

/// Camera struct
pub struct Camera {
    pub width: f32,
    pub height: f32,
    pub offset: Vec2,
    pub shake: Shake,
}

impl Camera {
    /// Create an orthographic camera over a `width` x `height` rink
    pub fn orthographic(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset: Vec2::ZERO,
            shake: Shake::default(),
        }
    }

    pub fn projection(&self) -> Mat4 {
        // Top edge is y = 0 so screen space matches the simulation
        Mat4::orthographic_rh(0.0, self.width, self.height, 0.0, -1.0, 1.0)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(-self.offset.x, -self.offset.y, 0.0))
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Step the shake and refresh the view offset
    pub fn update(&mut self, dt: f32, random: impl FnMut() -> f32) {
        self.offset = self.shake.update(dt, self.width, random);
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // pad to 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
