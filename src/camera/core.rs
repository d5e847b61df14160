use glam::{Mat4, Quat, Vec3};

use crate::options::CameraOptions;

/// Fixed look-at camera with a perspective projection.
///
/// The pose never moves; user rotation is applied by composing the
/// trackball orientation after the look-at transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCamera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), 1.0)
    }
}

impl ViewCamera {
    /// Build a camera from options for a viewport of the given aspect ratio.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(options.eye),
            target: Vec3::from_array(options.target),
            up: Vec3::from_array(options.up),
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// View matrix for this frame: the fixed look-at pose followed by the
    /// accumulated orientation.
    #[must_use]
    pub fn view_matrix(&self, orientation: Quat) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
            * Mat4::from_quat(orientation)
    }

    /// Perspective projection.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Update the aspect ratio. Zero-sized dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}
