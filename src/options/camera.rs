use serde::{Deserialize, Serialize};

use crate::camera::DEFAULT_DRAG_DIVISOR;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera pose, projection and trackball parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Eye position of the fixed look-at pose.
    pub eye: [f32; 3],
    /// Look-at target.
    pub target: [f32; 3],
    /// Up direction.
    pub up: [f32; 3],
    /// Pixels of drag per degree of trackball rotation.
    pub drag_divisor: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            eye: [0.0, 5.0, -10.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            drag_divisor: DEFAULT_DRAG_DIVISOR,
        }
    }
}
