//! Camera system for the 3D viewport.
//!
//! A fixed look-at camera whose view is rotated by a trackball
//! orientation accumulated from pointer drags.

/// Fixed-pose perspective camera.
pub mod core;
/// Drag-to-quaternion trackball rotation.
pub mod trackball;

pub use self::core::ViewCamera;
pub use self::trackball::{TrackballController, DEFAULT_DRAG_DIVISOR};
