//! Trackball rotation: pointer drags become incremental quaternions that are
//! accumulated into a single view orientation.
//!
//! The drag delta `(dx, dy)` is turned into a rotation about the in-plane
//! axis `(dy, dx, 0)` by `|delta| / divisor` degrees. Each increment is
//! composed on the **left** of the accumulated orientation, so new drags
//! rotate in world space rather than in the already-rotated local frame.
//!
//! The controller does not know about mouse buttons. Callers decide when a
//! drag is active and only then forward [`on_press`](TrackballController::on_press)
//! and [`on_move`](TrackballController::on_move).

use glam::{Quat, Vec2, Vec3};

/// Default drag sensitivity: degrees of rotation per two pixels of drag.
pub const DEFAULT_DRAG_DIVISOR: f32 = 2.0;

/// Accumulates pointer drags into a unit orientation quaternion.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackballController {
    orientation: Quat,
    last_position: Vec2,
    divisor: f32,
}

impl Default for TrackballController {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackballController {
    /// Controller at identity orientation with the default sensitivity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_divisor(DEFAULT_DRAG_DIVISOR)
    }

    /// Controller at identity orientation where a drag of `divisor` pixels
    /// rotates by one degree.
    ///
    /// Non-finite or non-positive divisors fall back to
    /// [`DEFAULT_DRAG_DIVISOR`].
    #[must_use]
    pub fn with_divisor(divisor: f32) -> Self {
        let divisor = if divisor.is_finite() && divisor > 0.0 {
            divisor
        } else {
            log::warn!(
                "invalid drag divisor {divisor}, using {DEFAULT_DRAG_DIVISOR}"
            );
            DEFAULT_DRAG_DIVISOR
        };
        Self {
            orientation: Quat::IDENTITY,
            last_position: Vec2::ZERO,
            divisor,
        }
    }

    /// Drag sensitivity divisor in use.
    #[must_use]
    pub fn divisor(&self) -> f32 {
        self.divisor
    }

    /// Start a drag gesture at `point` (widget pixel coordinates).
    pub fn on_press(&mut self, point: Vec2) {
        self.last_position = point;
    }

    /// Continue the drag to `point` and return the updated orientation.
    pub fn on_move(&mut self, point: Vec2) -> Quat {
        let delta = point - self.last_position;
        self.last_position = point;

        let increment = self.increment(delta);
        self.orientation = (increment * self.orientation).normalize();
        self.orientation
    }

    /// Accumulated orientation.
    #[must_use]
    pub fn current_orientation(&self) -> Quat {
        self.orientation
    }

    /// Drop all accumulated rotation.
    pub fn reset(&mut self) {
        self.orientation = Quat::IDENTITY;
    }

    /// Unit rotation axis and angle in degrees for a drag delta.
    ///
    /// Returns `None` when the delta has no direction (zero length or
    /// non-finite), which callers treat as an identity rotation.
    #[must_use]
    pub fn axis_angle(&self, delta: Vec2) -> Option<(Vec3, f32)> {
        let axis = Vec3::new(delta.y, delta.x, 0.0).try_normalize()?;
        Some((axis, delta.length() / self.divisor))
    }

    /// Incremental rotation for one drag step.
    #[must_use]
    pub fn increment(&self, delta: Vec2) -> Quat {
        self.axis_angle(delta)
            .map_or(Quat::IDENTITY, |(axis, degrees)| {
                Quat::from_axis_angle(axis, degrees.to_radians())
            })
    }
}
