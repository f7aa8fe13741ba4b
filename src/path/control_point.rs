use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A waypoint of a camera path.
///
/// `fraction` is the normalized position of the waypoint along the path,
/// in `[0, 1]`. Vectors serialize as `[x, y, z]` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub fraction: f32,
    pub position: Vec3,
    pub direction: Vec3,
    pub up: Vec3,
}

impl ControlPoint {
    #[must_use]
    pub fn new(fraction: f32, position: Vec3, direction: Vec3, up: Vec3) -> Self {
        Self {
            fraction,
            position,
            direction,
            up,
        }
    }

    /// A waypoint looking from `position` towards `target`.
    #[must_use]
    pub fn looking_at(fraction: f32, position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self::new(fraction, position, target - position, up)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.fraction.is_finite()
            && self.position.is_finite()
            && self.direction.is_finite()
            && self.up.is_finite()
    }
}
