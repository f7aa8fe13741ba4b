use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Camera position and orientation at one point of a path.
///
/// `look_direction` and `up` are unit vectors. A pose is a plain value: it is
/// recomputed from the path whenever progress changes and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub look_direction: Vec3,
    pub up: Vec3,
}

impl Pose {
    #[must_use]
    pub fn new(position: Vec3, look_direction: Vec3, up: Vec3) -> Self {
        Self {
            position,
            look_direction,
            up,
        }
    }

    /// The same pose looking along `look_direction` instead.
    #[must_use]
    pub fn with_look_direction(self, look_direction: Vec3) -> Self {
        Self {
            look_direction,
            ..self
        }
    }

    /// A point one unit in front of the camera, for look-at style APIs.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.position + self.look_direction
    }

    /// Right-handed view matrix (world → camera).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.look_direction, self.up)
    }
}
