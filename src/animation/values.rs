use glam::{Quat, Vec3};

/// A value that can be blended between two keyframes.
pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

/// A unit-length direction.
///
/// Blends along the great arc between its endpoints instead of through the
/// interior of the sphere, so intermediate values keep unit length and the
/// angular velocity stays constant across a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction(Vec3);

impl Direction {
    /// Normalizes `v`. Returns `None` for zero-length or non-finite input.
    #[must_use]
    pub fn new(v: Vec3) -> Option<Self> {
        v.try_normalize().map(Self)
    }

    #[inline]
    #[must_use]
    pub fn get(self) -> Vec3 {
        self.0
    }
}

impl Interpolatable for Direction {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        // `from_rotation_arc` picks an arbitrary orthogonal axis for opposite vectors.
        let arc = Quat::from_rotation_arc(start.0, end.0);
        let rotated = Quat::IDENTITY.slerp(arc, t) * start.0;
        Self(rotated.normalize_or(start.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_1_SQRT_2;

    #[test]
    fn direction_rejects_zero() {
        assert!(Direction::new(Vec3::ZERO).is_none());
        assert!(Direction::new(Vec3::new(f32::NAN, 0.0, 0.0)).is_none());
    }

    #[test]
    fn direction_slerp_keeps_unit_length() {
        let a = Direction::new(Vec3::X).unwrap();
        let b = Direction::new(Vec3::Z).unwrap();
        let mid = Direction::interpolate_linear(a, b, 0.5).get();
        assert!((mid.length() - 1.0).abs() < 1e-5);
        assert!((mid.x - FRAC_1_SQRT_2).abs() < 1e-5);
        assert!((mid.z - FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn direction_slerp_opposite_vectors() {
        let a = Direction::new(Vec3::X).unwrap();
        let b = Direction::new(Vec3::NEG_X).unwrap();
        let end = Direction::interpolate_linear(a, b, 1.0).get();
        assert!(end.distance(Vec3::NEG_X) < 1e-4);
        let mid = Direction::interpolate_linear(a, b, 0.5).get();
        assert!((mid.length() - 1.0).abs() < 1e-5);
        assert!(mid.x.abs() < 1e-4);
    }
}
