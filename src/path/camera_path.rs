use glam::Vec3;

use crate::animation::{Direction, KeyframeCursor, KeyframeTrack};
use crate::errors::{PathError, Result};
use crate::path::control_point::ControlPoint;
use crate::pose::Pose;

/// Below this length a path is treated as a single point.
const MIN_PATH_LENGTH: f64 = 1e-6;

/// An immutable, validated camera path.
///
/// Positions are blended linearly between waypoints; look and up directions
/// follow the great arc between their endpoints. The three tracks share the
/// same keys (the waypoint fractions), so one [`KeyframeCursor`] serves all of them.
#[derive(Debug, Clone)]
pub struct CameraPath {
    positions: KeyframeTrack<Vec3>,
    directions: KeyframeTrack<Direction>,
    ups: KeyframeTrack<Direction>,
    length: f32,
}

impl CameraPath {
    /// Builds a path from waypoints ordered by fraction.
    pub fn new(points: &[ControlPoint]) -> Result<Self> {
        if points.is_empty() {
            return Err(PathError::InvalidPath("path has no control points".into()));
        }

        let mut fractions = Vec::with_capacity(points.len());
        let mut positions = Vec::with_capacity(points.len());
        let mut directions = Vec::with_capacity(points.len());
        let mut ups = Vec::with_capacity(points.len());

        for (i, point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(PathError::InvalidPath(format!(
                    "control point {i} has non-finite components"
                )));
            }
            if !(0.0..=1.0).contains(&point.fraction) {
                return Err(PathError::InvalidPath(format!(
                    "control point {i} has fraction {} outside [0, 1]",
                    point.fraction
                )));
            }
            let direction = Direction::new(point.direction).ok_or_else(|| {
                PathError::InvalidPath(format!("control point {i} has a zero look direction"))
            })?;
            let up = Direction::new(point.up).ok_or_else(|| {
                PathError::InvalidPath(format!("control point {i} has a zero up vector"))
            })?;

            fractions.push(point.fraction);
            positions.push(point.position);
            directions.push(direction);
            ups.push(up);
        }

        let length = polyline_length(&positions) as f32;

        Ok(Self {
            positions: KeyframeTrack::new(fractions.clone(), positions)?,
            directions: KeyframeTrack::new(fractions.clone(), directions)?,
            ups: KeyframeTrack::new(fractions, ups)?,
            length,
        })
    }

    /// Builds a path whose fractions follow cumulative arc length, ignoring the
    /// fractions carried by `points`.
    ///
    /// A path whose waypoints all coincide gets evenly spaced fractions.
    pub fn from_arc_length(points: &[ControlPoint]) -> Result<Self> {
        let mut points = points.to_vec();
        let fractions = arc_length_fractions(points.iter().map(|p| p.position));
        for (point, fraction) in points.iter_mut().zip(fractions) {
            point.fraction = fraction;
        }
        Self::new(&points)
    }

    /// Total world-space length of the polyline through the waypoints.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[must_use]
    pub fn control_point_count(&self) -> usize {
        self.positions.keys().len()
    }

    /// The waypoints the path was built from, with normalized vectors.
    #[must_use]
    pub fn control_points(&self) -> Vec<ControlPoint> {
        self.positions
            .keys()
            .iter()
            .zip(self.positions.values())
            .zip(self.directions.values().iter().zip(self.ups.values()))
            .map(|((&fraction, &position), (direction, up))| {
                ControlPoint::new(fraction, position, direction.get(), up.get())
            })
            .collect()
    }

    /// Interpolated pose at `progress`. Values outside `[0, 1]` resolve to the
    /// nearest endpoint.
    ///
    /// Waypoints sharing a fraction form a cut: the later one wins, except at
    /// the start of the path where the first waypoint is returned exactly.
    #[must_use]
    pub fn sample(&self, progress: f32) -> Pose {
        Pose::new(
            self.positions.sample(progress),
            self.directions.sample(progress).get(),
            self.ups.sample(progress).get(),
        )
    }

    /// Same result as [`sample`](Self::sample), reusing the segment found by the
    /// previous lookup.
    pub fn sample_with_cursor(&self, progress: f32, cursor: &mut KeyframeCursor) -> Pose {
        Pose::new(
            self.positions.sample_with_cursor(progress, cursor),
            self.directions.sample_with_cursor(progress, cursor).get(),
            self.ups.sample_with_cursor(progress, cursor).get(),
        )
    }

    #[must_use]
    pub fn start_pose(&self) -> Pose {
        self.sample(0.0)
    }

    #[must_use]
    pub fn end_pose(&self) -> Pose {
        self.sample(1.0)
    }

    /// Progress reached after travelling `distance` world units from
    /// `fraction`. Negative distances travel backwards. The result is clamped
    /// to `[0, 1]`.
    #[must_use]
    pub fn advance_along_path(&self, fraction: f32, distance: f64) -> f32 {
        let length = f64::from(self.length);
        let next = if length < MIN_PATH_LENGTH {
            // Degenerate path: any movement reaches the corresponding end.
            if distance > 0.0 {
                1.0
            } else if distance < 0.0 {
                0.0
            } else {
                f64::from(fraction)
            }
        } else {
            f64::from(fraction) + distance / length
        };
        (next as f32).clamp(0.0, 1.0)
    }
}

fn polyline_length(positions: &[Vec3]) -> f64 {
    positions
        .windows(2)
        .map(|w| f64::from(w[0].distance(w[1])))
        .sum()
}

/// Normalized cumulative arc length at each position.
pub(crate) fn arc_length_fractions(positions: impl Iterator<Item = Vec3>) -> Vec<f32> {
    let positions: Vec<Vec3> = positions.collect();
    let total = polyline_length(&positions);
    let count = positions.len();

    if total < MIN_PATH_LENGTH {
        return (0..count)
            .map(|i| if count > 1 { i as f32 / (count - 1) as f32 } else { 0.0 })
            .collect();
    }

    let mut travelled = 0.0_f64;
    let mut fractions = Vec::with_capacity(count);
    for (i, position) in positions.iter().enumerate() {
        if i > 0 {
            travelled += f64::from(positions[i - 1].distance(*position));
        }
        fractions.push((travelled / total) as f32);
    }
    // Pin the final waypoint so accumulated rounding cannot leave it short of 1.
    if let Some(last) = fractions.last_mut() {
        *last = 1.0;
    }
    fractions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_length_fractions_follow_distance() {
        let fractions = arc_length_fractions(
            [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0)].into_iter(),
        );
        assert_eq!(fractions, vec![0.0, 0.25, 1.0]);
    }

    #[test]
    fn arc_length_fractions_degenerate() {
        let fractions = arc_length_fractions([Vec3::ONE, Vec3::ONE, Vec3::ONE].into_iter());
        assert_eq!(fractions, vec![0.0, 0.5, 1.0]);
        let single = arc_length_fractions(std::iter::once(Vec3::ONE));
        assert_eq!(single, vec![0.0]);
    }
}
