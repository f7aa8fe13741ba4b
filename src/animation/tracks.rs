use crate::animation::values::Interpolatable;
use crate::errors::{PathError, Result};

const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the last resolved segment of a track.
///
/// Playback and wheel stepping move through a path in small increments, so the
/// next lookup almost always lands in the same or an adjacent segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// Keyframes addressed by a monotonic key (path fraction, time, ...).
///
/// Always holds at least one keyframe and exactly one value per key.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    keys: Vec<f32>,
    values: Vec<T>,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    pub fn new(keys: Vec<f32>, values: Vec<T>) -> Result<Self> {
        if keys.is_empty() {
            return Err(PathError::InvalidPath("track has no keyframes".into()));
        }
        if keys.len() != values.len() {
            return Err(PathError::InvalidPath(format!(
                "track has {} keys but {} values",
                keys.len(),
                values.len()
            )));
        }
        if let Some(i) = keys
            .windows(2)
            .position(|w| w[0].is_nan() || w[1].is_nan() || w[0] > w[1])
        {
            return Err(PathError::InvalidPath(format!(
                "keys must be non-decreasing (key {} = {} follows {})",
                i + 1,
                keys[i + 1],
                keys[i]
            )));
        }

        Ok(Self { keys, values })
    }

    #[must_use]
    pub fn keys(&self) -> &[f32] {
        &self.keys
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Stateless sampling via binary search.
    #[must_use]
    pub fn sample(&self, key: f32) -> T {
        if key <= self.keys[0] {
            return self.values[0];
        }
        // partition_point finds the first index where k > key, i.e. next_index
        let next_idx = self.keys.partition_point(|&k| k <= key);
        self.sample_at_frame(next_idx.saturating_sub(1), key)
    }

    /// Sampling with a cursor hint. Produces exactly the same value as
    /// [`sample`](Self::sample) for the same key.
    pub fn sample_with_cursor(&self, key: f32, cursor: &mut KeyframeCursor) -> T {
        let len = self.keys.len();
        if len == 1 || key <= self.keys[0] {
            cursor.last_index = 0;
            return self.values[0];
        }

        let i = cursor.last_index.min(len - 1);
        let k_curr = self.keys[i];

        let found_index = if key >= k_curr {
            // Moving forward: scan right a few segments.
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    res = Some(len - 1);
                    break;
                }
                if key < self.keys[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Moving backward: scan left a few segments.
            let mut res = None;
            for offset in 1..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;
                if key >= self.keys[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let final_index = found_index.unwrap_or_else(|| {
            // Large jump (scrubbing): fall back to binary search.
            self.keys.partition_point(|&k| k <= key).saturating_sub(1)
        });

        // Equal keys past the first: resolve to the last of the run so both
        // lookups agree. A run at the very start is handled above.
        let final_index = self.last_of_equal_run(final_index, key);
        cursor.last_index = final_index;
        self.sample_at_frame(final_index, key)
    }

    fn last_of_equal_run(&self, mut index: usize, key: f32) -> usize {
        while index + 1 < self.keys.len() && self.keys[index + 1] <= key {
            index += 1;
        }
        index
    }

    fn sample_at_frame(&self, index: usize, key: f32) -> T {
        let len = self.keys.len();

        if index >= len - 1 {
            return self.values[len - 1];
        }

        let next_idx = index + 1;
        let k0 = self.keys[index];
        let k1 = self.keys[next_idx];
        let dk = k1 - k0;

        let t = if dk > 1e-6 { (key - k0) / dk } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        // Exact keyframe hit (including keys before the first frame).
        if t <= 0.0 {
            return self.values[index];
        }

        T::interpolate_linear(self.values[index], self.values[next_idx], t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_tracks() {
        assert!(KeyframeTrack::<f32>::new(vec![], vec![]).is_err());
        assert!(KeyframeTrack::new(vec![0.0, 1.0], vec![1.0_f32]).is_err());
        assert!(KeyframeTrack::new(vec![0.5, 0.2], vec![1.0_f32, 2.0]).is_err());
        assert!(KeyframeTrack::new(vec![0.0, f32::NAN], vec![1.0_f32, 2.0]).is_err());
    }

    #[test]
    fn cursor_resolves_duplicate_keys_like_binary_search() {
        let track =
            KeyframeTrack::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0_f32, 5.0, 50.0, 100.0]).unwrap();

        let mut cursor = KeyframeCursor::default();
        let a = track.sample_with_cursor(0.5, &mut cursor);
        assert_eq!(a, track.sample(0.5));
        assert_eq!(cursor.last_index, 2);
    }

    #[test]
    fn duplicate_first_keys_resolve_to_first_value() {
        let track = KeyframeTrack::new(vec![0.0, 0.0, 1.0], vec![1.0_f32, 2.0, 3.0]).unwrap();
        assert_eq!(track.sample(0.0), 1.0);
        assert_eq!(track.sample(-0.5), 1.0);

        let mut cursor = KeyframeCursor { last_index: 2 };
        assert_eq!(track.sample_with_cursor(0.0, &mut cursor), 1.0);
        assert_eq!(cursor.last_index, 0);
        // Just past the start, the later waypoint of the run takes over.
        assert_eq!(track.sample_with_cursor(0.5, &mut cursor), track.sample(0.5));
        assert!((track.sample(0.5) - 2.5).abs() < 1e-6);
    }
}
