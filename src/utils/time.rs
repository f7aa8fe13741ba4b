#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Measures real elapsed time between host-loop ticks.
///
/// Feed [`tick`](Self::tick) into
/// [`PathAnimationController::advance`](crate::PathAnimationController::advance).
/// Call [`rearm`](Self::rearm) when playback resumes so the paused interval is
/// not reported as one huge frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    /// Upper bound for a single reported delta.
    pub max_delta: Duration,
    /// Sum of all reported deltas.
    pub elapsed: Duration,
    pub tick_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: None,
            max_delta: Duration::from_millis(250),
            elapsed: Duration::ZERO,
            tick_count: 0,
        }
    }

    /// Seconds since the previous tick (zero on the first tick).
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// [`tick`](Self::tick) with an explicit timestamp.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last))
            .min(self.max_delta);

        self.last_tick = Some(now);
        self.elapsed += delta;
        self.tick_count += 1;
        delta.as_secs_f32()
    }

    /// Forgets the previous tick; the next tick reports zero.
    pub fn rearm(&mut self) {
        self.last_tick = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick_at(Instant::now()), 0.0);
        assert_eq!(clock.tick_count, 1);
    }

    #[test]
    fn reports_elapsed_between_ticks() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(40));
        assert!((dt - 0.04).abs() < 1e-6);
        assert_eq!(clock.elapsed, Duration::from_millis(40));
    }

    #[test]
    fn long_gaps_are_capped_and_rearm_skips_them() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        let dt = clock.tick_at(start + Duration::from_secs(5));
        assert!((dt - 0.25).abs() < 1e-6);

        clock.rearm();
        assert_eq!(clock.tick_at(start + Duration::from_secs(60)), 0.0);
    }
}
