use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Discrete requests emitted by a UI layer (slider, wheel, play button).
///
/// Feed them to
/// [`PathAnimationController::apply_input`](super::PathAnimationController::apply_input).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathInput {
    /// Slider dragged to an absolute progress.
    Scrub(f32),
    /// Slider released.
    ScrubEnd,
    /// Relative progress change, not time-scaled.
    Step(f32),
    /// Mouse-wheel movement; only the sign of the value is used.
    Wheel(f32),
    Play,
    Pause,
    TogglePlay,
    /// Free look while the camera keeps moving: `Some` holds the host's look
    /// direction, `None` hands the view back to the path.
    LookAround(Option<Vec3>),
}
