use serde::Serialize;

/// Observable playback state of a [`PathAnimationController`](super::PathAnimationController).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaybackState {
    /// Normalized position along the path, always within `[0, 1]`.
    pub progress: f32,
    pub is_playing: bool,
    pub is_scrubbing: bool,
    /// Playback speed in world units (metres) per second.
    pub speed: f32,
}

impl PlaybackState {
    pub(crate) fn new(speed: f32) -> Self {
        Self {
            progress: 0.0,
            is_playing: false,
            is_scrubbing: false,
            speed,
        }
    }

    /// Back to the start of a freshly loaded path.
    pub(crate) fn rewind(&mut self) {
        self.progress = 0.0;
        self.is_playing = false;
        self.is_scrubbing = false;
    }
}

/// State machine phases.
///
/// ```text
///            load_path
///   Idle ─────────────────▶ Paused ◀──────────────┐
///                           │  ▲  │               │
///                   play()  │  │  │ scrub()       │ end_scrub()
///                           ▼  │  ▼               │
///                      Playing  Scrubbing ────────┘
///        pause() / end reached ┘   play() → Playing
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlaybackPhase {
    /// No path loaded.
    Idle,
    Playing,
    Paused,
    Scrubbing,
}

impl PlaybackPhase {
    pub(crate) fn of(has_path: bool, state: &PlaybackState) -> Self {
        if !has_path {
            Self::Idle
        } else if state.is_scrubbing {
            Self::Scrubbing
        } else if state.is_playing {
            Self::Playing
        } else {
            Self::Paused
        }
    }
}
