use std::sync::Arc;

use glam::Vec3;

use crate::animation::{Direction, KeyframeCursor};
use crate::controller::input::PathInput;
use crate::controller::settings::ControllerSettings;
use crate::controller::speed::SpeedPreset;
use crate::controller::state::{PlaybackPhase, PlaybackState};
use crate::errors::{PathError, Result};
use crate::path::{CameraPath, PathProvider};
use crate::pose::Pose;

#[derive(Debug, Clone)]
struct LoadedPath {
    id: String,
    path: Arc<CameraPath>,
    cursor: KeyframeCursor,
}

/// Plays a camera along a [`CameraPath`].
///
/// The controller owns normalized progress, the play/pause/scrub state and the
/// travel speed. Hosts drive it once per tick with [`advance`](Self::advance)
/// (real elapsed seconds) or with discrete input ([`scrub`](Self::scrub),
/// [`step`](Self::step), [`wheel`](Self::wheel)) and apply the returned
/// [`Pose`] to whatever they render. The controller never touches a viewport.
///
/// While a look override is set ([`set_look_override`](Self::set_look_override))
/// returned poses keep following the path's positions but look where the host
/// says.
///
/// Playback accumulates travelled distance since the last direct repositioning
/// instead of summing per-frame progress deltas, so variable tick rates do not
/// drift.
#[derive(Debug, Clone)]
pub struct PathAnimationController {
    settings: ControllerSettings,
    loaded: Option<LoadedPath>,
    state: PlaybackState,
    look_override: Option<Direction>,

    // Progress at the last scrub/step/load, and metres travelled since then.
    anchor: f32,
    travelled: f64,
}

impl Default for PathAnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl PathAnimationController {
    #[must_use]
    pub fn new() -> Self {
        let settings = ControllerSettings::default();
        Self {
            settings,
            loaded: None,
            state: PlaybackState::new(settings.default_speed),
            look_override: None,
            anchor: 0.0,
            travelled: 0.0,
        }
    }

    pub fn with_settings(settings: ControllerSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            state: PlaybackState::new(settings.default_speed),
            ..Self::new()
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.state.progress
    }

    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        PlaybackPhase::of(self.loaded.is_some(), &self.state)
    }

    #[must_use]
    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    #[must_use]
    pub fn path(&self) -> Option<&Arc<CameraPath>> {
        self.loaded.as_ref().map(|l| &l.path)
    }

    #[must_use]
    pub fn path_id(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.id.as_str())
    }

    #[must_use]
    pub fn look_override(&self) -> Option<Vec3> {
        self.look_override.map(Direction::get)
    }

    // ========================================================================
    // Path lifecycle
    // ========================================================================

    /// Loads `path_id` from `provider` and parks the playhead at its start.
    ///
    /// On failure nothing changes: a previously loaded path stays loaded,
    /// an idle controller stays idle.
    pub fn load_path<P: PathProvider + ?Sized>(
        &mut self,
        provider: &P,
        path_id: &str,
    ) -> Result<()> {
        let points = provider.control_points(path_id).inspect_err(|e| {
            log::warn!("Failed to load path '{path_id}': {e}");
        })?;
        if points.is_empty() {
            log::warn!("Path '{path_id}' has no control points");
            return Err(PathError::PathNotFound(path_id.to_string()));
        }
        let path = CameraPath::new(&points).inspect_err(|e| {
            log::warn!("Failed to load path '{path_id}': {e}");
        })?;

        self.set_path(path_id, path);
        Ok(())
    }

    /// Installs an already built path. Same state reset as [`load_path`](Self::load_path).
    pub fn set_path(&mut self, path_id: impl Into<String>, path: impl Into<Arc<CameraPath>>) {
        let id = path_id.into();
        let path = path.into();
        log::info!(
            "Loaded path '{id}' ({} control points, length {:.2})",
            path.control_point_count(),
            path.length()
        );

        self.loaded = Some(LoadedPath {
            id,
            path,
            cursor: KeyframeCursor::default(),
        });
        self.state.rewind();
        self.reposition(0.0);
    }

    /// Drops the current path and returns to idle.
    pub fn unload(&mut self) {
        if let Some(loaded) = self.loaded.take() {
            log::info!("Unloaded path '{}'", loaded.id);
        }
        self.state.rewind();
        self.reposition(0.0);
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Sets the travel speed in metres per second. Progress does not move.
    pub fn set_speed(&mut self, meters_per_second: f32) -> Result<()> {
        if !(meters_per_second.is_finite() && meters_per_second > 0.0) {
            return Err(PathError::invalid_argument("speed", meters_per_second));
        }
        self.state.speed = meters_per_second;
        Ok(())
    }

    pub fn set_speed_preset(&mut self, preset: SpeedPreset) {
        self.state.speed = preset.meters_per_second();
    }

    /// Replaces the path's look direction in every returned pose while set.
    /// Position and up still follow the path, and playback is unaffected.
    ///
    /// `None` restores the path's own direction. A zero or non-finite
    /// direction is rejected without changing the current override.
    pub fn set_look_override(&mut self, look_direction: Option<Vec3>) -> Result<()> {
        self.look_override = match look_direction {
            Some(v) => Some(
                Direction::new(v)
                    .ok_or_else(|| PathError::invalid_argument("look_direction", v.length()))?,
            ),
            None => None,
        };
        Ok(())
    }

    // ========================================================================
    // Transport
    // ========================================================================

    /// Starts playback. A playhead parked at the end rewinds to the start first.
    pub fn play(&mut self) -> Result<()> {
        self.ensure_loaded()?;

        if self.state.progress >= 1.0 {
            log::debug!("Restarting path from the beginning");
            self.reposition(0.0);
        }
        if !self.state.is_playing {
            log::debug!("{:?} -> Playing at {:.3}", self.phase(), self.state.progress);
        }
        self.state.is_scrubbing = false;
        self.state.is_playing = true;
        Ok(())
    }

    /// Stops playback, keeping the current progress.
    pub fn pause(&mut self) -> Result<()> {
        self.ensure_loaded()?;

        if self.state.is_playing || self.state.is_scrubbing {
            log::debug!("{:?} -> Paused at {:.3}", self.phase(), self.state.progress);
        }
        self.state.is_playing = false;
        self.state.is_scrubbing = false;
        Ok(())
    }

    pub fn toggle_play(&mut self) -> Result<()> {
        if self.state.is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Moves the playhead by `delta_seconds` of travel at the current speed.
    ///
    /// Does nothing while not playing. Reaching the end of the path stops
    /// playback; further calls keep returning the end pose.
    pub fn advance(&mut self, delta_seconds: f32) -> Result<Pose> {
        let Some(loaded) = self.loaded.as_mut() else {
            return Err(PathError::NoPathLoaded);
        };
        if !(delta_seconds.is_finite() && delta_seconds >= 0.0) {
            return Err(PathError::invalid_argument("delta_seconds", delta_seconds));
        }

        if self.state.is_playing {
            self.travelled += f64::from(delta_seconds) * f64::from(self.state.speed);
            let progress = loaded.path.advance_along_path(self.anchor, self.travelled);
            self.state.progress = progress;

            if progress >= 1.0 {
                self.state.is_playing = false;
                log::debug!("Reached the end of path '{}'", loaded.id);
            }
        }

        let pose = loaded
            .path
            .sample_with_cursor(self.state.progress, &mut loaded.cursor);
        Ok(self.look(pose))
    }

    // ========================================================================
    // Direct positioning
    // ========================================================================

    /// Jumps to `target_progress` (clamped to `[0, 1]`), bypassing speed.
    ///
    /// Stops playback and enters the scrubbing phase until
    /// [`end_scrub`](Self::end_scrub).
    pub fn scrub(&mut self, target_progress: f32) -> Result<Pose> {
        self.ensure_loaded()?;
        if target_progress.is_nan() {
            return Err(PathError::invalid_argument("progress", target_progress));
        }

        if !self.state.is_scrubbing {
            log::debug!("{:?} -> Scrubbing", self.phase());
        }
        self.state.is_playing = false;
        self.state.is_scrubbing = true;
        self.reposition(target_progress.clamp(0.0, 1.0));
        self.sample_current()
    }

    /// Releases the slider: Scrubbing → Paused.
    pub fn end_scrub(&mut self) -> Result<()> {
        self.ensure_loaded()?;
        if self.state.is_scrubbing {
            log::debug!("Scrubbing -> Paused at {:.3}", self.state.progress);
            self.state.is_scrubbing = false;
        }
        Ok(())
    }

    /// Adds `delta_progress` to the current progress (clamped). Not time-scaled,
    /// and leaves the playing flag alone.
    pub fn step(&mut self, delta_progress: f32) -> Result<Pose> {
        self.ensure_loaded()?;
        if !delta_progress.is_finite() {
            return Err(PathError::invalid_argument("delta_progress", delta_progress));
        }

        self.reposition((self.state.progress + delta_progress).clamp(0.0, 1.0));
        self.sample_current()
    }

    /// One mouse-wheel tick: pauses playback, then steps by
    /// `settings.wheel_step` in the direction of `delta_y`.
    ///
    /// Ticks that would push past an end the playhead already sits on are
    /// ignored.
    pub fn wheel(&mut self, delta_y: f32) -> Result<Pose> {
        self.ensure_loaded()?;
        if delta_y.is_nan() {
            return Err(PathError::invalid_argument("wheel_delta", delta_y));
        }

        let progress = self.state.progress;
        let pinned = (delta_y > 0.0 && progress >= 1.0) || (delta_y < 0.0 && progress <= 0.0);
        if delta_y == 0.0 || pinned {
            return self.current_pose();
        }

        self.pause()?;
        self.step(self.settings.wheel_step.copysign(delta_y))
    }

    /// Dispatches a UI request and returns the resulting pose.
    pub fn apply_input(&mut self, input: PathInput) -> Result<Pose> {
        match input {
            PathInput::Scrub(progress) => self.scrub(progress),
            PathInput::Step(delta) => self.step(delta),
            PathInput::Wheel(delta_y) => self.wheel(delta_y),
            PathInput::ScrubEnd => {
                self.end_scrub()?;
                self.current_pose()
            }
            PathInput::Play => {
                self.play()?;
                self.current_pose()
            }
            PathInput::Pause => {
                self.pause()?;
                self.current_pose()
            }
            PathInput::TogglePlay => {
                self.toggle_play()?;
                self.current_pose()
            }
            PathInput::LookAround(look_direction) => {
                self.ensure_loaded()?;
                self.set_look_override(look_direction)?;
                self.current_pose()
            }
        }
    }

    /// Pose at the current progress. Pure read.
    pub fn current_pose(&self) -> Result<Pose> {
        self.loaded
            .as_ref()
            .map(|l| self.look(l.path.sample(self.state.progress)))
            .ok_or(PathError::NoPathLoaded)
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn ensure_loaded(&self) -> Result<()> {
        if self.loaded.is_some() {
            Ok(())
        } else {
            Err(PathError::NoPathLoaded)
        }
    }

    fn reposition(&mut self, progress: f32) {
        self.state.progress = progress;
        self.anchor = progress;
        self.travelled = 0.0;
    }

    fn sample_current(&mut self) -> Result<Pose> {
        let progress = self.state.progress;
        let loaded = self.loaded.as_mut().ok_or(PathError::NoPathLoaded)?;
        let pose = loaded.path.sample_with_cursor(progress, &mut loaded.cursor);
        Ok(self.look(pose))
    }

    fn look(&self, pose: Pose) -> Pose {
        match self.look_override {
            Some(direction) => pose.with_look_direction(direction.get()),
            None => pose,
        }
    }
}
