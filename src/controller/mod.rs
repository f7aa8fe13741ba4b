//! Path Playback Controller
//!
//! [`PathAnimationController`] turns elapsed time and UI input into progress
//! along a [`CameraPath`](crate::path::CameraPath) and reports the camera
//! [`Pose`](crate::pose::Pose) at that progress.
//!
//! # Driving a controller
//!
//! ```rust,ignore
//! use pathcam::{PathAnimationController, PathLibrary, SpeedPreset};
//!
//! let library = PathLibrary::from_file("paths.json")?;
//! let mut controller = PathAnimationController::new();
//! controller.load_path(&library, "TrainPath")?;
//! controller.set_speed_preset(SpeedPreset::Car);
//! controller.play()?;
//!
//! // once per frame
//! let pose = controller.advance(clock.tick())?;
//! viewport.apply_pose(&pose);
//! ```

pub mod input;
pub mod path_controller;
pub mod settings;
pub mod speed;
pub mod state;

pub use input::PathInput;
pub use path_controller::PathAnimationController;
pub use settings::{ControllerSettings, DEFAULT_WHEEL_STEP};
pub use speed::SpeedPreset;
pub use state::{PlaybackPhase, PlaybackState};
