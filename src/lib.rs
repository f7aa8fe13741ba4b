#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod controller;
pub mod errors;
pub mod path;
pub mod pose;
pub mod utils;
pub mod viewport;

pub use controller::{
    ControllerSettings, PathAnimationController, PathInput, PlaybackPhase, PlaybackState,
    SpeedPreset,
};
pub use errors::PathError;
pub use path::{CameraPath, ControlPoint, PathLibrary, PathProvider};
pub use pose::Pose;
pub use utils::FrameClock;
pub use viewport::{ViewportId, ViewportSink, ViewportSync};
