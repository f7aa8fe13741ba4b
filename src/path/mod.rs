//! Camera Path Model
//!
//! - [`ControlPoint`]: a waypoint (fraction, position, look direction, up vector)
//! - [`CameraPath`]: a validated, immutable sequence of waypoints with its arc length
//! - [`PathProvider`] / [`PathLibrary`]: where control points come from

pub mod camera_path;
pub mod control_point;
pub mod provider;

pub use camera_path::CameraPath;
pub use control_point::ControlPoint;
pub use provider::{PathLibrary, PathProvider};
