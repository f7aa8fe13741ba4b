//! Controller Settings
//!
//! Tunables for [`PathAnimationController`](super::PathAnimationController).
//!
//! ```rust,ignore
//! use pathcam::controller::ControllerSettings;
//!
//! // Defaults: 0.009 progress per wheel tick, walking speed
//! let settings = ControllerSettings::default();
//!
//! // Partial JSON: missing fields keep their defaults
//! let settings = ControllerSettings::from_json_str(r#"{ "wheel_step": 0.02 }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::controller::speed::SpeedPreset;
use crate::errors::{PathError, Result};

/// Progress added or removed by one mouse-wheel tick.
///
/// An empirical constant, applied per tick regardless of frame time.
pub const DEFAULT_WHEEL_STEP: f32 = 0.009;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Progress delta of one wheel tick, in `(0, 1]`.
    pub wheel_step: f32,
    /// Speed (m/s) a new controller starts with.
    pub default_speed: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            wheel_step: DEFAULT_WHEEL_STEP,
            default_speed: SpeedPreset::default().meters_per_second(),
        }
    }
}

impl ControllerSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.wheel_step.is_finite() && self.wheel_step > 0.0 && self.wheel_step <= 1.0) {
            return Err(PathError::invalid_argument("wheel_step", self.wheel_step));
        }
        if !(self.default_speed.is_finite() && self.default_speed > 0.0) {
            return Err(PathError::invalid_argument("default_speed", self.default_speed));
        }
        Ok(())
    }
}
