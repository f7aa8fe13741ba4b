use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PathError;

/// Named travel speeds offered by path players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpeedPreset {
    SlowWalk,
    #[default]
    Walking,
    Car,
    FastCar,
    Airplane,
}

impl SpeedPreset {
    pub const ALL: [SpeedPreset; 5] = [
        SpeedPreset::SlowWalk,
        SpeedPreset::Walking,
        SpeedPreset::Car,
        SpeedPreset::FastCar,
        SpeedPreset::Airplane,
    ];

    /// Speed in metres per second.
    #[must_use]
    pub const fn meters_per_second(self) -> f32 {
        match self {
            SpeedPreset::SlowWalk => 0.4, // 1 mph
            SpeedPreset::Walking => 1.4, // 3 mph
            SpeedPreset::Car => 13.4, // 30 mph
            SpeedPreset::FastCar => 26.8, // 60 mph
            SpeedPreset::Airplane => 67.05, // 150 mph
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SpeedPreset::SlowWalk => "1 Mph: Slow Walk",
            SpeedPreset::Walking => "3 Mph: Walking",
            SpeedPreset::Car => "30 Mph: Car",
            SpeedPreset::FastCar => "60 Mph: Fast Car",
            SpeedPreset::Airplane => "150 Mph: Airplane",
        }
    }

    fn variant_name(self) -> &'static str {
        match self {
            SpeedPreset::SlowWalk => "SlowWalk",
            SpeedPreset::Walking => "Walking",
            SpeedPreset::Car => "Car",
            SpeedPreset::FastCar => "FastCar",
            SpeedPreset::Airplane => "Airplane",
        }
    }
}

impl fmt::Display for SpeedPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SpeedPreset {
    type Err = PathError;

    /// Accepts either the display label or the variant name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s) || p.variant_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PathError::UnknownPreset(s.to_string()))
    }
}
