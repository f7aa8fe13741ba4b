//! Utility Module
//!
//! - [`FrameClock`]: real elapsed time between host-loop ticks

pub mod time;

pub use time::FrameClock;
