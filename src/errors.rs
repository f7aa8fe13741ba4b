//! Error Types
//!
//! This module defines the error type shared by the path model, the path
//! providers and the playback controller.
//!
//! # Overview
//!
//! [`PathError`] covers every failure mode of the crate:
//! - Unknown path identifiers and malformed control point data
//! - Numeric arguments outside their valid domain
//! - Operations issued before a path has been loaded
//! - JSON and file I/O failures while loading path libraries
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, PathError>`.
//!
//! ```rust,ignore
//! use pathcam::errors::{PathError, Result};
//!
//! fn start(controller: &mut PathAnimationController) -> Result<()> {
//!     controller.play()
//! }
//! ```

use thiserror::Error;

/// The main error type for path playback.
#[derive(Error, Debug)]
pub enum PathError {
    // ========================================================================
    // Path Lookup & Validation
    // ========================================================================
    /// The provider does not know the path, or returned no control points for it.
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Control point data cannot form a valid path.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    // ========================================================================
    // Controller Errors
    // ========================================================================
    /// A numeric argument was rejected at the API boundary.
    #[error("Invalid argument `{name}`: {value}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f32,
    },

    /// A speed preset name did not match any preset.
    #[error("Unknown speed preset: {0}")]
    UnknownPreset(String),

    /// The operation requires a loaded path, but the controller is idle.
    #[error("No path loaded")]
    NoPathLoaded,

    // ========================================================================
    // Loading Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PathError {
    pub(crate) fn invalid_argument(name: &'static str, value: f32) -> Self {
        log::warn!("Rejected {name} = {value}");
        PathError::InvalidArgument { name, value }
    }
}

/// Alias for `Result<T, PathError>`.
pub type Result<T> = std::result::Result<T, PathError>;
