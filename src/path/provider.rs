//! Path Providers
//!
//! The controller does not know where camera paths come from. It asks a
//! [`PathProvider`] for the control points of a path identifier and builds the
//! [`CameraPath`](crate::path::CameraPath) itself.
//!
//! [`PathLibrary`] is the bundled provider: an in-memory table of named paths
//! that can be populated from code or from a JSON document:
//!
//! ```json
//! {
//!   "paths": [
//!     {
//!       "id": "TrainPath",
//!       "points": [
//!         { "position": [0, 2, 0], "direction": [1, 0, 0], "up": [0, 0, 1] },
//!         { "position": [50, 2, 0], "direction": [1, 0, 0], "up": [0, 0, 1] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `fraction` may be given on every point of a path or omitted on all of them;
//! when omitted, fractions are derived from cumulative arc length.

use std::io::Read;
use std::path::Path;

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::errors::{PathError, Result};
use crate::path::camera_path::arc_length_fractions;
use crate::path::control_point::ControlPoint;

/// Source of control points, keyed by path identifier.
pub trait PathProvider {
    /// Returns the ordered control points of `path_id`.
    ///
    /// Fails with [`PathError::PathNotFound`] for unknown identifiers.
    fn control_points(&self, path_id: &str) -> Result<Vec<ControlPoint>>;
}

impl<P: PathProvider + ?Sized> PathProvider for &P {
    fn control_points(&self, path_id: &str) -> Result<Vec<ControlPoint>> {
        (**self).control_points(path_id)
    }
}

/// In-memory collection of named paths.
#[derive(Debug, Clone, Default)]
pub struct PathLibrary {
    paths: FxHashMap<String, Vec<ControlPoint>>,
}

impl PathLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a path.
    pub fn insert(&mut self, path_id: impl Into<String>, points: Vec<ControlPoint>) {
        let path_id = path_id.into();
        if self.paths.insert(path_id.clone(), points).is_some() {
            log::debug!("Replaced path '{path_id}'");
        }
    }

    pub fn remove(&mut self, path_id: &str) -> Option<Vec<ControlPoint>> {
        self.paths.remove(path_id)
    }

    #[must_use]
    pub fn contains(&self, path_id: &str) -> bool {
        self.paths.contains_key(path_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Path identifiers in lexical order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.paths.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Adds every path of a JSON document. Existing entries with the same id
    /// are replaced.
    pub fn extend_from_json_str(&mut self, json: &str) -> Result<()> {
        let document: LibraryDocument = serde_json::from_str(json)?;
        self.extend_from_document(document)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut library = Self::new();
        library.extend_from_json_str(json)?;
        Ok(library)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: LibraryDocument = serde_json::from_reader(reader)?;
        let mut library = Self::new();
        library.extend_from_document(document)?;
        Ok(library)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading path library from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    fn extend_from_document(&mut self, document: LibraryDocument) -> Result<()> {
        // Convert everything first so a bad entry leaves the library untouched.
        let entries = document
            .paths
            .into_iter()
            .map(PathRecord::into_control_points)
            .collect::<Result<Vec<_>>>()?;

        for (id, points) in entries {
            self.insert(id, points);
        }
        Ok(())
    }
}

impl PathProvider for PathLibrary {
    fn control_points(&self, path_id: &str) -> Result<Vec<ControlPoint>> {
        self.paths
            .get(path_id)
            .cloned()
            .ok_or_else(|| PathError::PathNotFound(path_id.to_string()))
    }
}

// ============================================================================
// JSON document layout
// ============================================================================

#[derive(Debug, Deserialize)]
struct LibraryDocument {
    paths: Vec<PathRecord>,
}

#[derive(Debug, Deserialize)]
struct PathRecord {
    id: String,
    points: Vec<PointRecord>,
}

#[derive(Debug, Deserialize)]
struct PointRecord {
    #[serde(default)]
    fraction: Option<f32>,
    position: Vec3,
    direction: Vec3,
    up: Vec3,
}

impl PathRecord {
    fn into_control_points(self) -> Result<(String, Vec<ControlPoint>)> {
        let given = self.points.iter().filter(|p| p.fraction.is_some()).count();

        let fractions: Vec<f32> = if given == self.points.len() {
            self.points.iter().filter_map(|p| p.fraction).collect()
        } else if given == 0 {
            arc_length_fractions(self.points.iter().map(|p| p.position))
        } else {
            return Err(PathError::InvalidPath(format!(
                "path '{}' gives a fraction on {given} of {} points; give all or none",
                self.id,
                self.points.len()
            )));
        };

        let points = self
            .points
            .into_iter()
            .zip(fractions)
            .map(|(p, fraction)| ControlPoint::new(fraction, p.position, p.direction, p.up))
            .collect();

        Ok((self.id, points))
    }
}
