//! JSON scene files.
//!
//! ```json
//! {
//!   "voxel_size": 1.0,
//!   "voxels": [
//!     { "x": 0, "y": 0, "z": 0, "color": "#ff0000" },
//!     { "x": 1, "y": 0, "z": 0, "color": { "levels": [0, 128, 255, 255] } }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use voxart_voxel::Voxel;

/// Errors raised while loading a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene {}: {source}", .path.display())]
    Read {
        /// Scene file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The scene file is not valid scene JSON.
    #[error("failed to parse scene: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An ordered voxel list with an optional edge length.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Cube edge length stored with the scene, if any.
    #[serde(default)]
    pub voxel_size: Option<f64>,
    /// Voxels in export order.
    pub voxels: Vec<Voxel>,
}

impl Scene {
    /// Parses a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a scene file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.display(),
            voxels = scene.voxels.len(),
            "loaded scene"
        );
        Ok(scene)
    }
}
