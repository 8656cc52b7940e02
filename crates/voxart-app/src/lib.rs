//! The voxart application: loads a scene file, runs the configured exporter
//! and writes the resulting files.

mod run;
mod scene;

pub use run::{AppError, export_scene, resolve_voxel_size, run};
pub use scene::{Scene, SceneError};
