//! Export orchestration: exporter selection and hand-off to disk.

use std::path::{Path, PathBuf};

use thiserror::Error;
use voxart_config::{Config, ExportConfig};
use voxart_export::{ExportError, MaterialObjExporter, SimpleObjExporter, VoxelExporter};

use crate::scene::{Scene, SceneError};

/// Top-level application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Loading the scene failed.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Exporting or writing the files failed.
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// Picks the edge length: command line, then scene file, then config.
pub fn resolve_voxel_size(cli: Option<f64>, scene: Option<f64>, configured: f64) -> f64 {
    cli.or(scene).unwrap_or(configured)
}

/// Exports `scene` according to `export` and writes the files.
///
/// Every buffer is computed before the first file is written. Returns the
/// written paths in hand-off order.
pub fn export_scene(
    scene: &Scene,
    export: &ExportConfig,
    voxel_size: f64,
) -> Result<Vec<PathBuf>, AppError> {
    let exporter: Box<dyn VoxelExporter> = if export.with_materials {
        Box::new(MaterialObjExporter::new(voxel_size, export.base_name.as_str()))
    } else {
        Box::new(SimpleObjExporter::new(voxel_size, export.base_name.as_str()))
    };

    let bundle = exporter.export(&scene.voxels)?;
    let paths = bundle.write_to_dir(&export.output_dir)?;
    tracing::info!(
        files = paths.len(),
        dir = %export.output_dir.display(),
        "export written"
    );
    Ok(paths)
}

/// Loads the scene at `input` and exports it with `config`.
///
/// `cli_voxel_size` takes precedence over the scene's own edge length.
pub fn run(
    input: &Path,
    cli_voxel_size: Option<f64>,
    config: &Config,
) -> Result<Vec<PathBuf>, AppError> {
    let scene = Scene::load(input)?;
    let voxel_size = resolve_voxel_size(cli_voxel_size, scene.voxel_size, config.export.voxel_size);
    export_scene(&scene, &config.export, voxel_size)
}
