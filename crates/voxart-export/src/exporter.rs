//! Uniform exporter interface over the two OBJ flavours.
//!
//! ```no_run
//! use voxart_export::{MaterialObjExporter, VoxelExporter};
//! use voxart_voxel::Voxel;
//!
//! let voxels = vec![Voxel::new(0.0, 0.0, 0.0, "#ff0000")];
//! let exporter = MaterialObjExporter::new(1.0, "voxel_art");
//! let bundle = exporter.export(&voxels)?;
//! bundle.write_to_dir(std::path::Path::new("out"))?;
//! # Ok::<(), voxart_export::ExportError>(())
//! ```

use voxart_mesh::{CORNER_COUNT, QuadFace};
use voxart_voxel::Voxel;

use crate::DEFAULT_BASE_NAME;
use crate::bundle::{ExportBundle, ExportFile, ExportNames};
use crate::error::ExportError;
use crate::material::export_with_materials;
use crate::simple::export_simple;

/// Record counts of one export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// `v` records.
    pub vertices: usize,
    /// `f` records (quads or triangles depending on the exporter).
    pub faces: usize,
    /// `newmtl` blocks. Always 0 for geometry-only output.
    pub materials: usize,
    /// Material groups in the face section.
    pub groups: usize,
}

/// Turns a voxel sequence into a complete set of named text buffers.
pub trait VoxelExporter {
    /// Runs the export. Either every buffer is produced or an error is
    /// returned; there is no partial result.
    fn export(&self, voxels: &[Voxel]) -> Result<ExportBundle, ExportError>;
}

/// Geometry-only OBJ exporter (one file).
#[derive(Clone, Debug)]
pub struct SimpleObjExporter {
    /// Cube edge length.
    pub voxel_size: f64,
    /// Output file stem.
    pub base_name: String,
}

impl SimpleObjExporter {
    /// Creates an exporter writing `<base_name>.obj`.
    pub fn new(voxel_size: f64, base_name: impl Into<String>) -> Self {
        Self {
            voxel_size,
            base_name: base_name.into(),
        }
    }
}

impl Default for SimpleObjExporter {
    fn default() -> Self {
        Self::new(1.0, DEFAULT_BASE_NAME)
    }
}

impl VoxelExporter for SimpleObjExporter {
    fn export(&self, voxels: &[Voxel]) -> Result<ExportBundle, ExportError> {
        let obj = export_simple(voxels, self.voxel_size)?;
        let stats = ExportStats {
            vertices: voxels.len() * CORNER_COUNT,
            faces: voxels.len() * QuadFace::ALL.len(),
            materials: 0,
            groups: 0,
        };
        tracing::info!(
            voxels = voxels.len(),
            vertices = stats.vertices,
            faces = stats.faces,
            "geometry-only OBJ export complete"
        );

        Ok(ExportBundle {
            files: vec![ExportFile {
                name: ExportNames::new(&self.base_name).obj,
                contents: obj,
            }],
            stats,
        })
    }
}

/// OBJ + MTL + instructions exporter (three files).
#[derive(Clone, Debug)]
pub struct MaterialObjExporter {
    /// Cube edge length.
    pub voxel_size: f64,
    /// Output file stem shared by all three files.
    pub base_name: String,
}

impl MaterialObjExporter {
    /// Creates an exporter writing `<base_name>.obj`, `<base_name>.mtl` and
    /// `<base_name>_import_instructions.txt`.
    pub fn new(voxel_size: f64, base_name: impl Into<String>) -> Self {
        Self {
            voxel_size,
            base_name: base_name.into(),
        }
    }
}

impl Default for MaterialObjExporter {
    fn default() -> Self {
        Self::new(1.0, DEFAULT_BASE_NAME)
    }
}

impl VoxelExporter for MaterialObjExporter {
    fn export(&self, voxels: &[Voxel]) -> Result<ExportBundle, ExportError> {
        let export = export_with_materials(voxels, self.voxel_size, &self.base_name)
            .inspect_err(|e| tracing::error!("OBJ+MTL export failed: {e}"))?;

        tracing::info!(
            voxels = voxels.len(),
            materials = export.stats.materials,
            vertices = export.stats.vertices,
            faces = export.stats.faces,
            "OBJ+MTL export complete"
        );

        Ok(ExportBundle {
            files: vec![
                ExportFile {
                    name: export.names.obj,
                    contents: export.obj,
                },
                ExportFile {
                    name: export.names.mtl,
                    contents: export.mtl,
                },
                ExportFile {
                    name: export.names.instructions,
                    contents: export.instructions,
                },
            ],
            stats: export.stats,
        })
    }
}
