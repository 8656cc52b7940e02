//! Wavefront OBJ/MTL export for voxel models.
//!
//! Two exporters share the same cube topology from `voxart-mesh`:
//!
//! - [`export_simple`] writes geometry only: one independent cube of quads per
//!   voxel, no materials.
//! - [`export_with_materials`] deduplicates colors into MTL materials, writes
//!   a shared normal table, and emits triangle faces grouped by material so
//!   each `usemtl` appears once.
//!
//! Both produce text buffers in memory. Nothing touches the filesystem until
//! [`ExportBundle::write_to_dir`] is called on a finished bundle.

mod bundle;
mod error;
mod exporter;
mod format;
mod instructions;
mod material;
mod simple;

pub use bundle::{ExportBundle, ExportFile, ExportNames};
pub use error::ExportError;
pub use exporter::{ExportStats, MaterialObjExporter, SimpleObjExporter, VoxelExporter};
pub use instructions::import_instructions;
pub use material::{MaterialExport, export_with_materials};
pub use simple::export_simple;

/// Base file name used when none is configured.
pub const DEFAULT_BASE_NAME: &str = "voxel_art";
