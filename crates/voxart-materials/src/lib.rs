//! Material system: the fixed MTL shading recipe, per-color material
//! deduplication, and grouping of voxels by material.

mod group;
mod library;
mod material;

pub use group::{MaterialGroup, group_by_material};
pub use library::MaterialLibrary;
pub use material::{MaterialDef, MaterialId};
