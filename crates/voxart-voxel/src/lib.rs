//! Voxel input records and color normalization.

pub mod color;
pub mod voxel;

pub use color::{Rgb8, VoxelColor};
pub use voxel::{CoordKey, Voxel};
