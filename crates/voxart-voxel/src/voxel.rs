//! The exporter's input record: a colored cube at a grid position.

use serde::Deserialize;

use crate::color::VoxelColor;

/// A single colored cube.
///
/// Coordinates are the cube's center in grid units. They are usually whole
/// numbers but nothing here requires it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Voxel {
    /// X coordinate of the cube center.
    pub x: f64,
    /// Y coordinate of the cube center.
    pub y: f64,
    /// Z coordinate of the cube center.
    pub z: f64,
    /// Surface color. A missing color deserializes as [`VoxelColor::Unknown`].
    #[serde(default)]
    pub color: VoxelColor,
}

impl Voxel {
    /// Creates a voxel at `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64, color: impl Into<VoxelColor>) -> Self {
        Self {
            x,
            y,
            z,
            color: color.into(),
        }
    }

    /// Center position as an `[x, y, z]` array.
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Hashable identity of this voxel's position.
    pub fn coord_key(&self) -> CoordKey {
        CoordKey::new(self.x, self.y, self.z)
    }
}

/// Bit-exact position key. `-0.0` and `0.0` map to the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordKey([u64; 3]);

impl CoordKey {
    /// Builds a key from raw coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        // Adding +0.0 turns -0.0 into +0.0 and leaves every other value intact.
        Self([(x + 0.0).to_bits(), (y + 0.0).to_bits(), (z + 0.0).to_bits()])
    }
}
