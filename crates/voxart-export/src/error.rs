//! Export error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an export. No output is produced when one is returned.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The material-aware export was given no voxels.
    #[error("no voxels to export")]
    EmptyInput,

    /// Two voxels occupy the same position.
    #[error("voxels {first} and {second} share coordinates ({x}, {y}, {z})")]
    DuplicateCoordinate {
        /// Index of the earlier voxel.
        first: usize,
        /// Index of the later voxel.
        second: usize,
        /// Shared X coordinate.
        x: f64,
        /// Shared Y coordinate.
        y: f64,
        /// Shared Z coordinate.
        z: f64,
    },

    /// Text assembly failed.
    #[error("failed to assemble export text: {0}")]
    Format(#[from] std::fmt::Error),

    /// Persisting a finished bundle failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
