//! Command-line argument parsing for the voxart exporter.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// voxart command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "voxart", about = "Export voxel scenes to Wavefront OBJ/MTL")]
pub struct CliArgs {
    /// Scene file (JSON) to export.
    pub input: PathBuf,

    /// Cube edge length in grid units.
    #[arg(long)]
    pub voxel_size: Option<f64>,

    /// Directory to write the exported files to.
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// File stem for the exported files.
    #[arg(long)]
    pub name: Option<String>,

    /// Write geometry only (no MTL, no materials).
    #[arg(long)]
    pub simple: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(size) = args.voxel_size {
            self.export.voxel_size = size;
        }
        if let Some(ref dir) = args.output_dir {
            self.export.output_dir = dir.clone();
        }
        if let Some(ref name) = args.name {
            self.export.base_name = name.clone();
        }
        if args.simple {
            self.export.with_materials = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
