//! The `voxart` binary: exports a JSON voxel scene to Wavefront OBJ/MTL.

use std::path::PathBuf;

use clap::Parser;
use voxart_config::{CliArgs, Config};

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(Config::default_dir)
        .unwrap_or_else(|| PathBuf::from(".voxart"));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    voxart_log::init_logging(
        Some(&log_dir),
        cfg!(debug_assertions) || config.debug.log_to_file,
        Some(&config),
    );

    match voxart_app::run(&args.input, args.voxel_size, &config) {
        Ok(paths) => {
            println!("Export complete! Wrote:");
            for path in &paths {
                println!("  - {}", path.display());
            }
            if config.export.with_materials {
                println!();
                println!("Keep these files in the same folder when importing.");
                println!("Check \"Import Materials\" in the OBJ import options.");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
