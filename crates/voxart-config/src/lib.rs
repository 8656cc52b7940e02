//! Configuration system for the voxart exporter.
//!
//! Settings persist to disk as a RON file and can be overridden per run from
//! the command line. Missing fields fall back to defaults so older config
//! files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, ExportConfig};
pub use error::ConfigError;
