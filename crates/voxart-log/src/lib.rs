//! Structured logging for the voxart exporter.
//!
//! Installs a `tracing` subscriber with console output and, when requested,
//! a JSON log file for post-mortem analysis. The level comes from the
//! configuration unless `RUST_LOG` is set.

use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use voxart_config::Config;

/// Filter used when neither the config nor `RUST_LOG` specify one.
pub const DEFAULT_FILTER: &str = "info";

/// File name of the JSON log inside the log directory.
pub const LOG_FILE: &str = "voxart.log";

/// Initialize the global tracing subscriber.
///
/// Sets up:
/// - Console output with uptime, target and level
/// - Environment-based filtering (`RUST_LOG` wins over the config)
/// - A JSON log file in `log_dir` when `file_logging` is set
///
/// If the log directory or file cannot be created, logging falls back to
/// console only.
///
/// # Examples
///
/// ```no_run
/// use voxart_config::Config;
/// use voxart_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, file_logging: bool, config: Option<&Config>) {
    let filter_str = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if file_logging
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Filter directive derived from the config's `debug.log_level`.
///
/// Falls back to [`DEFAULT_FILTER`] when no config is given or the level is
/// blank.
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.clone()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
