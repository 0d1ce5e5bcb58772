//! Diagnostic logging to a file.
//!
//! Nothing is logged unless a destination is set, either with
//! `FORMSMITH_LOG` or `[logging] file` in the config. Every run appends to
//! the same file.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Env var naming the log file; takes precedence over the config.
pub const LOG_ENV: &str = "FORMSMITH_LOG";

/// Log file for this run, if any.
pub fn log_file(config: &Config) -> Option<PathBuf> {
    resolve_log_file(std::env::var_os(LOG_ENV), config)
}

fn resolve_log_file(env: Option<OsString>, config: &Config) -> Option<PathBuf> {
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let file = config.logging.file.as_ref()?;
    if file.is_absolute() {
        Some(file.clone())
    } else {
        Some(config.storage.resolved_data_dir().join(file))
    }
}

/// Install the file subscriber described by `config`.
///
/// The filter comes from `RUST_LOG`, then `logging.level`.
pub fn init_tracing(config: &Config) -> io::Result<()> {
    let Some(path) = log_file(config) else {
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Ok(())
}
