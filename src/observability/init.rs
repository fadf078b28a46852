//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, wiring the `tracing` macros
//! used throughout the crate to a rotating log file in the data directory. Log
//! output goes to a file rather than the terminal so it never corrupts the
//! interactive session.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with rotating file output.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events based on the configured trace level
/// 2. Formats them as plain text without ANSI escapes
/// 3. Appends to a size-rotating file in the data directory
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable, if set
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Log lines are written to `<data dir>/storyfetch.log`, rotating at 10MB with
/// three backups retained.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if directory creation fails (observability is optional)
/// - Idempotent: safe to call multiple times (only the first call takes effect)
///
/// # Example
///
/// ```no_run
/// use storyfetch::observability::init_tracing;
/// use storyfetch::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let data_dir = config.resolved_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_file = data_dir.join("storyfetch.log");
    let writer = Mutex::new(RotatingFileWriter::new(log_file));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
