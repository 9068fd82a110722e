//! Logging setup with file rotation.

use crate::{AppError, AppResult};

use std::path::Path;

use site_config::LogLevel;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

const LOG_FILE_PREFIX: &str = "site";
const MAX_LOG_FILES: usize = 7;

/// Setup logging with console and rotating file output.
///
/// # Log Layers
/// - Console: human-readable, on stderr so stdout stays JSON
/// - File: daily rotation, 7-day retention
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_logging(logs_dir: &Path, level: LogLevel) -> AppResult<()> {
    std::fs::create_dir_all(logs_dir)
        .map_err(|e| AppError::logging(format!("{}: {e}", logs_dir.display())))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(MAX_LOG_FILES)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(logs_dir)
        .map_err(|e| AppError::logging(e.to_string()))?;

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))
}
