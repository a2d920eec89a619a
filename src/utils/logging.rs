//! Structured Logging
//!
//! Initializes the `tracing` subscriber from [`LoggingConfig`]. The codec
//! itself only emits events (`trace!` on skipped fields, `debug!` timers);
//! embedding applications decide where those events go by calling
//! [`init_logging`] once at startup, or by installing their own subscriber.

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{Result, WireError};

/// Install a global subscriber according to `config`.
///
/// Returns an error if a subscriber is already installed or the log file
/// cannot be opened.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.log_level.into())
        .from_env_lossy();

    if config.log_to_file {
        let path = config
            .log_file_path
            .as_deref()
            .ok_or_else(|| WireError::ConfigError("log_file_path not set".to_string()))?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| WireError::ConfigError(format!("Failed to open log file: {e}")))?;

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false);
        if config.json_format {
            builder
                .json()
                .try_init()
                .map_err(|e| WireError::ConfigError(format!("Failed to init logging: {e}")))?;
        } else {
            builder
                .try_init()
                .map_err(|e| WireError::ConfigError(format!("Failed to init logging: {e}")))?;
        }
    } else {
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        if config.json_format {
            builder
                .json()
                .try_init()
                .map_err(|e| WireError::ConfigError(format!("Failed to init logging: {e}")))?;
        } else {
            builder
                .try_init()
                .map_err(|e| WireError::ConfigError(format!("Failed to init logging: {e}")))?;
        }
    }

    info!(app_name = %config.app_name, "Logging initialized");
    Ok(())
}
