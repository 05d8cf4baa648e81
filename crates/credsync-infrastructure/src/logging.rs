//! Structured logging with tracing
//!
//! A `tracing-subscriber` registry carrying an `EnvFilter`, a console layer
//! on stderr and, when configured, a daily-rolling file layer. Stdout is left
//! to command output.

use credsync_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, Subscriber, info, warn};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Install the global subscriber
///
/// `CREDSYNC_LOG` overrides the configured level with a full filter
/// directive (e.g. `credsync_application=debug,info`).
///
/// # Errors
/// Fails on an unknown level or when a global subscriber is already set.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    if install_logging(&config)? {
        Ok(())
    } else {
        Err(Error::configuration(
            "A global tracing subscriber is already installed",
        ))
    }
}

/// Install the global subscriber unless one is already set
///
/// Returns whether this call installed it. An existing subscriber is kept
/// as is; only an invalid configuration is an error.
pub fn install_logging(config: &LoggingConfig) -> Result<bool> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers: Vec<BoxedLayer<Registry>> = vec![console_layer(config.json_format)];
    if let Some(path) = &config.file_output {
        layers.push(file_layer(path, config.json_format));
    }

    match tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
    {
        Ok(()) => {
            info!(%level, json = config.json_format, "Logging initialized");
            Ok(true)
        }
        Err(_) if tracing::dispatcher::has_been_set() => Ok(false),
        Err(e) => Err(Error::configuration_with_source(
            "Failed to install the global subscriber",
            e,
        )),
    }
}

fn console_layer<S>(json: bool) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn file_layer<S>(path: &Path, json: bool) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM));

    let layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(dir, stem))
        .with_ansi(false)
        .with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Parse a configured level name
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Report whether a configuration file was read
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found");
    }
}
