//! Diagnostic logging.
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! result line and usage text. The filter is read from `TEMPCONV_LOG`
//! using `EnvFilter` directive syntax (e.g. `debug`, `tempconv=trace`).

use std::env;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "TEMPCONV_LOG";

/// Filter used when `TEMPCONV_LOG` is unset, empty, or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        Self::from_value(env::var(LOG_ENV_VAR).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(filter) if !filter.trim().is_empty() => LogConfig {
                filter: filter.trim().to_string(),
            },
            _ => LogConfig::default(),
        }
    }

    /// Build the subscriber filter, falling back to the default on bad input
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global stderr subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(config: &LogConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
