//! Logging configuration and initialization
//!
//! The dispatch layer reports routing decisions and decode failures through
//! `tracing`. This module installs a `tracing-subscriber` pipeline for those
//! events: an `EnvFilter` followed by either a human-readable or a JSON
//! formatter.
//!
//! Argument decoders never log; a failed decode is returned to the caller
//! and logged once, by the router.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level filter (e.g., "info", "keyrpc_server=debug")
//! - `KEYRPC_LOG_FORMAT`: set to `json` for structured output
//!
//! # Usage Pattern
//!
//! ```rust,no_run
//! use keyrpc_core::LoggingConfig;
//!
//! let config = LoggingConfig::new("accounts-gateway")
//!     .with_log_level("debug")
//!     .with_json(true);
//!
//! keyrpc_core::init_logging(config).expect("Failed to init logging");
//! tracing::info!("ready");
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
///
/// # Defaults
///
/// - Service name: "keyrpc"
/// - Log level: `$RUST_LOG` or "info"
/// - JSON output: enabled when `$KEYRPC_LOG_FORMAT` is `json`
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Filter directive used when `RUST_LOG` is not set
    pub log_level: String,

    /// Emit one JSON object per event instead of text lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            service_name: "keyrpc".to_string(),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json: std::env::var("KEYRPC_LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

impl LoggingConfig {
    /// Create a configuration with a custom service name and default settings
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set the fallback filter directive ("error", "warn", "info", "debug", "trace")
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Build the filter: `RUST_LOG` wins, then the configured level
    fn env_filter(&self) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&self.log_level))
    }
}

/// Install the global `tracing` subscriber
///
/// # Errors
///
/// Fails if the filter directive does not parse or a global subscriber is
/// already installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = config.env_filter()?;

    if config.json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    tracing::info!(
        service_name = %config.service_name,
        log_level = %config.log_level,
        json = config.json,
        "logging initialized"
    );

    Ok(())
}
