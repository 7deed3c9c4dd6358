//! Violet Logging
//!
//! Installs a `tracing` subscriber for Violet providers, configured from the
//! environment. Library crates only emit events through the `tracing`
//! macros; the host binary calls [`init`] once at startup.
//!
//! # Usage
//!
//! ```rust,no_run
//! violet_log::init();
//!
//! tracing::info!(id = 42, "Read webhook resource");
//! ```
//!
//! # Environment Variables
//!
//! - `VIOLET_DEBUG=1` - Enable debug logging
//! - `VIOLET_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `VIOLET_LOG_FORMAT=pretty|json|compact` - Set output format (default `json`)
//! - `VIOLET_LOG_COLOR=1|0` - Enable/disable colors
//! - `RUST_LOG` - Full filter directives, takes precedence over the level
//!
//! Output goes to stderr so stdout stays free for a plugin handshake.

use once_cell::sync::Lazy;
use std::env;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

// ============================================================================
// Log Levels
// ============================================================================

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
    /// Off (no logging)
    Off,
}

impl Level {
    /// Get level from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    /// Filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_directive().to_uppercase())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line human readable format
    Pretty,
    /// Compact single-line format
    Compact,
    /// JSON format for structured logging
    Json,
}

impl Format {
    /// Get format from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether colors are enabled
    pub color: bool,
    /// Whether to include the event target (module path)
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            color: false,
            module_path: true,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).map(|v| v == "1" || v.to_lowercase() == "true");

        let debug = flag("VIOLET_DEBUG").unwrap_or(false);

        let level = lookup("VIOLET_LOG_LEVEL")
            .and_then(|s| Level::from_str(&s))
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = lookup("VIOLET_LOG_FORMAT")
            .and_then(|s| Format::from_str(&s))
            .unwrap_or(Format::Json);

        let color = flag("VIOLET_LOG_COLOR")
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());

        let module_path = flag("VIOLET_LOG_MODULE").unwrap_or(true);

        Self {
            debug,
            level,
            format,
            color,
            module_path,
        }
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_directive()))
    }
}

/// Get the global configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

// ============================================================================
// Subscriber Installation
// ============================================================================

/// Install the global subscriber from the environment.
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let _ = try_init();
}

/// Install the global subscriber from the environment.
pub fn try_init() -> Result<(), TryInitError> {
    try_init_with(config())
}

/// Install the global subscriber with an explicit configuration.
pub fn try_init_with(config: &LogConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(config.filter());

    match config.format {
        Format::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.module_path)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        Format::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(config.color)
                    .with_target(config.module_path)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        Format::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(config.color)
                    .with_target(config.module_path)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
}

// ============================================================================
// Tests
// ============================================================================
