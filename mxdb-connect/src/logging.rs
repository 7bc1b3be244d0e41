//! Logging bootstrap.
//!
//! Library code logs through `tracing` and never installs a subscriber on its
//! own. Binaries (and applications that want the same behaviour) call
//! [`init`] once at startup.
//!
//! # Environment Variables
//!
//! - `MXDB_DEBUG=true|1|yes` - Enable debug logging
//! - `MXDB_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific log level
//! - `MXDB_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! Installing the subscriber requires the `tracing-subscriber` feature;
//! without it [`init`] is a no-op.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `MXDB_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("MXDB_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Normalize a user supplied level name.
fn parse_level(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Get the configured log level.
///
/// `MXDB_LOG_LEVEL` wins; otherwise "debug" if `MXDB_DEBUG` is enabled, else "warn".
pub fn get_log_level() -> &'static str {
    env::var("MXDB_LOG_LEVEL")
        .ok()
        .and_then(|level| parse_level(&level))
        .unwrap_or(if is_debug_enabled() { "debug" } else { "warn" })
}

/// Get the configured log format from `MXDB_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    env::var("MXDB_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging from the environment.
///
/// Does nothing unless `MXDB_DEBUG` or `MXDB_LOG_LEVEL` is set. Subsequent
/// calls are no-ops.
pub fn init() {
    if !is_debug_enabled() && env::var("MXDB_LOG_LEVEL").is_err() {
        return;
    }
    install(get_log_level());
}

/// Initialize logging with an explicit level, ignoring `MXDB_LOG_LEVEL`.
pub fn init_with_level(level: &str) {
    install(parse_level(level).unwrap_or("warn"));
}

fn install(level: &'static str) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(format!(
                "mxdb={},mxdb_connect={},mxdb_cli={}",
                level, level, level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            match get_log_format() {
                "json" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json().with_writer(std::io::stderr))
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact().with_writer(std::io::stderr))
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty().with_writer(std::io::stderr))
                        .init();
                }
            }

            tracing::info!(level = level, format = get_log_format(), "Logging initialized");
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            let _ = level;
        }
    });
}
