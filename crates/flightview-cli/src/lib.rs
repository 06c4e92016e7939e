//! flightview CLI - drive the window geometry engine from the shell.
//!
//! The `flightview` binary prints routes, aircraft states, POI visibility and
//! window viewports as JSON on stdout; logs go to stderr.

pub mod config;

pub use config::Config;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset, empty or unparsable.
pub const DEFAULT_LOG_DIRECTIVE: &str = "flightview=info";

/// Log filter from a `RUST_LOG` value, falling back to `DEFAULT_LOG_DIRECTIVE`.
///
/// A valid value replaces the default entirely.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// Serialize `value` as JSON, pretty-printed when requested.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to serialize output")
}

/// Evenly spaced progress values from 0 to 1 inclusive.
pub fn progress_steps(steps: usize) -> impl Iterator<Item = f64> {
    let steps = steps.max(1);
    (0..=steps).map(move |i| i as f64 / steps as f64)
}
