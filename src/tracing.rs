//! Logging setup
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs (history moves, transforms)
//! - `RUST_LOG=textarea::editable=trace` - include line scans
//!
//! When a log directory is given, a debug-level file log with daily rotation
//! is written there as `textarea.log`.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console (stderr) and optional file logging
pub fn init(log_dir: Option<&Path>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match log_dir.map(crate::config_paths::ensure_dir) {
        Some(Ok(logs_dir)) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "textarea.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Some(Err(e)) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
