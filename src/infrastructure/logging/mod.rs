// Logging module - Diagnostic logging to stderr
use crate::domain::error::{MonitorError, MonitorResult};
use std::io;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a given verbosity.
///
/// stdout carries the monitored lines, so diagnostics stay quiet unless asked.
pub fn default_directive(verbose: bool, quiet: bool) -> String {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    format!("daisy_monitor={}", level.to_string().to_lowercase())
}

/// Initialize logging system; `RUST_LOG` takes precedence over the flags
pub fn init_logging(verbose: bool, quiet: bool) -> MonitorResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(verbose)
                .with_level(true)
                .with_file(verbose)
                .with_line_number(verbose),
        )
        .try_init()
        .map_err(|e| MonitorError::Output(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!("Logging initialized");
    Ok(())
}
