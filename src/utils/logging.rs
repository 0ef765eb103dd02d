//! Process-wide tracing subscriber setup

use std::sync::OnceLock;

use tracing::Level;

use crate::utils::error::{AppError, AppResult};

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Parse a lowercase level name: `trace`, `debug`, `info`, `warn` or `error`
pub fn parse_level(level: &str) -> AppResult<Level> {
    match level {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(AppError::Config(format!("Unknown log level '{}'", level))),
    }
}

/// Whether [`init`] has already run in this process
pub fn is_initialized() -> bool {
    LOGGING_INITIALIZED.get().is_some()
}

/// Install a stderr fmt subscriber capped at `level`.
///
/// Only the first successful call installs anything. A subscriber set
/// elsewhere beforehand is left in place.
pub fn init(level: &str) -> AppResult<()> {
    let max_level = parse_level(level)?;

    LOGGING_INITIALIZED.get_or_init(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(max_level)
            .with_target(false)
            .finish();

        if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
            tracing::debug!(error = %error, "Tracing subscriber already initialized");
        }
    });
    Ok(())
}
