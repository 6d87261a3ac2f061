/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing::{Dispatch, Level};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Log file used by [`setup_default_file_logger`]
pub const DEFAULT_LOG_FILE: &str = "bassa-log.log";

/// Reads the `LOGLEVEL` environment variable (default `INFO`)
pub fn log_level() -> Level {
    let raw = std::env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string());
    match raw.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs a stdout `tracing` subscriber once per process
///
/// Safe to call repeatedly; if another global subscriber is already installed
/// the call is a no-op.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level();
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

/// Builds a dispatcher that appends plain-text lines to `path`
///
/// The file is created if needed and never truncated. Nothing is installed;
/// use [`setup_file_logger`] for the global subscriber or
/// `tracing::dispatcher::with_default` for a scoped one.
///
/// # Errors
/// * `AppError::Io` if the file cannot be opened
pub fn file_dispatch<P: AsRef<Path>>(path: P) -> Result<Dispatch, AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    Ok(Dispatch::new(subscriber))
}

/// Installs [`file_dispatch`] as the global subscriber
///
/// # Errors
/// * `AppError::Io` if the file cannot be opened
/// * `AppError::Config` if a global subscriber is already installed
pub fn setup_file_logger<P: AsRef<Path>>(path: P) -> Result<(), AppError> {
    let dispatch = file_dispatch(path.as_ref())?;
    tracing::dispatcher::set_global_default(dispatch)
        .map_err(|e| AppError::Config(format!("cannot install file logger: {e}")))?;
    tracing::info!("Logging to {}", path.as_ref().display());
    Ok(())
}

/// Installs the file logger on [`DEFAULT_LOG_FILE`] in the working directory
pub fn setup_default_file_logger() -> Result<(), AppError> {
    setup_file_logger(DEFAULT_LOG_FILE)
}
