//! Tracing setup.
//!
//! The terminal belongs to the game while it runs, so log lines only go to a
//! file. Without a file nothing is installed and events are dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::QuizError;

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "QUIZ_LOG";
const DEFAULT_LEVEL: &str = "info";

/// Send tracing output to `path`, appending, filtered by `QUIZ_LOG`.
pub fn init_file<P: AsRef<Path>>(path: P) -> Result<(), QuizError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|error| QuizError::Logging(error.to_string()))?;

    tracing::info!(path = %path.as_ref().display(), "logging initialized");
    Ok(())
}
