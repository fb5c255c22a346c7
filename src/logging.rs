//! Log file setup
//!
//! All diagnostic output goes to an append-only log file in the working
//! directory, one timestamped line per event. The subscriber is installed
//! once at startup and owns the file handle for the process lifetime.
//! `RUST_LOG` overrides the default `info` filter.

use std::fs::OpenOptions;
use std::io;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Fixed name of the append-only log file.
pub const LOG_FILE: &str = "permcheck.log";

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to open log file: {0}")]
    FileOpen(#[from] io::Error),

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber writing to [`LOG_FILE`].
///
/// Returns an error if the file cannot be opened or a subscriber is already
/// installed; callers are expected to carry on without logging in that case.
pub fn init() -> Result<(), LogError> {
    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(file)
            .with_target(false)
            .with_ansi(false),
    );
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
