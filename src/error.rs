//! Error types for Permcheck

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PermcheckError {
    #[error("Config loading failed: {0}")]
    ConfigUnavailable(String),

    #[error("Permission check failed for {path}: {source}")]
    PathUnavailable {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid mode string: {0:?} (expected 3 octal digits)")]
    InvalidMode(String),
}

pub type Result<T> = std::result::Result<T, PermcheckError>;
