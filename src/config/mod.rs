//! Configuration loading
//!
//! The config file is a JSON object with one recognized key, `warn_mode`.
//! Loading never fails past this module: a missing file, malformed JSON, or
//! an invalid `warn_mode` value is logged and replaced with the default so
//! the rest of the program always holds a usable threshold.

use crate::error::{PermcheckError, Result};
use crate::permissions::ModeBits;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::error;

/// Threshold applied when no valid configuration is available.
pub const DEFAULT_WARN_MODE: &str = "777";

/// Runtime configuration.
///
/// Unrecognized keys in the document are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Octal threshold above which permissions trigger a warning.
    #[serde(default = "default_warn_mode")]
    pub warn_mode: String,
}

fn default_warn_mode() -> String {
    DEFAULT_WARN_MODE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warn_mode: default_warn_mode(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults.
    ///
    /// Any failure is logged at error level and answered with
    /// `Config::default()`; this function never returns an error.
    pub fn load(path: &Path) -> Config {
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                Config::default()
            }
        }
    }

    /// Read and validate the config file.
    fn read(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path).map_err(|e| {
            PermcheckError::ConfigUnavailable(format!("{}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&raw).map_err(|e| {
            PermcheckError::ConfigUnavailable(format!("{}: {}", path.display(), e))
        })?;

        // warn_mode must be 3 octal digits; reject the whole document if not
        config
            .warn_mode
            .parse::<ModeBits>()
            .map_err(|e| PermcheckError::ConfigUnavailable(e.to_string()))?;

        Ok(config)
    }

    /// The configured threshold as mode bits.
    ///
    /// `warn_mode` is validated at load time, so the fallback here only
    /// covers a `Config` constructed by hand with a bad string.
    pub fn warn_threshold(&self) -> ModeBits {
        self.warn_mode
            .parse()
            .unwrap_or_else(|_| ModeBits::new(0o777))
    }
}
