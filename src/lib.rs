//! Permcheck - warn when a path's permissions exceed a configured threshold
//!
//! Permcheck stats a single path, renders its permission bits as a 3-digit
//! octal string, and compares them numerically against a configured octal
//! threshold (default `777`). Both failure modes - an unreadable config and
//! an unstattable path - degrade gracefully instead of aborting the run.
//!
//! # Example
//!
//! ```no_run
//! use permcheck::{check_path, render_report, Config};
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("config.json"));
//! let outcome = check_path(Path::new("/etc/passwd"), &config);
//! println!("{}", render_report(Path::new("/etc/passwd"), &outcome));
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod permissions;

pub use check::{check_path, render_report, CheckOutcome};
pub use config::Config;
pub use error::{PermcheckError, Result};
pub use permissions::{read_permissions, ModeBits};
