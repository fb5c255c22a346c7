//! Permission bit inspection
//!
//! `ModeBits` holds the low 9 bits of a POSIX file mode (owner/group/other
//! × read/write/execute) and renders as a zero-padded 3-digit octal string.
//! Ordering is plain numeric comparison of the octal value, matching how the
//! warning threshold is applied.

use crate::error::{PermcheckError, Result};
use std::fmt;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::str::FromStr;

/// The low 9 permission bits of a file mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModeBits(u32);

impl ModeBits {
    /// Mask an arbitrary mode value down to the permission bits.
    pub fn new(mode: u32) -> Self {
        ModeBits(mode & 0o777)
    }

    /// Numeric value of the bits, in `[0, 0o777]`.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ModeBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03o}", self.0)
    }
}

impl FromStr for ModeBits {
    type Err = PermcheckError;

    /// Parse exactly 3 octal digits, e.g. `"644"` or `"007"`.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_digit() && b < b'8') {
            return Err(PermcheckError::InvalidMode(s.to_string()));
        }
        let value = u32::from_str_radix(s, 8)
            .map_err(|_| PermcheckError::InvalidMode(s.to_string()))?;
        Ok(ModeBits(value))
    }
}

/// Read the permission bits of a path.
///
/// Any stat failure (missing path, access denied, other OS error) comes back
/// as `PathUnavailable` so callers can tell "no reading" apart from a valid
/// all-zero reading.
pub fn read_permissions(path: &Path) -> Result<ModeBits> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(ModeBits::new(metadata.permissions().mode())),
        Err(e) => Err(PermcheckError::PathUnavailable {
            path: path.display().to_string(),
            source: e,
        }),
    }
}
