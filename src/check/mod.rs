//! Comparison and reporting
//!
//! One linear pass: read the permissions, compare against the configured
//! threshold, and produce an outcome the caller can render. "More
//! permissive" means a larger base-8 numeric value, the same comparison the
//! threshold is written in.

use crate::config::Config;
use crate::permissions::{read_permissions, ModeBits};
use std::path::Path;
use tracing::{error, info, warn};

/// Outcome of a single permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Permissions were read and sit at or below the threshold.
    Within { mode: ModeBits },

    /// Permissions exceed the configured threshold.
    Exceeds { mode: ModeBits, threshold: ModeBits },

    /// The path could not be inspected; no comparison was made.
    Unavailable,
}

/// Check one path against the configured threshold.
pub fn check_path(path: &Path, config: &Config) -> CheckOutcome {
    info!("Checking permissions for {}", path.display());

    let mode = match read_permissions(path) {
        Ok(mode) => mode,
        Err(e) => {
            error!("{}", e);
            return CheckOutcome::Unavailable;
        }
    };

    info!("Permissions: {}", mode);

    let threshold = config.warn_threshold();
    if mode > threshold {
        warn!(
            "Permissions {} exceed warning threshold {}",
            mode, threshold
        );
        CheckOutcome::Exceeds { mode, threshold }
    } else {
        CheckOutcome::Within { mode }
    }
}

/// Render an outcome as the user-facing stdout text.
pub fn render_report(path: &Path, outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Within { mode } => {
            format!("Permissions for {}: {}", path.display(), mode)
        }
        CheckOutcome::Exceeds { mode, threshold } => {
            format!(
                "Permissions for {}: {}\nWarning: Permissions are more permissive than {}",
                path.display(),
                mode,
                threshold
            )
        }
        CheckOutcome::Unavailable => {
            format!("Error: Could not check permissions for {}", path.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn file_with_mode(dir: &TempDir, name: &str, mode: u32) -> std::path::PathBuf {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(mode);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn test_within_threshold() {
        let temp_dir = TempDir::new().unwrap();
        let path = file_with_mode(&temp_dir, "test.txt", 0o644);

        let outcome = check_path(&path, &Config::default());
        assert_eq!(
            outcome,
            CheckOutcome::Within {
                mode: ModeBits::new(0o644)
            }
        );
    }

    #[test]
    fn test_exceeds_threshold() {
        let temp_dir = TempDir::new().unwrap();
        let path = file_with_mode(&temp_dir, "test.txt", 0o777);

        let config = Config {
            warn_mode: "755".to_string(),
        };
        let outcome = check_path(&path, &config);
        assert_eq!(
            outcome,
            CheckOutcome::Exceeds {
                mode: ModeBits::new(0o777),
                threshold: ModeBits::new(0o755),
            }
        );
    }

    #[test]
    fn test_equal_does_not_warn() {
        let temp_dir = TempDir::new().unwrap();
        let path = file_with_mode(&temp_dir, "test.txt", 0o755);

        let config = Config {
            warn_mode: "755".to_string(),
        };
        let outcome = check_path(&path, &config);
        assert!(matches!(outcome, CheckOutcome::Within { .. }));
    }

    #[test]
    fn test_missing_path_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let outcome = check_path(&missing, &Config::default());
        assert_eq!(outcome, CheckOutcome::Unavailable);
    }

    #[test]
    fn test_render_within() {
        let outcome = CheckOutcome::Within {
            mode: ModeBits::new(0o644),
        };
        assert_eq!(
            render_report(Path::new("/tmp/f"), &outcome),
            "Permissions for /tmp/f: 644"
        );
    }

    #[test]
    fn test_render_exceeds() {
        let outcome = CheckOutcome::Exceeds {
            mode: ModeBits::new(0o777),
            threshold: ModeBits::new(0o755),
        };
        let report = render_report(Path::new("/tmp/f"), &outcome);
        assert_eq!(
            report,
            "Permissions for /tmp/f: 777\nWarning: Permissions are more permissive than 755"
        );
    }

    #[test]
    fn test_render_unavailable() {
        let report = render_report(Path::new("/tmp/nope"), &CheckOutcome::Unavailable);
        assert_eq!(report, "Error: Could not check permissions for /tmp/nope");
    }
}
