//! Errors that abort a scan before any traversal happens.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported to the caller of [`crate::scan::scan`].
///
/// Everything below the root (unreadable directories, oversize files,
/// filtered names) is absorbed into the report instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root path does not exist.
    #[error("invalid root: {path}: No such file or directory")]
    NotFound { path: PathBuf },

    /// Root path exists but is not a directory.
    #[error("invalid root: {path}: Not a directory")]
    NotADirectory { path: PathBuf },

    /// Root metadata could not be read.
    #[error("invalid root: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create an error for a failed root lookup, keeping `NotFound` distinct.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_gets_its_own_variant() {
        let err = ScanError::io(
            "/missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ScanError::NotFound { .. }));
        assert!(err.to_string().contains("invalid root"));
    }

    #[test]
    fn other_errors_keep_their_source() {
        let err = ScanError::io(
            "/locked",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ScanError::Io { .. }));
        assert!(err.to_string().contains("denied"));
    }
}
