use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TocError>;

/// Errors surfaced to the CLI. The tracker itself never produces these:
/// its soft failures are `Rejected` results and silent degradation.
#[derive(Error, Debug)]
pub enum TocError {
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid event on line {line}: {reason}")]
    InvalidEvent { line: usize, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
}

impl TocError {
    /// Map an I/O failure on `path`, promoting `NotFound` to its own variant.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_is_promoted() {
        let err = TocError::io(
            "missing.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, TocError::NotFound { .. }));
        assert_eq!(err.to_string(), "not found: missing.md");
    }

    #[test]
    fn other_io_errors_keep_source() {
        let err = TocError::io(
            "locked.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, TocError::Io { .. }));
        assert_eq!(err.to_string(), "locked.md: denied");
    }

    #[test]
    fn write_error_message() {
        let err = TocError::Write(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "write failed: closed");
    }

    #[test]
    fn invalid_event_message() {
        let err = TocError::InvalidEvent {
            line: 4,
            reason: "no section 9".into(),
        };
        assert_eq!(err.to_string(), "invalid event on line 4: no section 9");
    }
}
