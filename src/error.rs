//! Error types for the application layer.
//!
//! The simulation itself cannot fail; these cover configuration and
//! snapshot files.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::config("bad gravity");
        assert_eq!(err.to_string(), "Configuration error: bad gravity");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AppError = io_err.into();
        assert!(matches!(err, AppError::FileSystem(_)));
    }
}
