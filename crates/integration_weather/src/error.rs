//! Icon fetcher error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while retrieving an icon
#[derive(Debug, Error)]
pub enum IconError {
    /// A file is already present at the target path
    ///
    /// This is the cache-hit outcome: nothing was downloaded and the
    /// existing file was left untouched.
    #[error("Icon already present at {}", path.display())]
    AlreadyExists {
        /// Path of the existing entry
        path: PathBuf,
    },

    /// The target file could not be created
    #[error("Failed to create {}: {source}", path.display())]
    FileCreate {
        /// Path that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The HTTP request could not be completed
    #[error("Network error: {0}")]
    Network(String),

    /// The icon endpoint answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The response body could not be written completely
    #[error("Failed to copy icon into {}: {reason}", path.display())]
    Copy {
        /// Path of the partially written file
        path: PathBuf,
        /// What interrupted the copy
        reason: String,
    },

    /// The icon name is not a plain file name
    #[error("Invalid icon name: {0:?}")]
    InvalidIconName(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl IconError {
    /// Returns true for the cache-hit outcome callers may ignore
    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout { .. } => true,
            Self::UnexpectedStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_is_soft() {
        let err = IconError::AlreadyExists {
            path: PathBuf::from("icons/01d.png"),
        };
        assert!(err.is_already_exists());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retryable_errors() {
        assert!(IconError::Network("connection refused".to_string()).is_retryable());
        assert!(IconError::Timeout { timeout_secs: 5 }.is_retryable());
        assert!(
            IconError::UnexpectedStatus {
                status: 503,
                url: "http://x".to_string()
            }
            .is_retryable()
        );
        assert!(
            IconError::UnexpectedStatus {
                status: 429,
                url: "http://x".to_string()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(
            !IconError::UnexpectedStatus {
                status: 404,
                url: "http://x".to_string()
            }
            .is_retryable()
        );
        assert!(!IconError::InvalidIconName("../x.png".to_string()).is_retryable());
        assert!(!IconError::Configuration("bad".to_string()).is_retryable());
        assert!(
            !IconError::FileCreate {
                path: PathBuf::from("missing/x.png"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_error_display() {
        let err = IconError::AlreadyExists {
            path: PathBuf::from("icons/01d.png"),
        };
        assert!(err.to_string().contains("icons/01d.png"));

        let err = IconError::UnexpectedStatus {
            status: 404,
            url: "https://openweathermap.org/img/w/99d.png".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("99d.png"));

        let err = IconError::Copy {
            path: PathBuf::from("icons/01d.png"),
            reason: "connection reset".to_string(),
        };
        assert!(err.to_string().contains("connection reset"));

        let err = IconError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_file_create_exposes_source() {
        use std::error::Error as _;

        let err = IconError::FileCreate {
            path: PathBuf::from("missing/x.png"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.source().is_some());
    }
}
