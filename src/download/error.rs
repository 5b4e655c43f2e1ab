//! Error types for the download module.
//!
//! Every error raised while handling a single URL is one of these variants.
//! The downloader converts them into a failed [`DownloadOutcome`](super::DownloadOutcome)
//! at its boundary, so none of them ever aborts a batch.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while probing, transferring, or verifying one URL.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error downloading {url}: {source}")]
    Network {
        /// The URL that failed to download.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout downloading {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Non-2xx response to the HEAD probe or the GET transfer.
    #[error("HTTP {status} {reason} for {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status, empty when unknown.
        reason: String,
    },

    /// Bytes on disk do not match the Content-Length the server declared.
    #[error(
        "file size mismatch: incomplete download of {path} (expected {expected_bytes} bytes, found {actual_bytes})"
    )]
    SizeMismatch {
        /// File left on disk.
        path: PathBuf,
        /// Declared Content-Length.
        expected_bytes: u64,
        /// Size on disk after the stream ended.
        actual_bytes: u64,
    },

    /// Directory or file creation, write, or metadata error.
    #[error("IO error at {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The provided URL is malformed or invalid.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// The HTTP client could not be constructed from the configuration.
    #[error("failed to build HTTP client: {message}")]
    ClientBuild {
        /// Description of the configuration problem.
        message: String,
    },
}

/// Coarse failure category, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection, DNS, TLS, or timeout.
    Network,
    /// Non-2xx status on HEAD or GET.
    HttpStatus,
    /// Post-download size verification failed.
    SizeMismatch,
    /// Directory or file creation/write failure.
    Filesystem,
    /// Bad input or configuration.
    Invalid,
}

impl DownloadError {
    /// Creates a network error from a reqwest error, promoting timeouts.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            return Self::timeout(url);
        }
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates a size mismatch error.
    pub fn size_mismatch(path: impl Into<PathBuf>, expected_bytes: u64, actual_bytes: u64) -> Self {
        Self::SizeMismatch {
            path: path.into(),
            expected_bytes,
            actual_bytes,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a client build error.
    pub fn client_build(message: impl Into<String>) -> Self {
        Self::ClientBuild {
            message: message.into(),
        }
    }

    /// Returns the failure category of this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network { .. } | Self::Timeout { .. } => FailureKind::Network,
            Self::HttpStatus { .. } => FailureKind::HttpStatus,
            Self::SizeMismatch { .. } => FailureKind::SizeMismatch,
            Self::Io { .. } => FailureKind::Filesystem,
            Self::InvalidUrl { .. } | Self::ClientBuild { .. } => FailureKind::Invalid,
        }
    }
}

// No `From<reqwest::Error>` / `From<std::io::Error>`: every variant needs the
// url or path the source error does not carry.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_error_timeout_display() {
        let error = DownloadError::timeout("https://example.com/clip.mp4");
        assert!(error.to_string().contains("timeout"));
        assert!(error.to_string().contains("https://example.com/clip.mp4"));
        assert_eq!(error.kind(), FailureKind::Network);
    }

    #[test]
    fn test_download_error_http_status_display_includes_reason() {
        let error = DownloadError::http_status(
            "https://example.com/clip.mp4",
            reqwest::StatusCode::NOT_FOUND,
        );
        let msg = error.to_string();
        assert!(msg.contains("404"), "Expected '404' in: {msg}");
        assert!(msg.contains("Not Found"), "Expected reason in: {msg}");
        assert!(msg.contains("https://example.com/clip.mp4"), "Expected URL in: {msg}");
        assert_eq!(error.kind(), FailureKind::HttpStatus);
    }

    #[test]
    fn test_download_error_size_mismatch_display() {
        let error = DownloadError::size_mismatch(PathBuf::from("/tmp/clip.mp4"), 1_048_576, 500_000);
        let msg = error.to_string();
        assert!(msg.starts_with("file size mismatch"), "got: {msg}");
        assert!(msg.contains("1048576"), "Expected expected size in: {msg}");
        assert!(msg.contains("500000"), "Expected actual size in: {msg}");
        assert_eq!(error.kind(), FailureKind::SizeMismatch);
    }

    #[test]
    fn test_download_error_io_display() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = DownloadError::io(PathBuf::from("/tmp/videos"), io_error);
        let msg = error.to_string();
        assert!(msg.contains("/tmp/videos"), "Expected path in: {msg}");
        assert_eq!(error.kind(), FailureKind::Filesystem);
    }

    #[test]
    fn test_download_error_invalid_url_display() {
        let error = DownloadError::invalid_url("not-a-url");
        let msg = error.to_string();
        assert!(msg.contains("invalid URL"), "Expected 'invalid URL' in: {msg}");
        assert!(msg.contains("not-a-url"), "Expected URL in: {msg}");
        assert_eq!(error.kind(), FailureKind::Invalid);
    }
}
