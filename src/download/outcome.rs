//! Per-URL result of a fetch.

use std::path::PathBuf;

use super::error::{DownloadError, FailureKind};

/// Result of fetching one URL. Created once the transfer ends and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was written and, when the size was known, verified.
    Success {
        /// Requested URL.
        url: String,
        /// Where the file was saved.
        path: PathBuf,
        /// Bytes written to disk.
        bytes_written: u64,
    },
    /// The transfer failed at some step.
    Failure {
        /// Requested URL.
        url: String,
        /// Human-readable failure description.
        reason: String,
        /// Failure category.
        kind: FailureKind,
    },
}

impl DownloadOutcome {
    /// Converts an error into a failed outcome for `url`.
    #[must_use]
    pub fn failure(url: impl Into<String>, error: &DownloadError) -> Self {
        Self::Failure {
            url: url.into(),
            reason: error.to_string(),
            kind: error.kind(),
        }
    }

    /// The requested URL.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Success { url, .. } | Self::Failure { url, .. } => url,
        }
    }

    /// Returns true for [`DownloadOutcome::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_from_error_keeps_reason_and_kind() {
        let error = DownloadError::timeout("https://example.com/a.mp4");
        let outcome = DownloadOutcome::failure("https://example.com/a.mp4", &error);
        assert!(!outcome.is_success());
        assert_eq!(outcome.url(), "https://example.com/a.mp4");
        match outcome {
            DownloadOutcome::Failure { reason, kind, .. } => {
                assert!(reason.contains("timeout"));
                assert_eq!(kind, FailureKind::Network);
            }
            DownloadOutcome::Success { .. } => panic!("expected failure"),
        }
    }
}
