//! Downloader configuration.

use std::time::Duration;

use super::constants::{CHUNK_SIZE, GET_TIMEOUT_SECS, HEAD_TIMEOUT_SECS};
use crate::user_agent::{BROWSER_USER_AGENT, DEFAULT_REFERER};

/// Settings for a [`Downloader`](super::Downloader).
///
/// Passed explicitly; there is no process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloaderConfig {
    /// Total timeout for the HEAD probe.
    pub head_timeout: Duration,
    /// Connect timeout and per-read timeout for the GET body stream.
    pub get_timeout: Duration,
    /// Size of each chunk written to disk and reported as progress.
    pub chunk_size: usize,
    /// `User-Agent` sent on every request.
    pub user_agent: String,
    /// `Referer` sent on every request.
    pub referer: String,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            head_timeout: Duration::from_secs(HEAD_TIMEOUT_SECS),
            get_timeout: Duration::from_secs(GET_TIMEOUT_SECS),
            chunk_size: CHUNK_SIZE,
            user_agent: BROWSER_USER_AGENT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
        }
    }
}

impl DownloaderConfig {
    /// Returns a copy with both timeouts replaced.
    #[must_use]
    pub fn with_timeouts(mut self, head_timeout: Duration, get_timeout: Duration) -> Self {
        self.head_timeout = head_timeout;
        self.get_timeout = get_timeout;
        self
    }

    /// Returns a copy with a different chunk size.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}
