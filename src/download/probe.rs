//! Metadata captured from the HEAD probe.

use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE, HeaderMap, HeaderName};

/// Post-redirect URL and the response headers the filename resolver needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// URL after all redirects were followed.
    pub final_url: String,
    /// `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// `Content-Disposition` header, if present.
    pub content_disposition: Option<String>,
}

impl ProbeResult {
    /// Builds a probe result from a final URL and response headers.
    ///
    /// Header values that are not valid visible ASCII are treated as absent.
    #[must_use]
    pub fn from_headers(final_url: impl Into<String>, headers: &HeaderMap) -> Self {
        let header = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(std::string::ToString::to_string)
        };
        Self {
            final_url: final_url.into(),
            content_type: header(CONTENT_TYPE),
            content_disposition: header(CONTENT_DISPOSITION),
        }
    }
}
