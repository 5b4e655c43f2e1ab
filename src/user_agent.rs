//! Fixed identifying header pair sent with every probe and transfer.
//!
//! Many media hosts reject requests that do not look like a browser, so both
//! the HEAD and the GET carry the same browser-like User-Agent and a Referer.

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, REFERER, USER_AGENT};

/// Browser User-Agent sent on every request.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Referer sent on every request.
pub const DEFAULT_REFERER: &str = "https://www.google.com/";

/// Builds the default header map attached to the HTTP client.
///
/// # Errors
///
/// Returns `InvalidHeaderValue` if either value contains bytes that are not
/// allowed in an HTTP header.
pub(crate) fn identifying_headers(
    user_agent: &str,
    referer: &str,
) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    headers.insert(REFERER, HeaderValue::from_str(referer)?);
    Ok(headers)
}
