//! Filename extraction and sanitization for downloads.
//!
//! A name is derived from the HEAD probe in priority order:
//! 1. `Content-Disposition` `filename` / `filename*` parameter, when it has an extension
//! 2. Last path segment of the post-redirect URL (query and fragment stripped)
//! 3. An extension from `Content-Type` is appended when the name still lacks one

use std::sync::LazyLock;

use regex::Regex;

use super::constants::{DEFAULT_CONTENT_TYPE, FALLBACK_EXTENSION, FALLBACK_STEM};
use super::probe::ProbeResult;

/// Characters that are never allowed in a resolved filename.
pub const FORBIDDEN_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

#[allow(clippy::expect_used)]
static DISPOSITION_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"filename\*?="?(.+?)"?(;|$)"#).expect("disposition regex is valid") // Static pattern, safe to panic
});

/// Derives a sanitized, extension-complete filename from a HEAD probe.
///
/// This is a pure function of the probe: the same headers and final URL always
/// produce the same name. The result is never empty, never a dot segment, and
/// contains none of [`FORBIDDEN_CHARS`].
#[must_use]
pub fn resolve_filename(probe: &ProbeResult) -> String {
    if let Some(name) = probe
        .content_disposition
        .as_deref()
        .and_then(parse_content_disposition)
        .map(|raw| sanitize_filename(&raw))
        .filter(|name| is_usable(name) && name.contains('.'))
    {
        return name;
    }

    let mut filename = sanitize_filename(url_basename(&probe.final_url));
    if !is_usable(&filename) {
        filename = FALLBACK_STEM.to_string();
    }

    if !filename.contains('.') {
        let content_type = probe.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE);
        filename.push_str(extension_from_content_type(content_type));
    }

    filename
}

/// Extracts the raw `filename` / `filename*` value from a Content-Disposition header.
///
/// For RFC 5987 values (`UTF-8''clip%20one.mp4`) only the part after the last
/// `''` is returned. The value is not decoded here.
pub(crate) fn parse_content_disposition(header: &str) -> Option<String> {
    let captures = DISPOSITION_FILENAME.captures(header)?;
    let value = captures.get(1)?.as_str();
    let value = value.rsplit("''").next().unwrap_or(value);
    Some(value.to_string())
}

/// URL-decodes a name, strips [`FORBIDDEN_CHARS`] and control characters,
/// then trims surrounding whitespace.
pub(crate) fn sanitize_filename(name: &str) -> String {
    let decoded = urlencoding::decode_binary(name.as_bytes());
    let decoded = String::from_utf8_lossy(&decoded);
    decoded
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c) && !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Last path segment of a URL with query string and fragment removed.
pub(crate) fn url_basename(url: &str) -> &str {
    let path = url.split('?').next().unwrap_or(url);
    let path = path.split('#').next().unwrap_or(path);
    path.rsplit('/').next().unwrap_or(path)
}

/// Maps a Content-Type (parameters ignored) to a file extension with leading dot.
///
/// Common video containers are matched first; anything else goes through the
/// generic MIME table, and unknown types fall back to `.bin`.
pub(crate) fn extension_from_content_type(content_type: &str) -> &'static str {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase();

    video_extension(&mime)
        .or_else(|| generic_extension(&mime))
        .unwrap_or(FALLBACK_EXTENSION)
}

fn video_extension(mime: &str) -> Option<&'static str> {
    match mime {
        "video/mp4" => Some(".mp4"),
        "video/x-matroska" => Some(".mkv"),
        "video/webm" => Some(".webm"),
        "video/quicktime" => Some(".mov"),
        "video/mpeg" => Some(".mpeg"),
        _ => None,
    }
}

fn generic_extension(mime: &str) -> Option<&'static str> {
    let ext = match mime {
        "video/x-msvideo" => ".avi",
        "video/x-flv" => ".flv",
        "video/3gpp" => ".3gp",
        "video/mp2t" => ".ts",
        "video/ogg" => ".ogv",
        "audio/mpeg" => ".mp3",
        "audio/mp4" => ".m4a",
        "audio/ogg" => ".ogg",
        "audio/wav" | "audio/x-wav" => ".wav",
        "audio/webm" => ".weba",
        "audio/flac" => ".flac",
        "application/vnd.apple.mpegurl" | "application/x-mpegurl" => ".m3u8",
        "text/html" => ".html",
        "text/plain" => ".txt",
        "application/json" => ".json",
        "application/xml" | "text/xml" => ".xml",
        "application/pdf" => ".pdf",
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        "image/webp" => ".webp",
        "image/svg+xml" => ".svg",
        "application/zip" => ".zip",
        "application/gzip" => ".gz",
        "text/css" => ".css",
        "text/javascript" | "application/javascript" => ".js",
        "application/octet-stream" => ".bin",
        _ => return None,
    };
    Some(ext)
}

/// A name is usable when something besides dots survives sanitization.
fn is_usable(name: &str) -> bool {
    !name.is_empty() && !name.chars().all(|c| c == '.')
}
